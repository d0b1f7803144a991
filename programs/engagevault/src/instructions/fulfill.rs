use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::EngageVaultError;
use crate::events::{PaymentRefunded, PaymentReleased, VerificationFulfilled};
use crate::state::config::ProtocolConfig;
use crate::state::enums::EscrowStatus;
use crate::state::escrow::CampaignEscrow;
use crate::state::request::VerificationRequest;

// ──────────────────────────────────────────────────────
// Fulfill — oracle reports the engagement metric
//
// Only an allow-listed oracle authority may call this, and only
// against an outstanding request record, which correlates the
// response back to its escrow. The handler re-checks that the escrow
// is still Active before any funds move: with two outstanding
// requests, the first response settles the escrow and the second
// must land as a no-op, never a second payout.
//
// The request record is closed either way, rent back to whoever
// issued it, so consumed handles do not accumulate.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct Fulfill<'info> {
    /// The oracle authority reporting the metric
    pub oracle: Signer<'info>,

    /// Protocol config — holds the oracle allow-list
    #[account(
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
        constraint = config.is_oracle(&oracle.key()) @ EngageVaultError::UnauthorizedOracle,
    )]
    pub config: Account<'info, ProtocolConfig>,

    /// The correlation record being consumed
    #[account(
        mut,
        close = requester,
        constraint = request.escrow == escrow.key() @ EngageVaultError::RequestMismatch,
    )]
    pub request: Account<'info, VerificationRequest>,

    /// CHECK: the original requester, refunded the request rent on close
    #[account(
        mut,
        constraint = requester.key() == request.requester @ EngageVaultError::RequestMismatch,
    )]
    pub requester: UncheckedAccount<'info>,

    /// The escrow being settled
    #[account(
        mut,
        seeds = [CampaignEscrow::SEED, escrow.offer_id.as_bytes()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, CampaignEscrow>,

    /// The escrow vault holding funds
    #[account(
        mut,
        constraint = vault.key() == escrow.vault,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: PDA authority over the vault
    #[account(
        seeds = [b"vault_authority", escrow.key().as_ref()],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Influencer's token account — paid when the threshold is met
    #[account(
        mut,
        constraint = influencer_token_account.owner == escrow.influencer,
        constraint = influencer_token_account.mint == escrow.token_mint,
    )]
    pub influencer_token_account: Account<'info, TokenAccount>,

    /// Brand's token account — repaid when the threshold is missed
    #[account(
        mut,
        constraint = brand_token_account.owner == escrow.brand,
        constraint = brand_token_account.mint == escrow.token_mint,
    )]
    pub brand_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Fulfill>, engagement: u128) -> Result<()> {
    let clock = Clock::get()?;
    let escrow = &mut ctx.accounts.escrow;

    // Re-check the state machine: the oracle cannot know the contract
    // advanced since the request was issued, so a late response is a
    // benign no-op. The request record still closes below.
    let outcome = match escrow.settlement_outcome(engagement) {
        Some(outcome) => outcome,
        None => {
            msg!(
                "fulfill: escrow {} already settled ({:?}); request {} dropped",
                escrow.offer_id,
                escrow.status,
                ctx.accounts.request.key(),
            );
            return Ok(());
        }
    };

    let amount = escrow.amount;
    let met = outcome == EscrowStatus::Completed;

    let escrow_key = escrow.key();
    let vault_authority_bump = ctx.bumps.vault_authority;
    let seeds = &[
        b"vault_authority".as_ref(),
        escrow_key.as_ref(),
        &[vault_authority_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    // Payout first; the terminal status commit below only happens if
    // the transfer lands.
    let destination = if met {
        ctx.accounts.influencer_token_account.to_account_info()
    } else {
        ctx.accounts.brand_token_account.to_account_info()
    };
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: destination,
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    escrow.status = outcome;

    emit!(VerificationFulfilled {
        escrow: escrow.key(),
        offer_id: escrow.offer_id.clone(),
        request: ctx.accounts.request.key(),
        engagement,
        minimum_engagement: escrow.minimum_engagement,
        fulfilled_at: clock.unix_timestamp,
    });
    if met {
        emit!(PaymentReleased {
            escrow: escrow.key(),
            offer_id: escrow.offer_id.clone(),
            influencer: escrow.influencer,
            amount,
            released_at: clock.unix_timestamp,
        });
    } else {
        emit!(PaymentRefunded {
            escrow: escrow.key(),
            offer_id: escrow.offer_id.clone(),
            brand: escrow.brand,
            amount,
            refunded_at: clock.unix_timestamp,
        });
    }

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::EngageVaultError;
use crate::events::{ContractRejected, PaymentRefunded};
use crate::state::enums::EscrowStatus;
use crate::state::escrow::CampaignEscrow;

// ──────────────────────────────────────────────────────
// Reject Escrow — influencer declines before accepting
//
// Pending → Rejected. Full refund to the brand, no fee.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RejectEscrow<'info> {
    /// The influencer declining the campaign
    pub influencer: Signer<'info>,

    /// The escrow account
    #[account(
        mut,
        seeds = [CampaignEscrow::SEED, escrow.offer_id.as_bytes()],
        bump = escrow.bump,
        constraint = escrow.influencer == influencer.key() @ EngageVaultError::OnlyInfluencer,
        constraint = escrow.status == EscrowStatus::Pending @ EngageVaultError::ContractNotPending,
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

    /// Brand's token account to receive the refund
    #[account(
        mut,
        constraint = brand_token_account.owner == escrow.brand,
        constraint = brand_token_account.mint == escrow.token_mint,
    )]
    pub brand_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<RejectEscrow>) -> Result<()> {
    let clock = Clock::get()?;
    let escrow = &mut ctx.accounts.escrow;

    let refund_amount = escrow.amount;

    let escrow_key = escrow.key();
    let vault_authority_bump = ctx.bumps.vault_authority;
    let seeds = &[
        b"vault_authority".as_ref(),
        escrow_key.as_ref(),
        &[vault_authority_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    // Refund first; the status commit below only happens if it lands.
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.brand_token_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, refund_amount)?;

    escrow.status = EscrowStatus::Rejected;

    emit!(PaymentRefunded {
        escrow: escrow.key(),
        offer_id: escrow.offer_id.clone(),
        brand: escrow.brand,
        amount: refund_amount,
        refunded_at: clock.unix_timestamp,
    });
    emit!(ContractRejected {
        escrow: escrow.key(),
        offer_id: escrow.offer_id.clone(),
        influencer: escrow.influencer,
        rejected_at: clock.unix_timestamp,
    });

    Ok(())
}

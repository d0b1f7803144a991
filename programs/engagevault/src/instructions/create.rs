use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::errors::EngageVaultError;
use crate::events::{ContractCreated, FundsDeposited};
use crate::state::config::ProtocolConfig;
use crate::state::enums::EscrowStatus;
use crate::state::escrow::{CampaignEscrow, MAX_OFFER_ID_LEN};

// ──────────────────────────────────────────────────────
// Create Escrow — brand creates and funds in one transaction
//
// The escrow PDA and its vault are initialized and the deposit lands
// in the same transaction, so a record never exists without its funds
// (and vice versa). A duplicate offer id fails at the PDA `init`.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(offer_id: String)]
pub struct CreateEscrow<'info> {
    /// The brand creating and funding the escrow
    #[account(mut)]
    pub brand: Signer<'info>,

    /// The influencer who will run the campaign
    /// CHECK: We only store this pubkey; no signature needed at creation
    pub influencer: UncheckedAccount<'info>,

    /// Protocol config — validated to ensure protocol is active
    #[account(
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ EngageVaultError::ProtocolPaused,
    )]
    pub config: Account<'info, ProtocolConfig>,

    /// The escrow PDA account — derived from the brand-chosen offer id
    #[account(
        init,
        payer = brand,
        space = CampaignEscrow::LEN,
        seeds = [CampaignEscrow::SEED, offer_id.as_bytes()],
        bump,
    )]
    pub escrow: Account<'info, CampaignEscrow>,

    /// The SPL token mint for the escrowed token
    pub token_mint: Account<'info, Mint>,

    /// The brand's token account (source of funds)
    #[account(
        mut,
        constraint = brand_token_account.owner == brand.key(),
        constraint = brand_token_account.mint == token_mint.key(),
    )]
    pub brand_token_account: Account<'info, TokenAccount>,

    /// The escrow vault PDA token account (holds funds in custody)
    #[account(
        init,
        payer = brand,
        token::mint = token_mint,
        token::authority = vault_authority,
        seeds = [b"vault", escrow.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: PDA authority over the vault — no data, just a signer seed
    #[account(
        seeds = [b"vault_authority", escrow.key().as_ref()],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(
    ctx: Context<CreateEscrow>,
    offer_id: String,
    amount: u64,
    minimum_engagement: u128,
    expires_at: i64,
    duration: i64,
) -> Result<()> {
    let config = &ctx.accounts.config;

    // ── Validate inputs against protocol config ──
    require!(!offer_id.is_empty(), EngageVaultError::OfferIdEmpty);
    require!(
        offer_id.len() <= MAX_OFFER_ID_LEN,
        EngageVaultError::OfferIdTooLong
    );
    require!(amount > 0, EngageVaultError::AmountZero);
    require!(
        amount >= config.min_escrow_amount,
        EngageVaultError::BelowMinimumAmount
    );
    if config.max_escrow_amount > 0 {
        require!(
            amount <= config.max_escrow_amount,
            EngageVaultError::AboveMaximumAmount
        );
    }

    let clock = Clock::get()?;
    require!(expires_at > clock.unix_timestamp, EngageVaultError::ExpiryInPast);
    if config.max_offer_lifetime > 0 {
        let latest = clock
            .unix_timestamp
            .checked_add(config.max_offer_lifetime)
            .ok_or(EngageVaultError::Overflow)?;
        require!(expires_at <= latest, EngageVaultError::ExpiryTooFar);
    }
    require!(duration >= 0, EngageVaultError::InvalidDuration);

    // ── Transfer tokens from brand to escrow vault ──
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.brand_token_account.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
            authority: ctx.accounts.brand.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    // The vault must hold exactly the declared amount — a mint that
    // skims transfers (fees, hooks) would break the refund guarantee.
    ctx.accounts.vault.reload()?;
    require!(
        ctx.accounts.vault.amount == amount,
        EngageVaultError::IncorrectAmountSent
    );

    // ── Initialize escrow record ──
    let escrow = &mut ctx.accounts.escrow;
    escrow.offer_id = offer_id.clone();
    escrow.brand = ctx.accounts.brand.key();
    escrow.influencer = ctx.accounts.influencer.key();
    escrow.token_mint = ctx.accounts.token_mint.key();
    escrow.vault = ctx.accounts.vault.key();
    escrow.amount = amount;
    escrow.funds_deposited = true;
    escrow.minimum_engagement = minimum_engagement;
    escrow.created_at = clock.unix_timestamp;
    escrow.accepted_at = 0;
    escrow.expires_at = expires_at;
    escrow.duration = duration;
    escrow.status = EscrowStatus::Pending;
    escrow.verification_nonce = 0;
    escrow.bump = ctx.bumps.escrow;
    escrow.vault_bump = ctx.bumps.vault;

    // ── Emit events ──
    emit!(ContractCreated {
        escrow: escrow.key(),
        offer_id: offer_id.clone(),
        brand: escrow.brand,
        influencer: escrow.influencer,
        amount,
        token_mint: escrow.token_mint,
        minimum_engagement,
        expires_at,
        duration,
    });
    emit!(FundsDeposited {
        escrow: escrow.key(),
        offer_id,
        amount,
        vault: escrow.vault,
    });

    Ok(())
}

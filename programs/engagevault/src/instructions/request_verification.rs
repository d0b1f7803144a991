use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::EngageVaultError;
use crate::events::VerificationRequested;
use crate::state::config::ProtocolConfig;
use crate::state::enums::EscrowStatus;
use crate::state::escrow::CampaignEscrow;
use crate::state::request::VerificationRequest;

// ──────────────────────────────────────────────────────
// Request Verification — permissionless, Active escrows only
//
// Once the campaign duration has elapsed since acceptance, anyone may
// issue a verification request. The request PDA is the handle the
// oracle network echoes back in `fulfill`; its address is derived from
// the escrow and a per-escrow nonce, so repeated requests coexist.
// The fixed verification fee is forwarded to the oracle fee wallet.
//
// No status change and no escrowed funds move here. There is no
// response timeout: if the oracle never answers, the escrow stays
// Active and the request simply goes unconsumed.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RequestVerification<'info> {
    /// Whoever pays for the request (rent + verification fee)
    #[account(mut)]
    pub requester: Signer<'info>,

    /// Protocol config — fee amount, fee wallet, job id
    #[account(
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ EngageVaultError::ProtocolPaused,
    )]
    pub config: Account<'info, ProtocolConfig>,

    /// The escrow to verify
    #[account(
        mut,
        seeds = [CampaignEscrow::SEED, escrow.offer_id.as_bytes()],
        bump = escrow.bump,
        constraint = escrow.status == EscrowStatus::Active @ EngageVaultError::ContractNotActive,
    )]
    pub escrow: Account<'info, CampaignEscrow>,

    /// The correlation record for this request
    #[account(
        init,
        payer = requester,
        space = VerificationRequest::LEN,
        seeds = [
            VerificationRequest::SEED,
            escrow.key().as_ref(),
            &escrow.verification_nonce.to_le_bytes(),
        ],
        bump,
    )]
    pub request: Account<'info, VerificationRequest>,

    /// The oracle network's fee wallet
    /// CHECK: validated against the protocol config
    #[account(
        mut,
        constraint = oracle_fee_wallet.key() == config.oracle_fee_wallet @ EngageVaultError::InvalidFeeAccount,
    )]
    pub oracle_fee_wallet: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RequestVerification>) -> Result<()> {
    let clock = Clock::get()?;
    let config = &ctx.accounts.config;
    let escrow = &mut ctx.accounts.escrow;

    require!(
        clock.unix_timestamp >= escrow.verification_opens_at()?,
        EngageVaultError::DurationNotPassed
    );

    // ── Forward the fixed fee to the oracle network ──
    if config.verification_fee > 0 {
        let fee_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.requester.to_account_info(),
                to: ctx.accounts.oracle_fee_wallet.to_account_info(),
            },
        );
        system_program::transfer(fee_ctx, config.verification_fee)?;
    }

    // ── Record the handle → escrow correlation ──
    let request = &mut ctx.accounts.request;
    request.escrow = escrow.key();
    request.offer_id = escrow.offer_id.clone();
    request.requester = ctx.accounts.requester.key();
    request.nonce = escrow.verification_nonce;
    request.requested_at = clock.unix_timestamp;
    request.bump = ctx.bumps.request;

    escrow.verification_nonce = escrow
        .verification_nonce
        .checked_add(1)
        .ok_or(EngageVaultError::Overflow)?;

    emit!(VerificationRequested {
        escrow: escrow.key(),
        offer_id: escrow.offer_id.clone(),
        request: request.key(),
        nonce: request.nonce,
        job_id: config.job_id,
        requested_at: request.requested_at,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::errors::EngageVaultError;
use crate::state::config::{ProtocolConfig, MAX_ORACLE_AUTHORITIES};

// ──────────────────────────────────────────────────────
// Update Protocol Config — admin only
//
// Allows the admin to rotate the oracle allow-list, change the fee
// wallet or fee, adjust escrow limits, pause/unpause, or transfer
// admin authority.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct UpdateProtocolConfig<'info> {
    /// The current admin
    #[account(
        constraint = admin.key() == config.admin @ EngageVaultError::UnauthorizedAdmin,
    )]
    pub admin: Signer<'info>,

    /// The protocol config PDA
    #[account(
        mut,
        seeds = [ProtocolConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ProtocolConfig>,
}

/// What to update — all fields optional (None = don't change)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ConfigUpdate {
    pub oracle_authorities: Option<Vec<Pubkey>>,
    pub oracle_fee_wallet: Option<Pubkey>,
    pub verification_fee: Option<u64>,
    pub job_id: Option<[u8; 32]>,
    pub min_escrow_amount: Option<u64>,
    pub max_escrow_amount: Option<u64>,
    pub max_offer_lifetime: Option<i64>,
    pub paused: Option<bool>,
    pub new_admin: Option<Pubkey>,
}

pub fn handler(
    ctx: Context<UpdateProtocolConfig>,
    update: ConfigUpdate,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    if let Some(oracles) = update.oracle_authorities {
        require!(!oracles.is_empty(), EngageVaultError::NoOracles);
        require!(
            oracles.len() <= MAX_ORACLE_AUTHORITIES,
            EngageVaultError::TooManyOracles
        );
        require!(
            oracles.iter().all(|o| *o != Pubkey::default()),
            EngageVaultError::NoOracles
        );
        config.set_oracles(&oracles);
        msg!("Oracle allow-list rotated: {} authorities", config.oracle_count);
    }

    if let Some(oracle_fee_wallet) = update.oracle_fee_wallet {
        require!(
            oracle_fee_wallet != Pubkey::default(),
            EngageVaultError::InvalidFeeAccount
        );
        config.oracle_fee_wallet = oracle_fee_wallet;
        msg!("Oracle fee wallet updated to {}", oracle_fee_wallet);
    }

    if let Some(verification_fee) = update.verification_fee {
        config.verification_fee = verification_fee;
        msg!("Verification fee updated to {} lamports", verification_fee);
    }

    if let Some(job_id) = update.job_id {
        config.job_id = job_id;
    }

    if let Some(min_escrow_amount) = update.min_escrow_amount {
        require!(min_escrow_amount > 0, EngageVaultError::AmountZero);
        config.min_escrow_amount = min_escrow_amount;
    }

    if let Some(max_escrow_amount) = update.max_escrow_amount {
        config.max_escrow_amount = max_escrow_amount;
    }

    if let Some(max_offer_lifetime) = update.max_offer_lifetime {
        require!(max_offer_lifetime >= 0, EngageVaultError::InvalidDuration);
        config.max_offer_lifetime = max_offer_lifetime;
    }

    if let Some(paused) = update.paused {
        config.paused = paused;
        msg!("Protocol paused: {}", paused);
    }

    if let Some(new_admin) = update.new_admin {
        let previous = config.admin;
        config.set_admin(new_admin)?;
        msg!(
            "Admin authority transferred from {} to {}",
            previous,
            new_admin
        );
    }

    Ok(())
}

use anchor_lang::prelude::*;

use crate::errors::EngageVaultError;
use crate::state::config::{ProtocolConfig, MAX_ORACLE_AUTHORITIES};

// ──────────────────────────────────────────────────────
// Initialize Protocol Config — called once by deployer
//
// Creates the singleton ProtocolConfig PDA that stores the admin
// authority, the oracle allow-list, the verification fee, the oracle
// job identifier, and escrow limits.
//
// The `init` constraint ensures this can only be called once. There is
// a theoretical front-running risk at deployment time; mitigate by
// deploying and initializing in the same transaction.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct InitializeProtocol<'info> {
    /// The deployer/admin initializing the protocol
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The protocol config PDA — singleton, derived from a fixed seed
    #[account(
        init,
        payer = admin,
        space = ProtocolConfig::LEN,
        seeds = [ProtocolConfig::SEED],
        bump,
    )]
    pub config: Account<'info, ProtocolConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeProtocol>,
    oracle_authorities: Vec<Pubkey>,
    oracle_fee_wallet: Pubkey,
    verification_fee: u64,
    job_id: [u8; 32],
    min_escrow_amount: u64,
    max_escrow_amount: u64,
    max_offer_lifetime: i64,
) -> Result<()> {
    require!(!oracle_authorities.is_empty(), EngageVaultError::NoOracles);
    require!(
        oracle_authorities.len() <= MAX_ORACLE_AUTHORITIES,
        EngageVaultError::TooManyOracles
    );
    require!(
        oracle_authorities.iter().all(|o| *o != Pubkey::default()),
        EngageVaultError::NoOracles
    );
    require!(
        oracle_fee_wallet != Pubkey::default(),
        EngageVaultError::InvalidFeeAccount
    );
    require!(min_escrow_amount > 0, EngageVaultError::AmountZero);
    require!(max_offer_lifetime >= 0, EngageVaultError::InvalidDuration);

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.set_oracles(&oracle_authorities);
    config.oracle_fee_wallet = oracle_fee_wallet;
    config.verification_fee = verification_fee;
    config.job_id = job_id;
    config.min_escrow_amount = min_escrow_amount;
    config.max_escrow_amount = max_escrow_amount;
    config.max_offer_lifetime = max_offer_lifetime;
    config.paused = false;
    config.bump = ctx.bumps.config;

    msg!(
        "Protocol initialized: admin={}, oracles={}, fee_wallet={}, fee={} lamports",
        config.admin,
        config.oracle_count,
        config.oracle_fee_wallet,
        config.verification_fee,
    );

    Ok(())
}

use anchor_lang::prelude::*;

use crate::errors::EngageVaultError;
use crate::events::ContractAccepted;
use crate::state::enums::EscrowStatus;
use crate::state::escrow::CampaignEscrow;

#[derive(Accounts)]
pub struct AcceptEscrow<'info> {
    /// The influencer accepting the campaign
    /// No `mut` needed — the influencer pays nothing here
    pub influencer: Signer<'info>,

    /// The escrow account to accept
    #[account(
        mut,
        seeds = [CampaignEscrow::SEED, escrow.offer_id.as_bytes()],
        bump = escrow.bump,
        constraint = escrow.influencer == influencer.key() @ EngageVaultError::OnlyInfluencer,
        constraint = escrow.status == EscrowStatus::Pending @ EngageVaultError::ContractNotPending,
    )]
    pub escrow: Account<'info, CampaignEscrow>,
}

pub fn handler(ctx: Context<AcceptEscrow>) -> Result<()> {
    let clock = Clock::get()?;
    let escrow = &mut ctx.accounts.escrow;

    // The acceptance deadline only empowers check_expired; a still-Pending
    // escrow remains acceptable until someone actually expires it.
    escrow.status = EscrowStatus::Active;
    escrow.accepted_at = clock.unix_timestamp;

    emit!(ContractAccepted {
        escrow: escrow.key(),
        offer_id: escrow.offer_id.clone(),
        influencer: escrow.influencer,
        accepted_at: escrow.accepted_at,
    });

    Ok(())
}

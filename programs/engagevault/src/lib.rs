use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("8rXSN62qT7hb3DkcEngVau1tPxak7nhXi2cBGDNbh7Py");

#[program]
pub mod engagevault {
    use super::*;

    // ──────────────────────────────────────────────────────
    // PROTOCOL ADMIN
    // ──────────────────────────────────────────────────────

    /// Initialize the protocol config. Called once by the deployer.
    /// Sets the admin authority, the oracle allow-list, the verification
    /// fee, the oracle job identifier, and escrow amount limits.
    pub fn initialize_protocol(
        ctx: Context<InitializeProtocol>,
        oracle_authorities: Vec<Pubkey>,
        oracle_fee_wallet: Pubkey,
        verification_fee: u64,
        job_id: [u8; 32],
        min_escrow_amount: u64,
        max_escrow_amount: u64,
        max_offer_lifetime: i64,
    ) -> Result<()> {
        instructions::initialize_config::handler(
            ctx,
            oracle_authorities,
            oracle_fee_wallet,
            verification_fee,
            job_id,
            min_escrow_amount,
            max_escrow_amount,
            max_offer_lifetime,
        )
    }

    /// Update protocol config. Admin only.
    /// All fields are optional — pass None to keep current value.
    pub fn update_protocol_config(
        ctx: Context<UpdateProtocolConfig>,
        update: ConfigUpdate,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, update)
    }

    // ──────────────────────────────────────────────────────
    // ESCROW LIFECYCLE
    // ──────────────────────────────────────────────────────

    /// Brand creates a campaign escrow and deposits funds in the same
    /// transaction. The offer id is the brand-chosen key for this escrow;
    /// a second creation under an occupied key fails at account init.
    pub fn create_escrow(
        ctx: Context<CreateEscrow>,
        offer_id: String,
        amount: u64,
        minimum_engagement: u128,
        expires_at: i64,
        duration: i64,
    ) -> Result<()> {
        instructions::create::handler(
            ctx,
            offer_id,
            amount,
            minimum_engagement,
            expires_at,
            duration,
        )
    }

    /// Influencer accepts the campaign. Pending → Active.
    /// Starts the engagement window clock.
    pub fn accept_escrow(ctx: Context<AcceptEscrow>) -> Result<()> {
        instructions::accept::handler(ctx)
    }

    /// Influencer rejects the campaign. Pending → Rejected.
    /// Full refund to the brand.
    pub fn reject_escrow(ctx: Context<RejectEscrow>) -> Result<()> {
        instructions::reject::handler(ctx)
    }

    /// Anyone can expire a still-Pending escrow once the acceptance
    /// deadline has passed. Pending → Expired, full refund to the brand.
    pub fn check_expired(ctx: Context<CheckExpired>) -> Result<()> {
        instructions::check_expired::handler(ctx)
    }

    /// Anyone can request engagement verification once the escrow is
    /// Active and the campaign duration has elapsed. Issues a request
    /// record for the oracle network and forwards the fixed fee.
    /// No funds move and the status does not change.
    pub fn request_verification(ctx: Context<RequestVerification>) -> Result<()> {
        instructions::request_verification::handler(ctx)
    }

    /// Oracle reports the engagement metric for an outstanding request.
    /// Allow-listed oracle authorities only. Active → Completed (influencer
    /// paid) when the metric meets the threshold, Active → Refunded (brand
    /// repaid) otherwise. A response for an escrow that already settled is
    /// a logged no-op.
    pub fn fulfill(ctx: Context<Fulfill>, engagement: u128) -> Result<()> {
        instructions::fulfill::handler(ctx, engagement)
    }
}

use anchor_lang::prelude::*;

use crate::errors::EngageVaultError;
use crate::state::enums::EscrowStatus;

/// Fixed-point scale for the engagement metric and its threshold.
/// Oracle reports and `minimum_engagement` are both scaled by 10^18.
pub const ENGAGEMENT_SCALE: u128 = 1_000_000_000_000_000_000;

/// Longest permitted offer id. Offer ids are PDA seeds, and a single
/// seed may not exceed 32 bytes.
pub const MAX_OFFER_ID_LEN: usize = 32;

// ──────────────────────────────────────────────────────
// Campaign Escrow — one per offer id
// ──────────────────────────────────────────────────────

#[account]
pub struct CampaignEscrow {
    // ── Identity ──
    pub offer_id: String,            // Brand-chosen key, doubles as the PDA seed

    // ── Participants ──
    pub brand: Pubkey,               // Depositor; receives refunds
    pub influencer: Pubkey,          // Counterparty; paid on successful verification

    // ── Funds ──
    pub token_mint: Pubkey,          // Which SPL token (e.g., USDC)
    pub vault: Pubkey,               // PDA token account holding the deposit
    pub amount: u64,                 // Escrowed amount (in smallest unit)
    pub funds_deposited: bool,       // True once the vault holds `amount`

    // ── Verification terms ──
    pub minimum_engagement: u128,    // Threshold, scaled by ENGAGEMENT_SCALE

    // ── Timing ──
    pub created_at: i64,             // Unix timestamp
    pub accepted_at: i64,            // 0 until the influencer accepts
    pub expires_at: i64,             // Acceptance deadline (absolute)
    pub duration: i64,               // Seconds after acceptance before verification opens

    // ── State ──
    pub status: EscrowStatus,
    pub verification_nonce: u64,     // Count of issued verification requests

    // ── PDA ──
    pub bump: u8,
    pub vault_bump: u8,
}

impl CampaignEscrow {
    // Fixed account size for rent calculation
    pub const LEN: usize = 8    // discriminator
        + 4 + MAX_OFFER_ID_LEN  // offer_id
        + 32 * 4                // pubkeys: brand, influencer, token_mint, vault
        + 8                     // amount
        + 1                     // funds_deposited
        + 16                    // minimum_engagement
        + 8 * 4                 // timestamps: created_at, accepted_at, expires_at, duration
        + 1                     // status
        + 8                     // verification_nonce
        + 1                     // bump
        + 1                     // vault_bump
        + 64;                   // padding for future fields

    pub const SEED: &'static [u8] = b"escrow";

    /// Inclusive comparison: a metric exactly equal to the threshold
    /// counts as success.
    pub fn meets_threshold(&self, engagement: u128) -> bool {
        engagement >= self.minimum_engagement
    }

    /// True once the acceptance deadline has been reached.
    pub fn acceptance_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    /// When verification may first be requested. Only meaningful after
    /// acceptance (accepted_at is nonzero once Active).
    pub fn verification_opens_at(&self) -> Result<i64> {
        self.accepted_at
            .checked_add(self.duration)
            .ok_or(EngageVaultError::Overflow.into())
    }

    /// True once the escrow is Active and the campaign duration has
    /// elapsed since acceptance.
    pub fn verification_window_open(&self, now: i64) -> Result<bool> {
        if self.status != EscrowStatus::Active {
            return Ok(false);
        }
        Ok(now >= self.verification_opens_at()?)
    }

    /// Settlement decision for an oracle response. `None` when the
    /// escrow is no longer Active — a late response must land as a
    /// no-op, never a second payout. Otherwise the terminal status the
    /// reported metric selects: Completed pays the influencer,
    /// Refunded repays the brand.
    pub fn settlement_outcome(&self, engagement: u128) -> Option<EscrowStatus> {
        if self.status != EscrowStatus::Active {
            return None;
        }
        Some(if self.meets_threshold(engagement) {
            EscrowStatus::Completed
        } else {
            EscrowStatus::Refunded
        })
    }
}

// ──────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn escrow() -> CampaignEscrow {
        CampaignEscrow {
            offer_id: "camp-1".to_string(),
            brand: Pubkey::new_unique(),
            influencer: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            amount: 1000,
            funds_deposited: true,
            minimum_engagement: 500 * ENGAGEMENT_SCALE,
            created_at: 1_700_000_000,
            accepted_at: 0,
            expires_at: 1_700_000_000 + 86_400,
            duration: 604_800,
            status: EscrowStatus::Pending,
            verification_nonce: 0,
            bump: 255,
            vault_bump: 254,
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let e = escrow();
        assert!(e.meets_threshold(750 * ENGAGEMENT_SCALE));
        assert!(e.meets_threshold(500 * ENGAGEMENT_SCALE));
        assert!(!e.meets_threshold(500 * ENGAGEMENT_SCALE - 1));
        assert!(!e.meets_threshold(300 * ENGAGEMENT_SCALE));
    }

    #[test]
    fn zero_threshold_always_met() {
        let mut e = escrow();
        e.minimum_engagement = 0;
        assert!(e.meets_threshold(0));
        assert!(e.meets_threshold(1));
    }

    #[test]
    fn acceptance_deadline_is_inclusive() {
        let e = escrow();
        assert!(!e.acceptance_expired(e.expires_at - 1));
        assert!(e.acceptance_expired(e.expires_at));
        assert!(e.acceptance_expired(e.expires_at + 1));
    }

    #[test]
    fn verification_window_requires_active_and_elapsed_duration() {
        let mut e = escrow();
        let t0 = e.created_at;

        // Pending: never open, regardless of time
        assert!(!e.verification_window_open(t0 + 10_000_000).unwrap());

        e.status = EscrowStatus::Active;
        e.accepted_at = t0 + 10;
        assert_eq!(e.verification_opens_at().unwrap(), t0 + 10 + 604_800);
        assert!(!e.verification_window_open(t0 + 10 + 604_799).unwrap());
        assert!(e.verification_window_open(t0 + 10 + 604_800).unwrap());

        // Terminal states close the window again
        e.status = EscrowStatus::Completed;
        assert!(!e.verification_window_open(t0 + 10 + 604_800).unwrap());
    }

    #[test]
    fn verification_opens_at_overflow_is_an_error() {
        let mut e = escrow();
        e.status = EscrowStatus::Active;
        e.accepted_at = i64::MAX;
        e.duration = 1;
        assert!(e.verification_opens_at().is_err());
    }

    #[test]
    fn settlement_routes_payout_by_threshold() {
        let mut e = escrow();
        e.status = EscrowStatus::Active;
        e.accepted_at = e.created_at + 10;

        assert_eq!(
            e.settlement_outcome(750 * ENGAGEMENT_SCALE),
            Some(EscrowStatus::Completed)
        );
        // boundary equality pays the influencer
        assert_eq!(
            e.settlement_outcome(500 * ENGAGEMENT_SCALE),
            Some(EscrowStatus::Completed)
        );
        assert_eq!(
            e.settlement_outcome(500 * ENGAGEMENT_SCALE - 1),
            Some(EscrowStatus::Refunded)
        );
        assert_eq!(
            e.settlement_outcome(300 * ENGAGEMENT_SCALE),
            Some(EscrowStatus::Refunded)
        );
    }

    #[test]
    fn settlement_is_noop_unless_active() {
        let mut e = escrow();
        let settled = [
            EscrowStatus::Pending,
            EscrowStatus::Completed,
            EscrowStatus::Refunded,
            EscrowStatus::Rejected,
            EscrowStatus::Expired,
        ];
        for status in settled {
            e.status = status;
            // with two outstanding requests the first response settles the
            // escrow; the second must not reach a payout path, whatever
            // metric it carries
            assert_eq!(e.settlement_outcome(750 * ENGAGEMENT_SCALE), None);
            assert_eq!(e.settlement_outcome(0), None);
        }
    }

    #[test]
    fn terminal_classification() {
        assert!(!EscrowStatus::Pending.is_terminal());
        assert!(!EscrowStatus::Active.is_terminal());
        assert!(EscrowStatus::Completed.is_terminal());
        assert!(EscrowStatus::Refunded.is_terminal());
        assert!(EscrowStatus::Rejected.is_terminal());
        assert!(EscrowStatus::Expired.is_terminal());
    }
}

use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Escrow Status — tracks lifecycle state
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EscrowStatus {
    Pending,   // Created and funded, waiting for the influencer to accept
    Active,    // Influencer accepted, campaign running
    Completed, // Engagement threshold met, influencer paid
    Refunded,  // Engagement threshold missed, brand repaid
    Rejected,  // Influencer declined before accepting, brand repaid
    Expired,   // Acceptance deadline passed, brand repaid
}

impl EscrowStatus {
    /// Terminal states hold after exactly one payout and are never left.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EscrowStatus::Completed
                | EscrowStatus::Refunded
                | EscrowStatus::Rejected
                | EscrowStatus::Expired
        )
    }
}

impl Default for EscrowStatus {
    fn default() -> Self {
        EscrowStatus::Pending
    }
}

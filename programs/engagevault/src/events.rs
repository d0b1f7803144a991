use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Events — emitted for off-chain indexing
//
// Best-effort notifications, never authoritative state.
// ──────────────────────────────────────────────────────

#[event]
pub struct ContractCreated {
    pub escrow: Pubkey,
    pub offer_id: String,
    pub brand: Pubkey,
    pub influencer: Pubkey,
    pub amount: u64,
    pub token_mint: Pubkey,
    pub minimum_engagement: u128,
    pub expires_at: i64,
    pub duration: i64,
}

#[event]
pub struct FundsDeposited {
    pub escrow: Pubkey,
    pub offer_id: String,
    pub amount: u64,
    pub vault: Pubkey,
}

#[event]
pub struct ContractAccepted {
    pub escrow: Pubkey,
    pub offer_id: String,
    pub influencer: Pubkey,
    pub accepted_at: i64,
}

#[event]
pub struct ContractRejected {
    pub escrow: Pubkey,
    pub offer_id: String,
    pub influencer: Pubkey,
    pub rejected_at: i64,
}

#[event]
pub struct ContractExpired {
    pub escrow: Pubkey,
    pub offer_id: String,
    pub expired_at: i64,
}

#[event]
pub struct VerificationRequested {
    pub escrow: Pubkey,
    pub offer_id: String,
    pub request: Pubkey,
    pub nonce: u64,
    pub job_id: [u8; 32],
    pub requested_at: i64,
}

#[event]
pub struct VerificationFulfilled {
    pub escrow: Pubkey,
    pub offer_id: String,
    pub request: Pubkey,
    pub engagement: u128,
    pub minimum_engagement: u128,
    pub fulfilled_at: i64,
}

#[event]
pub struct PaymentReleased {
    pub escrow: Pubkey,
    pub offer_id: String,
    pub influencer: Pubkey,
    pub amount: u64,
    pub released_at: i64,
}

#[event]
pub struct PaymentRefunded {
    pub escrow: Pubkey,
    pub offer_id: String,
    pub brand: Pubkey,
    pub amount: u64,
    pub refunded_at: i64,
}

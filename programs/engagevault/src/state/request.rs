use anchor_lang::prelude::*;

use crate::state::escrow::MAX_OFFER_ID_LEN;

// ──────────────────────────────────────────────────────
// Verification Request — correlation record
//
// One per issued verification request. The account address is the
// request handle the oracle network echoes back; the record maps it
// to the originating escrow. Closed (rent to the requester) when its
// response is processed, so consumed handles do not accumulate.
// ──────────────────────────────────────────────────────

#[account]
pub struct VerificationRequest {
    /// The escrow this request was issued for
    pub escrow: Pubkey,

    /// Offer id of that escrow, for off-chain correlation
    pub offer_id: String,

    /// Who paid for the request (rent + verification fee);
    /// refunded the rent when the record is consumed
    pub requester: Pubkey,

    /// Sequence number within the escrow; also a PDA seed component,
    /// so repeated requests get distinct handles
    pub nonce: u64,

    pub requested_at: i64,

    pub bump: u8,
}

impl VerificationRequest {
    pub const LEN: usize = 8    // discriminator
        + 32                    // escrow
        + 4 + MAX_OFFER_ID_LEN  // offer_id
        + 32                    // requester
        + 8                     // nonce
        + 8                     // requested_at
        + 1                     // bump
        + 32;                   // padding for future fields

    pub const SEED: &'static [u8] = b"request";
}

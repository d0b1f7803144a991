use anchor_lang::prelude::*;

#[error_code]
pub enum EngageVaultError {
    // ── Creation errors ──
    #[msg("Escrow amount must be greater than zero")]
    AmountZero,

    #[msg("Escrow amount is below the configured minimum")]
    BelowMinimumAmount,

    #[msg("Escrow amount exceeds the maximum allowed")]
    AboveMaximumAmount,

    #[msg("Acceptance deadline must be in the future")]
    ExpiryInPast,

    #[msg("Acceptance deadline exceeds the maximum offer lifetime")]
    ExpiryTooFar,

    #[msg("Campaign duration must be non-negative")]
    InvalidDuration,

    #[msg("Offer id must not be empty")]
    OfferIdEmpty,

    #[msg("Offer id exceeds the 32-byte limit")]
    OfferIdTooLong,

    #[msg("Vault balance does not match the declared escrow amount")]
    IncorrectAmountSent,

    // ── Status errors ──
    #[msg("Contract is not pending")]
    ContractNotPending,

    #[msg("Contract is not active")]
    ContractNotActive,

    #[msg("Contract acceptance deadline has not passed yet")]
    ContractNotExpired,

    #[msg("Campaign duration has not elapsed since acceptance")]
    DurationNotPassed,

    // ── Authorization errors ──
    #[msg("Only the influencer can perform this action")]
    OnlyInfluencer,

    #[msg("Caller is not on the oracle allow-list")]
    UnauthorizedOracle,

    #[msg("Only the protocol admin can perform this action")]
    UnauthorizedAdmin,

    #[msg("Admin authority cannot be the default pubkey")]
    InvalidAdmin,

    // ── Verification errors ──
    #[msg("Request record does not belong to this escrow")]
    RequestMismatch,

    // ── Protocol config errors ──
    #[msg("Oracle allow-list must contain at least one authority")]
    NoOracles,

    #[msg("Oracle allow-list exceeds the maximum size")]
    TooManyOracles,

    #[msg("Fee wallet does not match the protocol config")]
    InvalidFeeAccount,

    #[msg("Protocol is currently paused")]
    ProtocolPaused,

    // ── Arithmetic errors ──
    #[msg("Arithmetic overflow")]
    Overflow,
}

use anchor_lang::prelude::*;

use crate::errors::EngageVaultError;

// ──────────────────────────────────────────────────────
// Protocol Config — singleton PDA, initialized once by admin
//
// Stores the admin authority, the allow-list of oracle principals
// permitted to fulfill verification requests, the fixed verification
// fee and its destination wallet, the oracle job identifier, and
// escrow creation limits.
// ──────────────────────────────────────────────────────

/// Maximum number of oracle authorities on the allow-list.
pub const MAX_ORACLE_AUTHORITIES: usize = 5;

#[account]
pub struct ProtocolConfig {
    /// The admin authority — can update config, transfer authority
    pub admin: Pubkey,

    /// Allow-list of oracle principals permitted to call `fulfill`.
    /// Only the first `oracle_count` entries are live.
    pub oracle_authorities: [Pubkey; MAX_ORACLE_AUTHORITIES],
    pub oracle_count: u8,

    /// Wallet receiving the fixed verification fee, one per request
    pub oracle_fee_wallet: Pubkey,

    /// Fixed fee in lamports forwarded per verification request
    pub verification_fee: u64,

    /// Opaque job identifier the oracle network resolves to its data
    /// endpoint and extraction path; emitted with every request
    pub job_id: [u8; 32],

    /// Minimum escrow amount (in smallest token unit)
    pub min_escrow_amount: u64,

    /// Maximum escrow amount (0 = no limit)
    pub max_escrow_amount: u64,

    /// Maximum seconds between creation and the acceptance deadline
    /// (0 = no limit)
    pub max_offer_lifetime: i64,

    /// Whether the protocol is paused (emergency stop)
    pub paused: bool,

    /// PDA bump
    pub bump: u8,
}

impl ProtocolConfig {
    pub const LEN: usize = 8   // discriminator
        + 32                    // admin
        + 32 * MAX_ORACLE_AUTHORITIES // oracle_authorities
        + 1                     // oracle_count
        + 32                    // oracle_fee_wallet
        + 8                     // verification_fee
        + 32                    // job_id
        + 8                     // min_escrow_amount
        + 8                     // max_escrow_amount
        + 8                     // max_offer_lifetime
        + 1                     // paused
        + 1                     // bump
        + 48;                   // padding for future fields

    /// The PDA seed — only one config account per program
    pub const SEED: &'static [u8] = b"protocol_config";

    /// True when `key` is a live entry on the oracle allow-list.
    pub fn is_oracle(&self, key: &Pubkey) -> bool {
        self.oracle_authorities[..self.oracle_count as usize].contains(key)
    }

    /// Replace the allow-list. Caller validates length bounds.
    pub fn set_oracles(&mut self, oracles: &[Pubkey]) {
        self.oracle_authorities = [Pubkey::default(); MAX_ORACLE_AUTHORITIES];
        self.oracle_authorities[..oracles.len()].copy_from_slice(oracles);
        self.oracle_count = oracles.len() as u8;
    }

    /// Transfer the admin capability. The default pubkey is
    /// unclaimable, so handing it the capability would make the config
    /// permanently immutable.
    pub fn set_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        require!(
            new_admin != Pubkey::default(),
            EngageVaultError::InvalidAdmin
        );
        self.admin = new_admin;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(oracles: &[Pubkey]) -> ProtocolConfig {
        let mut config = ProtocolConfig {
            admin: Pubkey::new_unique(),
            oracle_authorities: [Pubkey::default(); MAX_ORACLE_AUTHORITIES],
            oracle_count: 0,
            oracle_fee_wallet: Pubkey::new_unique(),
            verification_fee: 5_000,
            job_id: [7u8; 32],
            min_escrow_amount: 1,
            max_escrow_amount: 0,
            max_offer_lifetime: 0,
            paused: false,
            bump: 255,
        };
        config.set_oracles(oracles);
        config
    }

    #[test]
    fn allow_list_membership() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let outsider = Pubkey::new_unique();

        let config = config_with(&[a, b]);
        assert!(config.is_oracle(&a));
        assert!(config.is_oracle(&b));
        assert!(!config.is_oracle(&outsider));
    }

    #[test]
    fn default_entries_beyond_count_are_not_live() {
        let a = Pubkey::new_unique();
        let config = config_with(&[a]);
        // The padding entries are Pubkey::default(); an unauthenticated
        // caller must not be able to pass as one of them.
        assert!(!config.is_oracle(&Pubkey::default()));
    }

    #[test]
    fn set_admin_rejects_default_pubkey() {
        let mut config = config_with(&[Pubkey::new_unique()]);
        let original = config.admin;

        assert!(config.set_admin(Pubkey::default()).is_err());
        assert_eq!(config.admin, original);

        let successor = Pubkey::new_unique();
        config.set_admin(successor).unwrap();
        assert_eq!(config.admin, successor);
    }

    #[test]
    fn set_oracles_replaces_previous_list() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut config = config_with(&[a]);
        config.set_oracles(&[b]);
        assert!(!config.is_oracle(&a));
        assert!(config.is_oracle(&b));
        assert_eq!(config.oracle_count, 1);
    }
}

//! Program-wide constants.

/// Seed of the derived mint/freeze authority.
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

/// Leading seed of a destination token account, followed by owner and mint.
pub const TOKEN_ACCOUNT_SEED: &[u8] = b"token_account";

/// Largest accepted decimal precision.
pub const MAX_DECIMALS: u8 = 9;

//! Derived Authority
//!
//! The program controls every mint through one program-derived address,
//! computed from the fixed seed `"mint_authority"` and the program id. It
//! is both the mint authority and the freeze authority of every mint this
//! program creates.
//!
//! A program-derived address lies off the ed25519 curve, so no private key
//! exists for it and it can never sign. It authorizes by derivation
//! instead: the caller names the address and its bump, the program
//! re-derives the pair and compares. Nothing is stored; the authority is
//! recomputed on every check.
//!
//! ```text
//! seeds = ["mint_authority"]
//!
//!   for bump in 255..=0:
//!       candidate = sha256(seeds || [bump] || program_id || "ProgramDerivedAddress")
//!       if candidate is off-curve: return (candidate, bump)   <- canonical pair
//!
//!   none found -> DerivationExhausted
//! ```

use crate::constants::{MINT_AUTHORITY_SEED, TOKEN_ACCOUNT_SEED};
use crate::error::MinterError;
use crate::state::Mint;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// DERIVATION
// =============================================================================

/// Compute the derived authority and its canonical bump.
///
/// Pure and deterministic: the same `program_id` always yields the same pair.
///
/// # Errors
///
/// `DerivationExhausted` if no bump produces an off-curve address.
pub fn derive_authority(program_id: &Pubkey) -> Result<(Pubkey, u8), ProgramError> {
    Pubkey::try_find_program_address(&[MINT_AUTHORITY_SEED], program_id)
        .ok_or_else(|| MinterError::DerivationExhausted.into())
}

/// Compute the address of `owner`'s token account for `mint`, with its bump.
///
/// The bump is needed to sign the allocation of that address.
pub fn derive_token_account_address(
    program_id: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    Pubkey::try_find_program_address(
        &[TOKEN_ACCOUNT_SEED, owner.as_ref(), mint.as_ref()],
        program_id,
    )
    .ok_or_else(|| MinterError::DerivationExhausted.into())
}

// =============================================================================
// CAPABILITY CHECKS
// =============================================================================

/// Check a claimed authority identity and bump against the canonical derivation.
///
/// Both halves must match. A valid but non-canonical bump is rejected, so
/// there is exactly one accepted proof.
///
/// # Errors
///
/// `AuthorityMismatch` for any other identity or bump.
pub fn verify_authority(program_id: &Pubkey, claimed: &Pubkey, bump: u8) -> ProgramResult {
    let (expected, canonical_bump) = derive_authority(program_id)?;

    if *claimed != expected || bump != canonical_bump {
        msg!("Rejected authority {}: expected {}", claimed, expected);
        return Err(MinterError::AuthorityMismatch.into());
    }

    Ok(())
}

/// Check that `authority_info` is the derived authority and is the freeze
/// authority recorded on `mint`.
///
/// The authority never signs, so `is_signer` is not consulted. A signing
/// account with a different key is rejected like any other.
pub fn assert_freeze_authority(
    program_id: &Pubkey,
    mint: &Mint,
    authority_info: &AccountInfo,
    bump: u8,
) -> ProgramResult {
    verify_authority(program_id, authority_info.key, bump)?;

    if mint.freeze_authority != *authority_info.key {
        msg!(
            "Rejected authority {}: mint freeze authority is {}",
            authority_info.key,
            mint.freeze_authority
        );
        return Err(MinterError::AuthorityMismatch.into());
    }

    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

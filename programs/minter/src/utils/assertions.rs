//! Assertion Helper Functions
//!
//! Common validation checks used by every processor.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_writable(account_info)?;
//!     let account = load_initialized::<Account>(account_info, program_id)?;
//!
//!     // Then stage and commit the writes
//!     ...
//! }
//! ```

use crate::error::MinterError;
use crate::state::{IsInitialized, Pack};
use num_traits::{CheckedAdd, CheckedSub};
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_program,
};

// =============================================================================
// ACCOUNT CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// Without this an attacker could hand us an account owned by their own
/// program whose bytes merely look like a Mint.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(MinterError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

/// Assert that an account signed the transaction.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

/// Assert that an account was passed as writable.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

/// Assert that an account holds exactly `expected` bytes of data.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(MinterError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

/// Assert that an account holds enough lamports to be rent exempt.
pub fn assert_rent_exempt(rent: &Rent, account: &AccountInfo) -> ProgramResult {
    if !rent.is_exempt(account.lamports(), account.data_len()) {
        Err(MinterError::NotRentExempt.into())
    } else {
        Ok(())
    }
}

/// Assert that the system program account is the real one.
pub fn assert_system_program(account: &AccountInfo) -> ProgramResult {
    if !system_program::check_id(account.key) {
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

/// Whether an address has never been allocated: system-owned, no data.
///
/// Lamports are not considered; a funded address is still blank.
pub fn is_blank(account: &AccountInfo) -> bool {
    system_program::check_id(account.owner) && account.data_is_empty()
}

// =============================================================================
// STATE LOADING
// =============================================================================

/// Check ownership and size, unpack, and require the initialization marker.
///
/// # Errors
///
/// * `InvalidAccountOwner` - not owned by `program_id`
/// * `InvalidAccountDataLength` - not `T::LEN` bytes
/// * `UninitializedAccount` - marker not set
pub fn load_initialized<T: Pack + IsInitialized>(
    account: &AccountInfo,
    program_id: &Pubkey,
) -> Result<T, ProgramError> {
    assert_owned_by(account, program_id)?;
    assert_data_length(account, T::LEN)?;

    let state = T::unpack_from_slice(&account.try_borrow_data()?)?;
    if !state.is_initialized() {
        return Err(MinterError::UninitializedAccount.into());
    }
    Ok(state)
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Addition that fails with `Overflow` instead of wrapping.
pub fn checked_add<T: CheckedAdd>(a: T, b: T) -> Result<T, ProgramError> {
    a.checked_add(&b).ok_or_else(|| MinterError::Overflow.into())
}

/// Subtraction that fails with `InsufficientBalance` instead of wrapping.
///
/// Every subtraction in this program removes tokens from a balance or the
/// supply, so underflow always means "not enough tokens".
pub fn checked_sub<T: CheckedSub>(a: T, b: T) -> Result<T, ProgramError> {
    a.checked_sub(&b)
        .ok_or_else(|| MinterError::InsufficientBalance.into())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

//! Custom Error Types
//!
//! Every rejection the minter program can produce. Each variant maps to a
//! stable numeric code (its position in the enum) that clients match on,
//! and to an [`ErrorKind`] describing which class of rule was violated.
//!
//! # Error Classes
//!
//! | Kind | Variants |
//! |------|----------|
//! | Validation | InvalidInstruction, InvalidDecimals, ZeroBurnAmount |
//! | Authorization | AuthorityMismatch, OwnerMismatch, DerivationExhausted |
//! | State | InvalidAccountOwner, InvalidAccountDataLength, NotRentExempt, UninitializedAccount, MintAlreadyExists, AccountMintMismatch, AccountFrozen, InvalidTokenAccountAddress |
//! | Arithmetic | InsufficientBalance, Overflow |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::MinterError;
//!
//! if account.owner != *owner_info.key {
//!     return Err(MinterError::OwnerMismatch.into());
//! }
//! ```

use num_traits::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the minter program.
///
/// # Important
///
/// Codes are the variant positions. Never reorder or remove variants after
/// deployment; append new ones at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MinterError {
    /// Error 0: Instruction data could not be decoded.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 1: A state account is not owned by this program.
    #[error("Account not owned by minter program")]
    InvalidAccountOwner,

    /// Error 2: A state account has the wrong data length for its record type.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 3: A pre-allocated account does not hold enough lamports.
    #[error("Account is not rent exempt")]
    NotRentExempt,

    /// Error 4: A Mint or Token Account was used before initialization.
    #[error("Account not initialized")]
    UninitializedAccount,

    /// Error 5: Decimals outside of `0..=MAX_DECIMALS`.
    #[error("Decimals must be between 0 and 9")]
    InvalidDecimals,

    /// Error 6: The mint address is already initialized or otherwise in use.
    #[error("Mint already exists")]
    MintAlreadyExists,

    /// Error 7: The claimed authority is not the derived mint/freeze authority.
    ///
    /// Raised for any identity other than the canonical derivation, even one
    /// that signed the transaction.
    #[error("The provided authority does not match the mint's derived authority")]
    AuthorityMismatch,

    /// Error 8: The claimed owner is not the token account's recorded owner.
    #[error("Owner mismatch")]
    OwnerMismatch,

    /// Error 9: The token account belongs to a different mint.
    #[error("Token account does not belong to the given mint")]
    AccountMintMismatch,

    /// Error 10: The token account is frozen.
    #[error("Account is frozen")]
    AccountFrozen,

    /// Error 11: Balance (or supply) is smaller than the requested amount.
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// Error 12: An addition would exceed `u64::MAX`.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 13: Burning zero tokens.
    #[error("Burn amount must be greater than zero")]
    ZeroBurnAmount,

    /// Error 14: No bump in `0..=255` produces an off-curve authority address.
    #[error("Authority derivation exhausted the bump search space")]
    DerivationExhausted,

    /// Error 15: The destination token account is not at its derived address.
    #[error("Token account address does not match the derived address")]
    InvalidTokenAccountAddress,
}

// =============================================================================
// ERROR KIND
// =============================================================================

/// The class of rule an error violates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Range or shape problems caught before any account state is read.
    Validation,
    /// A capability or ownership check failed.
    Authorization,
    /// An entity invariant would be violated.
    State,
    /// Checked arithmetic failed.
    Arithmetic,
}

impl MinterError {
    /// All variants, in code order.
    pub const ALL: [MinterError; 16] = [
        MinterError::InvalidInstruction,
        MinterError::InvalidAccountOwner,
        MinterError::InvalidAccountDataLength,
        MinterError::NotRentExempt,
        MinterError::UninitializedAccount,
        MinterError::InvalidDecimals,
        MinterError::MintAlreadyExists,
        MinterError::AuthorityMismatch,
        MinterError::OwnerMismatch,
        MinterError::AccountMintMismatch,
        MinterError::AccountFrozen,
        MinterError::InsufficientBalance,
        MinterError::Overflow,
        MinterError::ZeroBurnAmount,
        MinterError::DerivationExhausted,
        MinterError::InvalidTokenAccountAddress,
    ];

    /// Which class of rule this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MinterError::InvalidInstruction
            | MinterError::InvalidDecimals
            | MinterError::ZeroBurnAmount => ErrorKind::Validation,

            MinterError::AuthorityMismatch
            | MinterError::OwnerMismatch
            | MinterError::DerivationExhausted => ErrorKind::Authorization,

            MinterError::InvalidAccountOwner
            | MinterError::InvalidAccountDataLength
            | MinterError::NotRentExempt
            | MinterError::UninitializedAccount
            | MinterError::MintAlreadyExists
            | MinterError::AccountMintMismatch
            | MinterError::AccountFrozen
            | MinterError::InvalidTokenAccountAddress => ErrorKind::State,

            MinterError::InsufficientBalance | MinterError::Overflow => ErrorKind::Arithmetic,
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

/// `MinterError::X.into()` and `?` produce `ProgramError::Custom(code)`.
impl From<MinterError> for ProgramError {
    fn from(e: MinterError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for MinterError {
    fn type_of() -> &'static str {
        "MinterError"
    }
}

impl FromPrimitive for MinterError {
    fn from_i64(n: i64) -> Option<Self> {
        if n < 0 {
            return None;
        }
        Self::from_u64(n as u64)
    }

    fn from_u64(n: u64) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl PrintProgramError for MinterError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive,
    {
        msg!("Error ({:?}): {}", self.kind(), self);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================


/*
=============================================================================
NOTES
=============================================================================

HOW CLIENTS SEE ERRORS
======================

Err(MinterError::AccountFrozen.into()) becomes ProgramError::Custom(10).

In transaction logs the entrypoint first prints the decoded error:
    "Program log: Error (State): Account is frozen"
then the runtime reports:
    "Program failed with error: custom program error: 0xa"

A client holding the numeric code maps it back with
MinterError::from_u32(code).

PRINTING
========

PrintProgramError is the runtime's hook for turning a Custom(u32) back
into a readable message. The entrypoint calls

    error.print::<MinterError>();

which decodes the code through DecodeError + FromPrimitive and lands in
MinterError::print above. Every failure, authorization failures
included, goes through that path before it is returned.
*/

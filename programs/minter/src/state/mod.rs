//! Account State Structures
//!
//! The two records this program persists.
//!
//! | Type | Size | Description |
//! |------|------|-------------|
//! | Mint | 74 bytes | A token class bound to the derived authority |
//! | Account | 73 bytes | One owner's balance of one mint |
//!
//! The derived authority is deliberately absent from this list: it is
//! recomputed from its seed on every check and never stored as a record.
//!
//! # Serialization
//!
//! Fixed-size, little-endian, no padding. Same data always produces the
//! same bytes.
//!
//! ```ignore
//! let mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
//! mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
//! ```

pub mod account;
pub mod mint;

pub use account::{Account, AccountState};
pub use mint::Mint;

use solana_program::program_error::ProgramError;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Packing/unpacking of a fixed-size record to and from account bytes.
pub trait Pack: Sized {
    /// The serialized size in bytes.
    ///
    /// Also the size an account must be allocated with to hold the record.
    const LEN: usize;

    /// Deserialize from a byte slice.
    ///
    /// # Panics
    /// May panic if `input.len() < Self::LEN`; use `unpack_from_slice` for
    /// untrusted input.
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice of at least `Self::LEN` bytes.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack after checking `src.len() == Self::LEN`.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack after checking `dst.len() == Self::LEN`.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}

/// Records that carry an initialization marker.
pub trait IsInitialized {
    /// Whether the record has been written by this program.
    fn is_initialized(&self) -> bool;
}

/// Decode a single-byte boolean, rejecting anything other than 0 or 1.
pub(crate) fn unpack_bool(src: &[u8; 1]) -> Result<bool, ProgramError> {
    match src[0] {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(ProgramError::InvalidAccountData),
    }
}

/*
=============================================================================
NOTES
=============================================================================

WHY FIXED SIZES
===============

Accounts are allocated once with a size chosen at creation. The
allocation in CreateToken uses Mint::LEN and Account::LEN directly, and
every handler checks data_len() against the same constants before
unpacking, so a record of one type can never be read as the other
(74 vs 73 bytes).

WHY NO COPTION
==============

Both authorities of a Mint are always present: they are set to the
derived authority at creation and never change. Storing them as plain
32-byte keys keeps the layout small and removes a "no authority" state
the program would otherwise have to reject.
*/

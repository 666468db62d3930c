//! Mint Account State
//!
//! A Mint defines a token class. Every mint this program creates is bound
//! at creation to the single derived authority, which serves as both mint
//! authority and freeze authority and never changes afterwards.
//!
//! The supply-changing transitions (`issue`, `burn`) live here as well.
//! They compute every new value before assigning any of them, so a failed
//! transition leaves both the mint and the token account untouched.
//!
//! # Size: 74 bytes

use crate::error::MinterError;
use crate::state::{unpack_bool, Account, IsInitialized, Pack};
use crate::utils::{checked_add, checked_sub};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{entrypoint::ProgramResult, program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data structure.
///
/// # Memory Layout (74 bytes total)
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type              │
/// ├────────┼──────┼──────────────────┼───────────────────┤
/// │ 0      │ 1    │ is_initialized   │ bool (0 or 1)     │
/// │ 1      │ 1    │ decimals         │ u8                │
/// │ 2      │ 8    │ supply           │ u64               │
/// │ 10     │ 32   │ mint_authority   │ Pubkey            │
/// │ 42     │ 32   │ freeze_authority │ Pubkey            │
/// ├────────┼──────┼──────────────────┼───────────────────┤
/// │ Total  │ 74   │                  │                   │
/// └──────────────────────────────────────────────────────┘
/// ```
///
/// # Invariant
///
/// ```text
/// supply >= SUM(token accounts of this mint).amount
/// ```
///
/// Issuance and burn move `supply` and one account balance by the same
/// amount in one step, so equality holds for every mint this program
/// creates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mint {
    /// Set once by CreateToken; a zeroed account reads as `false`.
    pub is_initialized: bool,

    /// Display precision, `0..=MAX_DECIMALS`. All on-chain math uses base units.
    pub decimals: u8,

    /// Total tokens in existence, in base units.
    pub supply: u64,

    /// The derived authority. Written once at creation.
    pub mint_authority: Pubkey,

    /// The derived authority. Written once at creation; the only identity
    /// that can freeze or thaw accounts of this mint.
    pub freeze_authority: Pubkey,
}

impl Mint {
    /// A freshly initialized mint with zero supply, bound to `authority`.
    pub fn new(decimals: u8, authority: Pubkey) -> Self {
        Self {
            is_initialized: true,
            decimals,
            supply: 0,
            mint_authority: authority,
            freeze_authority: authority,
        }
    }

    /// Credit `amount` to `destination` and add it to the supply.
    ///
    /// Fails with `AccountMintMismatch` if `destination` belongs to another
    /// mint, `AccountFrozen` if it is frozen, `Overflow` if either addition
    /// exceeds `u64::MAX`. On failure neither record changes.
    pub fn issue(
        &mut self,
        mint_key: &Pubkey,
        destination: &mut Account,
        amount: u64,
    ) -> ProgramResult {
        if destination.mint != *mint_key {
            return Err(MinterError::AccountMintMismatch.into());
        }
        if destination.is_frozen() {
            return Err(MinterError::AccountFrozen.into());
        }

        let supply = checked_add(self.supply, amount)?;
        let balance = checked_add(destination.amount, amount)?;

        self.supply = supply;
        destination.amount = balance;
        Ok(())
    }

    /// Destroy `amount` from `source` and remove it from the supply.
    ///
    /// Ownership is checked by the caller; this only enforces the record
    /// invariants. Fails with `AccountMintMismatch`, `AccountFrozen`, or
    /// `InsufficientBalance` (balance or supply smaller than `amount`).
    /// On failure neither record changes.
    pub fn burn(&mut self, mint_key: &Pubkey, source: &mut Account, amount: u64) -> ProgramResult {
        if source.mint != *mint_key {
            return Err(MinterError::AccountMintMismatch.into());
        }
        if source.is_frozen() {
            return Err(MinterError::AccountFrozen.into());
        }

        let balance = checked_sub(source.amount, amount)?;
        let supply = checked_sub(self.supply, amount)?;

        source.amount = balance;
        self.supply = supply;
        Ok(())
    }
}

impl IsInitialized for Mint {
    fn is_initialized(&self) -> bool {
        self.is_initialized
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    const LEN: usize = 74;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Mint::LEN];

        // Sizes must sum to LEN: 1 + 1 + 8 + 32 + 32 = 74
        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized, decimals, supply, mint_authority, freeze_authority) =
            array_refs![input, 1, 1, 8, 32, 32];

        Ok(Mint {
            is_initialized: unpack_bool(is_initialized)?,
            decimals: decimals[0],
            supply: u64::from_le_bytes(*supply),
            mint_authority: Pubkey::new_from_array(*mint_authority),
            freeze_authority: Pubkey::new_from_array(*freeze_authority),
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized_dst, decimals_dst, supply_dst, mint_authority_dst, freeze_authority_dst) =
            mut_array_refs![output, 1, 1, 8, 32, 32];

        is_initialized_dst[0] = self.is_initialized as u8;
        decimals_dst[0] = self.decimals;
        *supply_dst = self.supply.to_le_bytes();
        mint_authority_dst.copy_from_slice(self.mint_authority.as_ref());
        freeze_authority_dst.copy_from_slice(self.freeze_authority.as_ref());

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

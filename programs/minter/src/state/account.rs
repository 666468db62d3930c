//! Token Account State
//!
//! One owner's balance of one mint. The destination account written by
//! CreateToken lives at the address derived from (owner, mint), so each
//! pair has exactly one such record.
//!
//! # Size: 73 bytes

use crate::state::{IsInitialized, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// ACCOUNT STATE ENUM
// =============================================================================

/// Lifecycle of a token account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountState {
    /// Freshly allocated, never written.
    #[default]
    Uninitialized,

    /// Active: balance may be credited and debited.
    Initialized,

    /// Frozen by the mint's freeze authority: no balance changes until thawed.
    Frozen,
}

impl AccountState {
    /// Decode from the stored byte (0, 1 or 2).
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(AccountState::Uninitialized),
            1 => Ok(AccountState::Initialized),
            2 => Ok(AccountState::Frozen),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }

    /// Encode as the stored byte.
    pub fn to_u8(self) -> u8 {
        match self {
            AccountState::Uninitialized => 0,
            AccountState::Initialized => 1,
            AccountState::Frozen => 2,
        }
    }
}

// =============================================================================
// TOKEN ACCOUNT STRUCTURE
// =============================================================================

/// Token account data structure.
///
/// # Memory Layout (73 bytes total)
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ Offset │ Size │ Field  │ Type                │
/// ├────────┼──────┼────────┼─────────────────────┤
/// │ 0      │ 1    │ state  │ AccountState (u8)   │
/// │ 1      │ 32   │ mint   │ Pubkey              │
/// │ 33     │ 32   │ owner  │ Pubkey              │
/// │ 65     │ 8    │ amount │ u64                 │
/// ├────────┼──────┼────────┼─────────────────────┤
/// │ Total  │ 73   │        │                     │
/// └──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Account {
    /// Uninitialized, active or frozen.
    pub state: AccountState,

    /// The mint this account holds. Never changes after initialization.
    pub mint: Pubkey,

    /// The only identity allowed to burn from this account.
    ///
    /// Unrelated to the mint's derived authority: the authority can freeze
    /// this account but can never debit it.
    pub owner: Pubkey,

    /// Balance in base units.
    pub amount: u64,
}

impl Account {
    /// A fresh, active account with a zero balance.
    pub fn new(mint: Pubkey, owner: Pubkey) -> Self {
        Self {
            state: AccountState::Initialized,
            mint,
            owner,
            amount: 0,
        }
    }

    /// Whether balance changes are currently blocked.
    pub fn is_frozen(&self) -> bool {
        self.state == AccountState::Frozen
    }

    /// Mark the account frozen. Returns `false` if it already was.
    pub fn freeze(&mut self) -> bool {
        self.transition_to(AccountState::Frozen)
    }

    /// Mark the account active. Returns `false` if it already was.
    pub fn thaw(&mut self) -> bool {
        self.transition_to(AccountState::Initialized)
    }

    fn transition_to(&mut self, target: AccountState) -> bool {
        if self.state == target {
            return false;
        }
        self.state = target;
        true
    }
}

impl IsInitialized for Account {
    fn is_initialized(&self) -> bool {
        self.state != AccountState::Uninitialized
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Account {
    const LEN: usize = 73;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Account::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (state, mint, owner, amount) = array_refs![input, 1, 32, 32, 8];

        Ok(Account {
            state: AccountState::from_u8(state[0])?,
            mint: Pubkey::new_from_array(*mint),
            owner: Pubkey::new_from_array(*owner),
            amount: u64::from_le_bytes(*amount),
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Account::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (state_dst, mint_dst, owner_dst, amount_dst) =
            mut_array_refs![output, 1, 32, 32, 8];

        state_dst[0] = self.state.to_u8();
        mint_dst.copy_from_slice(self.mint.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

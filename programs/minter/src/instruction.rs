//! Instruction Types
//!
//! Every instruction is one discriminant byte followed by its payload.
//! Account requirements are documented per variant and are not encoded in
//! the data.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! | Value | Instruction | Payload |
//! |-------|-------------|---------|
//! | 0 | CreateToken | decimals: u8, amount: u64 |
//! | 1 | FreezeAccount | authority_bump: u8 |
//! | 2 | ThawAccount | authority_bump: u8 |
//! | 3 | BurnTokens | amount: u64 |
//!
//! The builder functions at the bottom (`create_token`, `freeze_account`,
//! `thaw_account`, `burn_tokens`) produce complete instructions with the
//! account metas in the order the processors expect.

use crate::error::MinterError;
use crate::utils::{derive_authority, derive_token_account_address};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

// =============================================================================
// MINTER INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the minter program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MinterInstruction {
    /// Create a new mint bound to the derived authority and issue its
    /// initial supply to the owner's destination token account.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | payer | ✓ | ✓ | Funds any allocation |
    /// | 1 | mint | ✓ | ✓* | The new mint (*signer when still unallocated) |
    /// | 2 | mint_authority | | | The derived authority |
    /// | 3 | destination | ✓ | | Token account at the derived (owner, mint) address |
    /// | 4 | owner | | | Owner of the destination account |
    /// | 5 | system_program | | | System program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1]: decimals (u8)
    /// [2..10]: amount (u64, little-endian, base units)
    /// ```
    CreateToken {
        /// Display precision, 0..=9
        decimals: u8,

        /// Initial issuance in base units (already scaled by 10^decimals)
        amount: u64,
    },

    /// Freeze a token account.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | token_account | ✓ | | Account to freeze |
    /// | 1 | mint | | | Mint of the account |
    /// | 2 | freeze_authority | | | The derived authority (never signs) |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// [1]: authority_bump (u8)
    /// ```
    FreezeAccount {
        /// Canonical bump of the claimed authority
        authority_bump: u8,
    },

    /// Thaw a frozen token account. Same accounts and layout as
    /// FreezeAccount, discriminant 2.
    ThawAccount {
        /// Canonical bump of the claimed authority
        authority_bump: u8,
    },

    /// Burn tokens from the owner's own account.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | mint | ✓ | | Mint whose supply shrinks |
    /// | 1 | source | ✓ | | Token account to burn from |
    /// | 2 | owner | | ✓ | Recorded owner of `source` |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (3)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    BurnTokens {
        /// Amount to destroy, in base units
        amount: u64,
    },
}

impl MinterInstruction {
    /// Parse instruction data.
    ///
    /// Trailing bytes after a complete payload are ignored.
    ///
    /// # Errors
    ///
    /// `InvalidInstruction` for empty data, an unknown discriminant, or a
    /// short payload.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(MinterError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => {
                let (&decimals, rest) = rest
                    .split_first()
                    .ok_or(MinterError::InvalidInstruction)?;
                let amount = unpack_u64(rest)?;
                MinterInstruction::CreateToken { decimals, amount }
            }
            1 => MinterInstruction::FreezeAccount {
                authority_bump: unpack_u8(rest)?,
            },
            2 => MinterInstruction::ThawAccount {
                authority_bump: unpack_u8(rest)?,
            },
            3 => MinterInstruction::BurnTokens {
                amount: unpack_u64(rest)?,
            },
            _ => return Err(MinterError::InvalidInstruction.into()),
        })
    }

    /// Serialize into instruction data. Inverse of `unpack`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(10);

        match self {
            MinterInstruction::CreateToken { decimals, amount } => {
                buf.push(0);
                buf.push(*decimals);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            MinterInstruction::FreezeAccount { authority_bump } => {
                buf.push(1);
                buf.push(*authority_bump);
            }
            MinterInstruction::ThawAccount { authority_bump } => {
                buf.push(2);
                buf.push(*authority_bump);
            }
            MinterInstruction::BurnTokens { amount } => {
                buf.push(3);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }

        buf
    }
}

fn unpack_u8(input: &[u8]) -> Result<u8, ProgramError> {
    input
        .first()
        .copied()
        .ok_or_else(|| MinterError::InvalidInstruction.into())
}

fn unpack_u64(input: &[u8]) -> Result<u64, ProgramError> {
    input
        .get(..8)
        .and_then(|bytes| bytes.try_into().ok())
        .map(u64::from_le_bytes)
        .ok_or_else(|| MinterError::InvalidInstruction.into())
}

// =============================================================================
// ADDRESS HELPERS (for clients)
// =============================================================================

/// The derived mint/freeze authority of `program_id` and its canonical bump.
///
/// Same derivation the program checks against.
pub fn get_mint_authority_address(program_id: &Pubkey) -> Result<(Pubkey, u8), ProgramError> {
    derive_authority(program_id)
}

/// Address of `owner`'s token account for `mint`.
pub fn get_token_account_address(
    program_id: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, ProgramError> {
    derive_token_account_address(program_id, owner, mint).map(|(address, _)| address)
}

// =============================================================================
// INSTRUCTION BUILDERS
// =============================================================================

/// Build a CreateToken instruction issuing `amount` to `owner`.
pub fn create_token(
    program_id: &Pubkey,
    payer: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    decimals: u8,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let (mint_authority, _) = derive_authority(program_id)?;
    let (destination, _) = derive_token_account_address(program_id, owner, mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*mint, true),
            AccountMeta::new_readonly(mint_authority, false),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: MinterInstruction::CreateToken { decimals, amount }.pack(),
    })
}

/// Build a FreezeAccount instruction claiming `authority` with `authority_bump`.
///
/// Pass the result of `get_mint_authority_address` for a request that
/// should succeed.
pub fn freeze_account(
    program_id: &Pubkey,
    token_account: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    authority_bump: u8,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: account_state_metas(token_account, mint, authority),
        data: MinterInstruction::FreezeAccount { authority_bump }.pack(),
    }
}

/// Build a ThawAccount instruction claiming `authority` with `authority_bump`.
pub fn thaw_account(
    program_id: &Pubkey,
    token_account: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    authority_bump: u8,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: account_state_metas(token_account, mint, authority),
        data: MinterInstruction::ThawAccount { authority_bump }.pack(),
    }
}

fn account_state_metas(token_account: &Pubkey, mint: &Pubkey, authority: &Pubkey) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(*token_account, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new_readonly(*authority, false),
    ]
}

/// Build a BurnTokens instruction signed by `owner`.
pub fn burn_tokens(
    program_id: &Pubkey,
    mint: &Pubkey,
    source: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(*source, false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data: MinterInstruction::BurnTokens { amount }.pack(),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

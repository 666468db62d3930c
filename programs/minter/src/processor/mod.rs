//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file; FreezeAccount and ThawAccount share
//! their loading and authorization step, which lives here.

pub mod burn;
pub mod create_token;
pub mod freeze_account;
pub mod thaw_account;

use crate::error::MinterError;
use crate::instruction::MinterInstruction;
use crate::state::{Account, Mint};
use crate::utils::{assert_freeze_authority, assert_writable, load_initialized};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a minter program instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        let instruction = MinterInstruction::unpack(instruction_data)?;

        match instruction {
            MinterInstruction::CreateToken { decimals, amount } => {
                msg!("Instruction: CreateToken");
                create_token::process(program_id, accounts, decimals, amount)
            }

            MinterInstruction::FreezeAccount { authority_bump } => {
                msg!("Instruction: FreezeAccount");
                freeze_account::process(program_id, accounts, authority_bump)
            }

            MinterInstruction::ThawAccount { authority_bump } => {
                msg!("Instruction: ThawAccount");
                thaw_account::process(program_id, accounts, authority_bump)
            }

            MinterInstruction::BurnTokens { amount } => {
                msg!("Instruction: BurnTokens");
                burn::process(program_id, accounts, amount)
            }
        }
    }
}

/// Load the target account of a freeze or thaw and authorize the caller.
///
/// Accounts: token account, mint, claimed freeze authority. Nothing is
/// written here.
pub(crate) fn load_for_state_change<'a, 'info>(
    program_id: &Pubkey,
    accounts: &'a [AccountInfo<'info>],
    authority_bump: u8,
) -> Result<(&'a AccountInfo<'info>, Account), ProgramError> {
    let account_info_iter = &mut accounts.iter();

    let account_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let authority_info = next_account_info(account_info_iter)?;

    assert_writable(account_info)?;
    let account = load_initialized::<Account>(account_info, program_id)?;
    let mint = load_initialized::<Mint>(mint_info, program_id)?;

    assert_freeze_authority(program_id, &mint, authority_info, authority_bump)?;

    if account.mint != *mint_info.key {
        msg!("Account {} does not belong to mint {}", account_info.key, mint_info.key);
        return Err(MinterError::AccountMintMismatch.into());
    }

    Ok((account_info, account))
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_instruction_rejected() {
        let program_id = Pubkey::new_unique();

        assert_eq!(
            Processor::process(&program_id, &[], &[9]),
            Err(MinterError::InvalidInstruction.into())
        );
        assert_eq!(
            Processor::process(&program_id, &[], &[]),
            Err(MinterError::InvalidInstruction.into())
        );
    }

    #[test]
    fn test_missing_accounts_rejected() {
        let program_id = Pubkey::new_unique();
        let data = MinterInstruction::BurnTokens { amount: 1 }.pack();

        assert_eq!(
            Processor::process(&program_id, &[], &data),
            Err(ProgramError::NotEnoughAccountKeys)
        );
    }
}

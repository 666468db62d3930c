//! Program Entrypoint
//!
//! Where the Solana runtime calls into the program. Everything is handed
//! to [`Processor`]; on failure the typed error is printed to the program
//! log before being returned.

// Omitted when another program depends on this crate for its types
#![cfg(not(feature = "no-entrypoint"))]

use crate::error::MinterError;
use crate::processor::Processor;
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult,
    program_error::PrintProgramError, pubkey::Pubkey,
};

entrypoint!(process_instruction);

/// The main entrypoint for the minter program.
///
/// # Arguments
///
/// * `program_id` - The public key of this program (our deployed address)
/// * `accounts` - Slice of all accounts involved in this instruction
/// * `instruction_data` - The raw bytes of instruction-specific data
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if let Err(error) = Processor::process(program_id, accounts, instruction_data) {
        error.print::<MinterError>();
        return Err(error);
    }
    Ok(())
}

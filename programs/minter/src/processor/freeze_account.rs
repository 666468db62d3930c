//! FreezeAccount Instruction Processor
//!
//! Freezes a token account so its balance can no longer be credited or
//! burned. Only the mint's freeze authority, the derived authority, may do
//! this, and it proves itself by address and bump rather than signature.

use crate::processor::load_for_state_change;
use crate::utils::UnitOfWork;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

/// Process FreezeAccount instruction
///
/// Accounts expected:
/// 0. `[writable]` Token account to freeze
/// 1. `[]` Mint
/// 2. `[]` Freeze authority (derived, never signs)
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], authority_bump: u8) -> ProgramResult {
    let (account_info, mut account) = load_for_state_change(program_id, accounts, authority_bump)?;

    msg!("Freezing token account: {}", account_info.key);

    if !account.freeze() {
        msg!("Account already frozen");
        return Ok(());
    }

    let mut batch = UnitOfWork::new();
    batch.stage(account_info, &account)?;
    batch.commit()?;

    msg!("Account frozen successfully.");
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

//! ThawAccount Instruction Processor
//!
//! Reverses FreezeAccount. Same accounts, same authorization.

use crate::processor::load_for_state_change;
use crate::utils::UnitOfWork;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

/// Process ThawAccount instruction
///
/// Accounts expected:
/// 0. `[writable]` Token account to thaw
/// 1. `[]` Mint
/// 2. `[]` Freeze authority (derived, never signs)
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], authority_bump: u8) -> ProgramResult {
    let (account_info, mut account) = load_for_state_change(program_id, accounts, authority_bump)?;

    msg!("Thawing token account: {}", account_info.key);

    if !account.thaw() {
        msg!("Account not frozen");
        return Ok(());
    }

    let mut batch = UnitOfWork::new();
    batch.stage(account_info, &account)?;
    batch.commit()?;

    msg!("Account thawed successfully.");
    Ok(())
}

//! BurnTokens Instruction Processor
//!
//! Destroys tokens from an account, reducing supply.
//!
//! Burning is the owner's right alone. The derived authority controls
//! issuance and freezing but cannot debit anyone's balance, so it is
//! rejected here like any other non-owner.

use crate::error::MinterError;
use crate::state::{Account, Mint};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process BurnTokens instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint
/// 1. `[writable]` Source token account
/// 2. `[signer]` Owner of the source account
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let mint_info = next_account_info(account_info_iter)?;
    let source_info = next_account_info(account_info_iter)?;
    let owner_info = next_account_info(account_info_iter)?;

    if amount == 0 {
        return Err(MinterError::ZeroBurnAmount.into());
    }

    let mut mint = load_initialized::<Mint>(mint_info, program_id)?;
    let mut source = load_initialized::<Account>(source_info, program_id)?;

    // Identity first, then signature: a signing stranger is still a stranger
    if source.owner != *owner_info.key {
        msg!("Rejected burn by {}: account owner is {}", owner_info.key, source.owner);
        return Err(MinterError::OwnerMismatch.into());
    }
    assert_signer(owner_info)?;

    msg!("Burning {} tokens from {}", amount, source_info.key);

    mint.burn(mint_info.key, &mut source, amount)?;

    let mut batch = UnitOfWork::new();
    batch.stage(source_info, &source)?;
    batch.stage(mint_info, &mint)?;
    batch.commit()?;

    msg!("Tokens burned successfully.");
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

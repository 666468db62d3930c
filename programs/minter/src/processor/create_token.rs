//! CreateToken Instruction Processor
//!
//! Creates a mint bound to the derived authority and issues its initial
//! supply to the owner's token account, allocating either account when it
//! does not exist yet.
//!
//! Every check and the issuance arithmetic run against in-memory records
//! first. Allocation CPIs happen only once the instruction is known to
//! succeed, and the records are written last through a single commit.

use crate::constants::{MAX_DECIMALS, TOKEN_ACCOUNT_SEED};
use crate::error::MinterError;
use crate::state::{Account, IsInitialized, Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// How the mint account is brought into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MintSlot {
    /// System-owned and empty, possibly already funded: allocate it,
    /// signed by the mint keypair.
    Blank,
    /// Already allocated to this program at `Mint::LEN`, rent exempt, uninitialized.
    Preallocated,
}

/// What the destination address currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DestinationSlot {
    /// System-owned and empty, possibly already funded: allocate it with
    /// the destination seeds.
    Blank { bump: u8 },
    /// A record this program owns, possibly holding a balance already.
    Existing,
}

/// Process CreateToken instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer
/// 1. `[writable, signer*]` Mint (*signer when still blank)
/// 2. `[]` Mint authority (derived)
/// 3. `[writable]` Destination token account (derived from owner and mint)
/// 4. `[]` Destination owner
/// 5. `[]` System program
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    decimals: u8,
    amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let authority_info = next_account_info(account_info_iter)?;
    let destination_info = next_account_info(account_info_iter)?;
    let owner_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    msg!("Creating new token...");

    if decimals > MAX_DECIMALS {
        msg!("Decimals {} exceed the maximum of {}", decimals, MAX_DECIMALS);
        return Err(MinterError::InvalidDecimals.into());
    }

    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_system_program(system_program_info)?;

    // The authority is never a signer here; it only has to be the right address
    let (authority, _) = derive_authority(program_id)?;
    if *authority_info.key != authority {
        msg!("Rejected authority {}: expected {}", authority_info.key, authority);
        return Err(MinterError::AuthorityMismatch.into());
    }

    let rent = Rent::get()?;
    let mint_slot = check_mint_slot(program_id, mint_info, &rent)?;
    let destination_slot = check_destination_slot(program_id, destination_info, owner_info, mint_info)?;

    // Compute both records before anything is allocated or written
    let mut mint = Mint::new(decimals, authority);
    let mut destination = match destination_slot {
        DestinationSlot::Blank { .. } => Account::new(*mint_info.key, *owner_info.key),
        DestinationSlot::Existing => load_destination(program_id, destination_info, owner_info, mint_info)?,
    };
    mint.issue(mint_info.key, &mut destination, amount)?;

    if mint_slot == MintSlot::Blank {
        create_program_account(
            payer_info,
            mint_info,
            system_program_info,
            &rent,
            Mint::LEN,
            program_id,
            &[],
        )?;
    }

    if let DestinationSlot::Blank { bump } = destination_slot {
        create_program_account(
            payer_info,
            destination_info,
            system_program_info,
            &rent,
            Account::LEN,
            program_id,
            &[&[
                TOKEN_ACCOUNT_SEED,
                owner_info.key.as_ref(),
                mint_info.key.as_ref(),
                &[bump],
            ]],
        )?;
    }

    let mut batch = UnitOfWork::new();
    batch.stage(mint_info, &mint)?;
    batch.stage(destination_info, &destination)?;
    batch.commit()?;

    msg!("Token created and minted successfully!");
    msg!("Mint Address: {}", mint_info.key);
    msg!("Recipient Account: {}", destination_info.key);
    msg!("Amount Minted: {}", amount);

    Ok(())
}

/// Decide whether the mint address can take a new mint.
///
/// Anything other than a blank address or an empty, rent-exempt record
/// of this program is an existing mint as far as callers are concerned.
fn check_mint_slot(
    program_id: &Pubkey,
    mint_info: &AccountInfo,
    rent: &Rent,
) -> Result<MintSlot, ProgramError> {
    assert_writable(mint_info)?;

    if is_blank(mint_info) {
        // Allocating a keypair address needs that keypair's signature
        assert_signer(mint_info)?;
        return Ok(MintSlot::Blank);
    }

    if mint_info.owner != program_id || mint_info.data_len() != Mint::LEN {
        msg!("Mint address {} is already in use", mint_info.key);
        return Err(MinterError::MintAlreadyExists.into());
    }

    let existing = Mint::unpack_from_slice(&mint_info.try_borrow_data()?)?;
    if existing.is_initialized() {
        msg!("Mint {} already exists", mint_info.key);
        return Err(MinterError::MintAlreadyExists.into());
    }

    assert_rent_exempt(rent, mint_info)?;
    Ok(MintSlot::Preallocated)
}

fn check_destination_slot(
    program_id: &Pubkey,
    destination_info: &AccountInfo,
    owner_info: &AccountInfo,
    mint_info: &AccountInfo,
) -> Result<DestinationSlot, ProgramError> {
    assert_writable(destination_info)?;

    let (expected, bump) = derive_token_account_address(program_id, owner_info.key, mint_info.key)?;
    if *destination_info.key != expected {
        msg!(
            "Destination {} is not the token account of {} for this mint",
            destination_info.key,
            owner_info.key
        );
        return Err(MinterError::InvalidTokenAccountAddress.into());
    }

    if is_blank(destination_info) {
        Ok(DestinationSlot::Blank { bump })
    } else {
        Ok(DestinationSlot::Existing)
    }
}

/// Load a destination that already exists at the derived address.
///
/// An allocated but never written record is treated as a fresh account.
fn load_destination(
    program_id: &Pubkey,
    destination_info: &AccountInfo,
    owner_info: &AccountInfo,
    mint_info: &AccountInfo,
) -> Result<Account, ProgramError> {
    assert_owned_by(destination_info, program_id)?;
    assert_data_length(destination_info, Account::LEN)?;

    let existing = Account::unpack_from_slice(&destination_info.try_borrow_data()?)?;
    if !existing.is_initialized() {
        return Ok(Account::new(*mint_info.key, *owner_info.key));
    }

    if existing.owner != *owner_info.key {
        return Err(MinterError::OwnerMismatch.into());
    }
    // Mint match and frozen state are enforced by Mint::issue
    Ok(existing)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AccountState;
    use solana_program::system_program;

    #[test]
    fn test_blank_mint_requires_signature() {
        let program_id = Pubkey::new_unique();
        let key = Pubkey::new_unique();
        let system = system_program::id();
        let mut lamports = 0u64;
        let mut data: [u8; 0] = [];
        let rent = Rent::default();

        let unsigned = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &system, false, 0);
        assert_eq!(
            check_mint_slot(&program_id, &unsigned, &rent),
            Err(ProgramError::MissingRequiredSignature)
        );

        let mut lamports = 0u64;
        let mut data: [u8; 0] = [];
        let signed = AccountInfo::new(&key, true, true, &mut lamports, &mut data, &system, false, 0);
        assert_eq!(check_mint_slot(&program_id, &signed, &rent), Ok(MintSlot::Blank));
    }

    #[test]
    fn test_funded_blank_mint_is_still_blank() {
        let program_id = Pubkey::new_unique();
        let key = Pubkey::new_unique();
        let system = system_program::id();
        let rent = Rent::default();
        let mut lamports = rent.minimum_balance(0);
        let mut data: [u8; 0] = [];
        let funded = AccountInfo::new(&key, true, true, &mut lamports, &mut data, &system, false, 0);

        assert_eq!(check_mint_slot(&program_id, &funded, &rent), Ok(MintSlot::Blank));
    }

    #[test]
    fn test_initialized_mint_already_exists() {
        let program_id = Pubkey::new_unique();
        let key = Pubkey::new_unique();
        let rent = Rent::default();
        let mut data = [0u8; Mint::LEN];
        Mint::new(9, Pubkey::new_unique()).pack(&mut data).unwrap();
        let mut lamports = rent.minimum_balance(Mint::LEN);
        let info = AccountInfo::new(&key, true, true, &mut lamports, &mut data, &program_id, false, 0);

        assert_eq!(
            check_mint_slot(&program_id, &info, &rent),
            Err(MinterError::MintAlreadyExists.into())
        );
    }

    #[test]
    fn test_occupied_foreign_address_already_exists() {
        let program_id = Pubkey::new_unique();
        let key = Pubkey::new_unique();
        let other_program = Pubkey::new_unique();
        let rent = Rent::default();
        let mut data = [0u8; Mint::LEN];
        let mut lamports = rent.minimum_balance(Mint::LEN);
        let info = AccountInfo::new(&key, true, true, &mut lamports, &mut data, &other_program, false, 0);

        assert_eq!(
            check_mint_slot(&program_id, &info, &rent),
            Err(MinterError::MintAlreadyExists.into())
        );
    }

    #[test]
    fn test_preallocated_mint_must_be_rent_exempt() {
        let program_id = Pubkey::new_unique();
        let key = Pubkey::new_unique();
        let rent = Rent::default();

        let mut data = [0u8; Mint::LEN];
        let mut lamports = rent.minimum_balance(Mint::LEN) - 1;
        let poor = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &program_id, false, 0);
        assert_eq!(
            check_mint_slot(&program_id, &poor, &rent),
            Err(MinterError::NotRentExempt.into())
        );

        let mut data = [0u8; Mint::LEN];
        let mut lamports = rent.minimum_balance(Mint::LEN);
        let funded = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &program_id, false, 0);
        assert_eq!(
            check_mint_slot(&program_id, &funded, &rent),
            Ok(MintSlot::Preallocated)
        );
    }

    #[test]
    fn test_destination_must_be_derived_address() {
        let program_id = Pubkey::new_unique();
        let system = system_program::id();
        let (mint_key, owner_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut mint_lamports, mut owner_lamports, mut dest_lamports) = (0u64, 0u64, 0u64);
        let (mut mint_data, mut owner_data, mut dest_data): ([u8; 0], [u8; 0], [u8; 0]) = ([], [], []);
        let mint_info = AccountInfo::new(&mint_key, true, true, &mut mint_lamports, &mut mint_data, &system, false, 0);
        let owner_info = AccountInfo::new(&owner_key, false, false, &mut owner_lamports, &mut owner_data, &system, false, 0);

        let wrong = Pubkey::new_unique();
        let dest_info = AccountInfo::new(&wrong, false, true, &mut dest_lamports, &mut dest_data, &system, false, 0);
        assert_eq!(
            check_destination_slot(&program_id, &dest_info, &owner_info, &mint_info),
            Err(MinterError::InvalidTokenAccountAddress.into())
        );

        let (expected, bump) = derive_token_account_address(&program_id, &owner_key, &mint_key).unwrap();
        let mut dest_lamports = 0u64;
        let mut dest_data: [u8; 0] = [];
        let dest_info = AccountInfo::new(&expected, false, true, &mut dest_lamports, &mut dest_data, &system, false, 0);
        assert_eq!(
            check_destination_slot(&program_id, &dest_info, &owner_info, &mint_info),
            Ok(DestinationSlot::Blank { bump })
        );
    }

    #[test]
    fn test_existing_destination_owner_checked() {
        let program_id = Pubkey::new_unique();
        let system = system_program::id();
        let (mint_key, owner_key, dest_key) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let (mut mint_lamports, mut owner_lamports, mut dest_lamports) = (0u64, 0u64, 0u64);
        let (mut mint_data, mut owner_data): ([u8; 0], [u8; 0]) = ([], []);
        let mint_info = AccountInfo::new(&mint_key, true, true, &mut mint_lamports, &mut mint_data, &system, false, 0);
        let owner_info = AccountInfo::new(&owner_key, false, false, &mut owner_lamports, &mut owner_data, &system, false, 0);

        let mut dest_data = [0u8; Account::LEN];
        let recorded = Account {
            amount: 5,
            ..Account::new(mint_key, Pubkey::new_unique())
        };
        recorded.pack(&mut dest_data).unwrap();
        let dest_info = AccountInfo::new(&dest_key, false, true, &mut dest_lamports, &mut dest_data, &program_id, false, 0);

        assert_eq!(
            load_destination(&program_id, &dest_info, &owner_info, &mint_info),
            Err(MinterError::OwnerMismatch.into())
        );
    }

    #[test]
    fn test_unwritten_destination_loads_fresh() {
        let program_id = Pubkey::new_unique();
        let system = system_program::id();
        let (mint_key, owner_key, dest_key) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let (mut mint_lamports, mut owner_lamports, mut dest_lamports) = (0u64, 0u64, 0u64);
        let (mut mint_data, mut owner_data): ([u8; 0], [u8; 0]) = ([], []);
        let mint_info = AccountInfo::new(&mint_key, true, true, &mut mint_lamports, &mut mint_data, &system, false, 0);
        let owner_info = AccountInfo::new(&owner_key, false, false, &mut owner_lamports, &mut owner_data, &system, false, 0);
        let mut dest_data = [0u8; Account::LEN];
        let dest_info = AccountInfo::new(&dest_key, false, true, &mut dest_lamports, &mut dest_data, &program_id, false, 0);

        let loaded = load_destination(&program_id, &dest_info, &owner_info, &mint_info).unwrap();
        assert_eq!(loaded.state, AccountState::Initialized);
        assert_eq!(loaded.mint, mint_key);
        assert_eq!(loaded.owner, owner_key);
        assert_eq!(loaded.amount, 0);
    }
}

//! Unit of Work
//!
//! Handlers never write a record as soon as they have computed it. They
//! stage each new record here and commit once every check has passed.
//! Commit first takes a mutable borrow of every staged account and only
//! then copies bytes, so a commit that fails (an account already borrowed,
//! the same account staged twice) writes nothing at all.
//!
//! ```ignore
//! let mut batch = UnitOfWork::new();
//! batch.stage(account_info, &account)?;
//! batch.stage(mint_info, &mint)?;
//! batch.commit()?;
//! ```

use crate::error::MinterError;
use crate::state::Pack;
use crate::utils::assert_writable;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult};

/// Records staged for writing, in staging order.
#[derive(Default)]
pub struct UnitOfWork<'a, 'info> {
    staged: Vec<(&'a AccountInfo<'info>, Vec<u8>)>,
}

impl<'a, 'info> UnitOfWork<'a, 'info> {
    /// An empty batch.
    pub fn new() -> Self {
        Self { staged: Vec::new() }
    }

    /// Serialize `state` for `account` without touching the account yet.
    ///
    /// # Errors
    ///
    /// * `InvalidAccountData` - account not writable
    /// * `InvalidAccountDataLength` - account is not `T::LEN` bytes
    pub fn stage<T: Pack>(&mut self, account: &'a AccountInfo<'info>, state: &T) -> ProgramResult {
        assert_writable(account)?;
        if account.data_len() != T::LEN {
            return Err(MinterError::InvalidAccountDataLength.into());
        }

        let mut bytes = vec![0u8; T::LEN];
        state.pack_into_slice(&mut bytes)?;
        self.staged.push((account, bytes));
        Ok(())
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.staged.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Write every staged record, or none of them.
    pub fn commit(self) -> ProgramResult {
        let mut targets = Vec::with_capacity(self.staged.len());
        for (account, bytes) in &self.staged {
            targets.push((account.try_borrow_mut_data()?, bytes));
        }

        for (mut data, bytes) in targets {
            data.copy_from_slice(bytes);
        }
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Account, Mint};
    use solana_program::{program_error::ProgramError, pubkey::Pubkey};

    #[test]
    fn test_commit_writes_all_staged_records() {
        let owner = Pubkey::new_unique();
        let (mint_key, account_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut mint_lamports, mut account_lamports) = (0u64, 0u64);
        let mut mint_data = [0u8; Mint::LEN];
        let mut account_data = [0u8; Account::LEN];
        let mint_info = AccountInfo::new(
            &mint_key, false, true, &mut mint_lamports, &mut mint_data, &owner, false, 0,
        );
        let account_info = AccountInfo::new(
            &account_key, false, true, &mut account_lamports, &mut account_data, &owner, false, 0,
        );

        let mint = Mint::new(9, Pubkey::new_unique());
        let account = Account::new(mint_key, Pubkey::new_unique());

        let mut batch = UnitOfWork::new();
        batch.stage(&mint_info, &mint).unwrap();
        batch.stage(&account_info, &account).unwrap();

        // Nothing is written while staging
        assert!(!Mint::unpack(&mint_info.data.borrow()).unwrap().is_initialized);
        assert_eq!(batch.len(), 2);

        batch.commit().unwrap();

        assert_eq!(Mint::unpack(&mint_info.data.borrow()).unwrap(), mint);
        assert_eq!(Account::unpack(&account_info.data.borrow()).unwrap(), account);
    }

    #[test]
    fn test_failed_commit_writes_nothing() {
        let owner = Pubkey::new_unique();
        let (mint_key, account_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut mint_lamports, mut account_lamports) = (0u64, 0u64);
        let mut mint_data = [0u8; Mint::LEN];
        let mut account_data = [0u8; Account::LEN];
        let mint_info = AccountInfo::new(
            &mint_key, false, true, &mut mint_lamports, &mut mint_data, &owner, false, 0,
        );
        let account_info = AccountInfo::new(
            &account_key, false, true, &mut account_lamports, &mut account_data, &owner, false, 0,
        );

        let mut batch = UnitOfWork::new();
        batch.stage(&mint_info, &Mint::new(9, Pubkey::new_unique())).unwrap();
        batch
            .stage(&account_info, &Account::new(mint_key, Pubkey::new_unique()))
            .unwrap();

        // Hold a borrow on the second account so its write cannot proceed
        let held = account_info.data.borrow();
        assert_eq!(batch.commit(), Err(ProgramError::AccountBorrowFailed));
        drop(held);

        assert_eq!(mint_info.data.borrow().iter().filter(|b| **b != 0).count(), 0);
        assert_eq!(account_info.data.borrow().iter().filter(|b| **b != 0).count(), 0);
    }

    #[test]
    fn test_stage_rejects_readonly_and_wrong_size() {
        let owner = Pubkey::new_unique();
        let key = Pubkey::new_unique();
        let mut lamports = 0u64;
        let mut data = [0u8; Mint::LEN];
        let readonly = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);

        let mut batch = UnitOfWork::new();
        assert_eq!(
            batch.stage(&readonly, &Mint::default()),
            Err(ProgramError::InvalidAccountData)
        );

        let mut lamports = 0u64;
        let mut data = [0u8; Mint::LEN];
        let writable = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(
            batch.stage(&writable, &Account::default()),
            Err(MinterError::InvalidAccountDataLength.into())
        );
        assert!(batch.is_empty());
    }
}

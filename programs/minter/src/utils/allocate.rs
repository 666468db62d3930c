//! Account Allocation
//!
//! Brings a system-owned, data-empty address under this program with
//! `space` bytes and a rent-exempt balance.
//!
//! `create_account` refuses any address that already holds lamports, and
//! anyone can send lamports to an address before it is created. A funded
//! address is therefore topped up to the rent-exempt minimum, then
//! allocated and assigned in separate steps.
//!
//! ```text
//! lamports == 0  ->  create_account(payer, new, rent, space, program)
//! lamports  > 0  ->  transfer(payer, new, shortfall)   if shortfall > 0
//!                    allocate(new, space)
//!                    assign(new, program)
//! ```

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
};

/// Allocate `new_account` for `owner`, paying from `payer`.
///
/// `signer_seeds` sign for `new_account` when it is a derived address;
/// pass `&[]` when `new_account` signed the transaction itself.
pub fn create_program_account<'info>(
    payer: &AccountInfo<'info>,
    new_account: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    rent: &Rent,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> ProgramResult {
    let current = new_account.lamports();

    if current == 0 {
        return invoke_signed(
            &system_instruction::create_account(
                payer.key,
                new_account.key,
                rent.minimum_balance(space),
                space as u64,
                owner,
            ),
            &[payer.clone(), new_account.clone(), system_program.clone()],
            signer_seeds,
        );
    }

    msg!("Address {} already holds {} lamports", new_account.key, current);

    let shortfall = rent_shortfall(rent, current, space);
    if shortfall > 0 {
        invoke(
            &system_instruction::transfer(payer.key, new_account.key, shortfall),
            &[payer.clone(), new_account.clone(), system_program.clone()],
        )?;
    }

    invoke_signed(
        &system_instruction::allocate(new_account.key, space as u64),
        &[new_account.clone(), system_program.clone()],
        signer_seeds,
    )?;

    invoke_signed(
        &system_instruction::assign(new_account.key, owner),
        &[new_account.clone(), system_program.clone()],
        signer_seeds,
    )
}

/// Lamports still missing for `space` bytes to be rent exempt.
pub fn rent_shortfall(rent: &Rent, current: u64, space: usize) -> u64 {
    rent.minimum_balance(space).saturating_sub(current)
}

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::AdwiserError;
use crate::validation::require_positive;

/// Lamports the escrow holds above its rent-exempt reserve.
pub fn withdrawable_lamports(escrow: &AccountInfo, rent: &Rent) -> u64 {
    escrow
        .lamports()
        .saturating_sub(rent.minimum_balance(escrow.data_len()))
}

/// Moves `amount` lamports from the program-owned escrow to `payee`. The
/// escrow may never drop below its rent-exempt reserve.
pub fn release_from_escrow<'info>(
    escrow: &AccountInfo<'info>,
    payee: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require_positive(amount)?;
    require_keys_neq!(escrow.key(), payee.key(), AdwiserError::PublisherNotAuthorized);

    let rent = Rent::get()?;
    require!(
        amount <= withdrawable_lamports(escrow, &rent),
        AdwiserError::InsufficientFunds
    );

    let escrow_balance = escrow
        .lamports()
        .checked_sub(amount)
        .ok_or(AdwiserError::InsufficientFunds)?;
    let payee_balance = payee
        .lamports()
        .checked_add(amount)
        .ok_or(AdwiserError::ArithmeticOverflow)?;

    **escrow.try_borrow_mut_lamports()? = escrow_balance;
    **payee.try_borrow_mut_lamports()? = payee_balance;
    Ok(())
}

/// Tops the escrow up from a signing wallet through the system program.
pub fn fund_escrow<'info>(
    funder: &Signer<'info>,
    escrow: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        system_program.to_account_info(),
        Transfer {
            from: funder.to_account_info(),
            to: escrow.clone(),
        },
    );
    system_program::transfer(cpi_ctx, amount)
}

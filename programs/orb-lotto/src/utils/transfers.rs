use anchor_lang::prelude::*;
use crate::errors::OrbLottoErrorCode;

pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, OrbLottoErrorCode::InvalidClaimAmount);

    anchor_lang::system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            anchor_lang::system_program::Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

/// Moves lamports out of a program-owned account by direct balance edits.
/// Only valid for accounts this program owns (the treasury PDA).
pub fn debit_program_account<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let balance = **from.lamports.borrow();
    require!(balance >= amount, OrbLottoErrorCode::InsufficientTreasuryBalance);

    **from.try_borrow_mut_lamports()? -= amount;
    **to.try_borrow_mut_lamports()? += amount;
    Ok(())
}

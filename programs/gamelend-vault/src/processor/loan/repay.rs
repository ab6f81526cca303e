use anchor_lang::{
    prelude::*,
    solana_program::{program::invoke, system_instruction},
};

use crate::error::VaultError;
use crate::events::LoanRepaid;
use crate::state::{Deposit, Loan, VaultConfig, TREASURY_PREFIX};

#[derive(Accounts)]
pub struct Repay<'info> {
    #[account(mut)]
    pub borrower: Signer<'info>,
    #[account(seeds = [VaultConfig::PREFIX], bump = config.bump)]
    pub config: Account<'info, VaultConfig>,
    #[account(
        seeds = [Deposit::PREFIX, deposit.collection.as_ref(), deposit.nft_mint.as_ref()],
        bump = deposit.bump,
        constraint = deposit.owner == borrower.key() @ VaultError::NotYourNFT,
    )]
    pub deposit: Account<'info, Deposit>,
    #[account(
        mut,
        seeds = [Loan::PREFIX, deposit.collection.as_ref(), deposit.nft_mint.as_ref()],
        bump = loan.bump,
    )]
    pub loan: Account<'info, Loan>,
    #[account(mut, seeds = [TREASURY_PREFIX], bump = config.treasury_bump)]
    pub treasury: SystemAccount<'info>,
    pub system_program: Program<'info, System>,
}

/// Settles the full amount due. `payment_value` is the borrower's
/// authorization ceiling; only the exact due amount is transferred, so
/// an overpayment never leaves the borrower's account.
pub fn handle_repay(ctx: Context<Repay>, payment_value: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let loan = &mut ctx.accounts.loan;
    loan.accrue(now)?;
    require!(loan.principal > 0, VaultError::NoActiveLoan);

    let principal = loan.principal;
    let interest = loan.accrued_interest;
    let due = loan.total_debt()?;
    msg!("principal: {}, interest: {}, due: {}", principal, interest, due);
    require!(payment_value >= due, VaultError::InsufficientPayment);

    invoke(
        &system_instruction::transfer(
            &ctx.accounts.borrower.key(),
            &ctx.accounts.treasury.key(),
            due,
        ),
        &[
            ctx.accounts.borrower.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
        ],
    )?;

    // Outstanding position tokens stay in circulation after repayment.
    loan.clear();

    emit!(LoanRepaid {
        nft_mint: ctx.accounts.deposit.nft_mint,
        borrower: ctx.accounts.borrower.key(),
        principal,
        interest,
        timestamp: now,
    });

    Ok(())
}

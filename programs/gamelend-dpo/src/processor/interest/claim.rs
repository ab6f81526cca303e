use anchor_lang::prelude::*;

use crate::error::DpoError;
use crate::events::InterestClaimed;
use crate::state::{Holding, PositionSupply};

#[derive(Accounts)]
pub struct ClaimInterest<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,
    #[account(
        mut,
        seeds = [PositionSupply::PREFIX, supply.nft_mint.as_ref()],
        bump = supply.bump,
    )]
    pub supply: Account<'info, PositionSupply>,
    #[account(
        mut,
        seeds = [Holding::PREFIX, supply.nft_mint.as_ref(), claimer.key().as_ref()],
        bump = holding.bump,
        constraint = holding.owner == claimer.key() @ DpoError::Unauthorized,
    )]
    pub holding: Account<'info, Holding>,
}

/// Pays out the caller's settled interest. Claiming with nothing pending
/// is a no-op, not an error.
pub fn handle_claim_interest(ctx: Context<ClaimInterest>) -> Result<()> {
    let supply = &ctx.accounts.supply;
    let holding = &mut ctx.accounts.holding;

    holding.settle(supply)?;
    let amount = holding.pending_interest;
    if amount == 0 {
        return Ok(());
    }
    holding.pending_interest = 0;

    // The pool is held on the supply account, which this program owns,
    // so payout is a direct lamport move.
    let supply_info = ctx.accounts.supply.to_account_info();
    let claimer_info = ctx.accounts.claimer.to_account_info();
    {
        let mut from = supply_info.try_borrow_mut_lamports()?;
        **from = from
            .checked_sub(amount)
            .ok_or(DpoError::MathOverflow)?;
    }
    {
        let mut to = claimer_info.try_borrow_mut_lamports()?;
        **to = to
            .checked_add(amount)
            .ok_or(DpoError::MathOverflow)?;
    }

    emit!(InterestClaimed {
        nft_mint: ctx.accounts.supply.nft_mint,
        holder: ctx.accounts.holding.owner,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

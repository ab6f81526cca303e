use anchor_lang::{prelude::*, solana_program::program::invoke};

use crate::error::DpoError;
use crate::events::InterestDistributed;
use crate::state::PositionSupply;

#[derive(Accounts)]
pub struct DistributeInterest<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        mut,
        seeds = [PositionSupply::PREFIX, supply.nft_mint.as_ref()],
        bump = supply.bump,
    )]
    pub supply: Account<'info, PositionSupply>,
    pub system_program: Program<'info, System>,
}

/// Adds `amount` lamports to the position's interest pool, credited
/// pro-rata to the holders of record at this moment.
pub fn handle_distribute_interest(ctx: Context<DistributeInterest>, amount: u64) -> Result<()> {
    require!(amount > 0, DpoError::InvalidAmount);

    let supply = &mut ctx.accounts.supply;
    supply.distribute(amount)?;

    // Pool lamports live on the supply account until claimed.
    invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &ctx.accounts.payer.key(),
            &supply.key(),
            amount,
        ),
        &[
            ctx.accounts.payer.to_account_info(),
            supply.to_account_info(),
        ],
    )?;

    emit!(InterestDistributed {
        nft_mint: supply.nft_mint,
        payer: ctx.accounts.payer.key(),
        amount,
        total_supply: supply.total_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

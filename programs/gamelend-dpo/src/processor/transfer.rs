use anchor_lang::prelude::*;

use crate::error::DpoError;
use crate::events::TokensTransferred;
use crate::state::{Holding, PositionSupply};

#[derive(Accounts)]
pub struct TransferPositionTokens<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        seeds = [PositionSupply::PREFIX, from.nft_mint.as_ref()],
        bump = supply.bump,
    )]
    pub supply: Account<'info, PositionSupply>,
    #[account(
        mut,
        seeds = [Holding::PREFIX, from.nft_mint.as_ref(), owner.key().as_ref()],
        bump = from.bump,
        constraint = from.owner == owner.key() @ DpoError::Unauthorized,
    )]
    pub from: Account<'info, Holding>,
    #[account(
        init_if_needed,
        payer = owner,
        seeds = [Holding::PREFIX, from.nft_mint.as_ref(), recipient.key().as_ref()],
        bump,
        space = Holding::space(),
    )]
    pub to: Account<'info, Holding>,
    /// CHECK: receives the units; any account may hold a balance
    ///
    /// Must differ from the sender: `from` and `to` would otherwise
    /// alias the same holding PDA, and the runtime writes each loaded
    /// copy back independently.
    #[account(constraint = recipient.key() != owner.key() @ DpoError::SelfTrade)]
    pub recipient: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handle_transfer_position_tokens(
    ctx: Context<TransferPositionTokens>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, DpoError::InvalidAmount);

    let supply = &ctx.accounts.supply;
    let from = &mut ctx.accounts.from;
    let to = &mut ctx.accounts.to;

    if to.owner == Pubkey::default() {
        to.nft_mint = from.nft_mint;
        to.owner = ctx.accounts.recipient.key();
        to.bump = ctx.bumps.to;
    }

    from.settle(supply)?;
    to.settle(supply)?;

    from.debit(amount)?;
    to.credit(amount)?;

    emit!(TokensTransferred {
        nft_mint: from.nft_mint,
        from: from.owner,
        to: to.owner,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::error::DpoError;
use crate::events::SellOrderCancelled;
use crate::state::{Holding, SellOrder};

#[derive(Accounts)]
pub struct CancelSellOrder<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,
    #[account(
        mut,
        seeds = [Holding::PREFIX, order.nft_mint.as_ref(), seller.key().as_ref()],
        bump = holding.bump,
        constraint = holding.owner == seller.key() @ DpoError::Unauthorized,
    )]
    pub holding: Account<'info, Holding>,
    #[account(
        mut,
        seeds = [SellOrder::PREFIX, order.nft_mint.as_ref(), seller.key().as_ref()],
        bump = order.bump,
        constraint = order.seller == seller.key() @ DpoError::Unauthorized,
        close = seller,
    )]
    pub order: Account<'info, SellOrder>,
}

pub fn handle_cancel_sell_order(ctx: Context<CancelSellOrder>) -> Result<()> {
    let returned = ctx.accounts.order.remaining;
    ctx.accounts.holding.unlock(returned)?;

    emit!(SellOrderCancelled {
        nft_mint: ctx.accounts.order.nft_mint,
        seller: ctx.accounts.order.seller,
        returned,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::error::DpoError;
use crate::events::SellOrderPlaced;
use crate::state::{Holding, SellOrder};

#[derive(Accounts)]
pub struct PlaceSellOrder<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,
    #[account(
        mut,
        seeds = [Holding::PREFIX, holding.nft_mint.as_ref(), seller.key().as_ref()],
        bump = holding.bump,
        constraint = holding.owner == seller.key() @ DpoError::Unauthorized,
    )]
    pub holding: Account<'info, Holding>,
    #[account(
        init,
        payer = seller,
        seeds = [SellOrder::PREFIX, holding.nft_mint.as_ref(), seller.key().as_ref()],
        bump,
        space = SellOrder::space(),
    )]
    pub order: Account<'info, SellOrder>,
    pub system_program: Program<'info, System>,
}

pub fn handle_place_sell_order(
    ctx: Context<PlaceSellOrder>,
    amount: u64,
    price_per_unit: u64,
) -> Result<()> {
    require!(amount > 0, DpoError::InvalidAmount);
    require!(price_per_unit > 0, DpoError::InvalidPrice);

    let holding = &mut ctx.accounts.holding;
    holding.lock(amount)?;

    let order = &mut ctx.accounts.order;
    order.nft_mint = holding.nft_mint;
    order.seller = ctx.accounts.seller.key();
    order.remaining = amount;
    order.price_per_unit = price_per_unit;
    order.created_at = Clock::get()?.unix_timestamp;
    order.bump = ctx.bumps.order;

    emit!(SellOrderPlaced {
        nft_mint: order.nft_mint,
        seller: order.seller,
        amount,
        price_per_unit,
        timestamp: order.created_at,
    });

    Ok(())
}

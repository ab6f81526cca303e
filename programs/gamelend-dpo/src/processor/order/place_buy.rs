use anchor_lang::{
    prelude::*,
    solana_program::program::invoke,
    AccountsClose,
};

use crate::error::DpoError;
use crate::events::OrderFilled;
use crate::state::{DpoConfig, Holding, PositionSupply, SellOrder};
use crate::utils::{fee_from_basis_points, order_cost};

#[derive(Accounts)]
pub struct PlaceBuyOrder<'info> {
    // Buying from yourself would alias seller_holding and buyer_holding
    // onto one PDA, so the two deserialized copies would clobber each
    // other on write-back.
    #[account(mut, constraint = buyer.key() != order.seller @ DpoError::SelfTrade)]
    pub buyer: Signer<'info>,
    /// CHECK: the resting order's seller, receives the sale proceeds
    #[account(mut, constraint = seller.key() == order.seller @ DpoError::Unauthorized)]
    pub seller: UncheckedAccount<'info>,
    /// CHECK: receives the protocol fee
    #[account(mut, constraint = fee_collector.key() == config.fee_collector @ DpoError::Unauthorized)]
    pub fee_collector: UncheckedAccount<'info>,
    #[account(seeds = [DpoConfig::PREFIX], bump = config.bump)]
    pub config: Account<'info, DpoConfig>,
    #[account(
        seeds = [PositionSupply::PREFIX, supply.nft_mint.as_ref()],
        bump = supply.bump,
    )]
    pub supply: Account<'info, PositionSupply>,
    #[account(
        mut,
        seeds = [SellOrder::PREFIX, supply.nft_mint.as_ref(), order.seller.as_ref()],
        bump = order.bump,
    )]
    pub order: Account<'info, SellOrder>,
    #[account(
        mut,
        seeds = [Holding::PREFIX, supply.nft_mint.as_ref(), order.seller.as_ref()],
        bump = seller_holding.bump,
    )]
    pub seller_holding: Account<'info, Holding>,
    #[account(
        init_if_needed,
        payer = buyer,
        seeds = [Holding::PREFIX, supply.nft_mint.as_ref(), buyer.key().as_ref()],
        bump,
        space = Holding::space(),
    )]
    pub buyer_holding: Account<'info, Holding>,
    pub system_program: Program<'info, System>,
}

/// Immediate-or-cancel buy against one resting sell order. Whatever does
/// not match is cancelled; the unspent lamports never leave the buyer.
pub fn handle_place_buy_order(
    ctx: Context<PlaceBuyOrder>,
    amount: u64,
    price_per_unit: u64,
) -> Result<()> {
    require!(amount > 0, DpoError::InvalidAmount);

    let order = &mut ctx.accounts.order;
    require!(
        price_per_unit >= order.price_per_unit,
        DpoError::PriceTooLow
    );

    let matched = order.fill(amount);
    require!(matched > 0, DpoError::InsufficientBalance);

    // Trades execute at the resting price.
    let gross = order_cost(matched, order.price_per_unit)?;
    let fee = fee_from_basis_points(gross, ctx.accounts.config.trade_fee_bps)?;
    let proceeds = gross.checked_sub(fee).ok_or(DpoError::MathOverflow)?;

    let supply = &ctx.accounts.supply;
    let seller_holding = &mut ctx.accounts.seller_holding;
    let buyer_holding = &mut ctx.accounts.buyer_holding;

    if buyer_holding.owner == Pubkey::default() {
        buyer_holding.nft_mint = supply.nft_mint;
        buyer_holding.owner = ctx.accounts.buyer.key();
        buyer_holding.bump = ctx.bumps.buyer_holding;
    }

    // Interest settles against pre-trade balances: the seller keeps what
    // was already distributed, the buyer starts fresh.
    seller_holding.settle(supply)?;
    buyer_holding.settle(supply)?;

    seller_holding.debit_locked(matched)?;
    buyer_holding.credit(matched)?;

    invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &ctx.accounts.buyer.key(),
            &ctx.accounts.seller.key(),
            proceeds,
        ),
        &[
            ctx.accounts.buyer.to_account_info(),
            ctx.accounts.seller.to_account_info(),
        ],
    )?;

    if fee > 0 {
        invoke(
            &anchor_lang::solana_program::system_instruction::transfer(
                &ctx.accounts.buyer.key(),
                &ctx.accounts.fee_collector.key(),
                fee,
            ),
            &[
                ctx.accounts.buyer.to_account_info(),
                ctx.accounts.fee_collector.to_account_info(),
            ],
        )?;
    }

    emit!(OrderFilled {
        nft_mint: supply.nft_mint,
        seller: order.seller,
        buyer: ctx.accounts.buyer.key(),
        amount: matched,
        price_per_unit: order.price_per_unit,
        proceeds,
        fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    if ctx.accounts.order.is_filled() {
        ctx.accounts
            .order
            .close(ctx.accounts.seller.to_account_info())?;
    }

    Ok(())
}

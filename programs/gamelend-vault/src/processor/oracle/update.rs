use anchor_lang::prelude::*;

use crate::error::VaultError;
use crate::events::{FloorPriceUpdated, UtilityScoreUpdated};
use crate::state::{PriceFeed, VaultConfig};

#[derive(Accounts)]
pub struct UpdatePriceFeed<'info> {
    pub oracle_authority: Signer<'info>,
    #[account(
        seeds = [VaultConfig::PREFIX],
        bump = config.bump,
        constraint = config.oracle_authority == oracle_authority.key() @ VaultError::Unauthorized,
    )]
    pub config: Account<'info, VaultConfig>,
    #[account(
        mut,
        seeds = [PriceFeed::PREFIX, price_feed.collection.as_ref()],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,
}

/// A zero price is accepted and simply zeroes borrow capacity.
pub fn handle_update_floor_price(ctx: Context<UpdatePriceFeed>, floor_price: u64) -> Result<()> {
    let price_feed = &mut ctx.accounts.price_feed;
    let now = Clock::get()?.unix_timestamp;

    price_feed.floor_price = floor_price;
    price_feed.last_update = now;
    price_feed.is_active = true;

    emit!(FloorPriceUpdated {
        collection: price_feed.collection,
        floor_price,
        timestamp: now,
    });

    Ok(())
}

pub fn handle_update_utility_score(ctx: Context<UpdatePriceFeed>, utility_score: u8) -> Result<()> {
    require!(
        (1..=100).contains(&utility_score),
        VaultError::InvalidUtilityScore
    );

    let price_feed = &mut ctx.accounts.price_feed;
    let now = Clock::get()?.unix_timestamp;

    price_feed.utility_score = utility_score;
    price_feed.last_update = now;

    emit!(UtilityScoreUpdated {
        collection: price_feed.collection,
        utility_score,
        timestamp: now,
    });

    Ok(())
}

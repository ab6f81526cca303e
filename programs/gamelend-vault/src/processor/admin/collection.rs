use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::error::VaultError;
use crate::events::{CollectionAdded, CollectionUpdated};
use crate::state::{CollectionConfig, PriceFeed, RiskParams, VaultConfig, MAX_GAME_CATEGORY_LEN};

#[derive(Accounts)]
pub struct AddCollection<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        seeds = [VaultConfig::PREFIX],
        bump = config.bump,
        constraint = config.authority == authority.key() @ VaultError::Unauthorized,
    )]
    pub config: Account<'info, VaultConfig>,
    pub collection_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = authority,
        seeds = [CollectionConfig::PREFIX, collection_mint.key().as_ref()],
        bump,
        space = CollectionConfig::space(),
    )]
    pub collection_config: Account<'info, CollectionConfig>,
    #[account(
        init,
        payer = authority,
        seeds = [PriceFeed::PREFIX, collection_mint.key().as_ref()],
        bump,
        space = PriceFeed::space(),
    )]
    pub price_feed: Account<'info, PriceFeed>,
    pub system_program: Program<'info, System>,
}

pub fn handle_add_supported_collection(
    ctx: Context<AddCollection>,
    risk_tier: u8,
    game_category: String,
) -> Result<()> {
    // Validates the tier
    RiskParams::for_tier(risk_tier)?;
    require!(
        game_category.len() <= MAX_GAME_CATEGORY_LEN,
        VaultError::InvalidAmount
    );

    let collection = ctx.accounts.collection_mint.key();

    let collection_config = &mut ctx.accounts.collection_config;
    collection_config.collection = collection;
    collection_config.supported = true;
    collection_config.risk_tier = risk_tier;
    collection_config.game_category = game_category.clone();
    collection_config.max_ltv_override = 0;
    collection_config.liquidation_threshold_override = 0;
    collection_config.bump = ctx.bumps.collection_config;

    // The feed starts inactive with zero floor; capacity stays zero
    // until the oracle writes a price.
    let price_feed = &mut ctx.accounts.price_feed;
    price_feed.collection = collection;
    price_feed.floor_price = 0;
    price_feed.utility_score = 0;
    price_feed.last_update = 0;
    price_feed.is_active = false;
    price_feed.bump = ctx.bumps.price_feed;

    emit!(CollectionAdded {
        collection,
        risk_tier,
        game_category,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateCollection<'info> {
    pub authority: Signer<'info>,
    #[account(
        seeds = [VaultConfig::PREFIX],
        bump = config.bump,
        constraint = config.authority == authority.key() @ VaultError::Unauthorized,
    )]
    pub config: Account<'info, VaultConfig>,
    #[account(
        mut,
        seeds = [CollectionConfig::PREFIX, collection_config.collection.as_ref()],
        bump = collection_config.bump,
    )]
    pub collection_config: Account<'info, CollectionConfig>,
}

fn emit_update(collection_config: &CollectionConfig) {
    emit!(CollectionUpdated {
        collection: collection_config.collection,
        risk_tier: collection_config.risk_tier,
        max_ltv_override: collection_config.max_ltv_override,
        liquidation_threshold_override: collection_config.liquidation_threshold_override,
    });
}

pub fn handle_set_collection_risk_tier(ctx: Context<UpdateCollection>, risk_tier: u8) -> Result<()> {
    RiskParams::for_tier(risk_tier)?;
    let collection_config = &mut ctx.accounts.collection_config;
    collection_config.risk_tier = risk_tier;
    emit_update(collection_config);
    Ok(())
}

pub fn handle_set_game_category(ctx: Context<UpdateCollection>, game_category: String) -> Result<()> {
    require!(
        game_category.len() <= MAX_GAME_CATEGORY_LEN,
        VaultError::InvalidAmount
    );
    ctx.accounts.collection_config.game_category = game_category;
    emit_update(&ctx.accounts.collection_config);
    Ok(())
}

/// Zero clears an override back to the tier default.
pub fn handle_set_collection_overrides(
    ctx: Context<UpdateCollection>,
    max_ltv: u8,
    liquidation_threshold: u8,
) -> Result<()> {
    require!(max_ltv < 100 && liquidation_threshold < 100, VaultError::InvalidRiskTier);

    let collection_config = &mut ctx.accounts.collection_config;
    collection_config.max_ltv_override = max_ltv;
    collection_config.liquidation_threshold_override = liquidation_threshold;

    // The merged parameters must still leave room to liquidate.
    let params = collection_config.risk_params()?;
    require!(
        params.max_ltv < params.liquidation_threshold,
        VaultError::InvalidRiskTier
    );

    emit_update(collection_config);
    Ok(())
}

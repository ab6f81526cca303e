use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod state;
pub mod utils;

mod processor;
use processor::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod gamelend_vault {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, oracle_authority: Pubkey) -> Result<()> {
        processor::handle_initialize(ctx, oracle_authority)
    }

    pub fn set_oracle_authority(
        ctx: Context<UpdateConfig>,
        oracle_authority: Pubkey,
    ) -> Result<()> {
        processor::handle_set_oracle_authority(ctx, oracle_authority)
    }

    pub fn set_dpo_program(ctx: Context<UpdateConfig>, dpo_program: Pubkey) -> Result<()> {
        processor::handle_set_dpo_program(ctx, dpo_program)
    }

    pub fn add_supported_collection(
        ctx: Context<AddCollection>,
        risk_tier: u8,
        game_category: String,
    ) -> Result<()> {
        processor::handle_add_supported_collection(ctx, risk_tier, game_category)
    }

    pub fn set_collection_risk_tier(ctx: Context<UpdateCollection>, risk_tier: u8) -> Result<()> {
        processor::handle_set_collection_risk_tier(ctx, risk_tier)
    }

    pub fn set_game_category(
        ctx: Context<UpdateCollection>,
        game_category: String,
    ) -> Result<()> {
        processor::handle_set_game_category(ctx, game_category)
    }

    pub fn set_collection_overrides(
        ctx: Context<UpdateCollection>,
        max_ltv: u8,
        liquidation_threshold: u8,
    ) -> Result<()> {
        processor::handle_set_collection_overrides(ctx, max_ltv, liquidation_threshold)
    }

    pub fn update_floor_price(ctx: Context<UpdatePriceFeed>, floor_price: u64) -> Result<()> {
        processor::handle_update_floor_price(ctx, floor_price)
    }

    pub fn update_utility_score(ctx: Context<UpdatePriceFeed>, utility_score: u8) -> Result<()> {
        processor::handle_update_utility_score(ctx, utility_score)
    }

    pub fn deposit_nft(ctx: Context<DepositNft>) -> Result<()> {
        processor::handle_deposit_nft(ctx)
    }

    pub fn withdraw_nft(ctx: Context<WithdrawNft>) -> Result<()> {
        processor::handle_withdraw_nft(ctx)
    }

    pub fn borrow_against_nft(ctx: Context<Borrow>, amount: u64) -> Result<()> {
        processor::handle_borrow(ctx, amount)
    }

    pub fn repay_loan(ctx: Context<Repay>, payment_value: u64) -> Result<()> {
        processor::handle_repay(ctx, payment_value)
    }

    pub fn liquidate(ctx: Context<Liquidate>) -> Result<()> {
        processor::handle_liquidate(ctx)
    }
}

#[cfg(test)]
mod tests;

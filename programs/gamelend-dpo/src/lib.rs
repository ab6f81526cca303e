use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod state;
pub mod utils;

mod processor;
use processor::*;

declare_id!("4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T");

#[program]
pub mod gamelend_dpo {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, trade_fee_bps: u16) -> Result<()> {
        processor::handle_initialize(ctx, trade_fee_bps)
    }

    pub fn authorize_minter(ctx: Context<AuthorizeMinter>, minter: Pubkey) -> Result<()> {
        processor::handle_authorize_minter(ctx, minter)
    }

    pub fn set_fee_collector(ctx: Context<AuthorizeMinter>, fee_collector: Pubkey) -> Result<()> {
        processor::handle_set_fee_collector(ctx, fee_collector)
    }

    pub fn mint_position_tokens(
        ctx: Context<MintPositionTokens>,
        nft_mint: Pubkey,
        collection: Pubkey,
        amount: u64,
    ) -> Result<()> {
        processor::handle_mint_position_tokens(ctx, nft_mint, collection, amount)
    }

    pub fn transfer_position_tokens(
        ctx: Context<TransferPositionTokens>,
        amount: u64,
    ) -> Result<()> {
        processor::handle_transfer_position_tokens(ctx, amount)
    }

    pub fn place_sell_order(
        ctx: Context<PlaceSellOrder>,
        amount: u64,
        price_per_unit: u64,
    ) -> Result<()> {
        processor::handle_place_sell_order(ctx, amount, price_per_unit)
    }

    pub fn cancel_sell_order(ctx: Context<CancelSellOrder>) -> Result<()> {
        processor::handle_cancel_sell_order(ctx)
    }

    pub fn place_buy_order(
        ctx: Context<PlaceBuyOrder>,
        amount: u64,
        price_per_unit: u64,
    ) -> Result<()> {
        processor::handle_place_buy_order(ctx, amount, price_per_unit)
    }

    pub fn distribute_interest(ctx: Context<DistributeInterest>, amount: u64) -> Result<()> {
        processor::handle_distribute_interest(ctx, amount)
    }

    pub fn claim_interest(ctx: Context<ClaimInterest>) -> Result<()> {
        processor::handle_claim_interest(ctx)
    }
}

use anchor_lang::prelude::*;

#[event]
pub struct TokensMinted {
    pub nft_mint: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensTransferred {
    pub nft_mint: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct SellOrderPlaced {
    pub nft_mint: Pubkey,
    pub seller: Pubkey,
    pub amount: u64,
    pub price_per_unit: u64,
    pub timestamp: i64,
}

#[event]
pub struct SellOrderCancelled {
    pub nft_mint: Pubkey,
    pub seller: Pubkey,
    pub returned: u64,
    pub timestamp: i64,
}

#[event]
pub struct OrderFilled {
    pub nft_mint: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    pub price_per_unit: u64,
    pub proceeds: u64,
    pub fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct InterestDistributed {
    pub nft_mint: Pubkey,
    pub payer: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
    pub timestamp: i64,
}

#[event]
pub struct InterestClaimed {
    pub nft_mint: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

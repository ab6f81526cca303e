use anchor_lang::prelude::*;

#[event]
pub struct CollectionAdded {
    pub collection: Pubkey,
    pub risk_tier: u8,
    pub game_category: String,
}

#[event]
pub struct CollectionUpdated {
    pub collection: Pubkey,
    pub risk_tier: u8,
    pub max_ltv_override: u8,
    pub liquidation_threshold_override: u8,
}

#[event]
pub struct FloorPriceUpdated {
    pub collection: Pubkey,
    pub floor_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct UtilityScoreUpdated {
    pub collection: Pubkey,
    pub utility_score: u8,
    pub timestamp: i64,
}

#[event]
pub struct NftDeposited {
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct NftWithdrawn {
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct LoanOriginated {
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub borrower: Pubkey,
    pub amount: u64,
    pub principal: u64,
    pub interest_rate_bps: u16,
    pub dpo_units: u64,
    pub timestamp: i64,
}

#[event]
pub struct LoanRepaid {
    pub nft_mint: Pubkey,
    pub borrower: Pubkey,
    pub principal: u64,
    pub interest: u64,
    pub timestamp: i64,
}

#[event]
pub struct NftLiquidated {
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub borrower: Pubkey,
    pub liquidator: Pubkey,
    pub debt: u64,
    pub ltv_bps: u64,
    pub timestamp: i64,
}

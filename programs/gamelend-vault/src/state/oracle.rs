use anchor_lang::prelude::*;

/// Oracle-written valuation for one collection. A zero floor price is
/// a valid state meaning "no capacity", never a division error.
#[account]
pub struct PriceFeed {
    pub collection: Pubkey,
    /// Collection floor, in lamports
    pub floor_price: u64,
    /// In-game utility score, 0 until first written, then 1..=100
    pub utility_score: u8,
    pub last_update: i64,
    pub is_active: bool,
    pub bump: u8,
}

impl PriceFeed {
    pub fn space() -> usize {
        8 +  // discriminator
        32 + // collection
        8 +  // floor_price
        1 +  // utility_score
        8 +  // last_update
        1 +  // is_active
        1 // bump
    }

    pub const PREFIX: &'static [u8] = b"price_feed";
}

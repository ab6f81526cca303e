use anchor_lang::prelude::*;

/// A resting sell intent. The escrowed units live on the seller's Holding
/// as `locked_amount`, so a seller cannot oversubscribe their balance.
/// One open order per (seller, NFT).
#[account]
pub struct SellOrder {
    pub nft_mint: Pubkey,
    pub seller: Pubkey,
    pub remaining: u64,
    /// Lamports per DPO unit
    pub price_per_unit: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl SellOrder {
    pub fn space() -> usize {
        8 +  // discriminator
        32 + // nft_mint
        32 + // seller
        8 +  // remaining
        8 +  // price_per_unit
        8 +  // created_at
        1 // bump
    }

    pub const PREFIX: &'static [u8] = b"sell_order";

    /// Fills up to `amount` units and returns the matched quantity.
    pub fn fill(&mut self, amount: u64) -> u64 {
        let matched = self.remaining.min(amount);
        self.remaining -= matched;
        matched
    }

    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }
}

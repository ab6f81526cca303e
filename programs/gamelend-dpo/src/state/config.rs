use anchor_lang::prelude::*;

#[account]
pub struct DpoConfig {
    /// Program administrator
    pub authority: Pubkey,
    /// The only signer allowed to mint position tokens (the vault config PDA)
    pub minter: Pubkey,
    /// Receives order-book trade fees
    pub fee_collector: Pubkey,
    /// Protocol fee taken from the seller's proceeds, in basis points
    pub trade_fee_bps: u16,
    pub bump: u8,
}

impl DpoConfig {
    pub fn space() -> usize {
        8 +  // discriminator
        32 + // authority
        32 + // minter
        32 + // fee_collector
        2 +  // trade_fee_bps
        1 // bump
    }

    pub const PREFIX: &'static [u8] = b"config";

    /// Fees above 10% are assumed to be misconfiguration.
    pub const MAX_TRADE_FEE_BPS: u16 = 1_000;
}

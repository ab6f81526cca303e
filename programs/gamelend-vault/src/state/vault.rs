use anchor_lang::prelude::*;

/// Seed for the system-owned treasury PDA that holds disbursement
/// liquidity. Anyone can fund it with a plain transfer.
pub const TREASURY_PREFIX: &[u8] = b"treasury";

/// Seed for per-NFT escrow token accounts.
pub const ESCROW_PREFIX: &[u8] = b"escrow";

/// Global vault configuration. The config PDA doubles as the minter
/// identity presented to the debt position token program.
#[account]
pub struct VaultConfig {
    pub authority: Pubkey,
    pub oracle_authority: Pubkey,
    pub dpo_program: Pubkey,
    pub treasury_bump: u8,
    pub bump: u8,
}

impl VaultConfig {
    pub fn space() -> usize {
        8 +  // discriminator
        32 + // authority
        32 + // oracle_authority
        32 + // dpo_program
        1 +  // treasury_bump
        1 // bump
    }

    pub const PREFIX: &'static [u8] = b"config";
}

/// Custody record for one deposited NFT. At most one active deposit per
/// NFT; the account is closed on withdraw or liquidation.
#[account]
pub struct Deposit {
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub owner: Pubkey,
    pub is_active: bool,
    pub created_at: i64,
    pub bump: u8,
}

impl Deposit {
    pub fn space() -> usize {
        8 +  // discriminator
        32 + // collection
        32 + // nft_mint
        32 + // owner
        1 +  // is_active
        8 +  // created_at
        1 // bump
    }

    pub const PREFIX: &'static [u8] = b"deposit";
}

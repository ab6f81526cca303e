use anchor_lang::prelude::*;

use crate::error::DpoError;

/// Scale factor for the per-unit interest accumulator.
pub const INTEREST_SCALE: u128 = 1_000_000_000_000;

/// Aggregate DPO state for one NFT position. Lamports sent via
/// `distribute_interest` are held on this account until claimed.
#[account]
pub struct PositionSupply {
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub total_supply: u64,
    /// Cumulative lamports distributed per unit, scaled by INTEREST_SCALE
    pub interest_per_unit: u128,
    pub bump: u8,
}

impl PositionSupply {
    pub fn space() -> usize {
        8 +  // discriminator
        32 + // collection
        32 + // nft_mint
        8 +  // total_supply
        16 + // interest_per_unit
        1 // bump
    }

    pub const PREFIX: &'static [u8] = b"supply";

    /// Advances the accumulator so that every current unit is owed its
    /// pro-rata share of `amount`. Holders who sell afterwards keep the
    /// share settled into their pending balance; later buyers start from
    /// the advanced accumulator and receive nothing retroactively.
    pub fn distribute(&mut self, amount: u64) -> Result<()> {
        require!(self.total_supply > 0, DpoError::NoSupply);
        let delta = (amount as u128)
            .checked_mul(INTEREST_SCALE)
            .ok_or(DpoError::MathOverflow)?
            .checked_div(self.total_supply as u128)
            .ok_or(DpoError::MathOverflow)?;
        self.interest_per_unit = self
            .interest_per_unit
            .checked_add(delta)
            .ok_or(DpoError::MathOverflow)?;
        Ok(())
    }
}

/// One holder's balance for one NFT position.
#[account]
pub struct Holding {
    pub nft_mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    /// Units escrowed under an open sell order
    pub locked_amount: u64,
    /// Settled but unclaimed interest, in lamports
    pub pending_interest: u64,
    /// Accumulator value at the last settlement
    pub interest_debt: u128,
    pub bump: u8,
}

impl Holding {
    pub fn space() -> usize {
        8 +  // discriminator
        32 + // nft_mint
        32 + // owner
        8 +  // amount
        8 +  // locked_amount
        8 +  // pending_interest
        16 + // interest_debt
        1 // bump
    }

    pub const PREFIX: &'static [u8] = b"holding";

    pub fn free_amount(&self) -> u64 {
        self.amount.saturating_sub(self.locked_amount)
    }

    /// Interest accrued since the last settlement, not yet folded into
    /// `pending_interest`. Escrowed units keep accruing to the seller
    /// until a fill settles them.
    pub fn unsettled(&self, supply: &PositionSupply) -> Result<u64> {
        let delta = supply
            .interest_per_unit
            .checked_sub(self.interest_debt)
            .ok_or(DpoError::MathOverflow)?;
        let owed = (self.amount as u128)
            .checked_mul(delta)
            .ok_or(DpoError::MathOverflow)?
            .checked_div(INTEREST_SCALE)
            .ok_or(DpoError::MathOverflow)?;
        u64::try_from(owed).map_err(|_| error!(DpoError::MathOverflow))
    }

    /// Total claimable interest.
    pub fn pending(&self, supply: &PositionSupply) -> Result<u64> {
        self.pending_interest
            .checked_add(self.unsettled(supply)?)
            .ok_or_else(|| error!(DpoError::MathOverflow))
    }

    /// Folds accrued interest into `pending_interest`. Must run before any
    /// balance change so distributions snapshot correctly.
    pub fn settle(&mut self, supply: &PositionSupply) -> Result<()> {
        let owed = self.unsettled(supply)?;
        self.pending_interest = self
            .pending_interest
            .checked_add(owed)
            .ok_or(DpoError::MathOverflow)?;
        self.interest_debt = supply.interest_per_unit;
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(DpoError::MathOverflow)?;
        Ok(())
    }

    /// Debits freely transferable units only.
    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(self.free_amount() >= amount, DpoError::InsufficientBalance);
        self.amount -= amount;
        Ok(())
    }

    pub fn lock(&mut self, amount: u64) -> Result<()> {
        require!(self.free_amount() >= amount, DpoError::InsufficientBalance);
        self.locked_amount = self
            .locked_amount
            .checked_add(amount)
            .ok_or(DpoError::MathOverflow)?;
        Ok(())
    }

    pub fn unlock(&mut self, amount: u64) -> Result<()> {
        require!(self.locked_amount >= amount, DpoError::InsufficientBalance);
        self.locked_amount -= amount;
        Ok(())
    }

    /// Releases escrowed units during an order fill.
    pub fn debit_locked(&mut self, amount: u64) -> Result<()> {
        require!(self.locked_amount >= amount, DpoError::InsufficientBalance);
        require!(self.amount >= amount, DpoError::InsufficientBalance);
        self.locked_amount -= amount;
        self.amount -= amount;
        Ok(())
    }
}

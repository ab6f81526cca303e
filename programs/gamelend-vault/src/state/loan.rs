use anchor_lang::prelude::*;

use crate::error::VaultError;
use crate::utils::interest_due;

/// Loan ledger for one deposited NFT. Created zeroed alongside the
/// deposit and closed with it. Interest accrues lazily on every
/// mutating instruction.
#[account]
pub struct Loan {
    pub collection: Pubkey,
    pub nft_mint: Pubkey,
    pub borrower: Pubkey,
    pub principal: u64,
    pub accrued_interest: u64,
    /// Pinned from the risk tier at first borrow
    pub interest_rate_bps: u16,
    pub last_accrual_ts: i64,
    pub bump: u8,
}

impl Loan {
    pub fn space() -> usize {
        8 +  // discriminator
        32 + // collection
        32 + // nft_mint
        32 + // borrower
        8 +  // principal
        8 +  // accrued_interest
        2 +  // interest_rate_bps
        8 +  // last_accrual_ts
        1 // bump
    }

    pub const PREFIX: &'static [u8] = b"loan";

    pub fn total_debt(&self) -> Result<u64> {
        self.principal
            .checked_add(self.accrued_interest)
            .ok_or_else(|| error!(VaultError::MathOverflow))
    }

    /// Folds interest for the elapsed wall-clock time into
    /// `accrued_interest` and advances the accrual timestamp.
    pub fn accrue(&mut self, now: i64) -> Result<()> {
        if self.principal > 0 {
            // A clock reading behind the stored timestamp accrues nothing.
            let elapsed = now.saturating_sub(self.last_accrual_ts).max(0) as u64;
            let due = interest_due(self.principal, self.interest_rate_bps, elapsed)?;
            self.accrued_interest = self
                .accrued_interest
                .checked_add(due)
                .ok_or(VaultError::MathOverflow)?;
        }
        self.last_accrual_ts = self.last_accrual_ts.max(now);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.principal = 0;
        self.accrued_interest = 0;
    }
}

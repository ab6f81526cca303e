use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

use crate::error::VaultError;
use crate::state::{CollectionConfig, Loan, PriceFeed};

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Debt position units minted per whole SOL of principal.
pub const DPO_EXCHANGE_RATE: u64 = 1_000;

/// Simple interest owed on `principal` over `elapsed_seconds`.
pub fn interest_due(principal: u64, rate_bps: u16, elapsed_seconds: u64) -> Result<u64> {
    let owed = (principal as u128)
        .checked_mul(rate_bps as u128)
        .ok_or(VaultError::MathOverflow)?
        .checked_mul(elapsed_seconds as u128)
        .ok_or(VaultError::MathOverflow)?
        .checked_div(10_000u128 * SECONDS_PER_YEAR as u128)
        .ok_or(VaultError::MathOverflow)?;
    u64::try_from(owed).map_err(|_| error!(VaultError::MathOverflow))
}

/// Lamports borrowable against `floor_price` at `max_ltv` percent.
pub fn borrow_capacity(floor_price: u64, max_ltv: u8) -> Result<u64> {
    let capacity = (floor_price as u128)
        .checked_mul(max_ltv as u128)
        .ok_or(VaultError::MathOverflow)?
        / 100;
    u64::try_from(capacity).map_err(|_| error!(VaultError::MathOverflow))
}

/// Current loan-to-value in basis points. Debt against a zero valuation
/// reads as infinitely leveraged, which makes it liquidatable.
pub fn ltv_bps(debt: u64, value: u64) -> u64 {
    if value == 0 {
        return if debt > 0 { u64::MAX } else { 0 };
    }
    let ratio = (debt as u128) * 10_000 / (value as u128);
    u64::try_from(ratio).unwrap_or(u64::MAX)
}

/// Gate for loan growth: returns the new total debt, or fails when it
/// would exceed the borrow capacity.
pub fn checked_borrow(total_debt: u64, amount: u64, capacity: u64) -> Result<u64> {
    let new_debt = total_debt
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;
    require!(new_debt <= capacity, VaultError::ExceedsMaxLTV);
    Ok(new_debt)
}

/// Debt position units for a lamport disbursement at the fixed rate.
/// Truncating: any lamport residue below one unit's worth (1000 units
/// per SOL, so 0.000001 SOL) is disbursed to the borrower but never
/// represented in DPO supply.
pub fn dpo_units(amount: u64) -> Result<u64> {
    let units = (amount as u128)
        .checked_mul(DPO_EXCHANGE_RATE as u128)
        .ok_or(VaultError::MathOverflow)?
        / LAMPORTS_PER_SOL as u128;
    u64::try_from(units).map_err(|_| error!(VaultError::MathOverflow))
}

/// Point-in-time view of one position, shared by handlers, tests, and
/// off-chain readers evaluating the same accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSummary {
    pub max_borrow: u64,
    pub total_debt: u64,
    pub current_ltv_bps: u64,
    pub has_loan: bool,
}

pub fn user_position(
    loan: &Loan,
    collection: &CollectionConfig,
    feed: &PriceFeed,
) -> Result<PositionSummary> {
    let max_ltv = collection.effective_max_ltv(feed.utility_score)?;
    let capacity = borrow_capacity(feed.floor_price, max_ltv)?;
    let total_debt = loan.total_debt()?;
    Ok(PositionSummary {
        max_borrow: capacity.saturating_sub(total_debt),
        total_debt,
        current_ltv_bps: ltv_bps(total_debt, feed.floor_price),
        has_loan: total_debt > 0,
    })
}

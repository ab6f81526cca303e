use anchor_lang::prelude::*;

use crate::error::DpoError;

/// Lamport cost of `amount` units at `price_per_unit` lamports each.
pub fn order_cost(amount: u64, price_per_unit: u64) -> Result<u64> {
    let cost = (amount as u128)
        .checked_mul(price_per_unit as u128)
        .ok_or(DpoError::MathOverflow)?;
    u64::try_from(cost).map_err(|_| error!(DpoError::MathOverflow))
}

pub fn fee_from_basis_points(amount: u64, basis_points: u16) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(basis_points as u128)
        .ok_or(DpoError::MathOverflow)?
        .checked_div(10_000)
        .ok_or(DpoError::MathOverflow)?;
    u64::try_from(fee).map_err(|_| error!(DpoError::MathOverflow))
}

use crate::error::VaultError;
use anchor_lang::prelude::*;

/// Risk parameters for one tier. Percentages are whole points, rates
/// are basis points per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskParams {
    pub max_ltv: u8,
    pub liquidation_threshold: u8,
    pub interest_rate_bps: u16,
}

/// Spread between the effective max LTV and the liquidation threshold,
/// so a fresh borrow is never instantly liquidatable.
pub const LTV_SAFETY_GAP: u8 = 5;

/// Largest LTV bonus a high utility score can earn.
pub const MAX_UTILITY_BONUS: u8 = 10;

const TIERS: [RiskParams; 5] = [
    RiskParams { max_ltv: 70, liquidation_threshold: 80, interest_rate_bps: 500 },
    RiskParams { max_ltv: 65, liquidation_threshold: 75, interest_rate_bps: 800 },
    RiskParams { max_ltv: 55, liquidation_threshold: 65, interest_rate_bps: 1200 },
    RiskParams { max_ltv: 45, liquidation_threshold: 55, interest_rate_bps: 1800 },
    RiskParams { max_ltv: 35, liquidation_threshold: 45, interest_rate_bps: 2500 },
];

impl RiskParams {
    /// Tiers are numbered 1 (blue chip) through 5 (speculative).
    pub fn for_tier(tier: u8) -> Result<Self> {
        match tier {
            1..=5 => Ok(TIERS[tier as usize - 1]),
            _ => err!(VaultError::InvalidRiskTier),
        }
    }

    /// Extra LTV points for in-game utility. Scores of 70 and below earn
    /// nothing; above that, one point per three score points, capped.
    pub fn utility_bonus(utility_score: u8) -> u8 {
        if utility_score > 70 {
            ((utility_score - 70) / 3).min(MAX_UTILITY_BONUS)
        } else {
            0
        }
    }
}

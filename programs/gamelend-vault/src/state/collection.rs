use anchor_lang::prelude::*;

use crate::state::risk::{RiskParams, LTV_SAFETY_GAP};

pub const MAX_GAME_CATEGORY_LEN: usize = 32;

/// Allow-list entry and risk configuration for one verified collection.
#[account]
pub struct CollectionConfig {
    pub collection: Pubkey,
    pub supported: bool,
    pub risk_tier: u8,
    pub game_category: String,
    /// Percent override, 0 = use the tier value
    pub max_ltv_override: u8,
    /// Percent override, 0 = use the tier value
    pub liquidation_threshold_override: u8,
    pub bump: u8,
}

impl CollectionConfig {
    pub fn space() -> usize {
        8 +  // discriminator
        32 + // collection
        1 +  // supported
        1 +  // risk_tier
        4 + MAX_GAME_CATEGORY_LEN + // game_category
        1 +  // max_ltv_override
        1 +  // liquidation_threshold_override
        1 // bump
    }

    pub const PREFIX: &'static [u8] = b"collection";

    /// Tier parameters with any admin overrides applied.
    pub fn risk_params(&self) -> Result<RiskParams> {
        let mut params = RiskParams::for_tier(self.risk_tier)?;
        if self.max_ltv_override > 0 {
            params.max_ltv = self.max_ltv_override;
        }
        if self.liquidation_threshold_override > 0 {
            params.liquidation_threshold = self.liquidation_threshold_override;
        }
        Ok(params)
    }

    /// Max LTV in percent after the utility bonus, kept a safety gap
    /// below the liquidation threshold.
    pub fn effective_max_ltv(&self, utility_score: u8) -> Result<u8> {
        let params = self.risk_params()?;
        let boosted = params
            .max_ltv
            .saturating_add(RiskParams::utility_bonus(utility_score));
        Ok(boosted.min(params.liquidation_threshold.saturating_sub(LTV_SAFETY_GAP)))
    }
}

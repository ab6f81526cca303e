use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Not the owner of this token account")]
    NotOwner,
    #[msg("Not your NFT")]
    NotYourNFT,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Collection is not supported")]
    UnsupportedCollection,
    #[msg("Metadata does not carry the expected verified collection")]
    InvalidCollection,
    #[msg("Exceeds max LTV")]
    ExceedsMaxLTV,
    #[msg("Loan has outstanding debt")]
    OutstandingDebt,
    #[msg("Position is below the liquidation threshold")]
    BelowLiquidationThreshold,
    #[msg("Treasury cannot cover the disbursement")]
    InsufficientLiquidity,
    #[msg("Payment does not cover the amount due")]
    InsufficientPayment,
    #[msg("No active loan")]
    NoActiveLoan,
    #[msg("No active deposit")]
    NoActiveDeposit,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid risk tier")]
    InvalidRiskTier,
    #[msg("Utility score must be between 1 and 100")]
    InvalidUtilityScore,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}

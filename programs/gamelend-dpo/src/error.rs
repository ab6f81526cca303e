use anchor_lang::prelude::*;

#[error_code]
pub enum DpoError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid price")]
    InvalidPrice,
    #[msg("Invalid fee")]
    InvalidFee,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Bid price below ask")]
    PriceTooLow,
    #[msg("No supply outstanding for this position")]
    NoSupply,
    #[msg("Numerical overflow")]
    MathOverflow,
    #[msg("Sender and recipient are the same account")]
    SelfTrade,
}

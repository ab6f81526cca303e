use anchor_lang::prelude::*;

use crate::error::DpoError;
use crate::state::DpoConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        init,
        payer = authority,
        seeds = [DpoConfig::PREFIX],
        bump,
        space = DpoConfig::space(),
    )]
    pub config: Account<'info, DpoConfig>,
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>, trade_fee_bps: u16) -> Result<()> {
    require!(
        trade_fee_bps <= DpoConfig::MAX_TRADE_FEE_BPS,
        DpoError::InvalidFee
    );

    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.minter = Pubkey::default();
    config.fee_collector = ctx.accounts.authority.key();
    config.trade_fee_bps = trade_fee_bps;
    config.bump = ctx.bumps.config;

    Ok(())
}

#[derive(Accounts)]
pub struct AuthorizeMinter<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [DpoConfig::PREFIX],
        bump = config.bump,
        constraint = config.authority == authority.key() @ DpoError::Unauthorized,
    )]
    pub config: Account<'info, DpoConfig>,
}

/// Grants a single account (the vault config PDA) the right to mint
/// position tokens for any NFT.
pub fn handle_authorize_minter(ctx: Context<AuthorizeMinter>, minter: Pubkey) -> Result<()> {
    ctx.accounts.config.minter = minter;
    msg!("authorized minter {}", minter);
    Ok(())
}

pub fn handle_set_fee_collector(
    ctx: Context<AuthorizeMinter>,
    fee_collector: Pubkey,
) -> Result<()> {
    ctx.accounts.config.fee_collector = fee_collector;
    Ok(())
}

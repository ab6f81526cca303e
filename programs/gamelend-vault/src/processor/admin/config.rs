use anchor_lang::prelude::*;

use crate::error::VaultError;
use crate::state::VaultConfig;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [VaultConfig::PREFIX],
        bump = config.bump,
        constraint = config.authority == authority.key() @ VaultError::Unauthorized,
    )]
    pub config: Account<'info, VaultConfig>,
}

pub fn handle_set_oracle_authority(
    ctx: Context<UpdateConfig>,
    oracle_authority: Pubkey,
) -> Result<()> {
    ctx.accounts.config.oracle_authority = oracle_authority;
    Ok(())
}

pub fn handle_set_dpo_program(ctx: Context<UpdateConfig>, dpo_program: Pubkey) -> Result<()> {
    ctx.accounts.config.dpo_program = dpo_program;
    Ok(())
}

use anchor_lang::prelude::*;

use crate::state::{VaultConfig, TREASURY_PREFIX};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        init,
        payer = authority,
        seeds = [VaultConfig::PREFIX],
        bump,
        space = VaultConfig::space(),
    )]
    pub config: Account<'info, VaultConfig>,
    /// System-owned PDA holding disbursement liquidity
    #[account(seeds = [TREASURY_PREFIX], bump)]
    pub treasury: SystemAccount<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>, oracle_authority: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.authority = ctx.accounts.authority.key();
    config.oracle_authority = oracle_authority;
    // Wired up via set_dpo_program once the token program is initialized
    config.dpo_program = Pubkey::default();
    config.treasury_bump = ctx.bumps.treasury;
    config.bump = ctx.bumps.config;

    Ok(())
}

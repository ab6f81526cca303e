use anchor_lang::prelude::*;

use crate::error::DpoError;
use crate::events::TokensMinted;
use crate::state::{DpoConfig, Holding, PositionSupply};

#[derive(Accounts)]
#[instruction(nft_mint: Pubkey, collection: Pubkey)]
pub struct MintPositionTokens<'info> {
    /// The authorized minter (the vault config PDA, signing via CPI)
    pub minter: Signer<'info>,
    #[account(
        seeds = [DpoConfig::PREFIX],
        bump = config.bump,
        constraint = config.minter == minter.key() @ DpoError::Unauthorized,
    )]
    pub config: Account<'info, DpoConfig>,
    #[account(
        init_if_needed,
        payer = payer,
        seeds = [PositionSupply::PREFIX, nft_mint.as_ref()],
        bump,
        space = PositionSupply::space(),
    )]
    pub supply: Account<'info, PositionSupply>,
    #[account(
        init_if_needed,
        payer = payer,
        seeds = [Holding::PREFIX, nft_mint.as_ref(), recipient.key().as_ref()],
        bump,
        space = Holding::space(),
    )]
    pub holding: Account<'info, Holding>,
    /// CHECK: receives the minted units; any account may hold a balance
    pub recipient: UncheckedAccount<'info>,
    #[account(mut)]
    pub payer: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handle_mint_position_tokens(
    ctx: Context<MintPositionTokens>,
    nft_mint: Pubkey,
    collection: Pubkey,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, DpoError::InvalidAmount);

    let supply = &mut ctx.accounts.supply;
    let holding = &mut ctx.accounts.holding;

    if supply.nft_mint == Pubkey::default() {
        supply.collection = collection;
        supply.nft_mint = nft_mint;
        supply.bump = ctx.bumps.supply;
    }
    if holding.owner == Pubkey::default() {
        holding.nft_mint = nft_mint;
        holding.owner = ctx.accounts.recipient.key();
        holding.bump = ctx.bumps.holding;
    }

    // Settle before the balance changes so prior distributions stay
    // with the holders they were snapshotted for.
    holding.settle(supply)?;
    holding.credit(amount)?;
    supply.total_supply = supply
        .total_supply
        .checked_add(amount)
        .ok_or(DpoError::MathOverflow)?;

    emit!(TokensMinted {
        nft_mint,
        recipient: ctx.accounts.recipient.key(),
        amount,
        total_supply: supply.total_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

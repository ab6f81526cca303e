use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer};

use crate::error::VaultError;
use crate::events::NftWithdrawn;
use crate::state::{Deposit, Loan, ESCROW_PREFIX};

#[derive(Accounts)]
pub struct WithdrawNft<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    pub nft_mint: Account<'info, Mint>,
    #[account(
        mut,
        close = owner,
        seeds = [Deposit::PREFIX, deposit.collection.as_ref(), nft_mint.key().as_ref()],
        bump = deposit.bump,
        constraint = deposit.owner == owner.key() @ VaultError::NotYourNFT,
        constraint = deposit.is_active @ VaultError::NoActiveDeposit,
    )]
    pub deposit: Account<'info, Deposit>,
    #[account(
        mut,
        close = owner,
        seeds = [Loan::PREFIX, deposit.collection.as_ref(), nft_mint.key().as_ref()],
        bump = loan.bump,
        constraint = loan.principal == 0 @ VaultError::OutstandingDebt,
    )]
    pub loan: Account<'info, Loan>,
    #[account(
        mut,
        seeds = [ESCROW_PREFIX, nft_mint.key().as_ref()],
        bump,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = owner_token_account.owner == owner.key() @ VaultError::NotOwner,
        constraint = owner_token_account.mint == nft_mint.key() @ VaultError::NotOwner,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

pub fn handle_withdraw_nft(ctx: Context<WithdrawNft>) -> Result<()> {
    let nft_mint = ctx.accounts.nft_mint.key();
    let escrow_bump = ctx.bumps.escrow_token_account;
    let signer_seeds: &[&[&[u8]]] = &[&[ESCROW_PREFIX, nft_mint.as_ref(), &[escrow_bump]]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.escrow_token_account.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                authority: ctx.accounts.escrow_token_account.to_account_info(),
            },
            signer_seeds,
        ),
        1,
    )?;

    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.escrow_token_account.to_account_info(),
            destination: ctx.accounts.owner.to_account_info(),
            authority: ctx.accounts.escrow_token_account.to_account_info(),
        },
        signer_seeds,
    ))?;

    emit!(NftWithdrawn {
        collection: ctx.accounts.deposit.collection,
        nft_mint,
        owner: ctx.accounts.owner.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

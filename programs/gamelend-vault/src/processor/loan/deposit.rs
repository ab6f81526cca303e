use anchor_lang::prelude::*;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VaultError;
use crate::events::NftDeposited;
use crate::state::{CollectionConfig, Deposit, Loan, ESCROW_PREFIX};

#[derive(Accounts)]
pub struct DepositNft<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,
    #[account(
        seeds = [CollectionConfig::PREFIX, collection_config.collection.as_ref()],
        bump = collection_config.bump,
        constraint = collection_config.supported @ VaultError::UnsupportedCollection,
    )]
    pub collection_config: Account<'info, CollectionConfig>,
    #[account(
        constraint = nft_mint.supply == 1 && nft_mint.decimals == 0 @ VaultError::InvalidCollection,
    )]
    pub nft_mint: Account<'info, Mint>,
    #[account(
        seeds = [b"metadata", metadata_program.key().as_ref(), nft_mint.key().as_ref()],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub metadata: Account<'info, MetadataAccount>,
    #[account(
        mut,
        constraint = depositor_token_account.owner == depositor.key() @ VaultError::NotOwner,
        constraint = depositor_token_account.mint == nft_mint.key() @ VaultError::NotOwner,
        constraint = depositor_token_account.amount == 1 @ VaultError::NotOwner,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,
    #[account(
        init,
        payer = depositor,
        seeds = [Deposit::PREFIX, collection_config.collection.as_ref(), nft_mint.key().as_ref()],
        bump,
        space = Deposit::space(),
    )]
    pub deposit: Account<'info, Deposit>,
    #[account(
        init,
        payer = depositor,
        seeds = [Loan::PREFIX, collection_config.collection.as_ref(), nft_mint.key().as_ref()],
        bump,
        space = Loan::space(),
    )]
    pub loan: Account<'info, Loan>,
    #[account(
        init,
        payer = depositor,
        seeds = [ESCROW_PREFIX, nft_mint.key().as_ref()],
        bump,
        token::mint = nft_mint,
        token::authority = escrow_token_account,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,
    pub metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// Escrows the NFT and opens a zeroed loan ledger for it. The deposit
/// PDA enforces a single active deposit per NFT; after a withdraw or
/// liquidation closes it, the NFT can be deposited again.
pub fn handle_deposit_nft(ctx: Context<DepositNft>) -> Result<()> {
    let collection = ctx.accounts.collection_config.collection;

    // Membership is proven by the verified collection on the metadata.
    match &ctx.accounts.metadata.collection {
        Some(c) if c.verified && c.key == collection => {}
        _ => return err!(VaultError::InvalidCollection),
    }

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.escrow_token_account.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        1,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let nft_mint = ctx.accounts.nft_mint.key();
    let owner = ctx.accounts.depositor.key();

    let deposit = &mut ctx.accounts.deposit;
    deposit.collection = collection;
    deposit.nft_mint = nft_mint;
    deposit.owner = owner;
    deposit.is_active = true;
    deposit.created_at = now;
    deposit.bump = ctx.bumps.deposit;

    let loan = &mut ctx.accounts.loan;
    loan.collection = collection;
    loan.nft_mint = nft_mint;
    loan.borrower = owner;
    loan.principal = 0;
    loan.accrued_interest = 0;
    loan.interest_rate_bps = 0;
    loan.last_accrual_ts = now;
    loan.bump = ctx.bumps.loan;

    emit!(NftDeposited {
        collection,
        nft_mint,
        owner,
        timestamp: now,
    });

    Ok(())
}

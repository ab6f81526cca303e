use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer};

use crate::error::VaultError;
use crate::events::NftLiquidated;
use crate::state::{CollectionConfig, Deposit, Loan, PriceFeed, VaultConfig, ESCROW_PREFIX};
use crate::utils::ltv_bps;

#[derive(Accounts)]
pub struct Liquidate<'info> {
    #[account(mut)]
    pub liquidator: Signer<'info>,
    #[account(
        seeds = [VaultConfig::PREFIX],
        bump = config.bump,
        constraint = config.authority == liquidator.key() @ VaultError::Unauthorized,
    )]
    pub config: Account<'info, VaultConfig>,
    #[account(
        seeds = [CollectionConfig::PREFIX, deposit.collection.as_ref()],
        bump = collection_config.bump,
    )]
    pub collection_config: Account<'info, CollectionConfig>,
    #[account(
        seeds = [PriceFeed::PREFIX, deposit.collection.as_ref()],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,
    /// CHECK: receives closed-account rent; must match the deposit record
    #[account(mut, address = deposit.owner @ VaultError::NotYourNFT)]
    pub owner: UncheckedAccount<'info>,
    pub nft_mint: Account<'info, Mint>,
    #[account(
        mut,
        close = owner,
        seeds = [Deposit::PREFIX, deposit.collection.as_ref(), nft_mint.key().as_ref()],
        bump = deposit.bump,
        constraint = deposit.is_active @ VaultError::NoActiveDeposit,
    )]
    pub deposit: Account<'info, Deposit>,
    #[account(
        mut,
        close = owner,
        seeds = [Loan::PREFIX, deposit.collection.as_ref(), nft_mint.key().as_ref()],
        bump = loan.bump,
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
        constraint = liquidator_token_account.owner == liquidator.key() @ VaultError::NotOwner,
        constraint = liquidator_token_account.mint == nft_mint.key() @ VaultError::NotOwner,
    )]
    pub liquidator_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

/// Seizes collateral once the position crosses the liquidation
/// threshold. Debt against a zero floor price is always liquidatable.
pub fn handle_liquidate(ctx: Context<Liquidate>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let loan = &mut ctx.accounts.loan;
    loan.accrue(now)?;
    let debt = loan.total_debt()?;
    require!(debt > 0, VaultError::NoActiveLoan);

    let params = ctx.accounts.collection_config.risk_params()?;
    let current_ltv = ltv_bps(debt, ctx.accounts.price_feed.floor_price);
    let threshold_bps = params.liquidation_threshold as u64 * 100;
    msg!("debt: {}, LTV: {} bps, threshold: {} bps", debt, current_ltv, threshold_bps);
    require!(
        current_ltv >= threshold_bps,
        VaultError::BelowLiquidationThreshold
    );

    loan.clear();

    let nft_mint = ctx.accounts.nft_mint.key();
    let escrow_bump = ctx.bumps.escrow_token_account;
    let signer_seeds: &[&[&[u8]]] = &[&[ESCROW_PREFIX, nft_mint.as_ref(), &[escrow_bump]]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.escrow_token_account.to_account_info(),
                to: ctx.accounts.liquidator_token_account.to_account_info(),
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

    emit!(NftLiquidated {
        collection: ctx.accounts.deposit.collection,
        nft_mint,
        borrower: ctx.accounts.deposit.owner,
        liquidator: ctx.accounts.liquidator.key(),
        debt,
        ltv_bps: current_ltv,
        timestamp: now,
    });

    Ok(())
}

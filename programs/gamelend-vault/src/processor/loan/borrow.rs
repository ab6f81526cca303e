use anchor_lang::{
    prelude::*,
    solana_program::{program::invoke_signed, system_instruction},
};

use crate::error::VaultError;
use crate::events::LoanOriginated;
use crate::state::{CollectionConfig, Deposit, Loan, PriceFeed, VaultConfig, TREASURY_PREFIX};
use crate::utils::{borrow_capacity, checked_borrow, dpo_units};

#[derive(Accounts)]
pub struct Borrow<'info> {
    #[account(mut)]
    pub borrower: Signer<'info>,
    #[account(
        seeds = [VaultConfig::PREFIX],
        bump = config.bump,
        constraint = config.dpo_program == dpo_program.key() @ VaultError::Unauthorized,
    )]
    pub config: Account<'info, VaultConfig>,
    #[account(
        seeds = [CollectionConfig::PREFIX, deposit.collection.as_ref()],
        bump = collection_config.bump,
        constraint = collection_config.supported @ VaultError::UnsupportedCollection,
    )]
    pub collection_config: Account<'info, CollectionConfig>,
    #[account(
        seeds = [PriceFeed::PREFIX, deposit.collection.as_ref()],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,
    #[account(
        seeds = [Deposit::PREFIX, deposit.collection.as_ref(), deposit.nft_mint.as_ref()],
        bump = deposit.bump,
        constraint = deposit.owner == borrower.key() @ VaultError::NotYourNFT,
        constraint = deposit.is_active @ VaultError::NoActiveDeposit,
    )]
    pub deposit: Account<'info, Deposit>,
    #[account(
        mut,
        seeds = [Loan::PREFIX, deposit.collection.as_ref(), deposit.nft_mint.as_ref()],
        bump = loan.bump,
    )]
    pub loan: Account<'info, Loan>,
    #[account(mut, seeds = [TREASURY_PREFIX], bump = config.treasury_bump)]
    pub treasury: SystemAccount<'info>,
    /// CHECK: validated by the token program against its own seeds
    pub dpo_config: UncheckedAccount<'info>,
    /// CHECK: created by the token program on first mint
    #[account(mut)]
    pub dpo_supply: UncheckedAccount<'info>,
    /// CHECK: created by the token program on first mint
    #[account(mut)]
    pub dpo_holding: UncheckedAccount<'info>,
    pub dpo_program: Program<'info, gamelend_dpo::program::GamelendDpo>,
    pub system_program: Program<'info, System>,
}

/// Disburses lamports from the treasury against the deposited NFT and
/// mints debt position units to the borrower at the fixed rate.
pub fn handle_borrow(ctx: Context<Borrow>, amount: u64) -> Result<()> {
    require!(amount > 0, VaultError::InvalidAmount);

    let now = Clock::get()?.unix_timestamp;
    let price_feed = &ctx.accounts.price_feed;
    let collection_config = &ctx.accounts.collection_config;

    let loan = &mut ctx.accounts.loan;
    loan.accrue(now)?;

    let max_ltv = collection_config.effective_max_ltv(price_feed.utility_score)?;
    let capacity = borrow_capacity(price_feed.floor_price, max_ltv)?;
    msg!(
        "floor: {}, effective max LTV: {}%, capacity: {}",
        price_feed.floor_price,
        max_ltv,
        capacity
    );
    checked_borrow(loan.total_debt()?, amount, capacity)?;

    let units = dpo_units(amount)?;
    require!(units > 0, VaultError::InvalidAmount);

    // Rate is pinned when the position goes from zero to nonzero debt.
    if loan.principal == 0 {
        loan.interest_rate_bps = collection_config.risk_params()?.interest_rate_bps;
    }
    loan.principal = loan
        .principal
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;

    // Disburse, keeping the treasury rent-exempt.
    let treasury = &ctx.accounts.treasury;
    let rent_floor = Rent::get()?.minimum_balance(0);
    require!(
        treasury.lamports().saturating_sub(rent_floor) >= amount,
        VaultError::InsufficientLiquidity
    );
    invoke_signed(
        &system_instruction::transfer(&treasury.key(), &ctx.accounts.borrower.key(), amount),
        &[
            treasury.to_account_info(),
            ctx.accounts.borrower.to_account_info(),
        ],
        &[&[TREASURY_PREFIX, &[ctx.accounts.config.treasury_bump]]],
    )?;

    // The vault config PDA is the authorized minter.
    let minter_seeds: &[&[&[u8]]] = &[&[VaultConfig::PREFIX, &[ctx.accounts.config.bump]]];
    gamelend_dpo::cpi::mint_position_tokens(
        CpiContext::new_with_signer(
            ctx.accounts.dpo_program.to_account_info(),
            gamelend_dpo::cpi::accounts::MintPositionTokens {
                minter: ctx.accounts.config.to_account_info(),
                config: ctx.accounts.dpo_config.to_account_info(),
                supply: ctx.accounts.dpo_supply.to_account_info(),
                holding: ctx.accounts.dpo_holding.to_account_info(),
                recipient: ctx.accounts.borrower.to_account_info(),
                payer: ctx.accounts.borrower.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
            minter_seeds,
        ),
        ctx.accounts.deposit.nft_mint,
        ctx.accounts.deposit.collection,
        units,
    )?;

    emit!(LoanOriginated {
        collection: ctx.accounts.deposit.collection,
        nft_mint: ctx.accounts.deposit.nft_mint,
        borrower: ctx.accounts.borrower.key(),
        amount,
        principal: ctx.accounts.loan.principal,
        interest_rate_bps: ctx.accounts.loan.interest_rate_bps,
        dpo_units: units,
        timestamp: now,
    });

    Ok(())
}

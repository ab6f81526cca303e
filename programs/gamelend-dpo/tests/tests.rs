use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use gamelend_dpo::state::{Holding, PositionSupply, SellOrder};
use solana_program_test::*;
use solana_sdk::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};

// `entry` pins the slice and account lifetimes together; the runtime
// hands the processor two distinct ones, so unify them here.
fn dpo_entry<'a, 'b>(
    program_id: &Pubkey,
    accounts: &'a [AccountInfo<'b>],
    data: &[u8],
) -> ProgramResult {
    let accounts = unsafe {
        std::mem::transmute::<&'a [AccountInfo<'b>], &'a [AccountInfo<'a>]>(accounts)
    };
    gamelend_dpo::entry(program_id, accounts, data)
}

fn config_pda() -> Pubkey {
    Pubkey::find_program_address(&[b"config"], &gamelend_dpo::id()).0
}

fn supply_pda(nft_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[b"supply", nft_mint.as_ref()], &gamelend_dpo::id()).0
}

fn holding_pda(nft_mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"holding", nft_mint.as_ref(), owner.as_ref()],
        &gamelend_dpo::id(),
    )
    .0
}

fn order_pda(nft_mint: &Pubkey, seller: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"sell_order", nft_mint.as_ref(), seller.as_ref()],
        &gamelend_dpo::id(),
    )
    .0
}

fn ix(accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
    Instruction {
        program_id: gamelend_dpo::id(),
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    }
}

async fn send(
    banks: &mut BanksClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
) -> Result<(), BanksClientError> {
    // A blockhash strictly newer than the bank's current one, so repeated
    // identical instructions never reuse a signature and hit the status cache.
    let latest = banks.get_latest_blockhash().await.unwrap();
    let blockhash = banks.get_new_latest_blockhash(&latest).await.unwrap();
    let mut all_signers = vec![payer];
    all_signers.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &all_signers,
        blockhash,
    );
    banks.process_transaction(tx).await
}

async fn read<T: AccountDeserialize>(banks: &mut BanksClient, address: Pubkey) -> T {
    let account = banks.get_account(address).await.unwrap().unwrap();
    T::try_deserialize(&mut account.data.as_slice()).unwrap()
}

async fn lamports(banks: &mut BanksClient, address: Pubkey) -> u64 {
    banks
        .get_account(address)
        .await
        .unwrap()
        .map(|a| a.lamports)
        .unwrap_or(0)
}

/// Initializes the program, authorizes `minter`, and mints `amount`
/// units of one position to `recipient`.
async fn setup_position(
    banks: &mut BanksClient,
    payer: &Keypair,
    minter: &Keypair,
    nft_mint: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
    trade_fee_bps: u16,
) {
    send(
        banks,
        payer,
        &[],
        &[
            ix(
                gamelend_dpo::accounts::Initialize {
                    authority: payer.pubkey(),
                    config: config_pda(),
                    system_program: system_program::id(),
                },
                gamelend_dpo::instruction::Initialize { trade_fee_bps },
            ),
            ix(
                gamelend_dpo::accounts::AuthorizeMinter {
                    authority: payer.pubkey(),
                    config: config_pda(),
                },
                gamelend_dpo::instruction::AuthorizeMinter {
                    minter: minter.pubkey(),
                },
            ),
        ],
    )
    .await
    .unwrap();

    send(
        banks,
        payer,
        &[minter],
        &[ix(
            gamelend_dpo::accounts::MintPositionTokens {
                minter: minter.pubkey(),
                config: config_pda(),
                supply: supply_pda(nft_mint),
                holding: holding_pda(nft_mint, recipient),
                recipient: *recipient,
                payer: payer.pubkey(),
                system_program: system_program::id(),
            },
            gamelend_dpo::instruction::MintPositionTokens {
                nft_mint: *nft_mint,
                collection: Pubkey::new_unique(),
                amount,
            },
        )],
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn mint_trade_and_interest_flow() {
    let test = ProgramTest::new("gamelend_dpo", gamelend_dpo::id(), processor!(dpo_entry));
    let (mut banks, payer, _) = test.start().await;

    let minter = Keypair::new();
    let borrower = Keypair::new();
    let lender = Keypair::new();
    let fee_collector = Pubkey::new_unique();
    let nft_mint = Pubkey::new_unique();

    send(
        &mut banks,
        &payer,
        &[],
        &[
            system_instruction::transfer(&payer.pubkey(), &borrower.pubkey(), 1_000_000_000),
            system_instruction::transfer(&payer.pubkey(), &lender.pubkey(), 3_000_000_000),
        ],
    )
    .await
    .unwrap();

    // 1% trade fee, 5000 units minted to the borrower.
    setup_position(
        &mut banks,
        &payer,
        &minter,
        &nft_mint,
        &borrower.pubkey(),
        5_000,
        100,
    )
    .await;
    send(
        &mut banks,
        &payer,
        &[],
        &[ix(
            gamelend_dpo::accounts::AuthorizeMinter {
                authority: payer.pubkey(),
                config: config_pda(),
            },
            gamelend_dpo::instruction::SetFeeCollector { fee_collector },
        )],
    )
    .await
    .unwrap();

    let supply: PositionSupply = read(&mut banks, supply_pda(&nft_mint)).await;
    assert_eq!(supply.total_supply, 5_000);
    let holding: Holding = read(&mut banks, holding_pda(&nft_mint, &borrower.pubkey())).await;
    assert_eq!(holding.amount, 5_000);

    // Borrower lists 1667 units at 0.001 SOL each.
    send(
        &mut banks,
        &payer,
        &[&borrower],
        &[ix(
            gamelend_dpo::accounts::PlaceSellOrder {
                seller: borrower.pubkey(),
                holding: holding_pda(&nft_mint, &borrower.pubkey()),
                order: order_pda(&nft_mint, &borrower.pubkey()),
                system_program: system_program::id(),
            },
            gamelend_dpo::instruction::PlaceSellOrder {
                amount: 1_667,
                price_per_unit: 1_000_000,
            },
        )],
    )
    .await
    .unwrap();

    let holding: Holding = read(&mut banks, holding_pda(&nft_mint, &borrower.pubkey())).await;
    assert_eq!(holding.locked_amount, 1_667);

    // Lender fills the whole order.
    let seller_before = lamports(&mut banks, borrower.pubkey()).await;
    send(
        &mut banks,
        &payer,
        &[&lender],
        &[ix(
            gamelend_dpo::accounts::PlaceBuyOrder {
                buyer: lender.pubkey(),
                seller: borrower.pubkey(),
                fee_collector,
                config: config_pda(),
                supply: supply_pda(&nft_mint),
                order: order_pda(&nft_mint, &borrower.pubkey()),
                seller_holding: holding_pda(&nft_mint, &borrower.pubkey()),
                buyer_holding: holding_pda(&nft_mint, &lender.pubkey()),
                system_program: system_program::id(),
            },
            gamelend_dpo::instruction::PlaceBuyOrder {
                amount: 1_667,
                price_per_unit: 1_000_000,
            },
        )],
    )
    .await
    .unwrap();

    let seller_holding: Holding =
        read(&mut banks, holding_pda(&nft_mint, &borrower.pubkey())).await;
    let buyer_holding: Holding = read(&mut banks, holding_pda(&nft_mint, &lender.pubkey())).await;
    assert_eq!(seller_holding.amount, 3_333);
    assert_eq!(seller_holding.locked_amount, 0);
    assert_eq!(buyer_holding.amount, 1_667);

    // Gross 1.667 SOL, 1% fee; the filled order closes back to the
    // seller, so the seller also recovers its rent.
    let rent = banks.get_rent().await.unwrap();
    let order_rent = rent.minimum_balance(SellOrder::space());
    let seller_after = lamports(&mut banks, borrower.pubkey()).await;
    assert_eq!(seller_after - seller_before, 1_650_330_000 + order_rent);
    assert_eq!(lamports(&mut banks, fee_collector).await, 16_670_000);
    assert!(banks
        .get_account(order_pda(&nft_mint, &borrower.pubkey()))
        .await
        .unwrap()
        .is_none());

    // 0.1 SOL of interest splits 3333/1667 across the holders.
    send(
        &mut banks,
        &payer,
        &[],
        &[ix(
            gamelend_dpo::accounts::DistributeInterest {
                payer: payer.pubkey(),
                supply: supply_pda(&nft_mint),
                system_program: system_program::id(),
            },
            gamelend_dpo::instruction::DistributeInterest {
                amount: 100_000_000,
            },
        )],
    )
    .await
    .unwrap();

    for (claimer, expected) in [(&borrower, 66_660_000u64), (&lender, 33_340_000u64)] {
        let before = lamports(&mut banks, claimer.pubkey()).await;
        send(
            &mut banks,
            &payer,
            &[claimer],
            &[ix(
                gamelend_dpo::accounts::ClaimInterest {
                    claimer: claimer.pubkey(),
                    supply: supply_pda(&nft_mint),
                    holding: holding_pda(&nft_mint, &claimer.pubkey()),
                },
                gamelend_dpo::instruction::ClaimInterest {},
            )],
        )
        .await
        .unwrap();
        let after = lamports(&mut banks, claimer.pubkey()).await;
        assert_eq!(after - before, expected);
    }
}

#[tokio::test]
async fn self_transfer_is_rejected() {
    let test = ProgramTest::new("gamelend_dpo", gamelend_dpo::id(), processor!(dpo_entry));
    let (mut banks, payer, _) = test.start().await;

    let minter = Keypair::new();
    let holder = Keypair::new();
    let nft_mint = Pubkey::new_unique();

    setup_position(
        &mut banks,
        &payer,
        &minter,
        &nft_mint,
        &holder.pubkey(),
        1_000,
        0,
    )
    .await;

    // Sender and recipient resolving to the same holding PDA would load
    // two copies of one account, and the write-back of the credited copy
    // would erase the debit. The instruction must refuse the aliasing.
    let err = send(
        &mut banks,
        &payer,
        &[&holder],
        &[ix(
            gamelend_dpo::accounts::TransferPositionTokens {
                owner: holder.pubkey(),
                supply: supply_pda(&nft_mint),
                from: holding_pda(&nft_mint, &holder.pubkey()),
                to: holding_pda(&nft_mint, &holder.pubkey()),
                recipient: holder.pubkey(),
                system_program: system_program::id(),
            },
            gamelend_dpo::instruction::TransferPositionTokens { amount: 400 },
        )],
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.unwrap(),
        TransactionError::InstructionError(0, InstructionError::Custom(6008))
    );

    // No inflation: balance and supply are untouched.
    let holding: Holding = read(&mut banks, holding_pda(&nft_mint, &holder.pubkey())).await;
    let supply: PositionSupply = read(&mut banks, supply_pda(&nft_mint)).await;
    assert_eq!(holding.amount, 1_000);
    assert_eq!(supply.total_supply, 1_000);
}

#[tokio::test]
async fn buying_your_own_order_is_rejected() {
    let test = ProgramTest::new("gamelend_dpo", gamelend_dpo::id(), processor!(dpo_entry));
    let (mut banks, payer, _) = test.start().await;

    let minter = Keypair::new();
    let holder = Keypair::new();
    let nft_mint = Pubkey::new_unique();

    setup_position(
        &mut banks,
        &payer,
        &minter,
        &nft_mint,
        &holder.pubkey(),
        1_000,
        0,
    )
    .await;
    send(
        &mut banks,
        &payer,
        &[],
        &[system_instruction::transfer(
            &payer.pubkey(),
            &holder.pubkey(),
            1_000_000_000,
        )],
    )
    .await
    .unwrap();

    send(
        &mut banks,
        &payer,
        &[&holder],
        &[ix(
            gamelend_dpo::accounts::PlaceSellOrder {
                seller: holder.pubkey(),
                holding: holding_pda(&nft_mint, &holder.pubkey()),
                order: order_pda(&nft_mint, &holder.pubkey()),
                system_program: system_program::id(),
            },
            gamelend_dpo::instruction::PlaceSellOrder {
                amount: 400,
                price_per_unit: 10,
            },
        )],
    )
    .await
    .unwrap();

    // Filling your own order aliases the seller and buyer holdings.
    let err = send(
        &mut banks,
        &payer,
        &[&holder],
        &[ix(
            gamelend_dpo::accounts::PlaceBuyOrder {
                buyer: holder.pubkey(),
                seller: holder.pubkey(),
                fee_collector: payer.pubkey(),
                config: config_pda(),
                supply: supply_pda(&nft_mint),
                order: order_pda(&nft_mint, &holder.pubkey()),
                seller_holding: holding_pda(&nft_mint, &holder.pubkey()),
                buyer_holding: holding_pda(&nft_mint, &holder.pubkey()),
                system_program: system_program::id(),
            },
            gamelend_dpo::instruction::PlaceBuyOrder {
                amount: 400,
                price_per_unit: 10,
            },
        )],
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.unwrap(),
        TransactionError::InstructionError(0, InstructionError::Custom(6008))
    );

    // Escrow and supply are untouched.
    let holding: Holding = read(&mut banks, holding_pda(&nft_mint, &holder.pubkey())).await;
    let supply: PositionSupply = read(&mut banks, supply_pda(&nft_mint)).await;
    assert_eq!(holding.amount, 1_000);
    assert_eq!(holding.locked_amount, 400);
    assert_eq!(supply.total_supply, 1_000);
}

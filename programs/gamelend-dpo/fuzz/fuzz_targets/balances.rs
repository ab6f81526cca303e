#![no_main]
use anchor_lang::prelude::Pubkey;
use arbitrary::Arbitrary;
use gamelend_dpo::state::{Holding, PositionSupply};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Mint { holder: u8, amount: u64 },
    Transfer { from: u8, to: u8, amount: u64 },
    Lock { holder: u8, amount: u64 },
    Unlock { holder: u8, amount: u64 },
    Distribute { amount: u32 },
}

const HOLDERS: usize = 4;

fuzz_target!(|ops: Vec<Op>| {
    let nft_mint = Pubkey::new_unique();
    let mut supply = PositionSupply {
        collection: Pubkey::new_unique(),
        nft_mint,
        total_supply: 0,
        interest_per_unit: 0,
        bump: 0,
    };
    let mut holders: Vec<Holding> = (0..HOLDERS)
        .map(|_| Holding {
            nft_mint,
            owner: Pubkey::new_unique(),
            amount: 0,
            locked_amount: 0,
            pending_interest: 0,
            interest_debt: 0,
            bump: 0,
        })
        .collect();

    for op in ops {
        match op {
            Op::Mint { holder, amount } => {
                let i = holder as usize % HOLDERS;
                if let Some(new_supply) = supply.total_supply.checked_add(amount) {
                    let h = &mut holders[i];
                    h.settle(&supply).unwrap();
                    h.credit(amount).unwrap();
                    supply.total_supply = new_supply;
                }
            }
            Op::Transfer { from, to, amount } => {
                let i = from as usize % HOLDERS;
                let j = to as usize % HOLDERS;
                if i != j && holders[i].free_amount() >= amount {
                    let (a, b) = if i < j {
                        let (l, r) = holders.split_at_mut(j);
                        (&mut l[i], &mut r[0])
                    } else {
                        let (l, r) = holders.split_at_mut(i);
                        (&mut r[0], &mut l[j])
                    };
                    a.settle(&supply).unwrap();
                    b.settle(&supply).unwrap();
                    a.debit(amount).unwrap();
                    b.credit(amount).unwrap();
                }
            }
            Op::Lock { holder, amount } => {
                let h = &mut holders[holder as usize % HOLDERS];
                if h.free_amount() >= amount {
                    h.lock(amount).unwrap();
                }
            }
            Op::Unlock { holder, amount } => {
                let h = &mut holders[holder as usize % HOLDERS];
                let release = h.locked_amount.min(amount);
                if release > 0 {
                    h.unlock(release).unwrap();
                }
            }
            Op::Distribute { amount } => {
                if supply.total_supply > 0 && amount > 0 {
                    supply.distribute(amount as u64).unwrap();
                }
            }
        }

        let held: u64 = holders.iter().map(|h| h.amount).sum();
        assert_eq!(held, supply.total_supply);
        for h in &holders {
            assert!(h.locked_amount <= h.amount);
            assert!(h.free_amount() == h.amount - h.locked_amount);
            assert!(h.interest_debt <= supply.interest_per_unit);
        }
    }
});

#![allow(dead_code)]

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::spl_token::native_mint;
use token_swap::constants::{SOL_USD_FEED_ID, USDC_USD_FEED_ID, USDT_USD_FEED_ID};
use pyth_solana_receiver_sdk::price_update::{PriceFeedMessage, VerificationLevel};
use token_swap::oracle::feed_id_from_hex;
use token_swap::*;

pub const ADMIN: Pubkey = Pubkey::new_from_array([1; 32]);
pub const USDC: Pubkey = Pubkey::new_from_array([2; 32]);
pub const USDT: Pubkey = Pubkey::new_from_array([3; 32]);
pub const MINT: Pubkey = Pubkey::new_from_array([4; 32]);
pub const BUYER: Pubkey = Pubkey::new_from_array([20; 32]);
pub const STRANGER: Pubkey = Pubkey::new_from_array([30; 32]);

pub const TOKEN_DECIMALS: u8 = 9;
pub const STABLE_DECIMALS: u8 = 6;
pub const NOW: i64 = 1_700_000_000;

pub fn token(amount: u64) -> u64 {
    amount * 10u64.pow(TOKEN_DECIMALS as u32)
}

pub fn sol(amount: u64) -> u64 {
    amount * LAMPORTS_PER_SOL
}

pub fn usd(amount: u64) -> u64 {
    amount * 10u64.pow(STABLE_DECIMALS as u32)
}

pub fn init_accounts() -> InitializeState {
    InitializeState {
        admin: ADMIN,
        stable_mint_a: USDC,
        stable_mint_b: USDT,
        mint: MINT,
    }
}

pub fn vault_accounts(kind: VaultKind) -> InitializeVault {
    let mint = match kind {
        VaultKind::Native => None,
        VaultKind::Project => Some(MintInfo { key: MINT, decimals: TOKEN_DECIMALS }),
        VaultKind::StableA => Some(MintInfo { key: USDC, decimals: STABLE_DECIMALS }),
        VaultKind::StableB => Some(MintInfo { key: USDT, decimals: STABLE_DECIMALS }),
    };
    InitializeVault {
        admin: ADMIN,
        kind,
        mint,
    }
}

/// Program with state and all four vaults in place and no balances
pub fn operational() -> TokenSwap<InMemoryLedger> {
    let mut swap = TokenSwap::new(InMemoryLedger::new(), Some(ADMIN));
    swap.initialize_state(init_accounts()).unwrap();
    for kind in VaultKind::ALL {
        swap.initialize_vault(vault_accounts(kind)).unwrap();
    }
    swap
}

/// Operational program whose inventory holds `amount` project tokens
pub fn stocked(amount: u64) -> TokenSwap<InMemoryLedger> {
    let mut swap = operational();
    fund_token(&mut swap, ADMIN, MINT, amount);
    swap.deposit(Deposit { admin: ADMIN }, amount).unwrap();
    swap
}

pub fn ata(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

pub fn fund_sol(swap: &mut TokenSwap<InMemoryLedger>, wallet: Pubkey, lamports: u64) {
    swap.ledger_mut()
        .mint_to(wallet, native_mint::ID, wallet, lamports)
        .unwrap();
}

/// Credits `owner`'s associated account for `mint`
pub fn fund_token(swap: &mut TokenSwap<InMemoryLedger>, owner: Pubkey, mint: Pubkey, amount: u64) {
    swap.ledger_mut()
        .mint_to(ata(&owner, &mint), mint, owner, amount)
        .unwrap();
}

pub fn vault_balance(swap: &TokenSwap<InMemoryLedger>, kind: VaultKind) -> u64 {
    let address = swap.state().unwrap().vault(kind).unwrap();
    swap.ledger().balance(&address)
}

fn price_update(feed: &str, price: i64, exponent: i32, publish_time: i64) -> PriceUpdateV2 {
    PriceUpdateV2 {
        write_authority: Pubkey::default(),
        verification_level: VerificationLevel::Full,
        price_message: PriceFeedMessage {
            feed_id: feed_id_from_hex(feed).unwrap(),
            price,
            conf: 0,
            exponent,
            publish_time,
            prev_publish_time: publish_time,
            ema_price: price,
            ema_conf: 0,
        },
        posted_slot: 0,
    }
}

/// SOL/USD at `usd` dollars with eight decimal places, published at `NOW`
pub fn sol_price(usd: i64) -> PriceUpdateV2 {
    price_update(SOL_USD_FEED_ID, usd * 100_000_000, -8, NOW)
}

pub fn sol_price_at(usd: i64, publish_time: i64) -> PriceUpdateV2 {
    price_update(SOL_USD_FEED_ID, usd * 100_000_000, -8, publish_time)
}

/// Stable price in cents, e.g. 99 for $0.99
pub fn usdc_price(cents: i64) -> PriceUpdateV2 {
    price_update(USDC_USD_FEED_ID, cents * 1_000_000, -8, NOW)
}

pub fn usdt_price(cents: i64) -> PriceUpdateV2 {
    price_update(USDT_USD_FEED_ID, cents * 1_000_000, -8, NOW)
}

pub fn buy_sol(
    swap: &mut TokenSwap<InMemoryLedger>,
    user: Pubkey,
    lamports: u64,
    price: &PriceUpdateV2,
) -> anchor_lang::Result<PurchaseOrder> {
    swap.buy_spl_with_sol(
        BuySplWithSol {
            user,
            price_update: price,
            now: NOW,
        },
        lamports,
    )
}

pub fn buy_stable(
    swap: &mut TokenSwap<InMemoryLedger>,
    user: Pubkey,
    stable: Pubkey,
    amount: u64,
    price: &PriceUpdateV2,
) -> anchor_lang::Result<PurchaseOrder> {
    swap.buy_spl_with_spl(
        BuySplWithSpl {
            user,
            user_mint: stable,
            user_token_ata: ata(&user, &stable),
            price_update: price,
            now: NOW,
        },
        amount,
    )
}

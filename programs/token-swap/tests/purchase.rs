mod common;

use anchor_spl::token::spl_token::native_mint;
use common::*;
use proptest::prelude::*;
use token_swap::*;

#[test]
fn buy_with_sol_settles_both_legs() {
    let mut swap = stocked(token(10_000));
    fund_sol(&mut swap, BUYER, sol(2));

    let order = buy_sol(&mut swap, BUYER, sol(1), &sol_price(150)).unwrap();

    assert_eq!(order.payment_asset, PaymentAsset::Native);
    assert_eq!(order.output_amount, token(7_500));
    assert_eq!(order.quote.price, 15_000_000_000);
    assert_eq!(swap.ledger().balance(&BUYER), sol(1));
    assert_eq!(vault_balance(&swap, VaultKind::Native), sol(1));
    assert_eq!(vault_balance(&swap, VaultKind::Project), token(2_500));
    assert_eq!(swap.ledger().balance(&ata(&BUYER, &MINT)), token(7_500));
    assert_eq!(swap.ledger().supply(&MINT), token(10_000) as u128);
}

#[test]
fn buy_with_stables_uses_their_own_quote() {
    let mut swap = stocked(token(10_000));
    fund_token(&mut swap, BUYER, USDC, usd(10));
    fund_token(&mut swap, BUYER, USDT, usd(10));

    let order = buy_stable(&mut swap, BUYER, USDC, usd(10), &usdc_price(100)).unwrap();
    assert_eq!(order.payment_asset, PaymentAsset::StableA);
    assert_eq!(order.output_amount, token(500));

    let order = buy_stable(&mut swap, BUYER, USDT, usd(10), &usdt_price(99)).unwrap();
    assert_eq!(order.payment_asset, PaymentAsset::StableB);
    assert_eq!(order.output_amount, token(495));

    assert_eq!(vault_balance(&swap, VaultKind::StableA), usd(10));
    assert_eq!(vault_balance(&swap, VaultKind::StableB), usd(10));
    assert_eq!(swap.ledger().balance(&ata(&BUYER, &USDC)), 0);
    assert_eq!(swap.ledger().balance(&ata(&BUYER, &MINT)), token(995));
    assert_eq!(vault_balance(&swap, VaultKind::Project), token(9_005));
}

#[test]
fn out_of_bounds_amounts_are_rejected() {
    let mut swap = stocked(token(10_000));
    fund_sol(&mut swap, BUYER, sol(1_000));
    let before = swap.ledger().clone();

    assert_eq!(
        buy_sol(&mut swap, BUYER, 100_000, &sol_price(150)).unwrap_err(),
        TokenSwapError::PurchaseAmountTooLow.into()
    );
    assert_eq!(
        buy_sol(&mut swap, BUYER, 600_000_000_000, &sol_price(150)).unwrap_err(),
        TokenSwapError::PurchaseAmountTooHigh.into()
    );
    assert_eq!(
        buy_stable(&mut swap, BUYER, USDC, 999_999, &usdc_price(100)).unwrap_err(),
        TokenSwapError::PurchaseAmountTooLow.into()
    );
    assert_eq!(swap.ledger(), &before);
}

#[test]
fn bounds_are_inclusive() {
    let mut swap = stocked(token(100_000_000));
    fund_sol(&mut swap, BUYER, sol(501));

    assert!(buy_sol(&mut swap, BUYER, sol(1) / 1_000, &sol_price(150)).is_ok());
    assert!(buy_sol(&mut swap, BUYER, sol(500), &sol_price(150)).is_ok());
}

#[test]
fn insufficient_inventory_leaves_balances_unchanged() {
    let mut swap = stocked(token(100));
    fund_sol(&mut swap, BUYER, sol(1));
    let before = swap.ledger().clone();

    assert_eq!(
        buy_sol(&mut swap, BUYER, sol(1), &sol_price(150)).unwrap_err(),
        TokenSwapError::InsufficientSPLBalance.into()
    );
    assert_eq!(swap.ledger(), &before);
    assert_eq!(vault_balance(&swap, VaultKind::Native), 0);
}

#[test]
fn buyer_must_cover_the_payment() {
    let mut swap = stocked(token(10_000));
    fund_sol(&mut swap, BUYER, sol(1) / 2);
    let before = swap.ledger().clone();

    assert_eq!(
        buy_sol(&mut swap, BUYER, sol(1), &sol_price(150)).unwrap_err(),
        TokenSwapError::InsufficientFunds.into()
    );
    assert_eq!(
        buy_stable(&mut swap, STRANGER, USDC, usd(5), &usdc_price(100)).unwrap_err(),
        TokenSwapError::InsufficientFunds.into()
    );
    assert_eq!(swap.ledger(), &before);
}

#[test]
fn only_whitelisted_stables_are_accepted() {
    let mut swap = stocked(token(10_000));
    fund_token(&mut swap, BUYER, MINT, token(10));
    let other = anchor_lang::prelude::Pubkey::new_from_array([99; 32]);

    for mint in [MINT, other, native_mint::ID] {
        assert_eq!(
            buy_stable(&mut swap, BUYER, mint, usd(5), &usdc_price(100)).unwrap_err(),
            TokenSwapError::InvalidMint.into()
        );
    }
}

#[test]
fn payment_account_must_hold_the_declared_stable() {
    let mut swap = stocked(token(10_000));
    fund_token(&mut swap, BUYER, USDT, usd(10));
    let before = swap.ledger().clone();

    // Declares USDC but pays from the USDT account
    let result = swap.buy_spl_with_spl(
        BuySplWithSpl {
            user: BUYER,
            user_mint: USDC,
            user_token_ata: ata(&BUYER, &USDT),
            price_update: &usdc_price(100),
            now: NOW,
        },
        usd(10),
    );
    assert_eq!(result.unwrap_err(), TokenSwapError::InvalidMint.into());
    assert_eq!(swap.ledger(), &before);
}

#[test]
fn stale_prices_are_rejected() {
    let mut swap = stocked(token(10_000));
    fund_sol(&mut swap, BUYER, sol(2));

    assert_eq!(
        buy_sol(&mut swap, BUYER, sol(1), &sol_price_at(150, NOW - 61)).unwrap_err(),
        TokenSwapError::StalePrice.into()
    );
    assert!(buy_sol(&mut swap, BUYER, sol(1), &sol_price_at(150, NOW - 60)).is_ok());
}

#[test]
fn price_from_another_feed_is_rejected() {
    let mut swap = stocked(token(10_000));
    fund_sol(&mut swap, BUYER, sol(2));
    fund_token(&mut swap, BUYER, USDT, usd(10));

    assert_eq!(
        buy_sol(&mut swap, BUYER, sol(1), &usdc_price(100)).unwrap_err(),
        TokenSwapError::PriceFeedMismatch.into()
    );
    assert_eq!(
        buy_stable(&mut swap, BUYER, USDT, usd(10), &usdc_price(100)).unwrap_err(),
        TokenSwapError::PriceFeedMismatch.into()
    );
}

#[test]
fn non_positive_prices_are_rejected() {
    let mut swap = stocked(token(10_000));
    fund_sol(&mut swap, BUYER, sol(2));

    for dollars in [0, -150] {
        assert_eq!(
            buy_sol(&mut swap, BUYER, sol(1), &sol_price(dollars)).unwrap_err(),
            TokenSwapError::InvalidPrice.into()
        );
    }
}

#[test]
fn payment_worth_nothing_is_too_low() {
    let mut swap = stocked(token(10_000));
    fund_sol(&mut swap, BUYER, sol(2));
    swap.set_token_price(SetTokenPrice { admin: ADMIN }, u64::MAX).unwrap();

    assert_eq!(
        buy_sol(&mut swap, BUYER, sol(1) / 1_000, &sol_price(150)).unwrap_err(),
        TokenSwapError::PurchaseAmountTooLow.into()
    );
}

#[test]
fn purchases_need_an_operational_program() {
    let mut swap = TokenSwap::new(InMemoryLedger::new(), None);
    assert_eq!(
        buy_sol(&mut swap, BUYER, sol(1), &sol_price(150)).unwrap_err(),
        TokenSwapError::NotInitialized.into()
    );

    swap.initialize_state(init_accounts()).unwrap();
    swap.initialize_vault(vault_accounts(VaultKind::Project)).unwrap();
    assert_eq!(
        buy_sol(&mut swap, BUYER, sol(1), &sol_price(150)).unwrap_err(),
        TokenSwapError::NotInitialized.into()
    );
    assert_eq!(
        buy_stable(&mut swap, BUYER, USDC, usd(10), &usdc_price(100)).unwrap_err(),
        TokenSwapError::NotInitialized.into()
    );
}

#[test]
fn get_price_previews_without_settling() {
    let mut swap = stocked(token(100));
    fund_sol(&mut swap, BUYER, sol(2));
    let before = swap.ledger().clone();

    let preview = swap
        .get_price(
            GetPrice {
                user: BUYER,
                payment_mint: native_mint::ID,
                price_update: &sol_price(150),
                now: NOW,
            },
            sol(1),
        )
        .unwrap();
    // Inventory is not consulted
    assert_eq!(preview.output_amount, token(7_500));
    assert_eq!(swap.ledger(), &before);

    let preview = swap
        .get_price(
            GetPrice {
                user: BUYER,
                payment_mint: USDT,
                price_update: &usdt_price(100),
                now: NOW,
            },
            usd(1),
        )
        .unwrap();
    assert_eq!(preview.output_amount, token(50));
    assert_eq!(preview.payment_asset, PaymentAsset::StableB);
}

#[test]
fn preview_matches_settlement() {
    let mut swap = stocked(token(100_000));
    fund_sol(&mut swap, BUYER, sol(3));
    let price = sol_price(143);

    let preview = swap
        .get_price(
            GetPrice {
                user: BUYER,
                payment_mint: native_mint::ID,
                price_update: &price,
                now: NOW,
            },
            sol(3),
        )
        .unwrap();
    let order = buy_sol(&mut swap, BUYER, sol(3), &price).unwrap();
    assert_eq!(preview, order);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn purchases_conserve_every_asset(
        amounts in proptest::collection::vec(1_000_000u64..=5_000_000_000u64, 1..8),
        usd_price in 1i64..=1_000i64,
    ) {
        let inventory = token(100_000_000);
        let mut swap = stocked(inventory);
        let funded: u64 = amounts.iter().sum();
        fund_sol(&mut swap, BUYER, funded);
        let price = sol_price(usd_price);

        let mut bought = 0u64;
        for amount in &amounts {
            bought += buy_sol(&mut swap, BUYER, *amount, &price).unwrap().output_amount;
        }

        prop_assert_eq!(swap.ledger().supply(&MINT), inventory as u128);
        prop_assert_eq!(swap.ledger().supply(&native_mint::ID), funded as u128);
        prop_assert_eq!(swap.ledger().balance(&ata(&BUYER, &MINT)), bought);
        prop_assert_eq!(vault_balance(&swap, VaultKind::Native), funded);
        prop_assert_eq!(vault_balance(&swap, VaultKind::Project), inventory - bought);
    }
}

fn buy_stable_from(
    swap: &mut TokenSwap<InMemoryLedger>,
    source: anchor_lang::prelude::Pubkey,
    amount: u64,
) -> anchor_lang::Result<PurchaseOrder> {
    swap.buy_spl_with_spl(
        BuySplWithSpl {
            user: BUYER,
            user_mint: USDC,
            user_token_ata: source,
            price_update: &usdc_price(100),
            now: NOW,
        },
        amount,
    )
}

#[test]
fn buyer_cannot_spend_another_users_account() {
    let mut swap = stocked(token(10_000));
    fund_token(&mut swap, STRANGER, USDC, usd(10));
    let before = swap.ledger().clone();

    assert_eq!(
        buy_stable_from(&mut swap, ata(&STRANGER, &USDC), usd(10)).unwrap_err(),
        TokenSwapError::InvalidOwner.into()
    );
    assert_eq!(swap.ledger(), &before);
    assert_eq!(swap.ledger().balance(&ata(&STRANGER, &USDC)), usd(10));
}

#[test]
fn buyer_cannot_pay_out_of_a_collection_vault() {
    let mut swap = stocked(token(10_000));
    fund_token(&mut swap, BUYER, USDC, usd(10));
    buy_stable(&mut swap, BUYER, USDC, usd(10), &usdc_price(100)).unwrap();
    let vault = swap.state().unwrap().vault(VaultKind::StableA).unwrap();
    let before = swap.ledger().clone();

    assert_eq!(
        buy_stable_from(&mut swap, vault, usd(10)).unwrap_err(),
        TokenSwapError::InvalidOwner.into()
    );
    assert_eq!(swap.ledger(), &before);
    assert_eq!(vault_balance(&swap, VaultKind::StableA), usd(10));
    assert_eq!(swap.ledger().balance(&ata(&BUYER, &MINT)), token(500));
}

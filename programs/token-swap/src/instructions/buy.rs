use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::native_mint;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

use crate::contexts::{BuySplWithSol, BuySplWithSpl, GetPrice};
use crate::errors::TokenSwapError;
use crate::events::TokensPurchased;
use crate::instructions::utils::validate_purchase;
use crate::ledger::Ledger;
use crate::math::convert;
use crate::oracle::quote;
use crate::state::{GlobalState, PaymentAsset, PurchaseOrder};
use crate::vault::atomic_exchange;

// Prices a validated payment. A payment too small to buy a single base unit is rejected.
fn price_order(
    state: &GlobalState,
    buyer: Pubkey,
    payment_asset: PaymentAsset,
    payment_amount: u64,
    price_update: &PriceUpdateV2,
    now: i64,
) -> Result<PurchaseOrder> {
    let quote = quote(state, payment_asset, price_update, now)?;
    let output_amount = convert(
        payment_amount,
        state.payment_decimals(payment_asset),
        &quote,
        state.token_price_usd_micro,
        state.mint_decimals,
    )?;
    require!(output_amount > 0, TokenSwapError::PurchaseAmountTooLow);

    Ok(PurchaseOrder {
        buyer,
        payment_asset,
        payment_amount,
        output_amount,
        quote,
    })
}

fn settle<L: Ledger>(
    state: &GlobalState,
    ledger: &mut L,
    payment_source: &Pubkey,
    order: PurchaseOrder,
    now: i64,
) -> Result<PurchaseOrder> {
    atomic_exchange(
        ledger,
        state,
        &order.buyer,
        payment_source,
        order.payment_asset,
        order.payment_amount,
        order.output_amount,
    )?;

    emit!(TokensPurchased {
        buyer: order.buyer,
        payment_asset: order.payment_asset,
        payment_amount: order.payment_amount,
        output_amount: order.output_amount,
        price: order.quote.price,
        exponent: order.quote.exponent,
        timestamp: now,
    });
    Ok(order)
}

/// Buys project tokens with lamports from the user's wallet
pub fn buy_spl_with_sol<L: Ledger>(
    state: &GlobalState,
    ledger: &mut L,
    accounts: BuySplWithSol,
    lamports_to_pay: u64,
) -> Result<PurchaseOrder> {
    state.require_operational()?;
    let asset = validate_purchase(state, lamports_to_pay, &native_mint::ID)?;
    let order = price_order(
        state,
        accounts.user,
        asset,
        lamports_to_pay,
        accounts.price_update,
        accounts.now,
    )?;

    let order = settle(state, ledger, &accounts.user, order, accounts.now)?;
    msg!(
        "Bought {} tokens for {} lamports",
        order.output_amount,
        lamports_to_pay
    );
    Ok(order)
}

/// Buys project tokens with one of the two whitelisted stable tokens
pub fn buy_spl_with_spl<L: Ledger>(
    state: &GlobalState,
    ledger: &mut L,
    accounts: BuySplWithSpl,
    token_amount: u64,
) -> Result<PurchaseOrder> {
    state.require_operational()?;
    // Only the two configured stables are accepted here
    let asset = state.resolve_stable(&accounts.user_mint)?;
    let asset = validate_purchase(state, token_amount, &state.payment_mint(asset))?;
    let order = price_order(
        state,
        accounts.user,
        asset,
        token_amount,
        accounts.price_update,
        accounts.now,
    )?;

    let order = settle(state, ledger, &accounts.user_token_ata, order, accounts.now)?;
    msg!(
        "Bought {} tokens for {} of {}",
        order.output_amount,
        token_amount,
        accounts.user_mint
    );
    Ok(order)
}

/// Quotes a purchase without touching any balance. Liquidity is not checked.
pub fn get_price(state: &GlobalState, accounts: GetPrice, payment_amount: u64) -> Result<PurchaseOrder> {
    state.require_operational()?;
    let asset = validate_purchase(state, payment_amount, &accounts.payment_mint)?;
    let order = price_order(
        state,
        accounts.user,
        asset,
        payment_amount,
        accounts.price_update,
        accounts.now,
    )?;

    msg!(
        "{} units of {} buy {} tokens",
        payment_amount,
        accounts.payment_mint,
        order.output_amount
    );
    Ok(order)
}

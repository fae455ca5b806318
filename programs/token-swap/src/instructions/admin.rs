use anchor_lang::prelude::*;

use crate::contexts::{
    Deposit, SetTokenPrice, UpdateAdmin, UpdatePriceFeed, UpdatePurchaseLimits, Withdraw,
};
use crate::errors::TokenSwapError;
use crate::events::{
    AdminUpdated, PriceFeedUpdated, PurchaseLimitsUpdated, TokenPriceUpdated, TokensDeposited,
    TreasuryWithdrawn,
};
use crate::instructions::utils::require_admin;
use crate::ledger::Ledger;
use crate::state::GlobalState;
use crate::vault::{deposit_inventory, sweep, WithdrawReceipt};

/// Moves project tokens from the admin's token account into the inventory vault
pub fn deposit<L: Ledger>(
    state: &GlobalState,
    ledger: &mut L,
    accounts: Deposit,
    amount: u64,
) -> Result<()> {
    state.require_operational()?;
    require_admin(state, &accounts.admin)?;

    let vault_balance = deposit_inventory(ledger, state, amount)?;

    msg!("Deposited {} tokens, inventory now {}", amount, vault_balance);
    emit!(TokensDeposited {
        admin: accounts.admin,
        amount,
        vault_balance,
    });
    Ok(())
}

/// Sweeps every vault to the admin. Empty vaults are skipped.
pub fn withdraw<L: Ledger>(
    state: &GlobalState,
    ledger: &mut L,
    accounts: Withdraw,
) -> Result<WithdrawReceipt> {
    state.require_operational()?;
    require_admin(state, &accounts.admin)?;

    let receipt = sweep(ledger, state)?;

    if receipt.is_empty() {
        msg!("Nothing to withdraw");
    } else {
        msg!(
            "Withdrawn: {} lamports, {} tokens, {} stable A, {} stable B",
            receipt.native_amount,
            receipt.project_amount,
            receipt.stable_a_amount,
            receipt.stable_b_amount
        );
    }
    emit!(TreasuryWithdrawn {
        admin: accounts.admin,
        native_amount: receipt.native_amount,
        project_amount: receipt.project_amount,
        stable_a_amount: receipt.stable_a_amount,
        stable_b_amount: receipt.stable_b_amount,
    });
    Ok(receipt)
}

pub fn update_admin(state: &mut GlobalState, accounts: UpdateAdmin, new_admin: Pubkey) -> Result<()> {
    require_admin(state, &accounts.current_admin)?;
    require_keys_neq!(new_admin, Pubkey::default(), TokenSwapError::InvalidAdmin);

    let old_admin = state.admin;
    state.admin = new_admin;

    msg!("Admin changed from {} to {}", old_admin, new_admin);
    emit!(AdminUpdated {
        old_admin,
        new_admin,
    });
    Ok(())
}

pub fn update_purchase_limits(state: &mut GlobalState, accounts: UpdatePurchaseLimits) -> Result<()> {
    require_admin(state, &accounts.admin)?;
    accounts.limits.validate()?;

    state.limits = accounts.limits;

    debug_msg!("Purchase limits set to {:?}", accounts.limits);
    emit!(PurchaseLimitsUpdated {
        limits: accounts.limits,
    });
    Ok(())
}

/// Sets the project token price in micro-USD
pub fn set_token_price(
    state: &mut GlobalState,
    accounts: SetTokenPrice,
    token_price_usd_micro: u64,
) -> Result<()> {
    require_admin(state, &accounts.admin)?;
    require!(token_price_usd_micro > 0, TokenSwapError::InvalidPrice);

    let old_price_usd_micro = state.token_price_usd_micro;
    state.token_price_usd_micro = token_price_usd_micro;

    msg!(
        "Token price changed from {} to {} micro-USD",
        old_price_usd_micro,
        token_price_usd_micro
    );
    emit!(TokenPriceUpdated {
        old_price_usd_micro,
        new_price_usd_micro: token_price_usd_micro,
    });
    Ok(())
}

/// Points a payment asset at a different oracle feed
pub fn update_price_feed(
    state: &mut GlobalState,
    accounts: UpdatePriceFeed,
    feed_id: [u8; 32],
    max_age: u64,
) -> Result<()> {
    require_admin(state, &accounts.admin)?;
    require!(max_age > 0, TokenSwapError::InvalidPrice);

    let feed = state.feed_mut(accounts.asset);
    feed.feed_id = feed_id;
    feed.max_age = max_age;

    debug_msg!("Feed for {:?} set to {:?}", accounts.asset, feed_id);
    emit!(PriceFeedUpdated {
        asset: accounts.asset,
        feed_id,
        max_age,
    });
    Ok(())
}

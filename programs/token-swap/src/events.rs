use anchor_lang::prelude::*;

use crate::state::{PaymentAsset, PurchaseLimits, VaultKind};

#[event]
pub struct StateInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub stable_mint_a: Pubkey,
    pub stable_mint_b: Pubkey,
}

#[event]
pub struct VaultInitialized {
    pub kind: VaultKind,
    pub vault: Pubkey,
    pub mint: Pubkey,
}

#[event]
pub struct TokensDeposited {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct TreasuryWithdrawn {
    pub admin: Pubkey,
    pub native_amount: u64,
    pub project_amount: u64,
    pub stable_a_amount: u64,
    pub stable_b_amount: u64,
}

#[event]
pub struct AdminUpdated {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct PurchaseLimitsUpdated {
    pub limits: PurchaseLimits,
}

#[event]
pub struct TokenPriceUpdated {
    pub old_price_usd_micro: u64,
    pub new_price_usd_micro: u64,
}

#[event]
pub struct PriceFeedUpdated {
    pub asset: PaymentAsset,
    pub feed_id: [u8; 32],
    pub max_age: u64,
}

#[event]
pub struct TokensPurchased {
    pub buyer: Pubkey,
    pub payment_asset: PaymentAsset,
    pub payment_amount: u64,
    pub output_amount: u64,
    pub price: i64,
    pub exponent: i32,
    pub timestamp: i64,
}

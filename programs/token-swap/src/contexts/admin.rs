use anchor_lang::prelude::*;

use crate::state::{PaymentAsset, PurchaseLimits};

#[derive(Clone, Copy, Debug)]
pub struct Deposit {
    pub admin: Pubkey,
}

#[derive(Clone, Copy, Debug)]
pub struct Withdraw {
    pub admin: Pubkey,
}

#[derive(Clone, Copy, Debug)]
pub struct UpdateAdmin {
    pub current_admin: Pubkey,
}

#[derive(Clone, Copy, Debug)]
pub struct UpdatePurchaseLimits {
    pub admin: Pubkey,
    pub limits: PurchaseLimits,
}

#[derive(Clone, Copy, Debug)]
pub struct SetTokenPrice {
    pub admin: Pubkey,
}

#[derive(Clone, Copy, Debug)]
pub struct UpdatePriceFeed {
    pub admin: Pubkey,
    pub asset: PaymentAsset,
}

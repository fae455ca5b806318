use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

/// Lamports are debited from `user`'s wallet
#[derive(Clone, Copy)]
pub struct BuySplWithSol<'a> {
    pub user: Pubkey,
    pub price_update: &'a PriceUpdateV2,
    /// Unix timestamp the price age is measured against
    pub now: i64,
}

#[derive(Clone, Copy)]
pub struct BuySplWithSpl<'a> {
    pub user: Pubkey,
    /// Mint the user pays with; must be one of the two whitelisted stables
    pub user_mint: Pubkey,
    /// Token account the payment is debited from
    pub user_token_ata: Pubkey,
    pub price_update: &'a PriceUpdateV2,
    pub now: i64,
}

#[derive(Clone, Copy)]
pub struct GetPrice<'a> {
    pub user: Pubkey,
    pub payment_mint: Pubkey,
    pub price_update: &'a PriceUpdateV2,
    pub now: i64,
}

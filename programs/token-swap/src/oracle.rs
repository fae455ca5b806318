use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::{PriceUpdateV2, VerificationLevel};

use crate::errors::TokenSwapError;
use crate::state::{GlobalState, PaymentAsset};

/// A validated quote, consumed by a single purchase and never stored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceQuote {
    pub asset: Pubkey,
    pub price: i64,
    pub exponent: i32,
    pub published_at: i64,
    pub confidence: u64,
}

/// Parses a `0x`-prefixed (or bare) 32-byte hex feed id
pub fn feed_id_from_hex(input: &str) -> Result<[u8; 32]> {
    pyth_solana_receiver_sdk::price_update::get_feed_id_from_hex(input)
        .map_err(|_| TokenSwapError::PriceFeedMismatch.into())
}

/// Clock handed to the price receiver; only the timestamp is read
fn clock_at(now: i64) -> Clock {
    Clock {
        unix_timestamp: now,
        ..Clock::default()
    }
}

/// Reads and validates the price of `asset` against its configured feed.
///
/// A price published at `t` is usable while `now - t <= max_age`.
pub fn quote(
    state: &GlobalState,
    asset: PaymentAsset,
    price_update: &PriceUpdateV2,
    now: i64,
) -> Result<PriceQuote> {
    let feed = state.feed(asset);
    let message = &price_update.price_message;

    require!(
        message.feed_id == feed.feed_id,
        TokenSwapError::PriceFeedMismatch
    );
    if !matches!(price_update.verification_level, VerificationLevel::Full) {
        msg!("Price update for {:?} is only partially verified", asset);
        return err!(TokenSwapError::InvalidPrice);
    }

    let price = price_update
        .get_price_no_older_than(&clock_at(now), feed.max_age, &feed.feed_id)
        .map_err(|_| {
            msg!(
                "Price published at {} is older than {}s (now {})",
                message.publish_time,
                feed.max_age,
                now
            );
            TokenSwapError::StalePrice
        })?;
    require!(price.price > 0, TokenSwapError::InvalidPrice);

    debug_msg!(
        "Quote for {:?}: {} * 10^{} (conf {}, published {})",
        asset,
        price.price,
        price.exponent,
        price.conf,
        price.publish_time
    );

    Ok(PriceQuote {
        asset: state.payment_mint(asset),
        price: price.price,
        exponent: price.exponent,
        published_at: price.publish_time,
        confidence: price.conf,
    })
}

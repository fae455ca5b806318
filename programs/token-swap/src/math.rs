use anchor_lang::prelude::*;

use crate::constants::USD_MICRO_DECIMALS;
use crate::errors::TokenSwapError;
use crate::oracle::PriceQuote;

fn pow10(exp: u32) -> Result<u128> {
    10u128
        .checked_pow(exp)
        .ok_or_else(|| TokenSwapError::Overflow.into())
}

// Floor division; a zero divisor means a zero token price
fn floor_div(a: u128, b: u128) -> Result<u128> {
    if b == 0 {
        msg!("Error: Division by zero in floor_div");
        return err!(TokenSwapError::InvalidPrice);
    }
    a.checked_div(b).ok_or_else(|| TokenSwapError::Overflow.into())
}

/// Converts a payment into project token base units.
///
/// ```text
/// usd_value = payment_amount / 10^payment_decimals * price * 10^exponent
/// output    = floor(usd_value / (token_price_usd_micro / 10^6) * 10^token_decimals)
/// ```
///
/// All decimal scales are folded into one power of ten applied to either the
/// numerator or the denominator, so the only rounding is the final floor. The
/// result never exceeds the exact value, so the vault is never short-changed.
pub fn convert(
    payment_amount: u64,
    payment_decimals: u8,
    quote: &PriceQuote,
    token_price_usd_micro: u64,
    token_decimals: u8,
) -> Result<u64> {
    require!(quote.price > 0, TokenSwapError::InvalidPrice);
    require!(token_price_usd_micro > 0, TokenSwapError::InvalidPrice);

    let scale = i64::from(USD_MICRO_DECIMALS) + i64::from(token_decimals)
        + i64::from(quote.exponent)
        - i64::from(payment_decimals);
    let scale_exp = u32::try_from(scale.unsigned_abs()).map_err(|_| TokenSwapError::Overflow)?;
    let scale_factor = pow10(scale_exp)?;

    let mut numerator = (payment_amount as u128)
        .checked_mul(quote.price as u128)
        .ok_or(TokenSwapError::Overflow)?;
    let mut denominator = token_price_usd_micro as u128;

    if scale >= 0 {
        numerator = numerator
            .checked_mul(scale_factor)
            .ok_or(TokenSwapError::Overflow)?;
    } else {
        denominator = denominator
            .checked_mul(scale_factor)
            .ok_or(TokenSwapError::Overflow)?;
    }
    debug_msg!("  numerator = {}, denominator = {}", numerator, denominator);

    let output = floor_div(numerator, denominator)?;
    u64::try_from(output).map_err(|_| {
        debug_msg!("!!! Overflow: output {} exceeds u64::MAX", output);
        TokenSwapError::Overflow.into()
    })
}

use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::native_mint;

use crate::errors::TokenSwapError;
use crate::state::{GlobalState, PaymentAsset};

/// Checks that the signer is the configured admin
pub fn require_admin(state: &GlobalState, signer: &Pubkey) -> Result<()> {
    require_keys_eq!(state.admin, *signer, TokenSwapError::NotAdmin);
    Ok(())
}

/// Maps a payment mint onto an accepted asset: native SOL or one of the two stables
pub fn resolve_payment_asset(state: &GlobalState, payment_mint: &Pubkey) -> Result<PaymentAsset> {
    if *payment_mint == native_mint::ID {
        return Ok(PaymentAsset::Native);
    }
    state.resolve_stable(payment_mint)
}

/// Whitelist and bound checks for a purchase.
///
/// Bounds apply to the amount exactly as supplied, in the paying asset's
/// smallest unit, before any conversion.
pub fn validate_purchase(
    state: &GlobalState,
    payment_amount: u64,
    payment_mint: &Pubkey,
) -> Result<PaymentAsset> {
    let asset = resolve_payment_asset(state, payment_mint)?;
    let (min_purchase, max_purchase) = state.limits.bounds(asset);

    require!(
        payment_amount >= min_purchase,
        TokenSwapError::PurchaseAmountTooLow
    );
    require!(
        payment_amount <= max_purchase,
        TokenSwapError::PurchaseAmountTooHigh
    );
    Ok(asset)
}

use anchor_lang::prelude::*;

#[error_code]
pub enum TokenSwapError {
    #[msg("Not enough SPL tokens in project wallet.")]
    InsufficientSPLBalance,
    #[msg("The purchase amount is below the minimum limit.")]
    PurchaseAmountTooLow,
    #[msg("The purchase amount exceeds the maximum limit.")]
    PurchaseAmountTooHigh,
    #[msg("Invalid USDC/USDT mint address.")]
    InvalidMint,
    #[msg("Signer is not the configured admin.")]
    NotAdmin,
    #[msg("Account is already initialized.")]
    AlreadyInitialized,
    #[msg("Swap state is not initialized or vaults are missing.")]
    NotInitialized,
    #[msg("Oracle price is older than the allowed maximum age.")]
    StalePrice,
    #[msg("Price update does not belong to the configured feed.")]
    PriceFeedMismatch,
    #[msg("Oracle price is not positive or not fully verified.")]
    InvalidPrice,
    #[msg("Arithmetic overflow.")]
    Overflow,
    #[msg("Source account has insufficient funds.")]
    InsufficientFunds,
    #[msg("Minimum purchase exceeds maximum purchase.")]
    InvalidPurchaseLimits,
    #[msg("Source account is not owned by the signer.")]
    InvalidOwner,
    /// The admin identity can never be the all-zero key
    #[msg("New admin must not be the default key.")]
    InvalidAdmin,
}

use anchor_lang::prelude::*;

declare_id!("BN7BxF5hiBK9v93ieKP5r8g1qbxwDaCTjudY8JAh8cUP");

#[cfg(debug_assertions)]
macro_rules! debug_msg {
    ($($arg:tt)*) => {
        anchor_lang::prelude::msg!($($arg)*)
    };
}

#[cfg(not(debug_assertions))]
macro_rules! debug_msg {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod errors;
pub mod events;
pub mod state;
pub mod ledger;
pub mod math;
pub mod oracle;
pub mod vault;
pub mod contexts;
pub mod instructions;
pub mod program;

pub use contexts::*;
pub use errors::TokenSwapError;
pub use ledger::{InMemoryLedger, Ledger, LedgerAccount};
pub use oracle::PriceQuote;
pub use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
pub use program::TokenSwap;
pub use state::*;
pub use vault::{VaultHandle, WithdrawReceipt};

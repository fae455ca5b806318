use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// Seeds for program-derived accounts
pub const STATE_SEED: &[u8] = b"state";
pub const NATIVE_VAULT_SEED: &[u8] = b"pda_sol";
pub const PROJECT_VAULT_SEED: &[u8] = b"pda_spl_ata";
pub const STABLE_A_VAULT_SEED: &[u8] = b"pda_usdc_ata";
pub const STABLE_B_VAULT_SEED: &[u8] = b"pda_usdt_ata";

/// Decimals of the native currency (lamports per SOL = 10^9)
pub const NATIVE_DECIMALS: u8 = 9;

/// Purchase bounds for native purchases, in lamports
pub const DEFAULT_MIN_PURCHASE: u64 = LAMPORTS_PER_SOL / 1_000; // 0.001 SOL
pub const DEFAULT_MAX_PURCHASE: u64 = 500 * LAMPORTS_PER_SOL; // 500 SOL

/// Purchase bounds for stable purchases, in the stable token's smallest unit (6 decimals)
pub const DEFAULT_STABLE_MIN_PURCHASE: u64 = 1_000_000; // 1 USDC
pub const DEFAULT_STABLE_MAX_PURCHASE: u64 = 100_000_000_000; // 100k USDC

/// Project token price in micro-USD (20_000 = $0.02)
pub const DEFAULT_TOKEN_PRICE_USD_MICRO: u64 = 20_000;
pub const USD_MICRO_DECIMALS: u32 = 6;

/// Maximum accepted age of an oracle price, in seconds
pub const NATIVE_MAX_PRICE_AGE: u64 = 60;
pub const STABLE_MAX_PRICE_AGE: u64 = 90;

/// Pyth price feed ids
pub const SOL_USD_FEED_ID: &str =
    "0xef0d8b6fda2ceba41da15d4095d1da392a0d2f8ed0c6c7bc0f4cfac8c280b56d";
pub const USDC_USD_FEED_ID: &str =
    "0xeaa020c61cc479712813461ce153894a96a6c00b21ed0cfc2798d1f9a9e9c94a";
pub const USDT_USD_FEED_ID: &str =
    "0x2b89b9dc8fdf9f34709a5b106b472f0f39bb6ca9ce04b0fd7f2e971688e2e53b";

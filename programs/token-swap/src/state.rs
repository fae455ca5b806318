use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::native_mint;

use crate::constants::*;
use crate::errors::TokenSwapError;
use crate::oracle::{feed_id_from_hex, PriceQuote};

/// The four vaults owned by the program
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VaultKind {
    Native,
    Project,
    StableA,
    StableB,
}

impl VaultKind {
    pub const ALL: [VaultKind; 4] = [
        VaultKind::Native,
        VaultKind::Project,
        VaultKind::StableA,
        VaultKind::StableB,
    ];

    pub fn seed(&self) -> &'static [u8] {
        match self {
            VaultKind::Native => NATIVE_VAULT_SEED,
            VaultKind::Project => PROJECT_VAULT_SEED,
            VaultKind::StableA => STABLE_A_VAULT_SEED,
            VaultKind::StableB => STABLE_B_VAULT_SEED,
        }
    }
}

/// Asset a buyer may pay with
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentAsset {
    Native,
    StableA,
    StableB,
}

impl PaymentAsset {
    /// Collection vault receiving payments in this asset
    pub fn vault_kind(&self) -> VaultKind {
        match self {
            PaymentAsset::Native => VaultKind::Native,
            PaymentAsset::StableA => VaultKind::StableA,
            PaymentAsset::StableB => VaultKind::StableB,
        }
    }

    pub fn is_stable(&self) -> bool {
        !matches!(self, PaymentAsset::Native)
    }
}

/// Key and precision of a mint, as read from its mint account
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintInfo {
    pub key: Pubkey,
    pub decimals: u8,
}

/// Inclusive per-call bounds on the payment amount.
///
/// Native bounds are in lamports, stable bounds in the stable token's smallest unit.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseLimits {
    pub min_purchase: u64,
    pub max_purchase: u64,
    pub stable_min_purchase: u64,
    pub stable_max_purchase: u64,
}

impl Default for PurchaseLimits {
    fn default() -> Self {
        Self {
            min_purchase: DEFAULT_MIN_PURCHASE,
            max_purchase: DEFAULT_MAX_PURCHASE,
            stable_min_purchase: DEFAULT_STABLE_MIN_PURCHASE,
            stable_max_purchase: DEFAULT_STABLE_MAX_PURCHASE,
        }
    }
}

impl PurchaseLimits {
    pub const SPACE: usize = 8 * 4;

    pub fn validate(&self) -> Result<()> {
        require!(
            self.min_purchase <= self.max_purchase,
            TokenSwapError::InvalidPurchaseLimits
        );
        require!(
            self.stable_min_purchase <= self.stable_max_purchase,
            TokenSwapError::InvalidPurchaseLimits
        );
        Ok(())
    }

    /// `(min, max)` for the given payment asset
    pub fn bounds(&self, asset: PaymentAsset) -> (u64, u64) {
        if asset.is_stable() {
            (self.stable_min_purchase, self.stable_max_purchase)
        } else {
            (self.min_purchase, self.max_purchase)
        }
    }
}

/// Oracle feed accepted for one payment asset
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceFeedConfig {
    pub feed_id: [u8; 32],
    pub max_age: u64,
}

impl PriceFeedConfig {
    pub const SPACE: usize = 32 + 8;

    pub fn from_hex(feed_id: &str, max_age: u64) -> Result<Self> {
        Ok(Self {
            feed_id: feed_id_from_hex(feed_id)?,
            max_age,
        })
    }
}

/// A purchase as settled or previewed. Lives for a single call and is never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseOrder {
    pub buyer: Pubkey,
    pub payment_asset: PaymentAsset,
    pub payment_amount: u64,
    pub output_amount: u64,
    pub quote: PriceQuote,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    MintsConfigured,
    Operational,
}

impl Lifecycle {
    pub fn of(state: Option<&GlobalState>) -> Self {
        match state {
            None => Lifecycle::Uninitialized,
            Some(state) if state.vaults_ready() => Lifecycle::Operational,
            Some(_) => Lifecycle::MintsConfigured,
        }
    }
}

#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct GlobalState {
    pub admin: Pubkey,
    pub stable_mint_a: Pubkey,
    pub stable_mint_b: Pubkey,
    /// Project SPL token mint
    pub mint: Pubkey,
    pub limits: PurchaseLimits,
    pub token_price_usd_micro: u64,
    pub native_feed: PriceFeedConfig,
    pub stable_a_feed: PriceFeedConfig,
    pub stable_b_feed: PriceFeedConfig,
    pub native_vault: Option<Pubkey>,
    pub project_vault: Option<Pubkey>,
    pub stable_a_vault: Option<Pubkey>,
    pub stable_b_vault: Option<Pubkey>,
    pub mint_decimals: u8,
    pub stable_a_decimals: u8,
    pub stable_b_decimals: u8,
}

impl GlobalState {
    pub const SPACE: usize = 32 * 4
        + PurchaseLimits::SPACE
        + 8
        + PriceFeedConfig::SPACE * 3
        + (1 + 32) * 4
        + 3;

    pub fn new(
        admin: Pubkey,
        stable_mint_a: Pubkey,
        stable_mint_b: Pubkey,
        mint: Pubkey,
    ) -> Result<Self> {
        Ok(Self {
            admin,
            stable_mint_a,
            stable_mint_b,
            mint,
            limits: PurchaseLimits::default(),
            token_price_usd_micro: DEFAULT_TOKEN_PRICE_USD_MICRO,
            native_feed: PriceFeedConfig::from_hex(SOL_USD_FEED_ID, NATIVE_MAX_PRICE_AGE)?,
            stable_a_feed: PriceFeedConfig::from_hex(USDC_USD_FEED_ID, STABLE_MAX_PRICE_AGE)?,
            stable_b_feed: PriceFeedConfig::from_hex(USDT_USD_FEED_ID, STABLE_MAX_PRICE_AGE)?,
            native_vault: None,
            project_vault: None,
            stable_a_vault: None,
            stable_b_vault: None,
            mint_decimals: 0,
            stable_a_decimals: 0,
            stable_b_decimals: 0,
        })
    }

    pub fn vault(&self, kind: VaultKind) -> Option<Pubkey> {
        match kind {
            VaultKind::Native => self.native_vault,
            VaultKind::Project => self.project_vault,
            VaultKind::StableA => self.stable_a_vault,
            VaultKind::StableB => self.stable_b_vault,
        }
    }

    pub(crate) fn set_vault(&mut self, kind: VaultKind, address: Pubkey, decimals: u8) {
        match kind {
            VaultKind::Native => self.native_vault = Some(address),
            VaultKind::Project => {
                self.project_vault = Some(address);
                self.mint_decimals = decimals;
            }
            VaultKind::StableA => {
                self.stable_a_vault = Some(address);
                self.stable_a_decimals = decimals;
            }
            VaultKind::StableB => {
                self.stable_b_vault = Some(address);
                self.stable_b_decimals = decimals;
            }
        }
    }

    pub fn vaults_ready(&self) -> bool {
        VaultKind::ALL.iter().all(|kind| self.vault(*kind).is_some())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        Lifecycle::of(Some(self))
    }

    pub fn require_operational(&self) -> Result<()> {
        require!(self.vaults_ready(), TokenSwapError::NotInitialized);
        Ok(())
    }

    /// Mint held by the given vault. The native vault is tagged with the wrapped SOL mint.
    pub fn vault_mint(&self, kind: VaultKind) -> Pubkey {
        match kind {
            VaultKind::Native => native_mint::ID,
            VaultKind::Project => self.mint,
            VaultKind::StableA => self.stable_mint_a,
            VaultKind::StableB => self.stable_mint_b,
        }
    }

    pub fn payment_mint(&self, asset: PaymentAsset) -> Pubkey {
        self.vault_mint(asset.vault_kind())
    }

    pub fn payment_decimals(&self, asset: PaymentAsset) -> u8 {
        match asset {
            PaymentAsset::Native => NATIVE_DECIMALS,
            PaymentAsset::StableA => self.stable_a_decimals,
            PaymentAsset::StableB => self.stable_b_decimals,
        }
    }

    pub fn feed(&self, asset: PaymentAsset) -> &PriceFeedConfig {
        match asset {
            PaymentAsset::Native => &self.native_feed,
            PaymentAsset::StableA => &self.stable_a_feed,
            PaymentAsset::StableB => &self.stable_b_feed,
        }
    }

    pub(crate) fn feed_mut(&mut self, asset: PaymentAsset) -> &mut PriceFeedConfig {
        match asset {
            PaymentAsset::Native => &mut self.native_feed,
            PaymentAsset::StableA => &mut self.stable_a_feed,
            PaymentAsset::StableB => &mut self.stable_b_feed,
        }
    }

    /// Maps a user-supplied mint onto one of the two whitelisted stable tokens
    pub fn resolve_stable(&self, user_mint: &Pubkey) -> Result<PaymentAsset> {
        if *user_mint == self.stable_mint_a {
            Ok(PaymentAsset::StableA)
        } else if *user_mint == self.stable_mint_b {
            Ok(PaymentAsset::StableB)
        } else {
            Err(TokenSwapError::InvalidMint.into())
        }
    }
}

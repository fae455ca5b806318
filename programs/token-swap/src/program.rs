use anchor_lang::prelude::*;

use crate::contexts::*;
use crate::errors::TokenSwapError;
use crate::instructions;
use crate::ledger::Ledger;
use crate::state::{GlobalState, Lifecycle, PurchaseOrder};
use crate::vault::{VaultHandle, WithdrawReceipt};

/// Entry points of the swap program, bound to one ledger.
///
/// Each call either applies all of its effects or returns an error and leaves
/// the state and the ledger untouched.
pub struct TokenSwap<L: Ledger> {
    state: Option<GlobalState>,
    ledger: L,
    upgrade_authority: Option<Pubkey>,
}

impl<L: Ledger> TokenSwap<L> {
    pub fn new(ledger: L, upgrade_authority: Option<Pubkey>) -> Self {
        Self {
            state: None,
            ledger,
            upgrade_authority,
        }
    }

    pub fn state(&self) -> Option<&GlobalState> {
        self.state.as_ref()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn lifecycle(&self) -> Lifecycle {
        Lifecycle::of(self.state.as_ref())
    }

    fn global(&self) -> Result<&GlobalState> {
        self.state
            .as_ref()
            .ok_or_else(|| TokenSwapError::NotInitialized.into())
    }

    fn global_mut(&mut self) -> Result<&mut GlobalState> {
        self.state
            .as_mut()
            .ok_or_else(|| TokenSwapError::NotInitialized.into())
    }

    pub fn initialize_state(&mut self, accounts: InitializeState) -> Result<()> {
        instructions::initialize_state(&mut self.state, accounts, self.upgrade_authority)
    }

    pub fn initialize_vault(&mut self, accounts: InitializeVault) -> Result<VaultHandle> {
        let state = self
            .state
            .as_mut()
            .ok_or(TokenSwapError::NotInitialized)?;
        instructions::initialize_vault(state, &mut self.ledger, accounts)
    }

    pub fn deposit(&mut self, accounts: Deposit, amount: u64) -> Result<()> {
        let state = self.state.as_ref().ok_or(TokenSwapError::NotInitialized)?;
        instructions::deposit(state, &mut self.ledger, accounts, amount)
    }

    pub fn withdraw(&mut self, accounts: Withdraw) -> Result<WithdrawReceipt> {
        let state = self.state.as_ref().ok_or(TokenSwapError::NotInitialized)?;
        instructions::withdraw(state, &mut self.ledger, accounts)
    }

    pub fn update_admin(&mut self, accounts: UpdateAdmin, new_admin: Pubkey) -> Result<()> {
        instructions::update_admin(self.global_mut()?, accounts, new_admin)
    }

    pub fn update_purchase_limits(&mut self, accounts: UpdatePurchaseLimits) -> Result<()> {
        instructions::update_purchase_limits(self.global_mut()?, accounts)
    }

    pub fn set_token_price(&mut self, accounts: SetTokenPrice, token_price_usd_micro: u64) -> Result<()> {
        instructions::set_token_price(self.global_mut()?, accounts, token_price_usd_micro)
    }

    pub fn update_price_feed(
        &mut self,
        accounts: UpdatePriceFeed,
        feed_id: [u8; 32],
        max_age: u64,
    ) -> Result<()> {
        instructions::update_price_feed(self.global_mut()?, accounts, feed_id, max_age)
    }

    pub fn buy_spl_with_sol(
        &mut self,
        accounts: BuySplWithSol,
        lamports_to_pay: u64,
    ) -> Result<PurchaseOrder> {
        let state = self.state.as_ref().ok_or(TokenSwapError::NotInitialized)?;
        instructions::buy_spl_with_sol(state, &mut self.ledger, accounts, lamports_to_pay)
    }

    pub fn buy_spl_with_spl(
        &mut self,
        accounts: BuySplWithSpl,
        token_amount: u64,
    ) -> Result<PurchaseOrder> {
        let state = self.state.as_ref().ok_or(TokenSwapError::NotInitialized)?;
        instructions::buy_spl_with_spl(state, &mut self.ledger, accounts, token_amount)
    }

    pub fn get_price(&self, accounts: GetPrice, payment_amount: u64) -> Result<PurchaseOrder> {
        instructions::get_price(self.global()?, accounts, payment_amount)
    }
}

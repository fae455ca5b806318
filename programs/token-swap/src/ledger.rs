use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::errors::TokenSwapError;

/// Balance held at one address. Every address holds exactly one asset.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerAccount {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

/// Address-keyed balance store provided by the host.
///
/// The program reads through `get` while validating and hands every write of
/// an instruction to a single `commit` call once all checks have passed.
/// Implementations must apply a commit as a whole.
pub trait Ledger {
    fn get(&self, address: &Pubkey) -> Option<LedgerAccount>;

    fn commit(&mut self, writes: Vec<(Pubkey, LedgerAccount)>);

    fn balance(&self, address: &Pubkey) -> u64 {
        self.get(address).map(|account| account.amount).unwrap_or(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    accounts: BTreeMap<Pubkey, LedgerAccount>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` to `address`, opening the account if needed
    pub fn mint_to(
        &mut self,
        address: Pubkey,
        mint: Pubkey,
        owner: Pubkey,
        amount: u64,
    ) -> Result<()> {
        let account = self.accounts.entry(address).or_insert(LedgerAccount {
            mint,
            owner,
            amount: 0,
        });
        require_keys_eq!(account.mint, mint, TokenSwapError::InvalidMint);
        account.amount = account
            .amount
            .checked_add(amount)
            .ok_or(TokenSwapError::Overflow)?;
        Ok(())
    }

    /// Sum of all balances denominated in `mint`
    pub fn supply(&self, mint: &Pubkey) -> u128 {
        self.accounts
            .values()
            .filter(|account| account.mint == *mint)
            .map(|account| account.amount as u128)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Ledger for InMemoryLedger {
    fn get(&self, address: &Pubkey) -> Option<LedgerAccount> {
        self.accounts.get(address).copied()
    }

    fn commit(&mut self, writes: Vec<(Pubkey, LedgerAccount)>) {
        self.accounts.extend(writes);
    }
}

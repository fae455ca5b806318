use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::STATE_SEED;
use crate::errors::TokenSwapError;
use crate::ledger::{Ledger, LedgerAccount};
use crate::state::{GlobalState, PaymentAsset, VaultKind};

/// Program authority owning every vault
pub fn vault_authority() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED], &crate::ID)
}

/// Capability for one program-owned vault
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultHandle {
    pub kind: VaultKind,
    pub address: Pubkey,
    pub bump: u8,
}

impl VaultHandle {
    pub fn derive(kind: VaultKind) -> Self {
        let (address, bump) = Pubkey::find_program_address(&[kind.seed()], &crate::ID);
        Self {
            kind,
            address,
            bump,
        }
    }
}

/// Amounts swept out of each vault by a withdraw
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub native_amount: u64,
    pub project_amount: u64,
    pub stable_a_amount: u64,
    pub stable_b_amount: u64,
}

impl WithdrawReceipt {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn record(&mut self, kind: VaultKind, amount: u64) {
        match kind {
            VaultKind::Native => self.native_amount = amount,
            VaultKind::Project => self.project_amount = amount,
            VaultKind::StableA => self.stable_a_amount = amount,
            VaultKind::StableB => self.stable_b_amount = amount,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: Pubkey,
    /// Signer moving the funds; must own `from`
    pub authority: Pubkey,
    pub to: Pubkey,
    /// Owner recorded if `to` has to be opened
    pub to_owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

/// Transfers that become visible together or not at all.
///
/// `prepare` is phase one: it replays every transfer against a read-only
/// snapshot of the ledger and yields the resulting accounts, or the first
/// error. `commit` is phase two and hands the whole write set to the ledger in
/// one call.
#[derive(Clone, Debug, Default)]
pub struct TransferBatch {
    transfers: Vec<Transfer>,
}

impl TransferBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transfer: Transfer) -> &mut Self {
        self.transfers.push(transfer);
        self
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    pub fn prepare<L: Ledger>(&self, ledger: &L) -> Result<Vec<(Pubkey, LedgerAccount)>> {
        let mut staged: BTreeMap<Pubkey, LedgerAccount> = BTreeMap::new();

        for transfer in self.transfers.iter().filter(|t| t.amount > 0) {
            let mut source = staged
                .get(&transfer.from)
                .copied()
                .or_else(|| ledger.get(&transfer.from))
                .ok_or(TokenSwapError::InsufficientFunds)?;
            require_keys_eq!(source.owner, transfer.authority, TokenSwapError::InvalidOwner);
            require_keys_eq!(source.mint, transfer.mint, TokenSwapError::InvalidMint);
            source.amount = source
                .amount
                .checked_sub(transfer.amount)
                .ok_or(TokenSwapError::InsufficientFunds)?;
            staged.insert(transfer.from, source);

            let mut destination = staged
                .get(&transfer.to)
                .copied()
                .or_else(|| ledger.get(&transfer.to))
                .unwrap_or(LedgerAccount {
                    mint: transfer.mint,
                    owner: transfer.to_owner,
                    amount: 0,
                });
            require_keys_eq!(destination.mint, transfer.mint, TokenSwapError::InvalidMint);
            destination.amount = destination
                .amount
                .checked_add(transfer.amount)
                .ok_or(TokenSwapError::Overflow)?;
            staged.insert(transfer.to, destination);
        }

        Ok(staged.into_iter().collect())
    }

    pub fn commit<L: Ledger>(self, ledger: &mut L) -> Result<()> {
        let writes = self.prepare(ledger)?;
        if !writes.is_empty() {
            ledger.commit(writes);
        }
        Ok(())
    }
}

/// Opens the vault of `kind`, owned by the program authority
pub fn open_vault<L: Ledger>(
    ledger: &mut L,
    state: &GlobalState,
    kind: VaultKind,
) -> Result<VaultHandle> {
    let handle = VaultHandle::derive(kind);
    require!(
        ledger.get(&handle.address).is_none(),
        TokenSwapError::AlreadyInitialized
    );
    let (authority, _) = vault_authority();
    ledger.commit(vec![(
        handle.address,
        LedgerAccount {
            mint: state.vault_mint(kind),
            owner: authority,
            amount: 0,
        },
    )]);
    Ok(handle)
}

fn is_vault(state: &GlobalState, address: &Pubkey) -> bool {
    VaultKind::ALL
        .iter()
        .any(|kind| state.vault(*kind) == Some(*address))
}

fn require_vault(state: &GlobalState, kind: VaultKind) -> Result<Pubkey> {
    state
        .vault(kind)
        .ok_or_else(|| TokenSwapError::NotInitialized.into())
}

/// Moves `payment_amount` from the buyer into the collection vault and
/// `output_amount` of the project token from the inventory vault to the
/// buyer's associated token account, as one unit.
///
/// The inventory check runs here, against the same ledger view the commit
/// is computed from. The payment must come from an account the buyer owns,
/// never from a program vault.
pub fn atomic_exchange<L: Ledger>(
    ledger: &mut L,
    state: &GlobalState,
    buyer: &Pubkey,
    payment_source: &Pubkey,
    payment_asset: PaymentAsset,
    payment_amount: u64,
    output_amount: u64,
) -> Result<()> {
    let inventory = require_vault(state, VaultKind::Project)?;
    let collection = require_vault(state, payment_asset.vault_kind())?;

    if is_vault(state, payment_source) {
        msg!("Payment source {} is a program vault", payment_source);
        return err!(TokenSwapError::InvalidOwner);
    }

    let available = ledger.balance(&inventory);
    if available < output_amount {
        msg!(
            "Inventory holds {} tokens, purchase needs {}",
            available,
            output_amount
        );
        return err!(TokenSwapError::InsufficientSPLBalance);
    }

    let (authority, _) = vault_authority();
    let mut batch = TransferBatch::new();
    batch
        .push(Transfer {
            from: *payment_source,
            authority: *buyer,
            to: collection,
            to_owner: authority,
            mint: state.payment_mint(payment_asset),
            amount: payment_amount,
        })
        .push(Transfer {
            from: inventory,
            authority,
            to: get_associated_token_address(buyer, &state.mint),
            to_owner: *buyer,
            mint: state.mint,
            amount: output_amount,
        });
    batch.commit(ledger)
}

/// Moves `amount` project tokens from the admin's associated account into inventory
pub fn deposit_inventory<L: Ledger>(
    ledger: &mut L,
    state: &GlobalState,
    amount: u64,
) -> Result<u64> {
    let inventory = require_vault(state, VaultKind::Project)?;
    let (authority, _) = vault_authority();

    let mut batch = TransferBatch::new();
    batch.push(Transfer {
        from: get_associated_token_address(&state.admin, &state.mint),
        authority: state.admin,
        to: inventory,
        to_owner: authority,
        mint: state.mint,
        amount,
    });
    batch.commit(ledger)?;

    Ok(ledger.balance(&inventory))
}

/// Where a sweep of `kind` lands for the given admin
pub fn admin_destination(state: &GlobalState, kind: VaultKind) -> Pubkey {
    match kind {
        VaultKind::Native => state.admin,
        _ => get_associated_token_address(&state.admin, &state.vault_mint(kind)),
    }
}

/// Empties every vault into the admin's accounts in one commit
pub fn sweep<L: Ledger>(ledger: &mut L, state: &GlobalState) -> Result<WithdrawReceipt> {
    let (authority, _) = vault_authority();
    let mut receipt = WithdrawReceipt::default();
    let mut batch = TransferBatch::new();

    for kind in VaultKind::ALL {
        let vault = require_vault(state, kind)?;
        let amount = ledger.balance(&vault);
        receipt.record(kind, amount);
        batch.push(Transfer {
            from: vault,
            authority,
            to: admin_destination(state, kind),
            to_owner: state.admin,
            mint: state.vault_mint(kind),
            amount,
        });
    }

    batch.commit(ledger)?;
    Ok(receipt)
}

use anchor_lang::prelude::*;

use crate::contexts::{InitializeState, InitializeVault};
use crate::errors::TokenSwapError;
use crate::events::{StateInitialized, VaultInitialized};
use crate::instructions::utils::require_admin;
use crate::ledger::Ledger;
use crate::state::{GlobalState, VaultKind};
use crate::vault::{open_vault, VaultHandle};

/// Creates the global state record. Callable once.
///
/// When the host reports an upgrade authority, only that key may initialize.
pub fn initialize_state(
    state: &mut Option<GlobalState>,
    accounts: InitializeState,
    upgrade_authority: Option<Pubkey>,
) -> Result<()> {
    require!(state.is_none(), TokenSwapError::AlreadyInitialized);

    if let Some(authority) = upgrade_authority {
        require_keys_eq!(authority, accounts.admin, TokenSwapError::NotAdmin);
    }

    // The three configured mints must be distinct
    require_keys_neq!(
        accounts.stable_mint_a,
        accounts.stable_mint_b,
        TokenSwapError::InvalidMint
    );
    require_keys_neq!(accounts.mint, accounts.stable_mint_a, TokenSwapError::InvalidMint);
    require_keys_neq!(accounts.mint, accounts.stable_mint_b, TokenSwapError::InvalidMint);

    *state = Some(GlobalState::new(
        accounts.admin,
        accounts.stable_mint_a,
        accounts.stable_mint_b,
        accounts.mint,
    )?);

    msg!("State initialized, admin: {}", accounts.admin);
    emit!(StateInitialized {
        admin: accounts.admin,
        mint: accounts.mint,
        stable_mint_a: accounts.stable_mint_a,
        stable_mint_b: accounts.stable_mint_b,
    });
    Ok(())
}

/// Opens one of the four program vaults and records it in the state
pub fn initialize_vault<L: Ledger>(
    state: &mut GlobalState,
    ledger: &mut L,
    accounts: InitializeVault,
) -> Result<VaultHandle> {
    require_admin(state, &accounts.admin)?;
    require!(
        state.vault(accounts.kind).is_none(),
        TokenSwapError::AlreadyInitialized
    );

    let expected_mint = state.vault_mint(accounts.kind);
    let decimals = match (accounts.kind, accounts.mint) {
        (VaultKind::Native, None) => crate::constants::NATIVE_DECIMALS,
        (_, Some(mint)) => {
            require_keys_eq!(mint.key, expected_mint, TokenSwapError::InvalidMint);
            mint.decimals
        }
        (_, None) => return err!(TokenSwapError::InvalidMint),
    };

    let handle = open_vault(ledger, state, accounts.kind)?;
    state.set_vault(accounts.kind, handle.address, decimals);

    msg!("Vault {:?} opened at {}", accounts.kind, handle.address);
    emit!(VaultInitialized {
        kind: accounts.kind,
        vault: handle.address,
        mint: expected_mint,
    });
    Ok(handle)
}

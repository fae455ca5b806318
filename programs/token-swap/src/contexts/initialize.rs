use anchor_lang::prelude::*;

use crate::state::{MintInfo, VaultKind};

#[derive(Clone, Copy, Debug)]
pub struct InitializeState {
    /// Signer, recorded as admin
    pub admin: Pubkey,
    pub stable_mint_a: Pubkey,
    pub stable_mint_b: Pubkey,
    /// Project SPL token mint
    pub mint: Pubkey,
}

#[derive(Clone, Copy, Debug)]
pub struct InitializeVault {
    pub admin: Pubkey,
    pub kind: VaultKind,
    /// Backing mint; required for every vault except the native one
    pub mint: Option<MintInfo>,
}

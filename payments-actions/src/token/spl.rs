//! SPL Token and Token-2022 accounts as seen from the payment flows.
//! Only the base layout is read, so extensions are ignored.

use std::mem::size_of;

use solana_sdk::{instruction::Instruction, pubkey, pubkey::Pubkey};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account_idempotent,
};
use spl_pod::bytemuck::pod_from_bytes;
use spl_token_2022::pod::{PodAccount, PodMint};

pub const SPL_TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const SPL_TOKEN_2022_PROGRAM_ID: Pubkey = spl_token_2022::ID;

pub fn is_spl_token_program(program_id: &Pubkey) -> bool {
    *program_id == SPL_TOKEN_PROGRAM_ID || *program_id == SPL_TOKEN_2022_PROGRAM_ID
}

/// Returns the SPL associated token account of `owner` for `mint` under `token_program`.
pub fn get_spl_associated_token_address(
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}

/// Balance of an SPL or Token-2022 account, `None` if `data` is not one.
pub fn token_account_amount(data: &[u8]) -> Option<u64> {
    let base = data.get(..size_of::<PodAccount>())?;
    let account = pod_from_bytes::<PodAccount>(base).ok()?;
    Some(account.amount.into())
}

pub fn mint_decimals(data: &[u8]) -> Option<u8> {
    let base = data.get(..size_of::<PodMint>())?;
    let mint = pod_from_bytes::<PodMint>(base).ok()?;
    Some(mint.decimals)
}

/// Idempotently creates the associated token account of `owner` for `mint`
/// under `token_program`.
pub fn create_spl_ata_idempotent(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Instruction {
    create_associated_token_account_idempotent(payer, owner, mint, token_program)
}

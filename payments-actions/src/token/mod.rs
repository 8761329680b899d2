//! Light Token accounts for payments.
//!
//! Light Token accounts are associated token accounts owned by the Light
//! Token program. They hold the same balances as SPL token accounts and can
//! be wrapped from or unwrapped to SPL through a per-mint token pool.
//! Instruction builders come from `light-token`; this module adds the SPL
//! side and the balance loading that payments need.

mod load_ata;
pub mod spl;

pub use light_token::instruction::{
    get_associated_token_address, get_spl_interface_pda_and_bump, CreateAssociatedTokenAccount,
    Transfer, TransferFromSpl, TransferToSpl, LIGHT_TOKEN_PROGRAM_ID,
};
pub use load_ata::{fetch_mint_decimals, load_ata_instructions};
pub use spl::{SPL_TOKEN_2022_PROGRAM_ID, SPL_TOKEN_PROGRAM_ID};

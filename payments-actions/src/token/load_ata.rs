//! Consolidates an owner's balances for one mint into their Light Token ATA.

use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use tracing::debug;

use super::{
    get_spl_interface_pda_and_bump,
    spl::{
        get_spl_associated_token_address, mint_decimals, token_account_amount,
        SPL_TOKEN_2022_PROGRAM_ID, SPL_TOKEN_PROGRAM_ID,
    },
    CreateAssociatedTokenAccount, TransferFromSpl,
};
use crate::rpc::{account_not_found, custom_error, PaymentRpc, RpcError};

/// Returns the instructions that move the owner's SPL, Token-2022 and
/// compressed balances into `ata`. Empty if there is nothing to load.
///
/// If anything is loaded and `ata` does not exist yet, an idempotent create
/// is prepended.
pub async fn load_ata_instructions<R: PaymentRpc + ?Sized>(
    rpc: &mut R,
    payer: Pubkey,
    ata: Pubkey,
    owner: Pubkey,
    mint: Pubkey,
) -> Result<Vec<Instruction>, RpcError> {
    let mut instructions = Vec::new();
    let mut cached_decimals: Option<u8> = None;

    for token_program in [SPL_TOKEN_PROGRAM_ID, SPL_TOKEN_2022_PROGRAM_ID] {
        let spl_ata = get_spl_associated_token_address(&owner, &mint, &token_program);
        let Some(account) = rpc.get_account(spl_ata).await? else {
            continue;
        };
        let Some(balance) = token_account_amount(&account.data) else {
            continue;
        };
        if balance == 0 {
            continue;
        }

        let decimals = match cached_decimals {
            Some(decimals) => decimals,
            None => {
                let fetched = fetch_mint_decimals(rpc, mint).await?;
                cached_decimals = Some(fetched);
                fetched
            }
        };

        debug!("Loading {} from SPL account {}", balance, spl_ata);
        let (spl_interface_pda, spl_interface_pda_bump) = get_spl_interface_pda_and_bump(&mint);
        instructions.push(
            TransferFromSpl {
                amount: balance,
                spl_interface_pda_bump,
                decimals,
                source_spl_token_account: spl_ata,
                destination: ata,
                authority: owner,
                mint,
                payer,
                spl_interface_pda,
                spl_token_program: token_program,
            }
            .instruction()
            .map_err(custom_error)?,
        );
    }

    if let Some(decompression) = rpc.decompress_instruction(payer, owner, mint, ata).await? {
        debug!("Loading {} compressed tokens of {}", decompression.amount, owner);
        instructions.push(decompression.instruction);
    }

    if !instructions.is_empty() && rpc.get_account(ata).await?.is_none() {
        let create = CreateAssociatedTokenAccount::new(payer, owner, mint)
            .idempotent()
            .instruction()
            .map_err(custom_error)?;
        instructions.insert(0, create);
    }

    Ok(instructions)
}

pub async fn fetch_mint_decimals<R: PaymentRpc + ?Sized>(
    rpc: &mut R,
    mint: Pubkey,
) -> Result<u8, RpcError> {
    let account = rpc
        .get_account(mint)
        .await?
        .ok_or_else(|| account_not_found(&mint))?;
    mint_decimals(&account.data)
        .ok_or_else(|| RpcError::CustomError(format!("Account {} is not a mint", mint)))
}

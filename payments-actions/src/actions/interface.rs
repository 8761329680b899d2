//! One-call helpers over Light Token accounts. Each call submits at most
//! one transaction.

use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tracing::{debug, info};

use crate::{
    rpc::{account_not_found, custom_error, PaymentRpc, RpcError},
    token::{
        get_associated_token_address, get_spl_interface_pda_and_bump, load_ata_instructions,
        spl::{
            create_spl_ata_idempotent, get_spl_associated_token_address, is_spl_token_program,
            mint_decimals,
        },
        CreateAssociatedTokenAccount, Transfer, TransferToSpl,
    },
};

fn signers<'a>(payer: &'a Keypair, owner: &'a Keypair) -> Vec<&'a Keypair> {
    if payer.pubkey() == owner.pubkey() {
        vec![payer]
    } else {
        vec![payer, owner]
    }
}

/// Returns the owner's Light Token ATA for `mint`, creating it if missing.
pub async fn get_or_create_ata_interface<R: PaymentRpc + ?Sized>(
    rpc: &mut R,
    payer: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<Pubkey, RpcError> {
    let ata = get_associated_token_address(owner, mint);

    if rpc.get_account(ata).await?.is_some() {
        debug!("Associated token account {} already exists", ata);
        return Ok(ata);
    }

    let instruction = CreateAssociatedTokenAccount::new(payer.pubkey(), *owner, *mint)
        .idempotent()
        .instruction()
        .map_err(custom_error)?;
    let signature = rpc
        .create_and_send_transaction(&[instruction], &payer.pubkey(), &[payer])
        .await?;
    info!("Created associated token account {} in {}", ata, signature);

    Ok(ata)
}

/// Loads `source` and transfers `amount` to `destination` in one transaction.
/// `destination` must already exist.
pub async fn transfer_interface<R: PaymentRpc + ?Sized>(
    rpc: &mut R,
    payer: &Keypair,
    source: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    owner: &Keypair,
    amount: u64,
) -> Result<Signature, RpcError> {
    if rpc.get_account(*destination).await?.is_none() {
        return Err(account_not_found(destination));
    }

    let mut instructions =
        load_ata_instructions(rpc, payer.pubkey(), *source, owner.pubkey(), *mint).await?;

    let fee_payer = (payer.pubkey() != owner.pubkey()).then(|| payer.pubkey());
    instructions.push(
        Transfer {
            source: *source,
            destination: *destination,
            amount,
            authority: owner.pubkey(),
            fee_payer,
        }
        .instruction()
        .map_err(custom_error)?,
    );

    let signature = rpc
        .create_and_send_transaction(&instructions, &payer.pubkey(), &signers(payer, owner))
        .await?;
    info!("Transferred {} to {} in {}", amount, destination, signature);

    Ok(signature)
}

/// Loads the owner's balances into their Light Token ATA and moves `amount`
/// from it to the associated token account of `destination_owner`, under
/// whichever token program owns `mint`. The destination is created if missing.
///
/// Returns the destination account with the signature.
pub async fn unwrap<R: PaymentRpc + ?Sized>(
    rpc: &mut R,
    payer: &Keypair,
    owner: &Keypair,
    mint: &Pubkey,
    destination_owner: &Pubkey,
    amount: u64,
) -> Result<(Pubkey, Signature), RpcError> {
    let mint_account = rpc
        .get_account(*mint)
        .await?
        .ok_or_else(|| account_not_found(mint))?;
    let spl_token_program = mint_account.owner;
    if !is_spl_token_program(&spl_token_program) {
        return Err(RpcError::CustomError(format!(
            "Mint {} is owned by {}, not an SPL token program",
            mint, spl_token_program
        )));
    }
    let decimals = mint_decimals(&mint_account.data)
        .ok_or_else(|| RpcError::CustomError(format!("Account {} is not a mint", mint)))?;
    let destination = get_spl_associated_token_address(destination_owner, mint, &spl_token_program);

    let source = get_associated_token_address(&owner.pubkey(), mint);
    let mut instructions =
        load_ata_instructions(rpc, payer.pubkey(), source, owner.pubkey(), *mint).await?;

    if rpc.get_account(destination).await?.is_none() {
        instructions.push(create_spl_ata_idempotent(
            &payer.pubkey(),
            destination_owner,
            mint,
            &spl_token_program,
        ));
    }

    let (spl_interface_pda, spl_interface_pda_bump) = get_spl_interface_pda_and_bump(mint);
    instructions.push(
        TransferToSpl {
            source,
            destination_spl_token_account: destination,
            amount,
            authority: owner.pubkey(),
            mint: *mint,
            payer: payer.pubkey(),
            spl_interface_pda,
            spl_interface_pda_bump,
            decimals,
            spl_token_program,
        }
        .instruction()
        .map_err(custom_error)?,
    );

    let signature = rpc
        .create_and_send_transaction(&instructions, &payer.pubkey(), &signers(payer, owner))
        .await?;
    info!("Unwrapped {} to {} in {}", amount, destination, signature);

    Ok((destination, signature))
}

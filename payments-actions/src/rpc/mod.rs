//! The slice of a Light RPC endpoint the payment flows use.
//!
//! [`LightClient`] serves both the Solana JSON-RPC and the Photon indexer
//! methods. [`PaymentRpc`] narrows it to what the actions need, so they can
//! run against any backend.

use std::fmt::Display;

use async_trait::async_trait;
use light_client::indexer::{GetCompressedTokenAccountsByOwnerOrDelegateOptions, Indexer};
pub use light_client::rpc::{LightClient, LightClientConfig, Rpc, RpcError};
use light_token_client::instructions::transfer2::{
    create_generic_transfer2_instruction, DecompressInput, Transfer2InstructionType,
};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
};
use tracing::debug;

use crate::token::fetch_mint_decimals;

/// Indexer pages fetched per owner before giving up.
pub const MAX_COMPRESSED_ACCOUNT_PAGES: usize = 100;

/// Instruction that moves an owner's whole compressed balance for one mint
/// into a Light Token account.
#[derive(Debug, Clone, PartialEq)]
pub struct Decompression {
    pub amount: u64,
    pub instruction: Instruction,
}

#[async_trait]
pub trait PaymentRpc: Send + Sync {
    fn get_url(&self) -> String;

    async fn get_account(&mut self, address: Pubkey) -> Result<Option<Account>, RpcError>;

    /// `None` if `owner` holds no compressed tokens of `mint`.
    async fn decompress_instruction(
        &mut self,
        payer: Pubkey,
        owner: Pubkey,
        mint: Pubkey,
        destination: Pubkey,
    ) -> Result<Option<Decompression>, RpcError>;

    async fn create_and_send_transaction(
        &mut self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> Result<Signature, RpcError>;
}

/// Connects to `url` for both RPC and indexer requests.
pub async fn connect(url: String) -> Result<LightClient, RpcError> {
    LightClient::new(LightClientConfig {
        url: url.clone(),
        photon_url: Some(url),
        api_key: None,
        commitment_config: Some(CommitmentConfig::confirmed()),
        fetch_active_tree: false,
    })
    .await
}

pub fn account_not_found(address: &Pubkey) -> RpcError {
    RpcError::CustomError(format!("Account {} does not exist", address))
}

pub(crate) fn custom_error<E: Display>(error: E) -> RpcError {
    RpcError::CustomError(error.to_string())
}

#[async_trait]
impl PaymentRpc for LightClient {
    fn get_url(&self) -> String {
        Rpc::get_url(self)
    }

    async fn get_account(&mut self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        Rpc::get_account(self, address).await
    }

    async fn decompress_instruction(
        &mut self,
        payer: Pubkey,
        owner: Pubkey,
        mint: Pubkey,
        destination: Pubkey,
    ) -> Result<Option<Decompression>, RpcError> {
        let mut accounts = Vec::new();
        let mut options = GetCompressedTokenAccountsByOwnerOrDelegateOptions::new(Some(mint));
        for _ in 0..MAX_COMPRESSED_ACCOUNT_PAGES {
            let page = self
                .get_compressed_token_accounts_by_owner(&owner, Some(options.clone()), None)
                .await
                .map_err(custom_error)?
                .value;
            accounts.extend(page.items);
            match page.cursor {
                Some(cursor) => options.cursor = Some(cursor),
                None => break,
            }
        }

        let amount: u64 = accounts.iter().map(|account| account.token.amount).sum();
        if amount == 0 {
            return Ok(None);
        }
        debug!(
            "Decompressing {} from {} compressed accounts of {}",
            amount,
            accounts.len(),
            owner
        );

        let decimals = fetch_mint_decimals(self, mint).await?;
        let instruction = create_generic_transfer2_instruction(
            self,
            vec![Transfer2InstructionType::Decompress(DecompressInput {
                compressed_token_account: accounts,
                decompress_amount: amount,
                solana_token_account: destination,
                amount,
                pool_index: None,
                decimals,
                in_tlv: None,
            })],
            payer,
            false,
        )
        .await
        .map_err(custom_error)?;

        Ok(Some(Decompression {
            amount,
            instruction,
        }))
    }

    async fn create_and_send_transaction(
        &mut self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> Result<Signature, RpcError> {
        Rpc::create_and_send_transaction(self, instructions, payer, signers).await
    }
}

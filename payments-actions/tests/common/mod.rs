#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use payments_actions::{
    rpc::{Decompression, PaymentRpc, RpcError},
    token::{LIGHT_TOKEN_PROGRAM_ID, SPL_TOKEN_PROGRAM_ID},
};
use solana_sdk::{
    account::Account,
    hash::Hash,
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::{Transaction, TransactionError},
};

pub const TRANSFER_DISCRIMINATOR: u8 = 3;
pub const CREATE_ATA_DISCRIMINATOR: u8 = 100;
pub const TRANSFER2_DISCRIMINATOR: u8 = 101;
pub const CREATE_ATA_IDEMPOTENT_DISCRIMINATOR: u8 = 102;

pub const SPL_ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

/// Instruction as it landed in a recorded transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub program_id: Pubkey,
    pub accounts: Vec<Pubkey>,
    pub data: Vec<u8>,
}

impl Submitted {
    /// Same program, accounts and data as `instruction`.
    pub fn is(&self, instruction: &Instruction) -> bool {
        self.program_id == instruction.program_id
            && self.data == instruction.data
            && self
                .accounts
                .iter()
                .eq(instruction.accounts.iter().map(|meta| &meta.pubkey))
    }

    pub fn discriminator(&self) -> u8 {
        self.data[0]
    }
}

/// In-memory [`PaymentRpc`] that records every call and applies account
/// creations so repeated runs observe earlier ones.
#[derive(Debug, Default)]
pub struct RecordingRpc {
    pub accounts: HashMap<Pubkey, Account>,
    pub cold_balances: HashMap<(Pubkey, Pubkey), u64>,
    pub get_account_calls: usize,
    pub indexer_calls: usize,
    pub transactions: Vec<Transaction>,
    pub fail_with: Option<TransactionError>,
}

impl RecordingRpc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&mut self, address: Pubkey, account: Account) {
        self.accounts.insert(address, account);
    }

    pub fn submissions(&self) -> usize {
        self.transactions.len()
    }

    pub fn total_calls(&self) -> usize {
        self.get_account_calls + self.indexer_calls + self.transactions.len()
    }

    /// Instructions of transaction `index`.
    pub fn instructions(&self, index: usize) -> Vec<Submitted> {
        submitted(&self.transactions[index])
    }

    fn apply(&mut self, transaction: &Transaction) -> Result<(), TransactionError> {
        for (i, ix) in submitted(transaction).into_iter().enumerate() {
            if ix.program_id == LIGHT_TOKEN_PROGRAM_ID
                && matches!(
                    ix.discriminator(),
                    CREATE_ATA_DISCRIMINATOR | CREATE_ATA_IDEMPOTENT_DISCRIMINATOR
                )
            {
                let ata = ix.accounts[3];
                if self.accounts.contains_key(&ata) {
                    if ix.discriminator() == CREATE_ATA_DISCRIMINATOR {
                        return Err(TransactionError::InstructionError(
                            i as u8,
                            InstructionError::AccountAlreadyInitialized,
                        ));
                    }
                    continue;
                }
                self.accounts
                    .insert(ata, token_account(LIGHT_TOKEN_PROGRAM_ID, 0));
            } else if ix.program_id == SPL_ASSOCIATED_TOKEN_PROGRAM_ID {
                let ata = ix.accounts[1];
                let token_program = ix.accounts[5];
                self.accounts
                    .entry(ata)
                    .or_insert_with(|| token_account(token_program, 0));
            }
        }
        Ok(())
    }
}

fn submitted(transaction: &Transaction) -> Vec<Submitted> {
    let message = &transaction.message;
    message
        .instructions
        .iter()
        .map(|ix| Submitted {
            program_id: message.account_keys[ix.program_id_index as usize],
            accounts: ix
                .accounts
                .iter()
                .map(|i| message.account_keys[*i as usize])
                .collect(),
            data: ix.data.clone(),
        })
        .collect()
}

/// Stand-in for the indexer-built decompression: program, payer, destination
/// and owner as accounts, the decompressed amount after the discriminator.
pub fn decompression(payer: Pubkey, owner: Pubkey, destination: Pubkey, amount: u64) -> Instruction {
    let mut data = vec![TRANSFER2_DISCRIMINATOR];
    data.extend_from_slice(&amount.to_le_bytes());
    Instruction {
        program_id: LIGHT_TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

#[async_trait]
impl PaymentRpc for RecordingRpc {
    fn get_url(&self) -> String {
        "memory://recording?api-key=secret".to_string()
    }

    async fn get_account(&mut self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        self.get_account_calls += 1;
        Ok(self.accounts.get(&address).cloned())
    }

    async fn decompress_instruction(
        &mut self,
        payer: Pubkey,
        owner: Pubkey,
        mint: Pubkey,
        destination: Pubkey,
    ) -> Result<Option<Decompression>, RpcError> {
        self.indexer_calls += 1;
        let amount = self
            .cold_balances
            .get(&(owner, mint))
            .copied()
            .unwrap_or_default();
        if amount == 0 {
            return Ok(None);
        }
        Ok(Some(Decompression {
            amount,
            instruction: decompression(payer, owner, destination, amount),
        }))
    }

    async fn create_and_send_transaction(
        &mut self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> Result<Signature, RpcError> {
        if let Some(error) = self.fail_with.clone() {
            return Err(RpcError::from(error));
        }
        let mut transaction = Transaction::new_with_payer(instructions, Some(payer));
        transaction
            .try_sign(signers, Hash::new_unique())
            .map_err(|e| RpcError::CustomError(e.to_string()))?;
        self.apply(&transaction)?;
        let signature = transaction.signatures[0];
        self.transactions.push(transaction);
        Ok(signature)
    }
}

/// Mint with the given decimals, owned by the SPL Token program.
pub fn mint_account(decimals: u8) -> Account {
    mint_account_owned_by(SPL_TOKEN_PROGRAM_ID, decimals)
}

pub fn mint_account_owned_by(token_program: Pubkey, decimals: u8) -> Account {
    let mut data = vec![0u8; 82];
    data[44] = decimals;
    data[45] = 1;
    Account {
        lamports: 1_461_600,
        data,
        owner: token_program,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn token_account(owner_program: Pubkey, amount: u64) -> Account {
    let mut data = vec![0u8; 165];
    data[64..72].copy_from_slice(&amount.to_le_bytes());
    Account {
        lamports: 2_039_280,
        data,
        owner: owner_program,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn amount_at(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap())
}

pub fn payer() -> Keypair {
    Keypair::new()
}

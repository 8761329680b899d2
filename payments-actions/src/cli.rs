use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    actions::Operation,
    config::{
        helius_devnet_url, PaymentConfig, DEFAULT_AMOUNT, DEFAULT_CLUSTER, MINT_PLACEHOLDER,
        RECIPIENT_PLACEHOLDER,
    },
    keypair::default_keypair_path,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Create the recipient's Light Token account if it does not exist
    Receive(ActionArgs),
    /// Transfer tokens from the payer to the recipient
    Send(ActionArgs),
    /// Move tokens from the payer's Light Token account to their SPL account
    Unwrap(ActionArgs),
    /// Create and load the recipient's account in one locally built transaction
    ReceiveInstructions(ActionArgs),
    /// Load and transfer in one locally built transaction
    SendInstructions(ActionArgs),
}

impl Commands {
    pub fn operation(&self) -> Operation {
        match self {
            Commands::Receive(_) => Operation::Receive,
            Commands::Send(_) => Operation::Send,
            Commands::Unwrap(_) => Operation::Unwrap,
            Commands::ReceiveInstructions(_) => Operation::ReceiveInstructions,
            Commands::SendInstructions(_) => Operation::SendInstructions,
        }
    }

    pub fn args(&self) -> &ActionArgs {
        match self {
            Commands::Receive(args)
            | Commands::Send(args)
            | Commands::Unwrap(args)
            | Commands::ReceiveInstructions(args)
            | Commands::SendInstructions(args) => args,
        }
    }
}

#[derive(Parser, Clone, Debug)]
pub struct ActionArgs {
    #[arg(long, env = "MINT_PUBKEY", default_value = MINT_PLACEHOLDER)]
    pub mint: String,

    #[arg(long, env = "RECIPIENT_PUBKEY", default_value = RECIPIENT_PLACEHOLDER)]
    pub recipient: String,

    /// Amount in the mint's smallest unit
    #[arg(long, env = "AMOUNT", default_value_t = DEFAULT_AMOUNT)]
    pub amount: u64,

    /// Defaults to ~/.config/solana/id.json
    #[arg(long, env = "SOLANA_KEYPAIR_PATH")]
    pub keypair: Option<PathBuf>,

    /// Overrides the Helius devnet endpoint
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    #[arg(long, env = "HELIUS_API_KEY", hide_env_values = true)]
    pub helius_api_key: Option<String>,

    #[arg(long, env = "EXPLORER_CLUSTER", default_value = DEFAULT_CLUSTER)]
    pub cluster: String,
}

impl ActionArgs {
    pub fn payment_config(&self) -> PaymentConfig {
        PaymentConfig {
            mint: self.mint.clone(),
            recipient: Some(self.recipient.clone()),
            amount: self.amount,
        }
    }

    pub fn rpc_url(&self) -> String {
        self.rpc_url
            .clone()
            .unwrap_or_else(|| helius_devnet_url(self.helius_api_key.as_deref()))
    }

    pub fn keypair_path(&self) -> PathBuf {
        self.keypair.clone().unwrap_or_else(default_keypair_path)
    }
}

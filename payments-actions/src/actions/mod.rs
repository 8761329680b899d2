//! Payment flows. Each [`Operation`] maps to one [`PaymentAction`].

mod interface;
pub mod instructions;
mod receive_payments;
mod send_payments;
mod unwrap_to_spl;

use std::fmt::{Display, Formatter};

use async_trait::async_trait;
pub use interface::{get_or_create_ata_interface, transfer_interface, unwrap};
pub use receive_payments::ReceivePayments;
pub use send_payments::SendPayments;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
};
pub use unwrap_to_spl::UnwrapToSpl;

use crate::{
    explorer::ExplorerLink,
    rpc::{PaymentRpc, RpcError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Receive,
    Send,
    Unwrap,
    ReceiveInstructions,
    SendInstructions,
}

impl Operation {
    /// Unwrap goes to the payer's own SPL account and has no recipient.
    pub fn requires_recipient(&self) -> bool {
        !matches!(self, Operation::Unwrap)
    }

    pub fn moves_tokens(&self) -> bool {
        matches!(
            self,
            Operation::Send | Operation::Unwrap | Operation::SendInstructions
        )
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Receive => "receive",
            Operation::Send => "send",
            Operation::Unwrap => "unwrap",
            Operation::ReceiveInstructions => "receive-instructions",
            Operation::SendInstructions => "send-instructions",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Account that now exists.
    Address(Pubkey),
    /// Confirmed transaction.
    Signature(Signature),
}

impl ActionOutcome {
    pub fn explorer_link(&self, cluster: &str) -> ExplorerLink {
        match self {
            ActionOutcome::Address(address) => ExplorerLink::address(*address, cluster),
            ActionOutcome::Signature(signature) => ExplorerLink::transaction(*signature, cluster),
        }
    }
}

#[async_trait]
pub trait PaymentAction: Send + Sync {
    fn operation(&self) -> Operation;

    async fn execute(
        &self,
        rpc: &mut dyn PaymentRpc,
        payer: &Keypair,
    ) -> Result<ActionOutcome, RpcError>;
}

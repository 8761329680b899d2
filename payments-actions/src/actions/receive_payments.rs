use async_trait::async_trait;
use solana_sdk::{pubkey::Pubkey, signature::Keypair};

use super::{get_or_create_ata_interface, ActionOutcome, Operation, PaymentAction, PaymentRpc};
use crate::rpc::RpcError;

/// Makes sure `recipient` has a Light Token account for `mint`.
#[derive(Debug, Clone)]
pub struct ReceivePayments {
    pub mint: Pubkey,
    pub recipient: Pubkey,
}

#[async_trait]
impl PaymentAction for ReceivePayments {
    fn operation(&self) -> Operation {
        Operation::Receive
    }

    async fn execute(
        &self,
        rpc: &mut dyn PaymentRpc,
        payer: &Keypair,
    ) -> Result<ActionOutcome, RpcError> {
        let ata = get_or_create_ata_interface(rpc, payer, &self.mint, &self.recipient).await?;
        Ok(ActionOutcome::Address(ata))
    }
}

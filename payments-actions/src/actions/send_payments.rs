use async_trait::async_trait;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};

use super::{transfer_interface, ActionOutcome, Operation, PaymentAction, PaymentRpc};
use crate::{rpc::RpcError, token::get_associated_token_address};

/// Sends `amount` from the payer's Light Token account to the recipient's.
#[derive(Debug, Clone)]
pub struct SendPayments {
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[async_trait]
impl PaymentAction for SendPayments {
    fn operation(&self) -> Operation {
        Operation::Send
    }

    async fn execute(
        &self,
        rpc: &mut dyn PaymentRpc,
        payer: &Keypair,
    ) -> Result<ActionOutcome, RpcError> {
        let source = get_associated_token_address(&payer.pubkey(), &self.mint);
        let destination = get_associated_token_address(&self.recipient, &self.mint);

        let signature = transfer_interface(
            rpc,
            payer,
            &source,
            &self.mint,
            &destination,
            payer,
            self.amount,
        )
        .await?;
        Ok(ActionOutcome::Signature(signature))
    }
}

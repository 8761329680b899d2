use async_trait::async_trait;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use tracing::info;

use crate::{
    actions::{ActionOutcome, Operation, PaymentAction},
    rpc::{custom_error, PaymentRpc, RpcError},
    token::{get_associated_token_address, load_ata_instructions, CreateAssociatedTokenAccount},
};

/// Idempotently creates the recipient's Light Token account and, when the
/// recipient is the payer, loads their SPL and compressed balances into it.
#[derive(Debug, Clone)]
pub struct ReceivePaymentsInstructions {
    pub mint: Pubkey,
    pub recipient: Pubkey,
}

#[async_trait]
impl PaymentAction for ReceivePaymentsInstructions {
    fn operation(&self) -> Operation {
        Operation::ReceiveInstructions
    }

    async fn execute(
        &self,
        rpc: &mut dyn PaymentRpc,
        payer: &Keypair,
    ) -> Result<ActionOutcome, RpcError> {
        let ata = get_associated_token_address(&self.recipient, &self.mint);
        let create = CreateAssociatedTokenAccount::new(payer.pubkey(), self.recipient, self.mint)
            .idempotent()
            .instruction()
            .map_err(custom_error)?;

        // Loading moves the recipient's tokens, which only the payer can sign for here.
        let mut load = if self.recipient == payer.pubkey() {
            load_ata_instructions(rpc, payer.pubkey(), ata, self.recipient, self.mint).await?
        } else {
            info!(
                "Recipient {} is not the payer, existing SPL and compressed balances stay where they are",
                self.recipient
            );
            Vec::new()
        };
        load.retain(|ix| ix != &create);

        let mut instructions = Vec::with_capacity(load.len() + 1);
        instructions.push(create);
        instructions.extend(load);

        let signature = rpc
            .create_and_send_transaction(&instructions, &payer.pubkey(), &[payer])
            .await?;
        Ok(ActionOutcome::Signature(signature))
    }
}

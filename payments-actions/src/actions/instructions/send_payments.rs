use async_trait::async_trait;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};

use crate::{
    actions::{ActionOutcome, Operation, PaymentAction},
    rpc::{custom_error, PaymentRpc, RpcError},
    token::{get_associated_token_address, load_ata_instructions, Transfer},
};

#[derive(Debug, Clone)]
pub struct SendPaymentsInstructions {
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[async_trait]
impl PaymentAction for SendPaymentsInstructions {
    fn operation(&self) -> Operation {
        Operation::SendInstructions
    }

    async fn execute(
        &self,
        rpc: &mut dyn PaymentRpc,
        payer: &Keypair,
    ) -> Result<ActionOutcome, RpcError> {
        let owner = payer.pubkey();
        let source = get_associated_token_address(&owner, &self.mint);
        let destination = get_associated_token_address(&self.recipient, &self.mint);

        let mut instructions =
            load_ata_instructions(rpc, owner, source, owner, self.mint).await?;
        instructions.push(
            Transfer {
                source,
                destination,
                amount: self.amount,
                authority: owner,
                fee_payer: None,
            }
            .instruction()
            .map_err(custom_error)?,
        );

        let signature = rpc
            .create_and_send_transaction(&instructions, &owner, &[payer])
            .await?;
        Ok(ActionOutcome::Signature(signature))
    }
}

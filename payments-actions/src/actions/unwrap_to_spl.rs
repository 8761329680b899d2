use async_trait::async_trait;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use tracing::debug;

use super::{unwrap, ActionOutcome, Operation, PaymentAction, PaymentRpc};
use crate::rpc::RpcError;

/// Moves `amount` from the payer's Light Token account to their SPL or
/// Token-2022 ATA, e.g. before withdrawing to an exchange.
#[derive(Debug, Clone)]
pub struct UnwrapToSpl {
    pub mint: Pubkey,
    pub amount: u64,
}

#[async_trait]
impl PaymentAction for UnwrapToSpl {
    fn operation(&self) -> Operation {
        Operation::Unwrap
    }

    async fn execute(
        &self,
        rpc: &mut dyn PaymentRpc,
        payer: &Keypair,
    ) -> Result<ActionOutcome, RpcError> {
        let (destination, signature) =
            unwrap(rpc, payer, payer, &self.mint, &payer.pubkey(), self.amount).await?;
        debug!("Unwrap destination {}", destination);
        Ok(ActionOutcome::Signature(signature))
    }
}

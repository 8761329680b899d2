use std::fmt::{Display, Formatter};

use solana_sdk::{pubkey::Pubkey, signature::Signature};

pub const EXPLORER_URL: &str = "https://explorer.solana.com";

/// Link to an account or transaction on the Solana explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerLink {
    Address { address: Pubkey, cluster: String },
    Transaction { signature: Signature, cluster: String },
}

impl ExplorerLink {
    pub fn address(address: Pubkey, cluster: impl Into<String>) -> Self {
        Self::Address {
            address,
            cluster: cluster.into(),
        }
    }

    pub fn transaction(signature: Signature, cluster: impl Into<String>) -> Self {
        Self::Transaction {
            signature,
            cluster: cluster.into(),
        }
    }
}

impl Display for ExplorerLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExplorerLink::Address { address, cluster } => {
                write!(f, "{}/address/{}?cluster={}", EXPLORER_URL, address, cluster)
            }
            ExplorerLink::Transaction { signature, cluster } => {
                write!(f, "{}/tx/{}?cluster={}", EXPLORER_URL, signature, cluster)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_link() {
        let address = Pubkey::new_unique();
        assert_eq!(
            ExplorerLink::address(address, "devnet").to_string(),
            format!("https://explorer.solana.com/address/{}?cluster=devnet", address)
        );
    }

    #[test]
    fn test_transaction_link() {
        let signature = Signature::from([7u8; 64]);
        assert_eq!(
            ExplorerLink::transaction(signature, "devnet").to_string(),
            format!("https://explorer.solana.com/tx/{}?cluster=devnet", signature)
        );
    }
}

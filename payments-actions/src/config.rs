use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::actions::Operation;

pub const MINT_PLACEHOLDER: &str = "your-mint-pubkey";
pub const RECIPIENT_PLACEHOLDER: &str = "your-recipient-pubkey";

/// 1 USDC in base units.
pub const DEFAULT_AMOUNT: u64 = 1_000_000;
pub const DEFAULT_CLUSTER: &str = "devnet";
pub const HELIUS_DEVNET_URL: &str = "https://devnet.helius-rpc.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unconfigured {
    Mint,
    MintAndRecipient,
}

impl Display for Unconfigured {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Unconfigured::Mint => write!(f, "Configure mint"),
            Unconfigured::MintAndRecipient => write!(f, "Configure mint and recipient"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0}")]
    Placeholder(Unconfigured),

    #[error("Invalid {field} `{value}`: {reason}")]
    InvalidPubkey {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Amount must be greater than zero for {0}")]
    ZeroAmount(Operation),

    #[error("{0} requires a recipient")]
    MissingRecipient(Operation),
}

/// Raw settings exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfig {
    pub mint: String,
    pub recipient: Option<String>,
    pub amount: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            mint: MINT_PLACEHOLDER.to_string(),
            recipient: Some(RECIPIENT_PLACEHOLDER.to_string()),
            amount: DEFAULT_AMOUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub mint: Pubkey,
    pub recipient: Option<Pubkey>,
    pub amount: u64,
}

impl ValidatedConfig {
    pub fn require_recipient(&self, operation: Operation) -> Result<Pubkey, ConfigError> {
        self.recipient
            .ok_or(ConfigError::MissingRecipient(operation))
    }
}

impl PaymentConfig {
    /// Checks placeholders first, then parses identifiers and the amount.
    /// Performs no I/O.
    pub fn validate(&self, operation: Operation) -> Result<ValidatedConfig, ConfigError> {
        let needs_recipient = operation.requires_recipient();
        let mint_unset = self.mint == MINT_PLACEHOLDER;
        let recipient_unset = needs_recipient
            && self
                .recipient
                .as_deref()
                .map_or(true, |r| r == RECIPIENT_PLACEHOLDER);

        if mint_unset || recipient_unset {
            return Err(ConfigError::Placeholder(if needs_recipient {
                Unconfigured::MintAndRecipient
            } else {
                Unconfigured::Mint
            }));
        }

        let mint = parse_pubkey("mint", &self.mint)?;
        let recipient = if needs_recipient {
            self.recipient
                .as_deref()
                .map(|r| parse_pubkey("recipient", r))
                .transpose()?
        } else {
            None
        };

        if operation.moves_tokens() && self.amount == 0 {
            return Err(ConfigError::ZeroAmount(operation));
        }

        Ok(ValidatedConfig {
            mint,
            recipient,
            amount: self.amount,
        })
    }
}

fn parse_pubkey(field: &'static str, value: &str) -> Result<Pubkey, ConfigError> {
    Pubkey::from_str(value).map_err(|e| ConfigError::InvalidPubkey {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Devnet endpoint serving both Solana RPC and the Photon indexer.
/// A missing key still yields a URL; the request then fails remotely.
pub fn helius_devnet_url(api_key: Option<&str>) -> String {
    format!("{}?api-key={}", HELIUS_DEVNET_URL, api_key.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> PaymentConfig {
        PaymentConfig {
            mint: Pubkey::new_unique().to_string(),
            recipient: Some(Pubkey::new_unique().to_string()),
            amount: DEFAULT_AMOUNT,
        }
    }

    #[test]
    fn test_default_config_hits_placeholder_guard() {
        let config = PaymentConfig::default();

        let err = config.validate(Operation::Send).unwrap_err();
        assert_eq!(err, ConfigError::Placeholder(Unconfigured::MintAndRecipient));
        assert_eq!(err.to_string(), "Configure mint and recipient");

        let err = config.validate(Operation::Unwrap).unwrap_err();
        assert_eq!(err.to_string(), "Configure mint");
    }

    #[test]
    fn test_recipient_placeholder_alone_is_rejected() {
        let config = PaymentConfig {
            recipient: Some(RECIPIENT_PLACEHOLDER.to_string()),
            ..configured()
        };

        assert_eq!(
            config.validate(Operation::Receive),
            Err(ConfigError::Placeholder(Unconfigured::MintAndRecipient))
        );
        // unwrap ignores the recipient
        assert!(config.validate(Operation::Unwrap).is_ok());
    }

    #[test]
    fn test_missing_recipient_is_placeholder() {
        let config = PaymentConfig {
            recipient: None,
            ..configured()
        };

        assert!(matches!(
            config.validate(Operation::SendInstructions),
            Err(ConfigError::Placeholder(_))
        ));
    }

    #[test]
    fn test_invalid_pubkey() {
        let config = PaymentConfig {
            mint: "not-a-pubkey".to_string(),
            ..configured()
        };

        match config.validate(Operation::Send) {
            Err(ConfigError::InvalidPubkey { field, value, .. }) => {
                assert_eq!(field, "mint");
                assert_eq!(value, "not-a-pubkey");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_zero_amount_only_rejected_when_moving_tokens() {
        let config = PaymentConfig {
            amount: 0,
            ..configured()
        };

        assert_eq!(
            config.validate(Operation::Send),
            Err(ConfigError::ZeroAmount(Operation::Send))
        );
        assert_eq!(
            config.validate(Operation::Unwrap),
            Err(ConfigError::ZeroAmount(Operation::Unwrap))
        );
        assert!(config.validate(Operation::Receive).is_ok());
        assert!(config.validate(Operation::ReceiveInstructions).is_ok());
    }

    #[test]
    fn test_valid_config_passes_amount_through() {
        let config = configured();
        let validated = config.validate(Operation::Send).unwrap();

        assert_eq!(validated.amount, 1_000_000);
        assert_eq!(validated.mint.to_string(), config.mint);
        assert_eq!(
            validated.require_recipient(Operation::Send).unwrap().to_string(),
            config.recipient.unwrap()
        );
    }

    #[test]
    fn test_helius_devnet_url() {
        assert_eq!(
            helius_devnet_url(Some("abc")),
            "https://devnet.helius-rpc.com?api-key=abc"
        );
        assert_eq!(
            helius_devnet_url(None),
            "https://devnet.helius-rpc.com?api-key="
        );
    }
}

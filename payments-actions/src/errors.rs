use std::path::PathBuf;

use thiserror::Error;

use crate::{config::ConfigError, rpc::RpcError};

#[derive(Error, Debug)]
pub enum PaymentsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read keypair from {}: {reason}", .path.display())]
    Keypair { path: PathBuf, reason: String },

    #[error(transparent)]
    Rpc(#[from] RpcError),
}

impl PaymentsError {
    /// 1 for configuration errors, 2 for everything that failed at run time.
    pub fn exit_code(&self) -> u8 {
        match self {
            PaymentsError::Config(_) => 1,
            PaymentsError::Keypair { .. } | PaymentsError::Rpc(_) => 2,
        }
    }
}

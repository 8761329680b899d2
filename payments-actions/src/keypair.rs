use std::path::{Path, PathBuf};

use solana_sdk::signature::{read_keypair_file, Keypair};
use tracing::debug;

use crate::errors::PaymentsError;

/// `$HOME/.config/solana/id.json`, with a literal `~` when `HOME` is unset.
pub fn default_keypair_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "~".to_string());
    PathBuf::from(home).join(".config/solana/id.json")
}

/// Reads a keypair stored as a JSON array of 64 bytes.
pub fn load_keypair(path: &Path) -> Result<Keypair, PaymentsError> {
    debug!("Loading keypair from {}", path.display());
    read_keypair_file(path).map_err(|e| PaymentsError::Keypair {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

//! CLI defaults loaded from environment variables.

use anyhow::{Context, Result};
use hdseed_core::DerivationPath;
use hdseed_core::entropy::check_bit_size;

/// Path used by `derive` when `--path` is not given.
pub const DEFAULT_PATH: &str = "m/44'/195'/0'/0/0";

/// Entropy size used by `generate` when `--bits` is not given.
pub const DEFAULT_BIT_SIZE: usize = 256;

#[derive(Clone, Debug)]
pub struct Config {
    /// Derivation path for `derive`.
    pub default_path: DerivationPath,
    /// Entropy bits for `generate`.
    pub bit_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default_path: DerivationPath = lookup("HDSEED_DEFAULT_PATH")
            .unwrap_or_else(|| DEFAULT_PATH.to_string())
            .parse()
            .context("HDSEED_DEFAULT_PATH must be a derivation path such as m/44'/0'/0'/0/0")?;

        let bit_size: usize = lookup("HDSEED_BIT_SIZE")
            .unwrap_or_else(|| DEFAULT_BIT_SIZE.to_string())
            .parse()
            .context("HDSEED_BIT_SIZE must be a positive integer")?;
        check_bit_size(bit_size).context("HDSEED_BIT_SIZE is not a supported entropy size")?;

        Ok(Config {
            default_path,
            bit_size,
        })
    }
}

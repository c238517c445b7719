//! End-to-end derivation: phrase, passphrase and path to a key pair.

use serde::Serialize;
use tracing::debug;

use crate::error::HdError;
use crate::keys::{ExtendedKey, KeyPair};
use crate::mnemonic;
use crate::path::DerivationPath;

/// The terminal key of a path walk together with its position in the tree.
#[derive(Debug, Clone)]
pub struct DerivedKey {
    pub path: DerivationPath,
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub child_number: u32,
    pub key_pair: KeyPair,
}

/// Non-secret summary of a [`DerivedKey`] for structured output.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedKeyInfo {
    pub path: DerivationPath,
    pub depth: u8,
    pub parent_fingerprint: String,
    pub child_number: u32,
    pub public_key: String,
}

impl DerivedKey {
    fn from_extended(path: DerivationPath, key: &ExtendedKey) -> Result<Self, HdError> {
        Ok(Self {
            path,
            depth: key.depth(),
            parent_fingerprint: key.parent_fingerprint(),
            child_number: key.child_number(),
            key_pair: key.key_pair()?,
        })
    }

    pub fn info(&self) -> DerivedKeyInfo {
        DerivedKeyInfo {
            path: self.path.clone(),
            depth: self.depth,
            parent_fingerprint: hex::encode(self.parent_fingerprint),
            child_number: self.child_number,
            public_key: hex::encode(self.key_pair.public_key()),
        }
    }
}

/// Derive the key pair at `path` for a mnemonic phrase.
///
/// Stages run in order: validate phrase, parse path, stretch seed, master
/// key, walk path. The first failure aborts the whole derivation.
pub fn derive_key_pair(phrase: &str, passphrase: &str, path: &str) -> Result<DerivedKey, HdError> {
    let mnemonic = mnemonic::parse_checked(phrase)?;
    debug!(words = mnemonic.word_count(), "phrase validated");

    let path: DerivationPath = path.parse()?;
    debug!(%path, steps = path.len(), "path parsed");

    let seed = mnemonic.to_seed(passphrase);
    drop(mnemonic);
    let master = ExtendedKey::from_seed(&seed)?;
    drop(seed);
    debug!(fingerprint = %hex::encode(master.fingerprint()), "master key derived");

    let child = master.derive_path(&path)?;
    debug!(depth = child.depth(), child = child.child_number(), "path walked");

    DerivedKey::from_extended(path, &child)
}

//! # hdseed-core: mnemonic phrases to hierarchical deterministic keys.
//!
//! Generates and validates BIP-39 mnemonics, stretches them into seeds,
//! derives BIP-32 master keys and walks derivation paths to secp256k1
//! key pairs. Every operation is pure and synchronous; each derivation step
//! returns a new immutable value.
//!
//! # Modules
//!
//! - [`error`]: `MnemonicError`, `PathError`, `DerivationError`, `HdError`
//! - [`entropy`]: Entropy sources and bit-size validation
//! - [`wordlist`]: 11-bit word codec with SHA-256 checksum
//! - [`mnemonic`]: Mnemonic generation, parsing and validation
//! - [`seed`]: PBKDF2-HMAC-SHA512 seed stretching
//! - [`keys`]: Extended keys, master key generation, key pairs
//! - [`path`]: Derivation path parsing
//! - [`ckd`]: Child key derivation
//! - [`derive`]: End-to-end phrase-to-key pipeline

pub mod ckd;
pub mod constants;
pub mod derive;
pub mod entropy;
pub mod error;
pub mod hash;
pub mod keys;
pub mod mnemonic;
pub mod path;
pub mod seed;
pub mod wordlist;

// Re-exports for convenient access
pub use derive::{DerivedKey, DerivedKeyInfo, derive_key_pair};
pub use entropy::{EntropySource, OsEntropy};
pub use error::{DerivationError, HdError, MnemonicError, PathError};
pub use keys::{ExtendedKey, KeyMaterial, KeyPair};
pub use mnemonic::{Mnemonic, derive_seed, validate};
pub use path::{ChildIndex, DerivationPath};
pub use seed::Seed;
pub use wordlist::Wordlist;

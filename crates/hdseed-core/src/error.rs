//! Error types for mnemonic handling and key derivation.
use thiserror::Error;

/// Failures while generating, encoding or validating a mnemonic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// Entropy size is not one of 128, 160, 192, 224 or 256 bits.
    #[error("invalid bit size: {bits} (expected 128, 160, 192, 224 or 256)")]
    InvalidBitSize {
        /// The rejected size in bits.
        bits: usize,
    },

    /// The system randomness source could not be read.
    #[error("entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    /// Phrase does not have 12, 15, 18, 21 or 24 words.
    #[error("invalid word count: {0}")]
    InvalidWordCount(usize),

    /// A word is not present in the dictionary.
    #[error("unknown word {word:?} at position {position}")]
    UnknownWord {
        /// The offending word, as supplied.
        word: String,
        /// Zero-based position in the phrase.
        position: usize,
    },

    /// The checksum bits do not match SHA-256 of the decoded entropy.
    #[error("checksum mismatch: expected {expected:#04x}, found {found:#04x}")]
    ChecksumMismatch {
        /// Checksum computed from the entropy bits.
        expected: u8,
        /// Checksum carried by the phrase.
        found: u8,
    },

    /// Seed derivation was requested for a phrase that fails validation.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(Box<MnemonicError>),

    /// Phrase or passphrase bytes are not valid UTF-8.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid derivation path: {0:?}")] InvalidPath(String),
    #[error("cannot parse index in component {component:?}")] IndexParseError { component: String },
    #[error("index {index} in component {component:?} is out of range (must be < 2^31)")] IndexOutOfRange { component: String, index: u64 },
}

/// Failures while deriving extended keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DerivationError {
    /// Seed length outside the 16..=64 byte range.
    #[error("invalid seed length: {0} bytes")]
    InvalidSeedLength(usize),

    /// Master scalar is zero or not below the curve order.
    #[error("invalid master key")]
    InvalidMasterKey,

    /// A hardened child was requested from a public-only parent.
    #[error("hardened derivation of index {index:#010x} requires a private key")]
    HardenedDerivationRequiresPrivateKey { index: u32 },

    /// The derived child is not a valid key for this index.
    #[error("invalid child key at index {index:#010x}")]
    InvalidChildKey { index: u32 },

    /// The parent is already at depth 255.
    #[error("depth overflow: parent depth is {depth}")]
    DepthOverflow { depth: u8 },

    /// The key carries no private scalar.
    #[error("private key unavailable for a public-only extended key")]
    PrivateKeyUnavailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HdError {
    #[error(transparent)] Mnemonic(#[from] MnemonicError),
    #[error(transparent)] Path(#[from] PathError),
    #[error(transparent)] Derivation(#[from] DerivationError),
}

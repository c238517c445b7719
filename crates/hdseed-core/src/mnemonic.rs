//! BIP-39 mnemonic generation, validation and seed derivation.

use std::fmt;

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

use crate::entropy::{self, EntropySource, OsEntropy};
use crate::error::MnemonicError;
use crate::seed::Seed;
use crate::wordlist::Wordlist;

/// A validated mnemonic phrase and the entropy it encodes.
///
/// Entropy is zeroized on drop. `Debug` output never includes the words.
#[derive(Clone)]
pub struct Mnemonic {
    words: Vec<&'static str>,
    entropy: Zeroizing<Vec<u8>>,
    created_at: Option<DateTime<Utc>>,
}

impl Mnemonic {
    /// Generate a new mnemonic from `bits` of OS entropy.
    pub fn generate(bits: usize) -> Result<Self, MnemonicError> {
        Self::generate_with(&mut OsEntropy, bits)
    }

    /// Generate a new mnemonic from `bits` of entropy drawn from `source`.
    pub fn generate_with<S: EntropySource + ?Sized>(
        source: &mut S,
        bits: usize,
    ) -> Result<Self, MnemonicError> {
        let entropy = entropy::generate(source, bits)?;
        let mut mnemonic = Self::from_entropy(&entropy)?;
        mnemonic.created_at = Some(Utc::now());
        Ok(mnemonic)
    }

    /// Encode existing entropy (16, 20, 24, 28 or 32 bytes).
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, MnemonicError> {
        let words = Wordlist::english().encode(entropy)?;
        Ok(Self {
            words,
            entropy: Zeroizing::new(entropy.to_vec()),
            created_at: None,
        })
    }

    /// Parse and validate a whitespace-separated phrase.
    ///
    /// Words must match the dictionary exactly; no case folding is applied.
    pub fn parse(phrase: &str) -> Result<Self, MnemonicError> {
        let list = Wordlist::english();
        let supplied: Vec<&str> = phrase.split_whitespace().collect();
        let entropy = list.decode(&supplied)?;
        // Decoding succeeded, so every word has an index.
        let words = supplied
            .iter()
            .filter_map(|w| list.index_of(w).and_then(|i| list.word_at(i)))
            .collect();
        Ok(Self {
            words,
            entropy,
            created_at: None,
        })
    }

    /// The phrase, words joined by single spaces.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The encoded entropy. Handle with care.
    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    /// When this mnemonic was generated; `None` if it was parsed or encoded
    /// from caller-supplied data.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Stretch this phrase and `passphrase` into a seed.
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        Seed::derive(&self.phrase(), passphrase)
    }
}

impl PartialEq for Mnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Mnemonic {}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("words", &"[REDACTED]")
            .field("word_count", &self.words.len())
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Check that `phrase` is a valid mnemonic.
pub fn validate(phrase: &str) -> Result<(), MnemonicError> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    Wordlist::english().decode(&words).map(drop)
}

/// Validate `phrase`, then stretch its canonical single-spaced form with
/// `passphrase` into a seed.
///
/// Validation failures are wrapped in [`MnemonicError::InvalidMnemonic`].
pub fn derive_seed(phrase: &str, passphrase: &str) -> Result<Seed, MnemonicError> {
    Ok(parse_checked(phrase)?.to_seed(passphrase))
}

/// [`Mnemonic::parse`] with failures wrapped in [`MnemonicError::InvalidMnemonic`].
pub(crate) fn parse_checked(phrase: &str) -> Result<Mnemonic, MnemonicError> {
    Mnemonic::parse(phrase).map_err(|e| MnemonicError::InvalidMnemonic(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SUPPORTED_BIT_SIZES, SUPPORTED_WORD_COUNTS};

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn generate_all_sizes() {
        for (bits, words) in SUPPORTED_BIT_SIZES.iter().zip(SUPPORTED_WORD_COUNTS) {
            let m = Mnemonic::generate(*bits).unwrap();
            assert_eq!(m.word_count(), words, "bits {bits}");
            assert_eq!(m.entropy().len(), bits / 8);
            assert!(m.created_at().is_some());
            validate(&m.phrase()).expect("generated phrase should validate");
        }
    }

    #[test]
    fn generate_rejects_invalid_bit_size() {
        for bits in [100, 150, 300] {
            assert_eq!(
                Mnemonic::generate(bits).unwrap_err(),
                MnemonicError::InvalidBitSize { bits }
            );
        }
    }

    #[test]
    fn parse_recovers_entropy() {
        let m = Mnemonic::parse(ABANDON_ABOUT).unwrap();
        assert_eq!(m.entropy(), &[0u8; 16]);
        assert_eq!(m.phrase(), ABANDON_ABOUT);
        assert!(m.created_at().is_none());
    }

    #[test]
    fn parse_normalizes_whitespace() {
        let messy = ABANDON_ABOUT.split(' ').collect::<Vec<_>>().join(" \t ");
        let m = Mnemonic::parse(&format!("  {messy}\n")).unwrap();
        assert_eq!(m.phrase(), ABANDON_ABOUT);
    }

    #[test]
    fn parse_is_case_sensitive() {
        let upper = ABANDON_ABOUT.to_uppercase();
        assert!(matches!(
            Mnemonic::parse(&upper),
            Err(MnemonicError::UnknownWord { position: 0, .. })
        ));
    }

    #[test]
    fn from_entropy_roundtrip() {
        let entropy = [0x80u8; 16];
        let m = Mnemonic::from_entropy(&entropy).unwrap();
        assert_eq!(
            m.phrase(),
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage above"
        );
        assert_eq!(Mnemonic::parse(&m.phrase()).unwrap(), m);
    }

    #[test]
    fn validate_rejects_bad_checksum() {
        let words = vec!["abandon"; 12].join(" ");
        assert!(matches!(
            validate(&words),
            Err(MnemonicError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn derive_seed_requires_valid_phrase() {
        let err = derive_seed("abandon abandon", "").unwrap_err();
        assert_eq!(
            err,
            MnemonicError::InvalidMnemonic(Box::new(MnemonicError::InvalidWordCount(2)))
        );
    }

    #[test]
    fn derive_seed_matches_to_seed() {
        let m = Mnemonic::parse(ABANDON_ABOUT).unwrap();
        assert_eq!(derive_seed(ABANDON_ABOUT, "TREZOR").unwrap(), m.to_seed("TREZOR"));
    }

    #[test]
    fn derive_seed_ignores_surrounding_whitespace() {
        let reference = derive_seed(ABANDON_ABOUT, "").unwrap();
        assert_eq!(
            hex::encode(&reference.as_bytes()[..8]),
            "5eb00bbddcf06908"
        );

        let piped = format!("{ABANDON_ABOUT}\n");
        assert_eq!(derive_seed(&piped, "").unwrap(), reference);

        let tabbed = ABANDON_ABOUT.replace(' ', "\t");
        assert_eq!(derive_seed(&format!("  {tabbed}\r\n"), "").unwrap(), reference);
    }

    #[test]
    fn debug_hides_words() {
        let m = Mnemonic::parse(ABANDON_ABOUT).unwrap();
        let debug = format!("{m:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("abandon"));
    }
}

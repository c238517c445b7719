//! BIP39 seed stretching.
//!
//! `seed = PBKDF2-HMAC-SHA512(password = NFKD(phrase),
//! salt = "mnemonic" || NFKD(passphrase), 2048 rounds, 64 bytes)`.
//!
//! The phrase is not validated here; see
//! [`derive_seed`](crate::mnemonic::derive_seed) for the checked entry point.

use std::fmt;

use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{PBKDF2_ROUNDS, SEED_LEN, SEED_SALT_PREFIX};
use crate::error::MnemonicError;

/// A 64-byte seed for master key generation.
///
/// Secret material is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; SEED_LEN],
}

impl Seed {
    /// Stretch `phrase` and `passphrase` into a seed.
    pub fn derive(phrase: &str, passphrase: &str) -> Self {
        let password = Zeroizing::new(phrase.nfkd().collect::<String>());
        let mut salt = Zeroizing::new(String::from(SEED_SALT_PREFIX));
        salt.extend(passphrase.nfkd());

        let mut bytes = [0u8; SEED_LEN];
        pbkdf2::pbkdf2_hmac::<Sha512>(
            password.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
            &mut bytes,
        );
        Self { bytes }
    }

    /// Like [`Seed::derive`], for raw input that may not be valid UTF-8.
    pub fn derive_from_utf8(phrase: &[u8], passphrase: &[u8]) -> Result<Self, MnemonicError> {
        let phrase = std::str::from_utf8(phrase)
            .map_err(|e| MnemonicError::InvalidEncoding(format!("phrase: {e}")))?;
        let passphrase = std::str::from_utf8(passphrase)
            .map_err(|e| MnemonicError::InvalidEncoding(format!("passphrase: {e}")))?;
        Ok(Self::derive(phrase, passphrase))
    }

    /// Create a seed from raw bytes.
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self { bytes }
    }

    /// Get the raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.bytes
    }
}

impl Clone for Seed {
    fn clone(&self) -> Self {
        Self { bytes: self.bytes }
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn reference_seed_empty_passphrase() {
        let seed = Seed::derive(ABANDON_ABOUT, "");
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn reference_seed_trezor_passphrase() {
        let seed = Seed::derive(ABANDON_ABOUT, "TREZOR");
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553\
             1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn derive_deterministic() {
        let a = Seed::derive(ABANDON_ABOUT, "pass");
        let b = Seed::derive(ABANDON_ABOUT, "pass");
        assert_eq!(a, b);
        assert_ne!(a, Seed::derive(ABANDON_ABOUT, "Pass"));
    }

    #[test]
    fn passphrase_is_nfkd_normalized() {
        // U+00E9 (precomposed) and "e" + U+0301 (combining) normalize alike.
        let composed = Seed::derive(ABANDON_ABOUT, "caf\u{e9}");
        let decomposed = Seed::derive(ABANDON_ABOUT, "cafe\u{301}");
        assert_eq!(composed, decomposed);
    }

    #[test]
    fn derive_from_utf8_matches_str() {
        let seed = Seed::derive_from_utf8(ABANDON_ABOUT.as_bytes(), b"TREZOR").unwrap();
        assert_eq!(seed, Seed::derive(ABANDON_ABOUT, "TREZOR"));
    }

    #[test]
    fn derive_from_utf8_rejects_malformed() {
        let err = Seed::derive_from_utf8(&[0x61, 0xff, 0x62], b"").unwrap_err();
        assert!(matches!(err, MnemonicError::InvalidEncoding(ref m) if m.starts_with("phrase")));

        let err = Seed::derive_from_utf8(ABANDON_ABOUT.as_bytes(), &[0xc3]).unwrap_err();
        assert!(matches!(err, MnemonicError::InvalidEncoding(ref m) if m.starts_with("passphrase")));
    }

    #[test]
    fn seed_debug_hides_bytes() {
        let seed = Seed::from_bytes([0xAB; SEED_LEN]);
        let debug = format!("{seed:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("ab"));
    }
}

//! Cryptographically secure entropy for mnemonic generation.

use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::constants::SUPPORTED_BIT_SIZES;
use crate::error::MnemonicError;

/// A source of random bytes.
///
/// Implementations must be cryptographically secure. A failed read is
/// reported once and never retried.
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), MnemonicError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), MnemonicError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| MnemonicError::EntropySourceUnavailable(e.to_string()))
    }
}

/// Check that `bits` is a supported entropy size.
pub fn check_bit_size(bits: usize) -> Result<(), MnemonicError> {
    if SUPPORTED_BIT_SIZES.contains(&bits) {
        Ok(())
    } else {
        Err(MnemonicError::InvalidBitSize { bits })
    }
}

/// Draw `bits / 8` random bytes from `source`.
///
/// The size is validated before the source is touched.
pub fn generate<S: EntropySource + ?Sized>(
    source: &mut S,
    bits: usize,
) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
    check_bit_size(bits)?;
    let mut entropy = Zeroizing::new(vec![0u8; bits / 8]);
    source.fill(&mut entropy)?;
    Ok(entropy)
}

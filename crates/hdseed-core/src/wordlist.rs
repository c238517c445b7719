//! Wordlist codec: entropy plus checksum bits to and from dictionary words.
//!
//! # Encoding
//!
//! 1. `checksum = SHA-256(entropy)`, keep the first `ENT / 32` bits.
//! 2. Append the checksum bits to the entropy bits (`ENT + ENT / 32` bits,
//!    always a multiple of 11).
//! 3. Split into 11-bit groups; each group indexes the dictionary.
//!
//! Decoding reverses the mapping and recomputes the checksum. Word lookup is
//! exact and case-sensitive.

use zeroize::Zeroizing;

use crate::constants::{BITS_PER_WORD, SUPPORTED_WORD_COUNTS, WORDLIST_LEN};
use crate::entropy::check_bit_size;
use crate::error::MnemonicError;
use crate::hash::sha256;

/// An ordered dictionary of exactly 2048 words.
#[derive(Clone, Copy)]
pub struct Wordlist {
    words: &'static [&'static str; WORDLIST_LEN],
    sorted: bool,
}

impl Wordlist {
    /// Wrap a static dictionary.
    pub fn new(words: &'static [&'static str; WORDLIST_LEN]) -> Self {
        let sorted = words.windows(2).all(|pair| pair[0] < pair[1]);
        Self { words, sorted }
    }

    /// The canonical BIP39 English dictionary.
    pub fn english() -> Self {
        Self::new(bip39::Language::English.word_list())
    }

    /// Word at `index`, if `index < 2048`.
    pub fn word_at(&self, index: u16) -> Option<&'static str> {
        self.words.get(usize::from(index)).copied()
    }

    /// Dictionary index of `word`.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        let position = if self.sorted {
            self.words.binary_search_by(|probe| (*probe).cmp(word)).ok()
        } else {
            self.words.iter().position(|w| *w == word)
        };
        position.map(|i| i as u16)
    }

    /// Encode entropy into a word sequence.
    pub fn encode(&self, entropy: &[u8]) -> Result<Vec<&'static str>, MnemonicError> {
        let ent_bits = entropy.len() * 8;
        check_bit_size(ent_bits)?;

        let checksum = sha256(entropy)[0];
        let total_bits = ent_bits + ent_bits / 32;

        let mut data = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
        data.extend_from_slice(entropy);
        data.push(checksum);

        let words = (0..total_bits / BITS_PER_WORD)
            .map(|i| {
                let index = (0..BITS_PER_WORD)
                    .fold(0u16, |acc, j| (acc << 1) | bit_at(&data, i * BITS_PER_WORD + j));
                self.words[usize::from(index)]
            })
            .collect();
        Ok(words)
    }

    /// Decode a word sequence back to entropy, verifying the checksum.
    pub fn decode<S: AsRef<str>>(&self, words: &[S]) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
        if !SUPPORTED_WORD_COUNTS.contains(&words.len()) {
            return Err(MnemonicError::InvalidWordCount(words.len()));
        }

        let total_bits = words.len() * BITS_PER_WORD;
        let cs_bits = total_bits / 33;
        let ent_bytes = (total_bits - cs_bits) / 8;

        let mut data = Zeroizing::new(vec![0u8; total_bits.div_ceil(8)]);
        for (position, word) in words.iter().enumerate() {
            let word = word.as_ref();
            let index = self
                .index_of(word)
                .ok_or_else(|| MnemonicError::UnknownWord {
                    word: word.to_string(),
                    position,
                })?;
            for j in 0..BITS_PER_WORD {
                if (index >> (BITS_PER_WORD - 1 - j)) & 1 == 1 {
                    let pos = position * BITS_PER_WORD + j;
                    data[pos / 8] |= 0x80 >> (pos % 8);
                }
            }
        }

        let shift = 8 - cs_bits;
        let found = data[ent_bytes] >> shift;
        let expected = sha256(&data[..ent_bytes])[0] >> shift;
        if found != expected {
            return Err(MnemonicError::ChecksumMismatch { expected, found });
        }

        Ok(Zeroizing::new(data[..ent_bytes].to_vec()))
    }
}

impl std::fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wordlist")
            .field("first", &self.words[0])
            .field("len", &WORDLIST_LEN)
            .finish()
    }
}

fn bit_at(data: &[u8], pos: usize) -> u16 {
    u16::from((data[pos / 8] >> (7 - pos % 8)) & 1)
}

/// Encode with the English dictionary.
pub fn encode(entropy: &[u8]) -> Result<Vec<&'static str>, MnemonicError> {
    Wordlist::english().encode(entropy)
}

/// Decode with the English dictionary.
pub fn decode<S: AsRef<str>>(words: &[S]) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
    Wordlist::english().decode(words)
}

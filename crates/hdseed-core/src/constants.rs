//! Protocol constants for BIP39 mnemonics and BIP32 derivation.

/// Entropy sizes, in bits, accepted for mnemonic generation.
pub const SUPPORTED_BIT_SIZES: [usize; 5] = [128, 160, 192, 224, 256];

/// Word counts corresponding to [`SUPPORTED_BIT_SIZES`].
pub const SUPPORTED_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Number of entries in a BIP39 dictionary.
pub const WORDLIST_LEN: usize = 2048;

/// Bits encoded by a single word.
pub const BITS_PER_WORD: usize = 11;

/// PBKDF2 iteration count for seed stretching.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix prepended to the passphrase.
pub const SEED_SALT_PREFIX: &str = "mnemonic";

/// Length of a BIP39 seed in bytes.
pub const SEED_LEN: usize = 64;

/// Minimum and maximum seed lengths accepted for master key generation.
pub const MIN_SEED_LEN: usize = 16;
pub const MAX_SEED_LEN: usize = 64;

/// HMAC key for master key generation.
pub const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// First hardened child index (2^31).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Deepest level an extended key can occupy.
pub const MAX_DEPTH: u8 = u8::MAX;

/// Root marker accepted as the first path component.
pub const PATH_ROOT: &str = "m";

/// Separator between path components.
pub const PATH_SEPARATOR: char = '/';

/// Suffix marking a hardened path component.
pub const PATH_HARDENED_SUFFIX: char = '\'';

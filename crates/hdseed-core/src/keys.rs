//! Extended keys, master key generation and key pair projection.
//!
//! An [`ExtendedKey`] is a plain immutable value: key material (a secp256k1
//! scalar or point), a chain code and positional metadata. Every derivation
//! step in [`crate::ckd`] returns a new value.

use std::fmt;

use secp256k1::{PublicKey, SECP256K1, SecretKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{MASTER_HMAC_KEY, MAX_SEED_LEN, MIN_SEED_LEN};
use crate::error::DerivationError;
use crate::hash::{hash160, hmac_sha512, split_hmac};
use crate::path::ChildIndex;
use crate::seed::Seed;

/// Key material carried by an extended key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterial {
    /// A private scalar; the public point is computed on demand.
    Private(SecretKey),
    /// A public point only.
    Public(PublicKey),
}

impl KeyMaterial {
    pub fn public_key(&self) -> PublicKey {
        match self {
            KeyMaterial::Private(secret) => secret.public_key(SECP256K1),
            KeyMaterial::Public(public) => *public,
        }
    }
}

/// A BIP32 extended key.
///
/// The root has depth 0, parent fingerprint `00000000` and child number 0.
#[derive(Clone, PartialEq, Eq)]
pub struct ExtendedKey {
    pub(crate) key: KeyMaterial,
    pub(crate) chain_code: [u8; 32],
    pub(crate) depth: u8,
    pub(crate) parent_fingerprint: [u8; 4],
    pub(crate) child_number: u32,
}

impl ExtendedKey {
    /// Derive the master key from seed bytes.
    ///
    /// `I = HMAC-SHA512("Bitcoin seed", seed)`; `I_L` is the master scalar and
    /// `I_R` the chain code. Seeds must be 16 to 64 bytes long.
    pub fn master(seed: &[u8]) -> Result<Self, DerivationError> {
        if !(MIN_SEED_LEN..=MAX_SEED_LEN).contains(&seed.len()) {
            return Err(DerivationError::InvalidSeedLength(seed.len()));
        }
        let mut output = hmac_sha512(MASTER_HMAC_KEY, seed);
        let master = Self::from_master_hmac(&output);
        output.zeroize();
        master
    }

    /// Derive the master key from a BIP39 seed.
    pub fn from_seed(seed: &Seed) -> Result<Self, DerivationError> {
        Self::master(seed.as_bytes())
    }

    fn from_master_hmac(output: &[u8; 64]) -> Result<Self, DerivationError> {
        let (mut il, chain_code) = split_hmac(output);
        // Rejects zero and values >= the curve order.
        let secret = SecretKey::from_slice(&il).map_err(|_| DerivationError::InvalidMasterKey);
        il.zeroize();
        Ok(Self {
            key: KeyMaterial::Private(secret?),
            chain_code,
            depth: 0,
            parent_fingerprint: [0; 4],
            child_number: 0,
        })
    }

    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.parent_fingerprint
    }

    /// The raw 32-bit child number (hardened indices include 2^31).
    pub fn child_number(&self) -> u32 {
        self.child_number
    }

    pub fn child_index(&self) -> ChildIndex {
        ChildIndex::from_raw(self.child_number)
    }

    pub fn is_private(&self) -> bool {
        matches!(self.key, KeyMaterial::Private(_))
    }

    pub fn public_key(&self) -> PublicKey {
        self.key.public_key()
    }

    /// SEC1 compressed public key (33 bytes).
    pub fn public_key_compressed(&self) -> [u8; 33] {
        self.public_key().serialize()
    }

    /// SEC1 uncompressed public key, `0x04 || X || Y` (65 bytes).
    pub fn public_key_uncompressed(&self) -> [u8; 65] {
        self.public_key().serialize_uncompressed()
    }

    /// The 32-byte private scalar.
    pub fn private_key_bytes(&self) -> Result<[u8; 32], DerivationError> {
        match &self.key {
            KeyMaterial::Private(secret) => Ok(secret.secret_bytes()),
            KeyMaterial::Public(_) => Err(DerivationError::PrivateKeyUnavailable),
        }
    }

    /// First four bytes of HASH160 of the compressed public key.
    pub fn fingerprint(&self) -> [u8; 4] {
        fingerprint_of(&self.public_key())
    }

    /// A public-only copy of this key with the same metadata.
    pub fn neuter(&self) -> Self {
        Self {
            key: KeyMaterial::Public(self.public_key()),
            ..self.clone()
        }
    }

    /// Project onto a private/public key pair.
    pub fn key_pair(&self) -> Result<KeyPair, DerivationError> {
        Ok(KeyPair {
            private_key: self.private_key_bytes()?,
            public_key: self.public_key_uncompressed(),
            public_key_compressed: self.public_key_compressed(),
        })
    }
}

fn fingerprint_of(public: &PublicKey) -> [u8; 4] {
    let hash = hash160(&public.serialize());
    [hash[0], hash[1], hash[2], hash[3]]
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("private", &self.is_private())
            .field("public_key", &hex::encode(self.public_key_compressed()))
            .field("depth", &self.depth)
            .field("parent_fingerprint", &hex::encode(self.parent_fingerprint))
            .field("child_number", &self.child_number)
            .finish_non_exhaustive()
    }
}

/// Terminal projection of a private extended key.
///
/// The private scalar is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    private_key: [u8; 32],
    #[zeroize(skip)]
    public_key: [u8; 65],
    #[zeroize(skip)]
    public_key_compressed: [u8; 33],
}

impl KeyPair {
    /// The 32-byte private scalar. Handle with care.
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// Uncompressed public key, `0x04 || X || Y`.
    pub fn public_key(&self) -> &[u8; 65] {
        &self.public_key
    }

    pub fn public_key_compressed(&self) -> &[u8; 33] {
        &self.public_key_compressed
    }
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        Self {
            private_key: self.private_key,
            public_key: self.public_key,
            public_key_compressed: self.public_key_compressed,
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

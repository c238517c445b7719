//! Child key derivation (CKD).
//!
//! For child number `i` (hardened when `i >= 2^31`):
//!
//! - hardened: `data = 0x00 || k_par || ser32(i)`, private parents only
//! - normal:   `data = serP(K_par) || ser32(i)`
//!
//! `I = HMAC-SHA512(c_par, data)`. The child key is `I_L + k_par mod n` for
//! private keys and `I_L·G + K_par` for public keys; the chain code is `I_R`.
//! An invalid child (`I_L >= n`, zero scalar or point at infinity) is
//! returned as [`DerivationError::InvalidChildKey`]. The next index is never
//! tried automatically.

use secp256k1::{SECP256K1, Scalar};
use tracing::trace;
use zeroize::Zeroize;

use crate::constants::MAX_DEPTH;
use crate::error::DerivationError;
use crate::hash::{hmac_sha512, split_hmac};
use crate::keys::{ExtendedKey, KeyMaterial};
use crate::path::{ChildIndex, DerivationPath};

impl ExtendedKey {
    /// Derive the child at `step`.
    pub fn derive_child(&self, step: ChildIndex) -> Result<Self, DerivationError> {
        let index = step.raw();
        if self.depth == MAX_DEPTH {
            return Err(DerivationError::DepthOverflow { depth: self.depth });
        }

        let mut data = [0u8; 37];
        if step.is_hardened() {
            let KeyMaterial::Private(secret) = &self.key else {
                return Err(DerivationError::HardenedDerivationRequiresPrivateKey { index });
            };
            data[1..33].copy_from_slice(&secret.secret_bytes());
        } else {
            data[..33].copy_from_slice(&self.public_key().serialize());
        }
        data[33..].copy_from_slice(&index.to_be_bytes());

        let mut output = hmac_sha512(&self.chain_code, &data);
        data.zeroize();
        let child = self.child_from_hmac(&output, index);
        output.zeroize();
        let child = child?;

        trace!(depth = child.depth, child = %step, "derived child key");
        Ok(child)
    }

    /// Build the child at raw `index` from `I = HMAC-SHA512(c_par, data)`.
    fn child_from_hmac(&self, output: &[u8; 64], index: u32) -> Result<Self, DerivationError> {
        let (mut il, chain_code) = split_hmac(output);
        // Rejects I_L >= n.
        let tweak = Scalar::from_be_bytes(il);
        il.zeroize();
        let tweak = tweak.map_err(|_| DerivationError::InvalidChildKey { index })?;

        // Fails on a zero scalar or the point at infinity.
        let key = match &self.key {
            KeyMaterial::Private(secret) => secret
                .add_tweak(&tweak)
                .map(KeyMaterial::Private),
            KeyMaterial::Public(public) => public
                .add_exp_tweak(SECP256K1, &tweak)
                .map(KeyMaterial::Public),
        }
        .map_err(|_| DerivationError::InvalidChildKey { index })?;

        Ok(Self {
            key,
            chain_code,
            depth: self.depth + 1,
            parent_fingerprint: self.fingerprint(),
            child_number: index,
        })
    }

    /// Walk `path` from this key, one step at a time.
    ///
    /// An empty path returns a copy of this key.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self, DerivationError> {
        path.steps()
            .iter()
            .try_fold(self.clone(), |key, step| key.derive_child(*step))
    }
}

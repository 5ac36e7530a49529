//! Key and signature data types (spec.md §3).

use core::marker::PhantomData;

use ark_ec::Group;
use zeroize::Zeroize;

use crate::error::{CryptoResult, Error};
use crate::group::Curve;
use crate::utils::Vec;

/// Width of a [`SymmetricSeed`], in bytes. spec.md §3 calls this
/// "implementation-defined, typically 32 B" and independent of the curve's
/// own scalar width; this crate fixes it at 32.
pub const SEED_BYTES: usize = 32;

/// A uniformly random symmetric seed, the sole input to
/// [`crate::engine::derive_private_key`].
///
/// Zeroized on drop; this is the only copy of the seed a [`PrivateKey`]
/// keeps (spec.md §3: "copied into PrivateKey; destroyed by zeroization").
#[derive(Clone, Zeroize)]
pub struct SymmetricSeed([u8; SEED_BYTES]);

impl SymmetricSeed {
    /// Wrap caller-supplied random bytes. The caller is responsible for
    /// sourcing them from an OS CSPRNG; this type does not generate its own
    /// randomness (spec.md §3: "created externally (OS RNG)").
    pub fn new(bytes: [u8; SEED_BYTES]) -> Self {
        SymmetricSeed(bytes)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.0
    }
}

impl Drop for SymmetricSeed {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// A derived private key: a symmetric seed plus the scalar and public point
/// deterministically derived from it (spec.md §3/§4.3).
///
/// `secret_scalar` and `pub_bytes` are never mutated after
/// [`crate::engine::derive_private_key`] constructs this; all three fields
/// are zeroized together on drop, which is also what
/// [`crate::engine::destroy_private_key`] triggers explicitly (spec.md
/// §4.7).
pub struct PrivateKey<C: Curve> {
    pub(crate) sym: SymmetricSeed,
    pub(crate) secret_scalar: <C::G as Group>::ScalarField,
    pub(crate) pub_bytes: Vec<u8>,
    _curve: PhantomData<C>,
}

// Written by hand rather than `#[derive(Zeroize)]`: the derive adds a
// `C: Zeroize` bound to every generic parameter of the struct, which would
// force every curve marker type to implement `Zeroize` for no reason — `C`
// itself carries no secret state, only `PhantomData`.
impl<C: Curve> Zeroize for PrivateKey<C> {
    fn zeroize(&mut self) {
        self.sym.zeroize();
        self.secret_scalar.zeroize();
        self.pub_bytes.zeroize();
    }
}

impl<C: Curve> PrivateKey<C> {
    pub(crate) fn new(
        sym: SymmetricSeed,
        secret_scalar: <C::G as Group>::ScalarField,
        pub_bytes: Vec<u8>,
    ) -> Self {
        PrivateKey {
            sym,
            secret_scalar,
            pub_bytes,
            _curve: PhantomData,
        }
    }

    /// `private_to_public`: copy out this key's public half.
    pub fn to_public(&self) -> PublicKey<C> {
        PublicKey {
            bytes: self.pub_bytes.clone(),
            _curve: PhantomData,
        }
    }
}

impl<C: Curve> Drop for PrivateKey<C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// A public key: an encoded group element, [`Curve::SER_BYTES`] long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey<C: Curve> {
    pub(crate) bytes: Vec<u8>,
    _curve: PhantomData<C>,
}

impl<C: Curve> PublicKey<C> {
    /// Validate and wrap a received public key's wire encoding.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != C::SER_BYTES {
            return Err(Error::DeserialisationError);
        }
        Ok(PublicKey {
            bytes: bytes.to_vec(),
            _curve: PhantomData,
        })
    }

    /// `SER_BYTES`-long wire encoding (spec.md §3/§6).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A Schnorr-style signature: a commitment point `R` followed by a response
/// scalar `s` (spec.md §3).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature<C: Curve> {
    pub(crate) bytes: Vec<u8>,
    _curve: PhantomData<C>,
}

impl<C: Curve> Signature<C> {
    pub(crate) fn from_parts(commitment: &[u8], response: &[u8]) -> Self {
        debug_assert_eq!(commitment.len(), C::SER_BYTES);
        debug_assert_eq!(response.len(), C::SCALAR_BYTES);
        let mut bytes = Vec::with_capacity(C::SER_BYTES + C::SCALAR_BYTES);
        bytes.extend_from_slice(commitment);
        bytes.extend_from_slice(response);
        Signature {
            bytes,
            _curve: PhantomData,
        }
    }

    /// Validate and wrap a received signature's wire encoding.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != C::SER_BYTES + C::SCALAR_BYTES {
            return Err(Error::DeserialisationError);
        }
        Ok(Signature {
            bytes: bytes.to_vec(),
            _curve: PhantomData,
        })
    }

    /// `SER_BYTES + SCALAR_BYTES`-long wire encoding (spec.md §3/§6).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub(crate) fn commitment(&self) -> &[u8] {
        &self.bytes[..C::SER_BYTES]
    }

    pub(crate) fn response(&self) -> &[u8] {
        &self.bytes[C::SER_BYTES..]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curves::Ed25519Decaf;
    use crate::engine::derive_private_key;

    #[test]
    fn public_key_rejects_wrong_length() {
        let short = [0u8; 4];
        assert_eq!(
            PublicKey::<Ed25519Decaf>::from_bytes(&short),
            Err(Error::DeserialisationError)
        );
    }

    #[test]
    fn signature_rejects_wrong_length() {
        let short = [0u8; 4];
        assert_eq!(
            Signature::<Ed25519Decaf>::from_bytes(&short),
            Err(Error::DeserialisationError)
        );
    }

    #[test]
    fn public_key_bytes_round_trip() {
        let priv_key = derive_private_key::<Ed25519Decaf>(SymmetricSeed::new([0x07u8; 32]));
        let pub_key = priv_key.to_public();
        let round_tripped = PublicKey::<Ed25519Decaf>::from_bytes(&pub_key.to_bytes()).unwrap();
        assert_eq!(pub_key, round_tripped);
    }
}

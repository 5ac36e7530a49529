//! Crate-wide error type.
//!
//! Kept deliberately small: per spec, `derive_private_key`, `destroy_private_key`
//! and `sign` are total functions and never produce an `Error`. Only
//! `shared_secret` and `verify` (and the `PublicKey`/`Signature` byte
//! converters, which ride on `ark-serialize`) can fail.

use core::fmt;

/// Errors produced by this crate's protocol operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A peer's public key, or a signature's commitment component, failed to
    /// decode to a valid group element.
    PointDecodeFailure,
    /// A signature's response component failed strict scalar decoding.
    ScalarDecodeFailure,
    /// `verify` completed all decodings but the recomputed commitment did
    /// not match the one carried in the signature.
    VerificationFailure,
    /// `CanonicalSerialize` failed while encoding a `PublicKey`/`Signature`.
    SerialisationError,
    /// `CanonicalDeserialize` failed while decoding a `PublicKey`/`Signature`.
    DeserialisationError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PointDecodeFailure => write!(f, "peer point failed to decode"),
            Error::ScalarDecodeFailure => write!(f, "scalar failed strict decoding"),
            Error::VerificationFailure => write!(f, "signature verification failed"),
            Error::SerialisationError => write!(f, "failed to serialise value"),
            Error::DeserialisationError => write!(f, "failed to deserialise value"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result alias used throughout the crate's fallible operations.
pub type CryptoResult<T> = core::result::Result<T, Error>;

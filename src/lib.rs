//! A transcript-driven protocol engine over a single prime-order curve
//! group: private-key derivation from a symmetric seed, Diffie-Hellman
//! shared secrets, and Schnorr-style signing/verification, all built from a
//! Keccak-based duplex transcript and a constant-time group primitive.
//!
//! See [`engine`] for the four public operations, [`curves::Ed25519Decaf`]
//! for the shipped curve instantiation, and [`group::Curve`] for the trait a
//! second curve would implement.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod curves;
pub mod engine;
pub mod error;
pub mod group;
pub mod keys;
pub mod transcript;

mod utils;

pub use engine::{derive_private_key, destroy_private_key, shared_secret, sign, verify};
pub use error::{CryptoResult, Error};
pub use group::Curve;
pub use keys::{PrivateKey, PublicKey, Signature, SymmetricSeed};
pub use transcript::Transcript;

//! Concrete `Curve` instantiations.
//!
//! `ark-ed25519` replaces the teacher's secp256k1 test instantiation (see
//! `DESIGN.md`): this crate's protocol needs an actual twisted-Edwards
//! prime-order group, and `ark_ed25519::EdwardsProjective` is the same
//! arkworks release line the rest of the dependency stack is pinned to.

use ark_ed25519::EdwardsProjective;

use crate::group::Curve;

/// The twisted-Edwards curve `ed25519` as an `ark_ec` group, wired up as one
/// worked example of [`Curve`]. A second instantiation only needs a second
/// marker type implementing the same trait.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ed25519Decaf;

impl Curve for Ed25519Decaf {
    const API_NAME: &'static str = "ed25519-decaf";
    const SCALAR_BYTES: usize = 32;
    const SER_BYTES: usize = 32;

    type G = EdwardsProjective;
}

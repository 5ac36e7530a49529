//! The transcript primitive (spec.md §2 item 2, §6 "Required primitives
//! from the transcript").
//!
//! spec.md treats the Keccak permutation, sponge padding, and rate/capacity
//! parameters as out-of-scope black-box primitives (§1). The actual Keccak-f
//! permutation is delegated to [`sha3::Shake256`], a real extendable-output
//! function; what this module owns is the *framing* on top of it — the
//! domain-separated `init`, the `ad`/`fixed_key`/`transact`/`prng`
//! operations, and the control-word tagging spec.md §6 requires.
//!
//! spec.md §9 notes that the original's STROBE control-word values and
//! parameter set were never frozen ("TODO: canonicalize and freeze") and
//! says an implementer must pin them to a reference implementation rather
//! than invent them — but no such reference is available here. The
//! [`ControlWord`] values below are this crate's own frozen choice; see
//! `DESIGN.md` for that decision.

use digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

use crate::utils::Vec;

/// Tags framing each transcript operation. Distinct tags keep an absorbed
/// associated-datum from colliding with a squeezed challenge of the same
/// length, which is what "domain separation is per-operation" (spec.md
/// §4.1) means at the level of a single transcript.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum ControlWord {
    /// Generic associated-data absorb (the `ad` primitive, spec.md §6).
    Ad = 0,
    /// Secret key installation (the `fixed_key` primitive, spec.md §6).
    Key = 1,
    /// Pure pseudorandom squeeze (the `prng` primitive, spec.md §6).
    Prf = 2,
    /// Mixing a computed Diffie-Hellman point into the transcript
    /// (spec.md §4.4 step 4).
    DhKey = 3,
    /// Absorbing a signer's public key (spec.md §4.5/§4.6 step 1).
    SigPk = 4,
    /// Absorbing/squeezing the signature commitment `R` (spec.md §4.5
    /// step 4, §4.6 step 2).
    SigEph = 5,
    /// Squeezing the Schnorr challenge scalar (spec.md §4.5 step 5, §4.6
    /// step 3).
    SigChal = 6,
    /// Injecting the Schnorr response scalar (spec.md §4.5 step 7, §4.6
    /// step 4).
    SigResp = 7,
    /// Absorbing the signed message (spec.md §4.5/§4.6 wrapper step 2).
    StreamingPlaintext = 8,
}

/// A Keccak-duplex transcript, domain-separated at construction and
/// threaded linearly through one crypto operation.
///
/// Cloning (`fork`) is the "structural copy" primitive spec.md §6 requires
/// for branching a transcript deterministically (used by `sign_strobe` to
/// derive its nonce from a clone of the main transcript, spec.md §4.5
/// step 2).
pub struct Transcript {
    sponge: Shake256,
}

impl Transcript {
    /// `init(T, strength_params, label, label_len)`. The "strength
    /// params" in spec.md's signature are fixed by this crate's choice of
    /// `Shake256` (256-bit security strength, spec.md §2 item 2); there is
    /// no separate runtime parameter to pass.
    pub fn init(label: &[u8]) -> Self {
        let mut sponge = Shake256::default();
        sponge.update(&(label.len() as u64).to_le_bytes());
        sponge.update(label);
        Transcript { sponge }
    }

    /// `ad(T, data, len)`: absorb public associated data.
    pub fn ad(&mut self, data: &[u8]) {
        self.duplex(ControlWord::Ad, data, 0);
    }

    /// `fixed_key(T, key, len)`: install a secret key. Diffuses `key`
    /// into the sponge state so that every subsequent squeeze depends on
    /// it, without `key` being recoverable from those squeezes.
    pub fn fixed_key(&mut self, key: &[u8]) {
        self.duplex(ControlWord::Key, key, 0);
    }

    /// `prng(T, out, len)`: squeeze pseudorandom output. Used directly by
    /// the scalar sampler (spec.md §4.2) and by `shared_secret`'s chunked
    /// output stream (spec.md §4.4 step 5).
    pub fn prng(&mut self, out: &mut [u8]) {
        let squeezed = self.duplex(ControlWord::Prf, &[], out.len());
        out.copy_from_slice(&squeezed);
    }

    /// `transact(T, out_or_null, in_or_null, len, CW)`: one CW-framed
    /// operation. `input` absent + `output_len > 0` squeezes a challenge;
    /// `input` present + `output` absent absorbs (and CW-tags) data;
    /// `input` present + `output` present echoes `input` into `output`
    /// while absorbing it — the signature-response "acts as a MAC" case
    /// spec.md §4.6 step 4 describes.
    pub fn transact(&mut self, cw: ControlWord, input: Option<&[u8]>, output: Option<&mut [u8]>) {
        match (input, output) {
            (Some(data), None) => {
                self.duplex(cw, data, 0);
            }
            (None, Some(out)) => {
                let squeezed = self.duplex(cw, &[], out.len());
                out.copy_from_slice(&squeezed);
            }
            (Some(data), Some(out)) => {
                self.duplex(cw, data, 0);
                out.copy_from_slice(data);
            }
            (None, None) => {}
        }
    }

    /// Structural copy: branch the transcript so the branch can be mutated
    /// independently (spec.md §4.5 step 2's transcript clone).
    pub fn fork(&self) -> Self {
        Transcript {
            sponge: self.sponge.clone(),
        }
    }

    /// `destroy(T)`: zeroize and drop. `Shake256`'s own `zeroize` support
    /// (enabled on this crate's `sha3` dependency) wipes the sponge state
    /// when it is dropped, so this is a documented no-op wrapper around
    /// that drop rather than a second round of manual wiping.
    pub fn destroy(self) {
        drop(self);
    }

    /// Core duplex step: absorb a CW-tagged, length-framed `input`, then
    /// (if `output_len > 0`) squeeze `output_len` bytes from a clone of the
    /// state and re-absorb what was squeezed, so the next operation cannot
    /// be replayed against the pre-squeeze state.
    fn duplex(&mut self, cw: ControlWord, input: &[u8], output_len: usize) -> Vec<u8> {
        self.sponge.update(&[cw as u8]);
        self.sponge.update(&(input.len() as u64).to_le_bytes());
        self.sponge.update(input);

        if output_len == 0 {
            return Vec::new();
        }

        let mut reader = self.sponge.clone().finalize_xof();
        let mut out = Vec::with_capacity(output_len);
        out.resize(output_len, 0u8);
        reader.read(&mut out);
        self.sponge.update(&out);
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn same_label_and_operations_produce_same_output() {
        let mut t1 = Transcript::init(b"test::transcript");
        let mut t2 = Transcript::init(b"test::transcript");
        t1.ad(b"hello");
        t2.ad(b"hello");

        let mut out1 = [0u8; 16];
        let mut out2 = [0u8; 16];
        t1.prng(&mut out1);
        t2.prng(&mut out2);

        assert_eq!(out1, out2);
    }

    #[test]
    fn different_labels_diverge() {
        let mut t1 = Transcript::init(b"test::transcript-a");
        let mut t2 = Transcript::init(b"test::transcript-b");

        let mut out1 = [0u8; 16];
        let mut out2 = [0u8; 16];
        t1.prng(&mut out1);
        t2.prng(&mut out2);

        assert_ne!(out1, out2);
    }

    #[test]
    fn fork_then_diverge_does_not_affect_original() {
        let mut original = Transcript::init(b"test::fork");
        original.ad(b"shared prefix");

        let mut forked = original.fork();
        forked.ad(b"only in the fork");

        let mut out_original = [0u8; 16];
        let mut out_forked = [0u8; 16];
        original.prng(&mut out_original);
        forked.prng(&mut out_forked);

        assert_ne!(out_original, out_forked);
    }

    #[test]
    fn transact_echo_through_copies_input_to_output() {
        let mut t = Transcript::init(b"test::echo");
        let input = [1u8, 2, 3, 4];
        let mut out = [0u8; 4];
        t.transact(ControlWord::SigResp, Some(&input), Some(&mut out));
        assert_eq!(out, input);
    }
}

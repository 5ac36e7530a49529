//! The protocol engine (spec.md §4): the four public operations plus the
//! transcript-internal `sign_strobe`/`verify_strobe` split, composed from the
//! `group` and `transcript` primitives.
//!
//! This is a direct Rust re-expression of
//! `examples/original_source/src/per_curve/crypto.tmpl.c`: every transcript
//! transaction and group operation below corresponds to one call in that
//! file, in the same order, under the same control word.

use ark_ec::Group;
use ark_ff::Zero;
use zeroize::Zeroize;

use crate::error::{CryptoResult, Error};
use crate::group::{sample_scalar, Curve};
use crate::keys::{PrivateKey, PublicKey, Signature, SymmetricSeed};
use crate::transcript::{ControlWord, Transcript};
use crate::utils::{zero_vec, Vec};

const SHARED_SECRET_MAX_BLOCK_SIZE: usize = 4096;

fn label<C: Curve>(op: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(C::API_NAME.len() + 2 + op.len());
    out.extend_from_slice(C::API_NAME.as_bytes());
    out.extend_from_slice(b"::");
    out.extend_from_slice(op.as_bytes());
    out
}

/// `derive_private_key` (spec.md §4.3): a pure function of `seed` and the
/// per-curve label, no randomness drawn here.
pub fn derive_private_key<C: Curve>(seed: SymmetricSeed) -> PrivateKey<C> {
    let mut transcript = Transcript::init(&label::<C>("derive_private_key"));
    transcript.fixed_key(seed.as_bytes());

    let secret_scalar = sample_scalar::<C>(&mut transcript);
    let pub_point = C::precomputed_scalarmul(&secret_scalar);
    let pub_bytes = C::point_encode(&pub_point);

    transcript.destroy();
    PrivateKey::new(seed, secret_scalar, pub_bytes)
}

/// `destroy_private_key` (spec.md §4.7): the key's own `Drop` already
/// zeroizes every field unconditionally; this function just makes that
/// explicit at the call site instead of relying on scope exit.
pub fn destroy_private_key<C: Curve>(priv_key: PrivateKey<C>) {
    drop(priv_key);
}

/// `shared_secret` (spec.md §4.4): Diffie-Hellman, bound to both public keys
/// in the caller-supplied `me_first` order, streamed into `out` in chunks of
/// at most [`SHARED_SECRET_MAX_BLOCK_SIZE`].
pub fn shared_secret<C: Curve>(
    my_priv: &PrivateKey<C>,
    your_pub: &PublicKey<C>,
    me_first: bool,
    out: &mut [u8],
) -> CryptoResult<()> {
    let mut transcript = Transcript::init(&label::<C>("shared_secret"));

    if me_first {
        transcript.ad(&my_priv.pub_bytes);
        transcript.ad(your_pub.as_bytes());
    } else {
        transcript.ad(your_pub.as_bytes());
        transcript.ad(&my_priv.pub_bytes);
    }

    let (mut ss_ser, status) =
        C::direct_scalarmul(your_pub.as_bytes(), &my_priv.secret_scalar);

    transcript.transact(ControlWord::DhKey, Some(&ss_ser), None);
    ss_ser.zeroize();

    for chunk in out.chunks_mut(SHARED_SECRET_MAX_BLOCK_SIZE) {
        transcript.prng(chunk);
    }

    transcript.destroy();
    status
}

/// `sign` (spec.md §4.5): the wrapper that prepares a fresh transcript over
/// `message` and hands off to [`sign_strobe`].
pub fn sign<C: Curve>(priv_key: &PrivateKey<C>, message: &[u8]) -> Signature<C> {
    let mut transcript = Transcript::init(&label::<C>("sign"));
    transcript.transact(ControlWord::StreamingPlaintext, Some(message), None);
    let sig = sign_strobe(&mut transcript, priv_key);
    transcript.destroy();
    sig
}

/// `sign_strobe` (spec.md §4.5): Schnorr signature with a transcript-derived,
/// nonce-misuse-resistant nonce, over a caller-prepared transcript.
pub fn sign_strobe<C: Curve>(transcript: &mut Transcript, priv_key: &PrivateKey<C>) -> Signature<C> {
    transcript.transact(ControlWord::SigPk, Some(&priv_key.pub_bytes), None);

    let mut nonce_transcript = transcript.fork();
    nonce_transcript.fixed_key(priv_key.sym.as_bytes());
    let mut nonce = sample_scalar::<C>(&mut nonce_transcript);
    nonce_transcript.destroy();

    let commitment_point = C::precomputed_scalarmul(&nonce);
    let commitment_bytes = C::point_encode(&commitment_point);
    transcript.transact(ControlWord::SigEph, Some(&commitment_bytes), None);

    let mut overkill = zero_vec(C::SCALAR_BYTES + 8);
    transcript.transact(ControlWord::SigChal, None, Some(&mut overkill));
    let mut challenge = C::scalar_decode_long(&overkill);
    overkill.zeroize();

    let response = nonce - challenge * priv_key.secret_scalar;
    let mut response_bytes = C::scalar_encode(&response);

    let mut echoed = zero_vec(C::SCALAR_BYTES);
    transcript.transact(
        ControlWord::SigResp,
        Some(&response_bytes),
        Some(&mut echoed),
    );
    debug_assert_eq!(echoed, response_bytes);

    let sig = Signature::from_parts(&commitment_bytes, &response_bytes);

    nonce.zeroize();
    challenge.zeroize();
    response_bytes.zeroize();
    sig
}

/// `verify` (spec.md §4.6): the wrapper mirroring [`sign`].
pub fn verify<C: Curve>(
    sig: &Signature<C>,
    pub_key: &PublicKey<C>,
    message: &[u8],
) -> CryptoResult<()> {
    let mut transcript = Transcript::init(&label::<C>("sign"));
    transcript.transact(ControlWord::StreamingPlaintext, Some(message), None);
    let result = verify_strobe(&mut transcript, sig, pub_key);
    transcript.destroy();
    result
}

/// `verify_strobe` (spec.md §4.6): no secret inputs, so the decode-failure
/// branches are allowed to short-circuit via `?` — unlike `shared_secret`,
/// nothing here needs to be constant-time, but the decode-then-combine shape
/// still avoids leaking *which* decode failed through an early return.
pub fn verify_strobe<C: Curve>(
    transcript: &mut Transcript,
    sig: &Signature<C>,
    pub_key: &PublicKey<C>,
) -> CryptoResult<()> {
    transcript.transact(ControlWord::SigPk, Some(pub_key.as_bytes()), None);

    transcript.transact(ControlWord::SigEph, Some(sig.commitment()), None);
    // The source decodes the commitment with DECAF_TRUE (identity allowed)
    // but the peer's public key with DECAF_FALSE: a signer whose derived
    // nonce happens to land on the identity still produces a checkable
    // commitment, whereas an identity public key is never acceptable.
    let commitment_ok = C::point_decode(sig.commitment(), true);

    let mut overkill = zero_vec(C::SCALAR_BYTES + 8);
    transcript.transact(ControlWord::SigChal, None, Some(&mut overkill));
    let challenge = C::scalar_decode_long(&overkill);

    let mut echoed = zero_vec(C::SCALAR_BYTES);
    transcript.transact(
        ControlWord::SigResp,
        Some(sig.response()),
        Some(&mut echoed),
    );
    let response_ok = C::scalar_decode(sig.response());

    let pub_point_ok = C::point_decode(pub_key.as_bytes(), false);

    let commitment_point = commitment_ok
        .as_ref()
        .copied()
        .unwrap_or_else(|_| C::G::zero());
    let response = response_ok
        .as_ref()
        .copied()
        .unwrap_or_else(|_| <C::G as Group>::ScalarField::zero());
    let pub_point = pub_point_ok
        .as_ref()
        .copied()
        .unwrap_or_else(|_| C::G::zero());

    let recomputed = C::base_double_scalarmul_non_secret(&response, &pub_point, &challenge);
    let points_match = C::point_eq(&commitment_point, &recomputed);

    let all_decoded = commitment_ok.is_ok() & response_ok.is_ok() & pub_point_ok.is_ok();

    if all_decoded & points_match {
        Ok(())
    } else {
        Err(Error::VerificationFailure)
    }
}

//! `k4.seal.`: hybrid public-key wrap of a local key, via X25519
//! (birationally derived from the recipient's Ed25519 keys) plus the same
//! keyed-BLAKE2b/XChaCha20 shape the wrap constructions use.

use base64::prelude::*;
use blake2::digest::consts::{U24, U32};
use blake2::digest::{Digest, FixedOutput, KeyInit, Update};
use blake2::{Blake2b, Blake2bMac};
use chacha20::cipher::{inout::InOutBuf, KeyIvInit, StreamCipher};
use chacha20::{Key as ChaChaKey, XChaCha20, XNonce};
use curve25519_dalek::edwards::CompressedEdwardsY;
use rand::rngs::OsRng;
use sha2::Sha512;
use subtle::ConstantTimeEq;
use x25519_dalek::{EphemeralSecret, PublicKey as X25519Public, StaticSecret};

use crate::core::Key;

use super::error::PaserkError;
use super::keys::{PaserkLocal, PaserkPublic, PaserkSecret};

const HEADER: &str = "k4.seal.";

fn ek_ak(xk: &[u8], epk: &[u8], xpk: &[u8]) -> ([u8; 32], [u8; 32]) {
  let ek = Blake2b::<U32>::new()
    .chain_update([0x01])
    .chain_update("k4.")
    .chain_update("seal.")
    .chain_update(xk)
    .chain_update(epk)
    .chain_update(xpk)
    .finalize();
  let ak = Blake2b::<U32>::new()
    .chain_update([0x02])
    .chain_update("k4.")
    .chain_update("seal.")
    .chain_update(xk)
    .chain_update(epk)
    .chain_update(xpk)
    .finalize();
  let mut ek_bytes = [0u8; 32];
  let mut ak_bytes = [0u8; 32];
  ek_bytes.copy_from_slice(&ek);
  ak_bytes.copy_from_slice(&ak);
  (ek_bytes, ak_bytes)
}

fn seal_nonce(epk: &[u8], xpk: &[u8]) -> [u8; 24] {
  let n = Blake2b::<U24>::new().chain_update(epk).chain_update(xpk).finalize();
  let mut n_bytes = [0u8; 24];
  n_bytes.copy_from_slice(&n);
  n_bytes
}

fn seal_tag(ak: &[u8; 32], epk: &[u8], edk: &[u8]) -> Result<[u8; 32], PaserkError> {
  let mut ctx = Blake2bMac::<U32>::new_from_slice(ak)?;
  ctx.update(b"k4.");
  ctx.update(b"seal.");
  ctx.update(epk);
  ctx.update(edk);
  let out = ctx.finalize_fixed();
  let mut t = [0u8; 32];
  t.copy_from_slice(&out);
  Ok(t)
}

fn edwards_to_x25519_public(ed_public: &[u8; 32]) -> Result<X25519Public, PaserkError> {
  let compressed = CompressedEdwardsY::from_slice(ed_public).map_err(|_| PaserkError::BadLength)?;
  let point = compressed.decompress().ok_or(PaserkError::BadLength)?;
  Ok(point.to_montgomery().to_bytes().into())
}

impl PaserkLocal {
  /// Seals this local key to a recipient's `k4.public.` key, producing a
  /// `k4.seal.` PASERK only that recipient's secret key can unseal.
  pub fn seal(&self, recipient: &PaserkPublic) -> Result<String, PaserkError> {
    let recipient_ed: [u8; 32] = recipient.0.as_ref().try_into().map_err(crate::core::PasetoError::from)?;
    let xpk = edwards_to_x25519_public(&recipient_ed)?;

    let esk = EphemeralSecret::random_from_rng(OsRng);
    let epk = X25519Public::from(&esk);
    let xk = esk.diffie_hellman(&xpk);

    let (ek, ak) = ek_ak(xk.as_bytes(), epk.as_bytes(), xpk.as_bytes());
    let n = seal_nonce(epk.as_bytes(), xpk.as_bytes());

    let mut edk = [0u8; 32];
    let plaintext: &[u8; 32] = self
      .0
      .as_ref()
      .try_into()
      .map_err(crate::core::PasetoError::from)?;
    let mut cipher = XChaCha20::new(ChaChaKey::from_slice(&ek), XNonce::from_slice(&n));
    cipher
      .apply_keystream_inout(InOutBuf::new(plaintext.as_slice(), &mut edk).map_err(|_| PaserkError::BadLength)?);

    let tag = seal_tag(&ak, epk.as_bytes(), &edk)?;

    let mut body = Vec::with_capacity(32 + 32 + 32);
    body.extend_from_slice(&tag);
    body.extend_from_slice(epk.as_bytes());
    body.extend_from_slice(&edk);

    Ok(format!("{HEADER}{}", BASE64_URL_SAFE_NO_PAD.encode(body)))
  }
}

impl PaserkSecret {
  /// Unseals a `k4.seal.` PASERK produced by [`PaserkLocal::seal`], recovering
  /// the wrapped local key.
  pub fn unseal(&self, sealed: &str) -> Result<PaserkLocal, PaserkError> {
    let body = sealed.strip_prefix(HEADER).ok_or(PaserkError::WrongHeader)?;
    let body = BASE64_URL_SAFE_NO_PAD.decode(body)?;
    if body.len() != 96 {
      return Err(PaserkError::BadLength);
    }

    let (tag, rest) = body.split_at(32);
    let (epk_bytes, edk) = rest.split_at(32);
    let mut epk_arr = [0u8; 32];
    epk_arr.copy_from_slice(epk_bytes);
    let epk = X25519Public::from(epk_arr);

    let seed: &[u8] = &self.0[..32];
    let expanded = Sha512::new().chain_update(seed).finalize();
    let mut scalar_bytes = [0u8; 32];
    scalar_bytes.copy_from_slice(&expanded[..32]);
    let scalar = curve25519_dalek::Scalar::from_bits_clamped(scalar_bytes);
    let xsk = StaticSecret::from(scalar.to_bytes());
    let xpk = X25519Public::from(&xsk);

    let xk = xsk.diffie_hellman(&epk);

    let (_, ak) = ek_ak(xk.as_bytes(), epk.as_bytes(), xpk.as_bytes());
    let t2 = seal_tag(&ak, epk.as_bytes(), edk)?;
    if !bool::from(tag.ct_eq(&t2)) {
      return Err(PaserkError::InvalidTag);
    }

    let (ek, _) = ek_ak(xk.as_bytes(), epk.as_bytes(), xpk.as_bytes());
    let n = seal_nonce(epk.as_bytes(), xpk.as_bytes());
    let mut plaintext = edk.to_vec();
    let mut cipher = XChaCha20::new(ChaChaKey::from_slice(&ek), XNonce::from_slice(&n));
    cipher.apply_keystream(&mut plaintext);

    Ok(PaserkLocal(Key::<32>::from(plaintext.as_slice())))
  }
}

//! `k4.local-wrap.pie.` / `k4.secret-wrap.pie.`: symmetric wrap of a key
//! under another key, using the Paragon Initiative Enterprises (PIE)
//! construction, the same BLAKE2b key-splitting shape v4.local uses for
//! tokens, with different domain-separation bytes and header.

use base64::prelude::*;
use blake2::digest::consts::{U32, U56};
use blake2::digest::{FixedOutput, KeyInit, Update};
use blake2::Blake2bMac;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::{Key as ChaChaKey, XChaCha20, XNonce};
use ring::rand::{SecureRandom, SystemRandom};
use subtle::ConstantTimeEq;

use crate::core::{Key, PasetoError};

use super::error::PaserkError;
use super::keys::{PaserkLocal, PaserkSecret};

fn split_keys(kw: &[u8], domain: u8, nonce: &[u8; 32]) -> Result<([u8; 32], [u8; 24]), PaserkError> {
  let mut ctx = Blake2bMac::<U56>::new_from_slice(kw)?;
  ctx.update(&[domain]);
  ctx.update(nonce);
  let out = ctx.finalize_fixed();
  let mut ek = [0u8; 32];
  let mut n2 = [0u8; 24];
  ek.copy_from_slice(&out[..32]);
  n2.copy_from_slice(&out[32..56]);
  Ok((ek, n2))
}

fn auth_key(kw: &[u8], domain: u8, nonce: &[u8; 32]) -> Result<[u8; 32], PaserkError> {
  let mut ctx = Blake2bMac::<U32>::new_from_slice(kw)?;
  ctx.update(&[domain]);
  ctx.update(nonce);
  let out = ctx.finalize_fixed();
  let mut ak = [0u8; 32];
  ak.copy_from_slice(&out);
  Ok(ak)
}

fn tag(ak: &[u8], header: &str, nonce: &[u8; 32], ciphertext: &[u8]) -> Result<[u8; 32], PaserkError> {
  let mut ctx = Blake2bMac::<U32>::new_from_slice(ak)?;
  ctx.update(header.as_bytes());
  ctx.update(nonce);
  ctx.update(ciphertext);
  let out = ctx.finalize_fixed();
  let mut t = [0u8; 32];
  t.copy_from_slice(&out);
  Ok(t)
}

fn wrap(header: &str, wrapping_key: &[u8; 32], plaintext: &[u8]) -> Result<String, PaserkError> {
  let rng = SystemRandom::new();
  let mut nonce = [0u8; 32];
  rng.fill(&mut nonce).map_err(PasetoError::from)?;

  let (ek, n2) = split_keys(wrapping_key, 0x80, &nonce)?;
  let ak = auth_key(wrapping_key, 0x81, &nonce)?;

  let mut ciphertext = plaintext.to_vec();
  let mut cipher = XChaCha20::new(ChaChaKey::from_slice(&ek), XNonce::from_slice(&n2));
  cipher.apply_keystream(&mut ciphertext);

  let t = tag(&ak, header, &nonce, &ciphertext)?;

  let mut body = Vec::with_capacity(32 + 32 + ciphertext.len());
  body.extend_from_slice(&t);
  body.extend_from_slice(&nonce);
  body.extend_from_slice(&ciphertext);

  Ok(format!("{header}{}", BASE64_URL_SAFE_NO_PAD.encode(body)))
}

fn unwrap(header: &str, wrapping_key: &[u8; 32], wrapped: &str) -> Result<Vec<u8>, PaserkError> {
  let body = wrapped.strip_prefix(header).ok_or(PaserkError::WrongHeader)?;
  let body = BASE64_URL_SAFE_NO_PAD.decode(body)?;
  if body.len() < 64 {
    return Err(PaserkError::BadLength);
  }

  let (t, rest) = body.split_at(32);
  let (nonce_bytes, ciphertext) = rest.split_at(32);
  let mut nonce = [0u8; 32];
  nonce.copy_from_slice(nonce_bytes);

  let ak = auth_key(wrapping_key, 0x81, &nonce)?;
  let t2 = tag(&ak, header, &nonce, ciphertext)?;
  if !bool::from(t.ct_eq(&t2)) {
    return Err(PaserkError::InvalidTag);
  }

  let (ek, n2) = split_keys(wrapping_key, 0x80, &nonce)?;
  let mut plaintext = ciphertext.to_vec();
  let mut cipher = XChaCha20::new(ChaChaKey::from_slice(&ek), XNonce::from_slice(&n2));
  cipher.apply_keystream(&mut plaintext);

  Ok(plaintext)
}

impl PaserkLocal {
  /// Wraps this local key under a 32-byte wrapping key, producing a
  /// `k4.local-wrap.pie.` PASERK.
  pub fn wrap_pie(&self, wrapping_key: &Key<32>) -> Result<String, PaserkError> {
    wrap("k4.local-wrap.pie.", wrapping_key, self.0.as_ref())
  }

  /// Unwraps a `k4.local-wrap.pie.` PASERK produced by [`PaserkLocal::wrap_pie`].
  pub fn unwrap_pie(wrapping_key: &Key<32>, wrapped: &str) -> Result<Self, PaserkError> {
    let plaintext = unwrap("k4.local-wrap.pie.", wrapping_key, wrapped)?;
    if plaintext.len() != 32 {
      return Err(PaserkError::BadLength);
    }
    Ok(Self(Key::<32>::from(plaintext.as_slice())))
  }
}

impl PaserkSecret {
  /// Wraps this secret key under a 32-byte wrapping key, producing a
  /// `k4.secret-wrap.pie.` PASERK.
  pub fn wrap_pie(&self, wrapping_key: &Key<32>) -> Result<String, PaserkError> {
    wrap("k4.secret-wrap.pie.", wrapping_key, self.0.as_ref())
  }

  /// Unwraps a `k4.secret-wrap.pie.` PASERK produced by [`PaserkSecret::wrap_pie`].
  pub fn unwrap_pie(wrapping_key: &Key<32>, wrapped: &str) -> Result<Self, PaserkError> {
    let plaintext = unwrap("k4.secret-wrap.pie.", wrapping_key, wrapped)?;
    if plaintext.len() != 64 {
      return Err(PaserkError::BadLength);
    }
    Ok(Self(Key::<64>::from(plaintext.as_slice())))
  }
}

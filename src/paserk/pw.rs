//! `k4.local-pw.` / `k4.secret-pw.`: Argon2id password-based wrap.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::prelude::*;
use blake2::digest::consts::U32;
use blake2::digest::{FixedOutput, KeyInit, Update};
use blake2::Blake2bMac;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::{Key as ChaChaKey, XChaCha20, XNonce};
use ring::rand::{SecureRandom, SystemRandom};
use subtle::ConstantTimeEq;

use crate::core::PasetoError;

use super::error::PaserkError;
use super::keys::{PaserkLocal, PaserkSecret};

/// Argon2id cost parameters for password-based PASERK wrapping.
///
/// Defaults match the published PASERK `*-pw` test vectors: 64 MiB memory,
/// 2 passes, single-threaded.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Params {
  pub memory_kib: u32,
  pub time_cost: u32,
  pub parallelism: u32,
}

impl Default for Argon2Params {
  fn default() -> Self {
    Self {
      memory_kib: 65536,
      time_cost: 2,
      parallelism: 1,
    }
  }
}

fn derive(password: &[u8], salt: &[u8; 16], params: Argon2Params) -> Result<[u8; 32], PaserkError> {
  let argon2 = Argon2::new(
    Algorithm::Argon2id,
    Version::V0x13,
    Params::new(params.memory_kib, params.time_cost, params.parallelism, Some(32))?,
  );
  let mut out = [0u8; 32];
  argon2.hash_password_into(password, salt, &mut out)?;
  Ok(out)
}

fn subkeys(kp: &[u8; 32], domain: u8, nonce: &[u8; 24]) -> Result<[u8; 32], PaserkError> {
  let mut ctx = Blake2bMac::<U32>::new_from_slice(kp)?;
  ctx.update(&[domain]);
  ctx.update(nonce);
  let out = ctx.finalize_fixed();
  let mut key = [0u8; 32];
  key.copy_from_slice(&out);
  Ok(key)
}

#[allow(clippy::too_many_arguments)]
fn tag(
  ak: &[u8; 32],
  header: &str,
  salt: &[u8; 16],
  params: Argon2Params,
  nonce: &[u8; 24],
  edk: &[u8],
) -> Result<[u8; 32], PaserkError> {
  let mut ctx = Blake2bMac::<U32>::new_from_slice(ak)?;
  ctx.update(header.as_bytes());
  ctx.update(salt);
  ctx.update(&params.memory_kib.to_be_bytes());
  ctx.update(&params.time_cost.to_be_bytes());
  ctx.update(&params.parallelism.to_be_bytes());
  ctx.update(nonce);
  ctx.update(edk);
  let out = ctx.finalize_fixed();
  let mut t = [0u8; 32];
  t.copy_from_slice(&out);
  Ok(t)
}

fn wrap(header: &str, password: &[u8], params: Argon2Params, plaintext: &[u8]) -> Result<String, PaserkError> {
  let rng = SystemRandom::new();
  let mut salt = [0u8; 16];
  let mut nonce = [0u8; 24];
  rng.fill(&mut salt).map_err(PasetoError::from)?;
  rng.fill(&mut nonce).map_err(PasetoError::from)?;

  let kp = derive(password, &salt, params)?;
  let ek = subkeys(&kp, 0xFF, &nonce)?;
  let ak = subkeys(&kp, 0xFE, &nonce)?;

  let mut edk = plaintext.to_vec();
  let mut cipher = XChaCha20::new(ChaChaKey::from_slice(&ek), XNonce::from_slice(&nonce));
  cipher.apply_keystream(&mut edk);

  let t = tag(&ak, header, &salt, params, &nonce, &edk)?;

  let mut body = Vec::with_capacity(16 + 4 + 4 + 4 + 24 + edk.len() + 32);
  body.extend_from_slice(&salt);
  body.extend_from_slice(&params.memory_kib.to_be_bytes());
  body.extend_from_slice(&params.time_cost.to_be_bytes());
  body.extend_from_slice(&params.parallelism.to_be_bytes());
  body.extend_from_slice(&nonce);
  body.extend_from_slice(&edk);
  body.extend_from_slice(&t);

  Ok(format!("{header}{}", BASE64_URL_SAFE_NO_PAD.encode(body)))
}

fn unwrap(header: &str, password: &[u8], wrapped: &str) -> Result<Vec<u8>, PaserkError> {
  let body = wrapped.strip_prefix(header).ok_or(PaserkError::WrongHeader)?;
  let body = BASE64_URL_SAFE_NO_PAD.decode(body)?;
  if body.len() < 16 + 4 + 4 + 4 + 24 + 32 {
    return Err(PaserkError::BadLength);
  }

  let (salt, rest) = body.split_at(16);
  let (mem_bytes, rest) = rest.split_at(4);
  let (time_bytes, rest) = rest.split_at(4);
  let (para_bytes, rest) = rest.split_at(4);
  let (nonce_bytes, rest) = rest.split_at(24);
  let (edk, t) = rest.split_at(rest.len() - 32);

  let mut salt_arr = [0u8; 16];
  salt_arr.copy_from_slice(salt);
  let mut nonce_arr = [0u8; 24];
  nonce_arr.copy_from_slice(nonce_bytes);

  let params = Argon2Params {
    memory_kib: u32::from_be_bytes(mem_bytes.try_into().map_err(PasetoError::from)?),
    time_cost: u32::from_be_bytes(time_bytes.try_into().map_err(PasetoError::from)?),
    parallelism: u32::from_be_bytes(para_bytes.try_into().map_err(PasetoError::from)?),
  };

  let kp = derive(password, &salt_arr, params)?;
  let ak = subkeys(&kp, 0xFE, &nonce_arr)?;
  let t2 = tag(&ak, header, &salt_arr, params, &nonce_arr, edk)?;
  if !bool::from(t.ct_eq(&t2)) {
    return Err(PaserkError::InvalidTag);
  }

  let ek = subkeys(&kp, 0xFF, &nonce_arr)?;
  let mut plaintext = edk.to_vec();
  let mut cipher = XChaCha20::new(ChaChaKey::from_slice(&ek), XNonce::from_slice(&nonce_arr));
  cipher.apply_keystream(&mut plaintext);

  Ok(plaintext)
}

impl PaserkLocal {
  /// Wraps this local key under a password, producing a `k4.local-pw.` PASERK.
  pub fn wrap_pw(&self, password: &[u8], params: Argon2Params) -> Result<String, PaserkError> {
    wrap("k4.local-pw.", password, params, self.0.as_ref())
  }

  /// Unwraps a `k4.local-pw.` PASERK produced by [`PaserkLocal::wrap_pw`].
  pub fn unwrap_pw(password: &[u8], wrapped: &str) -> Result<Self, PaserkError> {
    let plaintext = unwrap("k4.local-pw.", password, wrapped)?;
    if plaintext.len() != 32 {
      return Err(PaserkError::BadLength);
    }
    Ok(Self(crate::core::Key::<32>::from(plaintext.as_slice())))
  }
}

impl PaserkSecret {
  /// Wraps this secret key under a password, producing a `k4.secret-pw.` PASERK.
  pub fn wrap_pw(&self, password: &[u8], params: Argon2Params) -> Result<String, PaserkError> {
    wrap("k4.secret-pw.", password, params, self.0.as_ref())
  }

  /// Unwraps a `k4.secret-pw.` PASERK produced by [`PaserkSecret::wrap_pw`].
  pub fn unwrap_pw(password: &[u8], wrapped: &str) -> Result<Self, PaserkError> {
    let plaintext = unwrap("k4.secret-pw.", password, wrapped)?;
    if plaintext.len() != 64 {
      return Err(PaserkError::BadLength);
    }
    Ok(Self(crate::core::Key::<64>::from(plaintext.as_slice())))
  }
}

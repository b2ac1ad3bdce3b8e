use base64::prelude::*;
use std::fmt;
use std::str::FromStr;

use crate::core::Key;

use super::error::PaserkError;

fn write_prefixed(prefix: &str, body: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
  f.write_str(prefix)?;
  f.write_str(&BASE64_URL_SAFE_NO_PAD.encode(body))
}

fn parse_prefixed<const N: usize>(prefix: &str, s: &str) -> Result<Key<N>, PaserkError> {
  let body = s.strip_prefix(prefix).ok_or(PaserkError::WrongHeader)?;
  let decoded = BASE64_URL_SAFE_NO_PAD.decode(body)?;
  if decoded.len() != N {
    return Err(PaserkError::BadLength);
  }
  Ok(Key::<N>::from(decoded.as_slice()))
}

/// A `k4.local.` PASERK: the raw 32-byte symmetric key for v4.local tokens.
pub struct PaserkLocal(pub Key<32>);

impl PaserkLocal {
  pub const HEADER: &'static str = "k4.local.";
}

impl fmt::Display for PaserkLocal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_prefixed(Self::HEADER, self.0.as_ref(), f)
  }
}

impl FromStr for PaserkLocal {
  type Err = PaserkError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self(parse_prefixed(Self::HEADER, s)?))
  }
}

/// A `k4.secret.` PASERK: the 64-byte Ed25519 expanded secret (seed ‖ public) for v4.public tokens.
pub struct PaserkSecret(pub Key<64>);

impl PaserkSecret {
  pub const HEADER: &'static str = "k4.secret.";

  /// The public half embedded in the expanded secret's trailing 32 bytes.
  pub fn public(&self) -> PaserkPublic {
    PaserkPublic(Key::<32>::from(&self.0[32..64]))
  }
}

impl fmt::Display for PaserkSecret {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_prefixed(Self::HEADER, self.0.as_ref(), f)
  }
}

impl FromStr for PaserkSecret {
  type Err = PaserkError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self(parse_prefixed(Self::HEADER, s)?))
  }
}

/// A `k4.public.` PASERK: the raw 32-byte Ed25519 public key for v4.public tokens.
pub struct PaserkPublic(pub Key<32>);

impl PaserkPublic {
  pub const HEADER: &'static str = "k4.public.";
}

impl fmt::Display for PaserkPublic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_prefixed(Self::HEADER, self.0.as_ref(), f)
  }
}

impl FromStr for PaserkPublic {
  type Err = PaserkError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self(parse_prefixed(Self::HEADER, s)?))
  }
}

use thiserror::Error;

/// Errors that can occur while encoding, decoding, wrapping or sealing a PASERK.
#[derive(Debug, Error)]
pub enum PaserkError {
  /// The string did not begin with the expected `k4.*.` prefix.
  #[error("The PASERK header is invalid")]
  WrongHeader,
  /// The decoded body was not the size this PASERK type requires.
  #[error("The PASERK body has an incorrect length")]
  BadLength,
  /// A wrap or seal tag, or a password-wrap tag, failed verification.
  #[error("The PASERK could not be authenticated")]
  InvalidTag,
  /// Surfaced from the base64 crate.
  #[error("A base64 decode error occurred")]
  Base64 {
    #[from]
    source: base64::DecodeError,
  },
  /// Surfaced from the argon2 crate.
  #[error("An Argon2 key derivation error occurred")]
  Argon2 {
    #[from]
    source: argon2::Error,
  },
  /// Surfaced from the underlying PASETO core (e.g. BLAKE2b key length errors).
  #[error("An unspecified cipher error occurred")]
  Paseto {
    #[from]
    source: crate::core::PasetoError,
  },
  /// A BLAKE2b key was outside the algorithm's 0..=64 byte range.
  #[error("An invalid key length was supplied to BLAKE2b")]
  Blake2Length {
    #[from]
    source: blake2::digest::InvalidLength,
  },
}

//  #![doc(html_no_source)]
//  #![deny(rustdoc::missing_crate_level_docs)]
//  #![warn(missing_docs)]

//! Secure stateless [PASETO: Platform-Agnostic Security Tokens](https://github.com/paseto-standard/paseto-spec)
//! and their [PASERK](https://github.com/paseto-standard/paserk) key
//! serializations.
//!
//! This crate implements the v2/v3/v4 PASETO token formats and the v4
//! PASERK extension as pure cryptographic primitives: encrypt/decrypt for
//! `local` tokens, sign/verify for `public` tokens, and encode/decode/wrap/
//! seal for keys. It does not encode or validate JSON claims, payloads and
//! footers are opaque bytes, and any claims layer is the caller's concern.
//!
//! ```
//! # #[cfg(feature = "v4_local")]
//! # {
//! use rusty_paseto::core::*;
//!
//! let key = PasetoSymmetricKey::<V4, Local>::from(Key::<32>::try_new_random()?);
//! let nonce_bytes = Key::<32>::try_new_random()?;
//! let nonce = PasetoNonce::<V4, Local>::from(&nonce_bytes);
//!
//! let token = Paseto::<V4, Local>::builder()
//!   .set_payload(Payload::from("a secret message"))
//!   .try_encrypt(&key, &nonce)?;
//!
//! let message = Paseto::<V4, Local>::try_decrypt(&token, &key, None, None)?;
//! assert_eq!(message, "a secret message");
//! # }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # PASERK
//!
//! ```
//! # #[cfg(all(feature = "v4_local", feature = "v4_public"))]
//! # {
//! use rusty_paseto::core::Key;
//! use rusty_paseto::paserk::PaserkLocal;
//!
//! let local = PaserkLocal(Key::<32>::try_new_random()?);
//! let serialized = local.to_string();
//! assert!(serialized.starts_with("k4.local."));
//! # }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[cfg(feature = "core")]
pub mod core;

#[cfg(all(feature = "v4_local", feature = "v4_public"))]
pub mod paserk;

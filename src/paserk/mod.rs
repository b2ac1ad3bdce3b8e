//! PASERK (PASETO Serialized Keys), v4 only.
//!
//! Provides the plain key serializations (`k4.local.`, `k4.secret.`,
//! `k4.public.`), their identifiers (`k4.lid.`, `k4.sid.`, `k4.pid.`), and
//! the wrap/seal operations (`k4.local-wrap.pie.`, `k4.secret-wrap.pie.`,
//! `k4.local-pw.`, `k4.secret-pw.`, `k4.seal.`).
//!
//! ```
//! # #[cfg(feature = "v4_local")]
//! # {
//! use rusty_paseto::core::Key;
//! use rusty_paseto::paserk::PaserkLocal;
//!
//! let local = PaserkLocal(Key::<32>::try_new_random()?);
//! let serialized = local.to_string();
//! let parsed: PaserkLocal = serialized.parse()?;
//! assert_eq!(local.0.as_ref(), parsed.0.as_ref());
//! # }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod id;
mod keys;
mod pie;
mod pw;
mod seal;

pub use error::PaserkError;
pub use keys::{PaserkLocal, PaserkPublic, PaserkSecret};
pub use pw::Argon2Params;

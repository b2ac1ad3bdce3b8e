//! Property-based round-trip invariants: `decrypt(encrypt(K, P)) == P` for
//! every `local` version, and `verify(sign(KP, P)) == P` for the `public`
//! versions built on Ed25519 (v2, v4). Deterministic byte-exact vectors live
//! in `version{2,3,4}_test_vectors.rs` and `paserk_test_vectors.rs`; this
//! file exercises the same code paths against randomized keys/nonces/payloads.

use proptest::prelude::*;
use rusty_paseto::core::*;

fn printable_payload() -> impl Strategy<Value = String> {
    "[ -~]{0,200}"
}

#[cfg(feature = "v2_local")]
mod v2_local_invariants {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn round_trips(key_bytes in any::<[u8; 32]>(), nonce_bytes in any::<[u8; 32]>(), payload in printable_payload()) {
            let key = PasetoSymmetricKey::<V2, Local>::from(Key::<32>::from(key_bytes));
            let nonce = Key::<32>::from(nonce_bytes);
            let nonce = PasetoNonce::<V2, Local>::from(&nonce);

            let token = Paseto::<V2, Local>::builder()
                .set_payload(Payload::from(payload.as_str()))
                .try_encrypt(&key, &nonce)
                .expect("encryption with a random key/nonce must succeed");

            let decrypted = Paseto::<V2, Local>::try_decrypt(&token, &key, None)
                .expect("decryption with the encrypting key must succeed");
            prop_assert_eq!(decrypted, payload);
        }
    }
}

#[cfg(feature = "v3_local")]
mod v3_local_invariants {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn round_trips(
            key_bytes in any::<[u8; 32]>(),
            nonce_bytes in any::<[u8; 32]>(),
            payload in printable_payload(),
            implicit in printable_payload(),
        ) {
            let key = PasetoSymmetricKey::<V3, Local>::from(Key::<32>::from(key_bytes));
            let nonce = Key::<32>::from(nonce_bytes);
            let nonce = PasetoNonce::<V3, Local>::from(&nonce);
            let assertion = ImplicitAssertion::from(implicit.as_str());

            let token = Paseto::<V3, Local>::builder()
                .set_payload(Payload::from(payload.as_str()))
                .set_implicit_assertion(assertion.clone())
                .try_encrypt(&key, &nonce)
                .expect("encryption with a random key/nonce must succeed");

            let decrypted = Paseto::<V3, Local>::try_decrypt(&token, &key, None, assertion)
                .expect("decryption with the encrypting key and matching assertion must succeed");
            prop_assert_eq!(decrypted, payload);
        }
    }
}

#[cfg(feature = "v4_local")]
mod v4_local_invariants {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn round_trips(
            key_bytes in any::<[u8; 32]>(),
            nonce_bytes in any::<[u8; 32]>(),
            payload in printable_payload(),
            implicit in printable_payload(),
        ) {
            let key = PasetoSymmetricKey::<V4, Local>::from(Key::<32>::from(key_bytes));
            let nonce = Key::<32>::from(nonce_bytes);
            let nonce = PasetoNonce::<V4, Local>::from(&nonce);
            let assertion = ImplicitAssertion::from(implicit.as_str());

            let token = Paseto::<V4, Local>::builder()
                .set_payload(Payload::from(payload.as_str()))
                .set_implicit_assertion(assertion.clone())
                .try_encrypt(&key, &nonce)
                .expect("encryption with a random key/nonce must succeed");

            let decrypted = Paseto::<V4, Local>::try_decrypt(&token, &key, None, assertion)
                .expect("decryption with the encrypting key and matching assertion must succeed");
            prop_assert_eq!(decrypted, payload);
        }
    }
}

#[cfg(feature = "v2_public")]
mod v2_public_invariants {
    use ed25519_dalek::SigningKey;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn round_trips(seed in any::<[u8; 32]>(), payload in printable_payload()) {
            let signing_key = SigningKey::from_bytes(&seed);
            let private_key = Key::<64>::from(signing_key.to_keypair_bytes());
            let private_key = PasetoAsymmetricPrivateKey::<V2, Public>::from(&private_key);
            let public_key = Key::<32>::from(signing_key.verifying_key().to_bytes());
            let public_key = PasetoAsymmetricPublicKey::<V2, Public>::from(&public_key);

            let token = Paseto::<V2, Public>::builder()
                .set_payload(Payload::from(payload.as_str()))
                .try_sign(&private_key)
                .expect("signing with a valid keypair must succeed");

            let verified = Paseto::<V2, Public>::try_verify(&token, &public_key, None)
                .expect("verification with the matching public key must succeed");
            prop_assert_eq!(verified, payload);
        }
    }
}

#[cfg(feature = "v4_public")]
mod v4_public_invariants {
    use ed25519_dalek::SigningKey;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn round_trips(seed in any::<[u8; 32]>(), payload in printable_payload(), implicit in printable_payload()) {
            let signing_key = SigningKey::from_bytes(&seed);
            let private_key = Key::<64>::from(signing_key.to_keypair_bytes());
            let private_key = PasetoAsymmetricPrivateKey::<V4, Public>::from(&private_key);
            let public_key = Key::<32>::from(signing_key.verifying_key().to_bytes());
            let public_key = PasetoAsymmetricPublicKey::<V4, Public>::from(&public_key);
            let assertion = ImplicitAssertion::from(implicit.as_str());

            let token = Paseto::<V4, Public>::builder()
                .set_payload(Payload::from(payload.as_str()))
                .set_implicit_assertion(assertion.clone())
                .try_sign(&private_key)
                .expect("signing with a valid keypair must succeed");

            let verified = Paseto::<V4, Public>::try_verify(&token, &public_key, None, assertion)
                .expect("verification with the matching public key and assertion must succeed");
            prop_assert_eq!(verified, payload);
        }
    }
}

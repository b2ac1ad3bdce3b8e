#[cfg(all(test, feature = "v4_local", feature = "v4_public"))]
mod paserk_tests {
  use anyhow::Result;
  use rusty_paseto::core::Key;
  use rusty_paseto::paserk::{Argon2Params, PaserkLocal, PaserkPublic, PaserkSecret};

  // Same key pair as the PASETO v4.public test vectors (4-S-1..3).
  const PRIVATE_KEY_HEX: &str = "b4cbfb43df4ce210727d953e4a713307fa19bb7d9f85041438d9e11b942a37741eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2";
  const PUBLIC_KEY_HEX: &str = "1eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2";

  // Published PASERK test vectors, independent of the PASETO key pair above.
  const LOCAL_VECTOR_KEY_HEX: &str = "707172737475767778797a7b7c7d7e7f808182838485868788898a8b8c8d8e8f";
  const LOCAL_VECTOR: &str = "k4.local.cHFyc3R1dnd4eXp7fH1-f4CBgoOEhYaHiImKi4yNjo8";
  const SECRET_VECTOR: &str =
    "k4.secret.cHFyc3R1dnd4eXp7fH1-f4CBgoOEhYaHiImKi4yNjo8c5WpIyC_5kWKhS8VEYSZ05dYfuTF-ZdQFV4D9vLTcNQ";
  const PUBLIC_VECTOR: &str = "k4.public.HOVqSMgv-ZFioUvFRGEmdOXWH7kxfmXUBVeA_by03DU";

  #[test]
  fn local_round_trips_through_display_and_from_str() -> Result<()> {
    let key = PaserkLocal(Key::<32>::try_new_random()?);
    let serialized = key.to_string();
    assert!(serialized.starts_with("k4.local."));

    let parsed: PaserkLocal = serialized.parse()?;
    assert_eq!(key.0.as_ref(), parsed.0.as_ref());
    Ok(())
  }

  #[test]
  fn secret_round_trips_through_display_and_from_str() -> Result<()> {
    let key = PaserkSecret(Key::<64>::try_from(PRIVATE_KEY_HEX)?);
    let serialized = key.to_string();
    assert!(serialized.starts_with("k4.secret."));

    let parsed: PaserkSecret = serialized.parse()?;
    assert_eq!(key.0.as_ref(), parsed.0.as_ref());
    Ok(())
  }

  #[test]
  fn public_round_trips_through_display_and_from_str() -> Result<()> {
    let key = PaserkPublic(Key::<32>::try_from(PUBLIC_KEY_HEX)?);
    let serialized = key.to_string();
    assert!(serialized.starts_with("k4.public."));

    let parsed: PaserkPublic = serialized.parse()?;
    assert_eq!(key.0.as_ref(), parsed.0.as_ref());
    Ok(())
  }

  #[test]
  fn secret_public_matches_independently_serialized_public_key() -> Result<()> {
    let secret = PaserkSecret(Key::<64>::try_from(PRIVATE_KEY_HEX)?);
    let expected_public = PaserkPublic(Key::<32>::try_from(PUBLIC_KEY_HEX)?);

    assert_eq!(secret.public().0.as_ref(), expected_public.0.as_ref());
    Ok(())
  }

  #[test]
  fn local_matches_published_test_vector() -> Result<()> {
    let key = PaserkLocal(Key::<32>::try_from(LOCAL_VECTOR_KEY_HEX)?);
    assert_eq!(key.to_string(), LOCAL_VECTOR);

    let parsed: PaserkLocal = LOCAL_VECTOR.parse()?;
    assert_eq!(parsed.0.as_ref(), key.0.as_ref());
    Ok(())
  }

  #[test]
  fn public_derivation_matches_published_test_vector() -> Result<()> {
    let secret: PaserkSecret = SECRET_VECTOR.parse()?;
    assert_eq!(secret.public().to_string(), PUBLIC_VECTOR);
    Ok(())
  }

  #[test]
  fn wrong_header_is_rejected() {
    let result: Result<PaserkLocal, _> = "k4.secret.AAAA".parse();
    assert!(result.is_err());
  }

  #[test]
  fn wrong_length_body_is_rejected() {
    let result: Result<PaserkLocal, _> = "k4.local.AAAA".parse();
    assert!(result.is_err());
  }

  #[test]
  fn local_id_is_deterministic_and_distinguishes_keys() -> Result<()> {
    let key = PaserkLocal(Key::<32>::try_from(
      "707172737475767778797a7b7c7d7e7f808182838485868788898a8b8c8d8e8f",
    )?);
    let id_a = key.id();
    let id_b = key.id();
    assert_eq!(id_a, id_b);
    assert!(id_a.starts_with("k4.lid."));

    let other = PaserkLocal(Key::<32>::try_new_random()?);
    assert_ne!(id_a, other.id());
    Ok(())
  }

  #[test]
  fn secret_and_public_ids_use_distinct_headers() -> Result<()> {
    let secret = PaserkSecret(Key::<64>::try_from(PRIVATE_KEY_HEX)?);
    let public = secret.public();

    assert!(secret.id().starts_with("k4.sid."));
    assert!(public.id().starts_with("k4.pid."));
    Ok(())
  }

  #[test]
  fn pie_wrap_round_trips_local_key() -> Result<()> {
    let wrapping_key = Key::<32>::try_new_random()?;
    let key = PaserkLocal(Key::<32>::try_new_random()?);

    let wrapped = key.wrap_pie(&wrapping_key)?;
    assert!(wrapped.starts_with("k4.local-wrap.pie."));

    let unwrapped = PaserkLocal::unwrap_pie(&wrapping_key, &wrapped)?;
    assert_eq!(key.0.as_ref(), unwrapped.0.as_ref());
    Ok(())
  }

  #[test]
  fn pie_wrap_round_trips_secret_key() -> Result<()> {
    let wrapping_key = Key::<32>::try_new_random()?;
    let key = PaserkSecret(Key::<64>::try_from(PRIVATE_KEY_HEX)?);

    let wrapped = key.wrap_pie(&wrapping_key)?;
    assert!(wrapped.starts_with("k4.secret-wrap.pie."));

    let unwrapped = PaserkSecret::unwrap_pie(&wrapping_key, &wrapped)?;
    assert_eq!(key.0.as_ref(), unwrapped.0.as_ref());
    Ok(())
  }

  #[test]
  fn pie_unwrap_with_wrong_key_fails() -> Result<()> {
    let wrapping_key = Key::<32>::try_new_random()?;
    let other_key = Key::<32>::try_new_random()?;
    let key = PaserkLocal(Key::<32>::try_new_random()?);

    let wrapped = key.wrap_pie(&wrapping_key)?;
    let result = PaserkLocal::unwrap_pie(&other_key, &wrapped);
    assert!(result.is_err());
    Ok(())
  }

  #[test]
  fn pie_unwrap_rejects_truncated_body() -> Result<()> {
    let wrapping_key = Key::<32>::try_new_random()?;
    let result = PaserkLocal::unwrap_pie(&wrapping_key, "k4.local-wrap.pie.AAAA");
    assert!(result.is_err());
    Ok(())
  }

  #[test]
  fn password_wrap_round_trips_local_key() -> Result<()> {
    let key = PaserkLocal(Key::<32>::try_new_random()?);
    let params = Argon2Params {
      memory_kib: 256,
      time_cost: 1,
      parallelism: 1,
    };

    let wrapped = key.wrap_pw(b"correct horse battery staple", params)?;
    assert!(wrapped.starts_with("k4.local-pw."));

    let unwrapped = PaserkLocal::unwrap_pw(b"correct horse battery staple", &wrapped)?;
    assert_eq!(key.0.as_ref(), unwrapped.0.as_ref());
    Ok(())
  }

  #[test]
  fn password_wrap_round_trips_secret_key() -> Result<()> {
    let key = PaserkSecret(Key::<64>::try_from(PRIVATE_KEY_HEX)?);
    let params = Argon2Params {
      memory_kib: 256,
      time_cost: 1,
      parallelism: 1,
    };

    let wrapped = key.wrap_pw(b"hunter2", params)?;
    assert!(wrapped.starts_with("k4.secret-pw."));

    let unwrapped = PaserkSecret::unwrap_pw(b"hunter2", &wrapped)?;
    assert_eq!(key.0.as_ref(), unwrapped.0.as_ref());
    Ok(())
  }

  #[test]
  fn password_unwrap_with_wrong_password_fails() -> Result<()> {
    let key = PaserkLocal(Key::<32>::try_new_random()?);
    let params = Argon2Params {
      memory_kib: 256,
      time_cost: 1,
      parallelism: 1,
    };

    let wrapped = key.wrap_pw(b"right password", params)?;
    let result = PaserkLocal::unwrap_pw(b"wrong password", &wrapped);
    assert!(result.is_err());
    Ok(())
  }

  #[test]
  fn seal_round_trips_local_key_to_recipient() -> Result<()> {
    let recipient_secret = PaserkSecret(Key::<64>::try_from(PRIVATE_KEY_HEX)?);
    let recipient_public = recipient_secret.public();

    let local = PaserkLocal(Key::<32>::try_new_random()?);
    let sealed = local.seal(&recipient_public)?;
    assert!(sealed.starts_with("k4.seal."));

    let unsealed = recipient_secret.unseal(&sealed)?;
    assert_eq!(local.0.as_ref(), unsealed.0.as_ref());
    Ok(())
  }

  #[test]
  fn seal_unseal_with_wrong_secret_fails() -> Result<()> {
    let recipient_secret = PaserkSecret(Key::<64>::try_from(PRIVATE_KEY_HEX)?);
    let recipient_public = recipient_secret.public();

    let local = PaserkLocal(Key::<32>::try_new_random()?);
    let sealed = local.seal(&recipient_public)?;

    let wrong_secret = PaserkSecret(Key::<64>::try_new_random()?);
    let result = wrong_secret.unseal(&sealed);
    assert!(result.is_err());
    Ok(())
  }

  #[test]
  fn seal_unseal_rejects_tampered_body() -> Result<()> {
    let recipient_secret = PaserkSecret(Key::<64>::try_from(PRIVATE_KEY_HEX)?);
    let recipient_public = recipient_secret.public();

    let local = PaserkLocal(Key::<32>::try_new_random()?);
    let sealed = local.seal(&recipient_public)?;

    // flip a character deep in the encrypted-data-key/tag region
    let mut tampered = sealed.into_bytes();
    let last = tampered.len() - 1;
    tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered)?;

    let result = recipient_secret.unseal(&tampered);
    assert!(result.is_err());
    Ok(())
  }
}

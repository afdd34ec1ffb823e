//! Table round trips and the required normalization scenarios.

use hn_registry::{
    HASH_NAMES, HashAlgorithm, HashContext, HashNameError, normalize_hash_name, registry,
    resolve_hash_name,
};

use crate::harness::{self, EXPECTED, defined_cells};

#[test]
fn standard_table_matches_reference() {
    assert_eq!(HASH_NAMES.len(), EXPECTED.len());
    for (entry, (canonical, row)) in HASH_NAMES.iter().zip(EXPECTED) {
        assert_eq!(entry.algorithm.canonical_name(), *canonical);
        for (context, expected) in HashContext::ALL.into_iter().zip(row) {
            assert_eq!(entry.spellings.get(context), *expected, "{canonical} in {context}");
        }
    }
}

#[test]
fn every_spelling_round_trips_in_its_context() {
    harness::init();
    for (canonical, context, spelling) in defined_cells() {
        assert_eq!(normalize_hash_name(spelling, context), Ok(spelling), "{canonical}");
        assert_eq!(
            normalize_hash_name(spelling.to_lowercase().as_str(), context),
            Ok(spelling),
            "{canonical}"
        );
        assert_eq!(
            normalize_hash_name(spelling.to_uppercase().as_str(), context),
            Ok(spelling),
            "{canonical}"
        );
    }
}

#[test]
fn every_spelling_reaches_every_other_column() {
    for (canonical, _, alias) in defined_cells() {
        let (_, row) = EXPECTED
            .iter()
            .find(|(name, _)| *name == canonical)
            .unwrap();
        for (context, expected) in HashContext::ALL.into_iter().zip(row) {
            let result = normalize_hash_name(alias, context);
            match expected {
                Some(spelling) => assert_eq!(result, Ok(*spelling)),
                None => assert!(matches!(
                    result,
                    Err(HashNameError::UnsupportedInContext { .. })
                )),
            }
        }
    }
}

#[test]
fn canonical_keys_normalize_to_themselves() {
    for algorithm in HashAlgorithm::ALL {
        let key = algorithm.canonical_name();
        assert_eq!(normalize_hash_name(key, HashContext::Node), Ok(key));
        assert_eq!(registry().normalize_default(key), Ok(key));
    }
}

#[test]
fn normalization_is_idempotent() {
    for (_, context, spelling) in defined_cells() {
        let once = normalize_hash_name(spelling, context).unwrap();
        let twice = normalize_hash_name(once, context).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn required_scenarios() {
    assert_eq!(normalize_hash_name("SHA-256", HashContext::WebCrypto), Ok("SHA-256"));
    assert_eq!(normalize_hash_name("sha256", HashContext::JwkRsa), Ok("RS256"));
    assert_eq!(normalize_hash_name("RSA-OAEP-512", HashContext::Node), Ok("sha512"));
    assert_eq!(normalize_hash_name("rs1", HashContext::WebCrypto), Ok("SHA-1"));
}

#[test]
fn absent_input_is_invalid_in_every_context() {
    for context in HashContext::ALL {
        let result = normalize_hash_name(None::<&str>, context);
        assert_eq!(
            result,
            Err(HashNameError::InvalidAlgorithm("undefined".to_string()))
        );
    }
}

#[test]
fn unknown_algorithm_is_invalid() {
    let result = normalize_hash_name("not-a-real-algorithm", HashContext::Node);
    assert_eq!(
        result,
        Err(HashNameError::InvalidAlgorithm("not-a-real-algorithm".to_string()))
    );
}

#[test]
fn algorithms_outside_the_set_are_invalid() {
    for name in ["md5", "SHA3-256", "blake2b512", "ES256", "ripemd"] {
        assert!(
            matches!(resolve_hash_name(name), Err(HashNameError::InvalidAlgorithm(_))),
            "{name}"
        );
    }
}

#[test]
fn ripemd160_has_no_jwk_spelling() {
    for context in HashContext::ALL.into_iter().filter(|c| c.is_jwk()) {
        let result = normalize_hash_name("RIPEMD-160", context);
        assert_eq!(
            result,
            Err(HashNameError::UnsupportedInContext {
                algorithm: "ripemd160",
                context,
            })
        );
    }
}

#[test]
fn concurrent_first_use_sees_one_registry() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let registry = registry();
                assert_eq!(registry.normalize("PS384", HashContext::JwkHmac), Ok("HS384"));
                registry as *const _ as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

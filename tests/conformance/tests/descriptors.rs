//! Algorithm objects and configuration as they arrive from JSON.

use hn_core::Config;
use hn_registry::{
    AlgorithmDescriptor, AlgorithmRef, HashAlgorithm, HashContext, HashNameError, SubtleAlgorithm,
    normalize_hash_name, registry,
};
use serde_json::{Value, json};

use crate::harness;

#[derive(Debug)]
struct KeyAlgorithm {
    hash: &'static str,
}

impl AlgorithmDescriptor for KeyAlgorithm {
    fn name(&self) -> Option<&str> {
        None
    }

    fn string_form(&self) -> Option<String> {
        Some(self.hash.to_string())
    }
}

#[test]
fn subtle_algorithm_object_is_accepted() {
    harness::init();
    let algorithm = SubtleAlgorithm::new("SHA-384");
    assert_eq!(normalize_hash_name(&algorithm, HashContext::JwkHmac), Ok("HS384"));
}

#[test]
fn json_algorithm_object_is_accepted() {
    let value = json!({ "name": "sha-512", "length": 512 });
    assert_eq!(normalize_hash_name(&value, HashContext::JwkRsaOaep), Ok("RSA-OAEP-512"));
}

#[test]
fn jwk_alg_member_is_accepted() {
    let jwk: Value = serde_json::from_str(r#"{"kty":"RSA","alg":"PS256"}"#).unwrap();
    assert_eq!(normalize_hash_name(&jwk["alg"], HashContext::WebCrypto), Ok("SHA-256"));
}

#[test]
fn missing_json_member_is_absent() {
    let jwk = json!({ "kty": "oct" });
    let result = normalize_hash_name(&jwk["alg"], HashContext::JwkHmac);
    assert_eq!(
        result,
        Err(HashNameError::InvalidAlgorithm("undefined".to_string()))
    );
}

#[test]
fn nameless_json_object_reports_its_json() {
    let value = json!({ "length": 256 });
    let result = normalize_hash_name(&value, HashContext::Node);
    assert_eq!(
        result,
        Err(HashNameError::InvalidAlgorithm(r#"{"length":256}"#.to_string()))
    );
}

#[test]
fn custom_descriptor_falls_back_to_string_form() {
    let algorithm = KeyAlgorithm { hash: "SHA-224" };
    let input = AlgorithmRef::Descriptor(&algorithm);
    assert_eq!(normalize_hash_name(input, HashContext::JwkRsa), Ok("RS224"));
}

#[test]
fn canonical_algorithm_is_accepted() {
    assert_eq!(
        normalize_hash_name(HashAlgorithm::Ripemd160, HashContext::WebCrypto),
        Ok("RIPEMD-160")
    );
}

#[test]
fn algorithm_round_trips_through_json() {
    let algorithm: HashAlgorithm = serde_json::from_value(json!("RSA-OAEP-384")).unwrap();
    assert_eq!(algorithm, HashAlgorithm::Sha384);
    assert_eq!(serde_json::to_value(algorithm).unwrap(), json!("sha384"));
}

#[test]
fn configured_default_context_drives_normalization() {
    let config = Config::from_json(r#"{"registry":{"default_context":"jwk-rsa"}}"#).unwrap();
    let registry = config.build_registry().unwrap();
    assert_eq!(registry.normalize_configured("HS512", &config.registry), Ok("RS512"));
}

#[test]
fn default_context_is_node() {
    assert_eq!(registry().normalize_default("SHA-1"), Ok("sha1"));
    assert_eq!(Config::default().registry.default_context, HashContext::Node);
}

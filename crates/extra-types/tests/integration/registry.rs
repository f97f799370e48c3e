//! Registry dispatch through the public API.

use nebula_extra_types::foundation::ErrorKind;
use nebula_extra_types::registry::{self, RegistryError};
use rstest::rstest;

#[rstest]
#[case("payment_card_number", "4242424242424242", "4242424242424242")]
#[case("isbn", "8537809667", "9788537809662")]
#[case("aba_routing_number", "122105155", "122105155")]
#[case("mac_address", "00-00-5E-00-53-01", "00:00:5e:00:53:01")]
#[case("coordinate", "0,0", "0,0")]
#[case("domain", "Nebula.DEV", "nebula.dev")]
#[case("s3_path", "s3://bucket/key", "s3://bucket/key")]
#[case("mongo_object_id", "5F9F2F4B9D3C5A7B4C7E6C1D", "5f9f2f4b9d3c5a7b4c7e6c1d")]
#[case("semantic_version", "1.2.3", "1.2.3")]
fn every_registered_type_normalizes(#[case] name: &str, #[case] raw: &str, #[case] expected: &str) {
    assert!(registry::contains(name));
    assert_eq!(registry::normalize(name, raw).unwrap(), expected);
}

#[test]
fn names_match_registered_count() {
    assert_eq!(registry::names().count(), 9);
    assert!(registry::names().all(registry::contains));
}

#[test]
fn rejection_carries_kind() {
    match registry::normalize("isbn", "9790000000000") {
        Err(RegistryError::Invalid(error)) => assert_eq!(error.kind, ErrorKind::CheckDigit),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn registry_logs_under_a_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(registry::validate("mac_address", "00:00:5e:00:53:01").is_ok());
        assert!(registry::validate("mac_address", "nope").is_err());
        assert!(registry::validate("unknown", "x").is_err());
    });
}

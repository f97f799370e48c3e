//! Combinator chains over value types.

use nebula_extra_types::foundation::{validate_with_all, validate_with_any};
use nebula_extra_types::prelude::*;
use nebula_extra_types::{any_of, compose, validator};

validator! {
    /// Rejects the documentation test ranges of routing numbers.
    NotTestRouting for str;
    rule(input) { !input.starts_with("0000") }
    error(input) { ValidationError::format("test_routing", "test routing numbers are not accepted") }
    fn not_test_routing();
}

#[test]
fn compose_runs_in_order() {
    let routing = compose![ascii_digits(), not_test_routing(), Parsed::<AbaRoutingNumber>::new()];

    assert!(routing.validate("122105155").is_ok());
    assert_eq!(routing.validate("12a105155").unwrap_err().code, "ascii_digits");
    assert_eq!(routing.validate("000000000").unwrap_err().code, "test_routing");
    assert_eq!(
        routing.validate("122105154").unwrap_err().kind,
        ErrorKind::Checksum
    );
}

#[test]
fn any_of_accepts_first_match() {
    let identifier = any_of![
        Parsed::<Isbn>::new(),
        Parsed::<MongoObjectId>::new(),
        Parsed::<AbaRoutingNumber>::new(),
    ];

    assert!(identifier.validate("080442957X").is_ok());
    assert!(identifier.validate("5f9f2f4b9d3c5a7b4c7e6c1d").is_ok());
    assert!(identifier.validate("122105155").is_ok());
    assert!(identifier.validate("122105154").is_err());
}

#[test]
fn with_message_keeps_kind_for_branching() {
    let card = Parsed::<PaymentCardNumber>::new().with_message("Please check the card number");
    let err = card.validate("4242424242424241").unwrap_err();

    assert_eq!(err.message, "Please check the card number");
    assert_eq!(err.kind, ErrorKind::Luhn);
    assert_eq!(err.nested[0].code, "payment_card_number_luhn");
}

#[test]
fn collecting_helpers() {
    let isbn = Parsed::<Isbn>::new();
    let mac = Parsed::<MacAddress>::new();
    let validators: &[&dyn Validate<Input = str>] = &[&isbn, &mac];

    let errors = validate_with_all("8537809667", validators).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].code, "mac_address_len");

    assert!(validate_with_any("0000.5e00.5301", validators).is_ok());
}

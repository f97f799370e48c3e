//! Property-based tests for the checksums and normalizers.

use nebula_extra_types::checksum::{isbn10_check_digit, isbn13_check_digit, luhn_valid};
use nebula_extra_types::prelude::*;
use nebula_extra_types::types::classify;
use nebula_extra_types::types::isbn::convert_isbn10_to_isbn13;
use proptest::prelude::*;

fn with_luhn_check_digit(body: &str) -> String {
    (0..=9)
        .map(|d| format!("{body}{d}"))
        .find(|candidate| luhn_valid(candidate))
        .expect("one check digit always completes the sum")
}

// ============================================================================
// LUHN
// ============================================================================

proptest! {
    #[test]
    fn exactly_one_check_digit_is_luhn_valid(body in "[0-9]{11,18}") {
        let valid = (0..=9).filter(|d| luhn_valid(&format!("{body}{d}"))).count();
        prop_assert_eq!(valid, 1);
    }

    #[test]
    fn single_digit_mutation_breaks_luhn(
        body in "[0-9]{11,18}",
        position in any::<prop::sample::Index>(),
        replacement in 0u8..10,
    ) {
        let number = with_luhn_check_digit(&body);
        let i = position.index(number.len());
        let mut bytes = number.clone().into_bytes();
        let replacement = b'0' + replacement;
        prop_assume!(bytes[i] != replacement);
        bytes[i] = replacement;

        let mutated = String::from_utf8(bytes).unwrap();
        prop_assert!(!luhn_valid(&mutated), "{} -> {}", number, mutated);
    }

    #[test]
    fn luhn_ignores_leading_zeros(body in "[0-9]{11,17}") {
        let number = with_luhn_check_digit(&body);
        let padded = format!("0{number}");
        prop_assert!(luhn_valid(&padded));
    }

    #[test]
    fn classify_handles_any_digit_string(digits in "[0-9]{0,19}") {
        let classification = classify(&digits);
        prop_assert_eq!(classification.allowed_lengths, classification.brand.allowed_lengths());
    }

    #[test]
    fn card_parse_never_panics(raw in ".{0,24}") {
        let _ = PaymentCardNumber::parse(&raw);
    }
}

// ============================================================================
// ISBN
// ============================================================================

proptest! {
    #[test]
    fn isbn10_round_trips_to_consistent_isbn13(body in "[0-9]{9}") {
        let check = isbn10_check_digit(&body).unwrap();
        let isbn10 = format!("{body}{check}");

        let isbn = Isbn::parse(&isbn10).unwrap();
        prop_assert!(isbn.as_str().starts_with("978"));
        prop_assert_eq!(isbn.as_str().len(), 13);
        prop_assert_eq!(isbn13_check_digit(isbn.as_str()), isbn.as_str().chars().last());
        prop_assert_eq!(isbn.to_isbn10(), Some(isbn10));
    }

    #[test]
    fn isbn13_conversion_is_idempotent(body in "[0-9]{9}") {
        let isbn10 = format!("{body}{}", isbn10_check_digit(&body).unwrap());
        let once = convert_isbn10_to_isbn13(&isbn10).unwrap();
        let twice = convert_isbn10_to_isbn13(&once).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(Isbn::parse(&once).unwrap(), Isbn::parse(&isbn10).unwrap());
    }

    #[test]
    fn isbn_parse_never_panics(raw in "\\PC{0,14}") {
        let _ = Isbn::parse(&raw);
    }
}

// ============================================================================
// MAC ADDRESS
// ============================================================================

fn render(octets: &[u8], notation: u8, upper: bool) -> String {
    let hex: Vec<String> = octets
        .iter()
        .map(|b| if upper { format!("{b:02X}") } else { format!("{b:02x}") })
        .collect();
    match notation {
        0 => hex.join(":"),
        1 => hex.join("-"),
        _ => hex.chunks(2).map(|pair| pair.concat()).collect::<Vec<_>>().join("."),
    }
}

proptest! {
    #[test]
    fn mac_normalization_is_idempotent(
        count in prop::sample::select(vec![6usize, 8, 20]),
        seed in prop::collection::vec(any::<u8>(), 20),
        notation in 0u8..3,
        upper in any::<bool>(),
    ) {
        let octets = &seed[..count];
        let mac = MacAddress::parse(&render(octets, notation, upper)).unwrap();

        prop_assert_eq!(mac.octets(), octets);
        prop_assert_eq!(MacAddress::parse(mac.as_str()).unwrap(), mac.clone());
        prop_assert_eq!(mac.as_str(), render(octets, 0, false));
    }

    #[test]
    fn mac_parse_never_panics(raw in "\\PC{0,64}") {
        let _ = MacAddress::parse(&raw);
    }
}

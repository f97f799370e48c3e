//! End-to-end parsing scenarios through the public API.

use nebula_extra_types::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn visa_card_accessors() {
    let card = PaymentCardNumber::parse("4242424242424242").unwrap();
    assert_eq!(card.brand(), CardBrand::Visa);
    assert_eq!(card.bin(), "424242");
    assert_eq!(card.last4(), "4242");
    assert_eq!(card.masked(), "424242******4242");
}

#[test]
fn isbn10_is_stored_as_isbn13() {
    let isbn = Isbn::parse("080442957X").unwrap();
    assert_eq!(isbn.as_str(), "9780804429573");
    assert_eq!(Isbn::parse("8537809667").unwrap().as_str(), "9788537809662");
}

#[test]
fn routing_number_accepted_verbatim() {
    let aba = AbaRoutingNumber::parse("122105155").unwrap();
    assert_eq!(aba.as_str(), "122105155");
}

#[test]
fn routing_number_checksum_boundary() {
    let err = AbaRoutingNumber::parse("122105154").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Checksum);
}

#[test]
fn eight_byte_mac_address() {
    let mac = MacAddress::parse("02-00-5e-10-00-00-00-01").unwrap();
    assert_eq!(mac.as_str(), "02:00:5e:10:00:00:00:01");
}

#[test]
fn luhn_failure_is_reported_as_luhn() {
    let err = PaymentCardNumber::parse("4000000000000000").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Luhn);
    assert_eq!(err.code, "payment_card_number_luhn");
}

#[test]
fn seventeen_digit_visa_is_a_brand_length_error() {
    let err = PaymentCardNumber::parse("40000000000000006").unwrap_err();
    assert_eq!(err.kind, ErrorKind::BrandLength);
    assert_eq!(
        err.to_string(),
        "payment_card_number_brand: Length for a Visa card must be 13 or 16 or 19"
    );
}

#[rstest]
#[case("00:00:5e:00:53:01", 6)]
#[case("00:00:5e:00:53:01:02:03", 8)]
#[case("00:01:02:03:04:05:06:07:08:09:0a:0b:0c:0d:0e:0f:10:11:12:13", 20)]
fn mac_boundary_lengths_succeed(#[case] raw: &str, #[case] count: usize) {
    assert_eq!(MacAddress::parse(raw).unwrap().octet_count(), count);
}

#[test]
fn seven_byte_mac_is_a_length_error() {
    let err = MacAddress::parse("00:00:5e:00:53:01:02").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Length);
    assert_eq!(err.code, "mac_address_len");
}

#[test]
fn lenient_card_options() {
    let card =
        PaymentCardNumber::parse_with(" 4242 4242 4242 4242 ", &CardOptions::lenient()).unwrap();
    assert_eq!(card.as_str(), "4242424242424242");
}

#[test]
fn supplementary_types() {
    let path = S3Path::parse("s3://my-data-bucket/2023/08/29/sales-report.csv").unwrap();
    assert_eq!(path.last_key(), "sales-report.csv");

    let id = MongoObjectId::parse("5f9f2f4b9d3c5a7b4c7e6c1d").unwrap();
    assert_eq!(id.bytes().len(), 12);

    let version = SemanticVersion::parse("2.0.0-rc.1").unwrap();
    assert!(!version.is_release());

    let here = Coordinate::parse("41.40338,2.17403").unwrap();
    assert_eq!(here.longitude().to_string(), "2.17403");

    assert!(DomainStr::parse("nebula.dev").is_ok());
}

#[cfg(feature = "temporal")]
#[test]
fn epoch_types() {
    let t = EpochInteger::parse("1700000000").unwrap();
    assert_eq!(t.datetime().to_rfc3339(), "2023-11-14T22:13:20+00:00");
    assert_eq!(EpochNumber::new(0.5).unwrap().timestamp(), 0.5);
}

//! Serde integration: value types travel as their normalized text.

use nebula_extra_types::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn string_types_serialize_normalized() {
    let isbn: Isbn = serde_json::from_value(json!("080442957X")).unwrap();
    assert_eq!(serde_json::to_value(&isbn).unwrap(), json!("9780804429573"));

    let mac: MacAddress = serde_json::from_value(json!("0000.5e00.5301")).unwrap();
    assert_eq!(serde_json::to_value(&mac).unwrap(), json!("00:00:5e:00:53:01"));

    let card: PaymentCardNumber = serde_json::from_value(json!("4242424242424242")).unwrap();
    assert_eq!(serde_json::to_string(&card).unwrap(), "\"4242424242424242\"");
}

#[test]
fn invalid_values_fail_deserialization() {
    let err = serde_json::from_value::<AbaRoutingNumber>(json!("122105154")).unwrap_err();
    assert!(err.to_string().contains("Incorrect ABA routing transit number"));

    assert!(serde_json::from_value::<PaymentCardNumber>(json!("4000000000000000")).is_err());
    assert!(serde_json::from_value::<Latitude>(json!(91.0)).is_err());
}

#[test]
fn coordinate_accepts_three_shapes() {
    let expected = Coordinate::new(41.40338, 2.17403).unwrap();

    for value in [
        json!("41.40338,2.17403"),
        json!([41.40338, 2.17403]),
        json!({ "latitude": 41.40338, "longitude": 2.17403 }),
    ] {
        let parsed: Coordinate = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, expected);
    }

    assert_eq!(
        serde_json::to_value(expected).unwrap(),
        json!({ "latitude": 41.40338, "longitude": 2.17403 })
    );
    assert!(serde_json::from_value::<Coordinate>(json!([100.0, 0.0])).is_err());
}

#[test]
fn card_brand_serializes_snake_case() {
    assert_eq!(serde_json::to_value(CardBrand::DinersClub).unwrap(), json!("diners_club"));
}

#[test]
fn error_to_json() {
    let err = PaymentCardNumber::parse("40000000000000006").unwrap_err();
    let value = err.to_json_value();
    assert_eq!(value["kind"], json!("brand_length"));
    assert_eq!(value["code"], json!("payment_card_number_brand"));
    assert_eq!(value["params"]["brand"], json!("Visa"));
}

#[cfg(feature = "temporal")]
#[test]
fn epoch_travels_as_number() {
    let t: EpochInteger = serde_json::from_value(json!(86400)).unwrap();
    assert_eq!(serde_json::to_value(t).unwrap(), json!(86400));

    let n: EpochNumber = serde_json::from_value(json!(1.5)).unwrap();
    assert_eq!(serde_json::to_value(n).unwrap(), json!(1.5));
}

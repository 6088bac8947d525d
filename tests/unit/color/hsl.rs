use serde_json::json;

use super::*;

#[test]
fn primaries_convert_to_expected_hex() {
    assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_hex(), "#ff0000");
    assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_hex(), "#00ff00");
    assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_hex(), "#0000ff");
    assert_eq!(Hsl::WHITE.to_hex(), "#ffffff");
    assert_eq!(Hsl::BLACK.to_hex(), "#000000");
    assert_eq!(Hsl::new(200.0, 0.0, 50.0).to_hex(), "#808080");
}

#[test]
fn hue_wraps_and_lightness_clamps_on_conversion() {
    assert_eq!(Hsl::new(360.0, 100.0, 50.0).to_hex(), "#ff0000");
    assert_eq!(Hsl::new(-120.0, 100.0, 50.0).to_hex(), "#0000ff");
    assert_eq!(Hsl::new(30.0, 100.0, -5.0).to_rgb8(), Rgba8::opaque(0, 0, 0));
    assert_eq!(
        Hsl::new(30.0, 100.0, 120.0).to_rgb8(),
        Rgba8::opaque(255, 255, 255)
    );
}

#[test]
fn stored_components_are_not_clamped() {
    let c = Hsl::new(30.0, 100.0, -5.0);
    assert_eq!(c.l, -5.0);
}

#[test]
fn parses_short_and_long_hex() {
    assert_eq!(Hsl::parse_hex("#fff").unwrap(), Hsl::WHITE);
    assert_eq!(Hsl::parse_hex("#000").unwrap(), Hsl::BLACK);
    assert_eq!(
        Hsl::parse_hex("FF0000").unwrap(),
        Hsl::new(0.0, 100.0, 50.0)
    );
    assert_eq!(
        Hsl::parse_hex("#00ff00").unwrap(),
        Hsl::new(120.0, 100.0, 50.0)
    );
}

#[test]
fn rejects_malformed_hex() {
    for bad in [
        "", "#", "#ggg", "#12345", "#1234567", "#ééé", "#+f+f+f", "+fff", "#-1-1-1",
    ] {
        let err = Hsl::parse_hex(bad).unwrap_err();
        assert!(matches!(err, CardError::InvalidColor(_)), "{bad}: {err}");
    }
}

#[test]
fn hex_round_trips_through_rgb() {
    let c = Hsl::parse_hex("#8ee600").unwrap();
    assert_eq!(c.to_hex(), "#8ee600");
}

#[test]
fn deserializes_hex_and_object() {
    let c: Hsl = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Hsl::new(0.0, 100.0, 50.0));

    let c: Hsl = serde_json::from_value(json!({"h": 83.0, "s": 100.0, "l": 45.0})).unwrap();
    assert_eq!(c, Hsl::new(83.0, 100.0, 45.0));

    assert!(serde_json::from_value::<Hsl>(json!("nope")).is_err());
    assert!(serde_json::from_value::<Hsl>(json!([1, 2, 3])).is_err());
}

use super::*;

#[test]
fn endpoints_round_trip_exactly() {
    let pairs = [
        ("#60A5FA", "#F97316"),
        ("#000", "#fff"),
        ("#ffffff", "#000000"),
        ("#123", "#abcdef"),
    ];
    for (a, b) in pairs {
        let blend = ColorBlend::from_hex(a, b).unwrap();
        assert_eq!(blend.evaluate(0.0), Rgb8::from_hex(a).unwrap());
        assert_eq!(blend.evaluate(1.0), Rgb8::from_hex(b).unwrap());
    }
}

#[test]
fn fractional_progress_truncates() {
    let blend = ColorBlend::new(Rgb8::new(0, 0, 255), Rgb8::new(255, 10, 0));
    // 127.5 -> 127, 5.0 -> 5, 127.5 -> 127
    assert_eq!(blend.evaluate(0.5), Rgb8::new(127, 5, 127));
    // 255 - 255 * 0.999 = 0.255 -> 0
    assert_eq!(blend.evaluate(0.999).b, 0);
}

#[test]
fn progress_is_clamped() {
    let blend = ColorBlend::from_hex("#60A5FA", "#F97316").unwrap();
    assert_eq!(blend.evaluate(-3.0), blend.start_color());
    assert_eq!(blend.evaluate(7.5), blend.end_color());
    assert_eq!(blend.evaluate(f64::NAN), blend.start_color());
}

#[test]
fn invalid_hex_surfaces_as_color_error() {
    assert!(ColorBlend::from_hex("#60A5FA", "orange").is_err());
}

use super::*;

fn seq(coords: &[(f64, f64)]) -> PointSequence {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect::<Vec<_>>().into()
}

#[test]
fn rotated_matches_modular_indexing() {
    let s = seq(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    let r = s.rotated(3);
    for i in 0..s.len() {
        assert_eq!(r[i], s[(i + 3) % s.len()]);
    }
    assert_eq!(s.rotated(4), s);
    assert!(PointSequence::default().rotated(2).is_empty());
}

#[test]
fn reversed_and_translated() {
    let s = seq(&[(0.0, 0.0), (1.0, 2.0)]);
    assert_eq!(s.reversed(), seq(&[(1.0, 2.0), (0.0, 0.0)]));
    assert_eq!(s.translated(-5.0, 1.0), seq(&[(-5.0, 1.0), (-4.0, 3.0)]));
}

#[test]
fn truncated_caps_at_len() {
    let s = seq(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(s.truncated(2).len(), 2);
    assert_eq!(s.truncated(99).len(), 3);
}

#[test]
fn hex_parses_short_and_long_forms() {
    assert_eq!(Rgb8::from_hex("#60A5FA").unwrap(), Rgb8::new(0x60, 0xA5, 0xFA));
    assert_eq!(Rgb8::from_hex("f97316").unwrap(), Rgb8::new(0xF9, 0x73, 0x16));
    assert_eq!(Rgb8::from_hex("#fa0").unwrap(), Rgb8::new(0xFF, 0xAA, 0x00));
    assert_eq!("#000".parse::<Rgb8>().unwrap(), Rgb8::BLACK);
}

#[test]
fn hex_rejects_bad_input() {
    for bad in [
        "", "#12", "#12345", "#gggggg", "#ééé", "#1234567", "#+F+F+F", "+f+f+f", "#-1-1-1",
    ] {
        assert!(
            matches!(Rgb8::from_hex(bad), Err(MorphError::InvalidColor(_))),
            "{bad:?} should fail"
        );
    }
}

#[test]
fn display_and_hex_roundtrip() {
    let c = Rgb8::new(96, 165, 250);
    assert_eq!(c.to_string(), "rgb(96,165,250)");
    assert_eq!(Rgb8::from_hex(&c.to_hex()).unwrap(), c);
}

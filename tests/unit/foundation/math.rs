use super::*;

#[test]
fn round_half_up_breaks_ties_upward() {
    assert_eq!(round_half_up(0.5), 1.0);
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(-2.6), -3.0);
}

#[test]
fn fmt_fixed_matches_to_fixed() {
    assert_eq!(fmt_fixed(1.25, 1), "1.3");
    assert_eq!(fmt_fixed(100.0, 1), "100.0");
    assert_eq!(fmt_fixed(2.5, 0), "3");
    assert_eq!(fmt_fixed(-0.04, 1), "0.0");
    assert_eq!(fmt_fixed(-12.375, 2), "-12.38");
}

#[test]
fn fmt_fixed_rounds_negative_ties_away_from_zero() {
    assert_eq!(fmt_fixed(-2.5, 0), "-3");
    assert_eq!(fmt_fixed(-1.25, 1), "-1.3");
    assert_eq!(fmt_fixed(-0.5, 0), "-1");
    assert_eq!(fmt_fixed(-0.4, 0), "0");
}

#[test]
fn lerp_endpoints_are_exact() {
    assert_eq!(lerp(3.0, 9.0, 0.0), 3.0);
    assert_eq!(lerp(3.0, 9.0, 1.0), 9.0);
    assert_eq!(lerp(3.0, 9.0, 0.5), 6.0);
}

#[test]
fn hash_unit_is_stable_and_in_range() {
    let a = hash_unit(7, 1, 42);
    assert_eq!(a, hash_unit(7, 1, 42));
    assert_ne!(a, hash_unit(8, 1, 42));
    for i in 0..256 {
        let v = hash_unit(1, 0, i);
        assert!((0.0..1.0).contains(&v));
    }
}

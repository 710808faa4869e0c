use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MorphError::degenerate("x")
            .to_string()
            .contains("degenerate path:")
    );
    assert!(
        MorphError::invalid_color("x")
            .to_string()
            .contains("invalid color:")
    );
    assert!(
        MorphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MorphError::MissingClock.to_string().contains("missing clock"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MorphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_geometry_errors_are_recoverable() {
    assert!(MorphError::degenerate("empty").is_recoverable());
    assert!(MorphError::invalid_color("#zz").is_recoverable());
    assert!(!MorphError::MissingClock.is_recoverable());
    assert!(!MorphError::validation("stride").is_recoverable());
}

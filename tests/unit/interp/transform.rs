use super::*;
use crate::foundation::core::Point;

fn source() -> TransformDescriptor {
    TransformDescriptor {
        x: -45.0,
        y: 6.0,
        rotation: -28.0,
        pivot_x: 100.0,
        pivot_y: 100.0,
        scale: 1.0,
    }
}

fn target() -> TransformDescriptor {
    TransformDescriptor {
        x: 38.0,
        y: -8.0,
        rotation: 30.0,
        pivot_x: 40.0,
        pivot_y: 60.0,
        scale: 0.8,
    }
}

#[test]
fn interpolates_everything_but_the_pivot() {
    let blend = TransformBlend::new(source(), target());
    let mid = blend.evaluate(0.5);
    assert!((mid.x - -3.5).abs() < 1e-12);
    assert!((mid.y - -1.0).abs() < 1e-12);
    assert!((mid.rotation - 1.0).abs() < 1e-12);
    assert!((mid.scale - 0.9).abs() < 1e-12);
    assert_eq!((mid.pivot_x, mid.pivot_y), (100.0, 100.0));

    let end = blend.evaluate(1.0);
    assert_eq!(end.x, 38.0);
    assert_eq!(end.pivot_x, 100.0);
}

#[test]
fn pose_snaps_to_endpoints() {
    let blend = TransformBlend::new(source(), target());
    assert_eq!(blend.pose(0.0), source());
    assert_eq!(blend.pose(0.99), source());
    let end = blend.pose(1.0);
    assert_eq!((end.x, end.y, end.rotation, end.scale), (38.0, -8.0, 30.0, 0.8));
    assert_eq!((end.pivot_x, end.pivot_y), (100.0, 100.0));
}

#[test]
fn svg_transform_syntax() {
    assert_eq!(
        source().to_svg_transform(),
        "translate(-45 6) rotate(-28 100 100) scale(1)"
    );
}

#[test]
fn affine_rotates_about_pivot() {
    let t = TransformDescriptor {
        rotation: 90.0,
        pivot_x: 10.0,
        pivot_y: 10.0,
        ..TransformDescriptor::default()
    };
    let a = t.to_affine();
    let pivot = a * Point::new(10.0, 10.0);
    assert!((pivot - Point::new(10.0, 10.0)).hypot() < 1e-9);
    let p = a * Point::new(20.0, 10.0);
    assert!((p - Point::new(10.0, 20.0)).hypot() < 1e-9);
    assert_eq!(TransformDescriptor::default().to_affine(), Affine::IDENTITY);
}

#[test]
fn deserializes_with_defaults() {
    let t: TransformDescriptor = serde_json::from_value(serde_json::json!({"x": 4.0})).unwrap();
    assert_eq!(t.x, 4.0);
    assert_eq!(t.scale, 1.0);
}

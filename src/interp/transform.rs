use crate::foundation::core::{Affine, Vec2};
use crate::foundation::math::lerp;

/// Affine pose of a drawable: translation, rotation (degrees) and uniform
/// scale, with rotation/scale applied around `(pivot_x, pivot_y)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformDescriptor {
    /// Horizontal translation.
    pub x: f64,
    /// Vertical translation.
    pub y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Pivot x for rotation and scale.
    pub pivot_x: f64,
    /// Pivot y for rotation and scale.
    pub pivot_y: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl Default for TransformDescriptor {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            pivot_x: 0.0,
            pivot_y: 0.0,
            scale: 1.0,
        }
    }
}

impl TransformDescriptor {
    /// `translate(x y) rotate(rotation pivot) scale(scale)`, composed left to right.
    pub fn to_affine(self) -> Affine {
        let pivot = Vec2::new(self.pivot_x, self.pivot_y);
        let t_translate = Affine::translate(Vec2::new(self.x, self.y));
        let t_rotate = Affine::translate(pivot)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::translate(-pivot);
        let t_scale = Affine::scale(self.scale);
        t_translate * t_rotate * t_scale
    }

    /// SVG `transform` attribute syntax.
    pub fn to_svg_transform(self) -> String {
        format!(
            "translate({} {}) rotate({} {} {}) scale({})",
            self.x, self.y, self.rotation, self.pivot_x, self.pivot_y, self.scale
        )
    }
}

/// Two transforms blended component-wise.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformBlend {
    /// Pose at `t = 0`; also supplies the pivot.
    pub start: TransformDescriptor,
    /// Pose at `t = 1`.
    pub end: TransformDescriptor,
}

impl TransformBlend {
    /// Blend from `start` to `end`.
    pub fn new(start: TransformDescriptor, end: TransformDescriptor) -> Self {
        Self { start, end }
    }

    /// The pivot is taken from `start` and never animates.
    pub fn evaluate(&self, t: f64) -> TransformDescriptor {
        let (s, e) = (&self.start, &self.end);
        TransformDescriptor {
            x: lerp(s.x, e.x, t),
            y: lerp(s.y, e.y, t),
            rotation: lerp(s.rotation, e.rotation, t),
            pivot_x: s.pivot_x,
            pivot_y: s.pivot_y,
            scale: lerp(s.scale, e.scale, t),
        }
    }

    /// Pose snapshot: `start` below 1, `end` at or above it. The end pose
    /// keeps the start pivot so it matches the last animated frame.
    pub fn pose(&self, t: f64) -> TransformDescriptor {
        if t >= 1.0 {
            TransformDescriptor {
                pivot_x: self.start.pivot_x,
                pivot_y: self.start.pivot_y,
                ..self.end
            }
        } else {
            self.start
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/transform.rs"]
mod tests;

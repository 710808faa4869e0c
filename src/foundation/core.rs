use std::fmt;
use std::ops::Index;

use crate::foundation::error::{MorphError, MorphResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Ordered outline samples. Immutable once created; both sides of a morph
/// pair share the same cardinality.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointSequence(Vec<Point>);

impl PointSequence {
    /// Wrap already-sampled points.
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when there are no samples.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the samples.
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    /// Iterate samples in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// Same samples in reverse order.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Circular rotation so that `out[i] == self[(i + offset) % len]`.
    pub fn rotated(&self, offset: usize) -> Self {
        if self.0.is_empty() {
            return Self::default();
        }
        let n = self.0.len();
        let mut points = self.0.clone();
        points.rotate_left(offset % n);
        Self(points)
    }

    /// Every sample shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let delta = Vec2::new(dx, dy);
        Self(self.0.iter().map(|p| *p + delta).collect())
    }

    /// First `n` points (all of them if `n >= len`).
    pub fn truncated(&self, n: usize) -> &[Point] {
        &self.0[..n.min(self.0.len())]
    }
}

impl Index<usize> for PointSequence {
    type Output = Point;

    fn index(&self, i: usize) -> &Point {
        &self.0[i]
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Straight 8-bit RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb8 {
    /// `#000000`, the fallback for missing colors.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Color from channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#RGB` or `#RRGGBB`, with or without the leading `#`.
    pub fn from_hex(s: &str) -> MorphResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        fn hex_byte(pair: &str) -> MorphResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| MorphError::invalid_color(format!("invalid hex byte \"{pair}\"")))
        }

        // `from_str_radix` tolerates a leading sign, so check digits up front.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MorphError::invalid_color(format!(
                "\"{s}\" is not a hex color"
            )));
        }

        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let pair: String = [c, c].iter().collect();
                    out[i] = hex_byte(&pair)?;
                }
                Ok(Self::new(out[0], out[1], out[2]))
            }
            6 => Ok(Self::new(
                hex_byte(&digits[0..2])?,
                hex_byte(&digits[2..4])?,
                hex_byte(&digits[4..6])?,
            )),
            _ => Err(MorphError::invalid_color(format!(
                "\"{s}\" must be #RGB or #RRGGBB"
            ))),
        }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `[r, g, b]`.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// `rgb(r,g,b)`, the form written to drawables.
impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb8 {
    type Err = MorphError;

    fn from_str(s: &str) -> MorphResult<Self> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use crate::foundation::core::Rgb8;
use crate::foundation::error::MorphResult;

/// Precomputed `start + delta * t` form of a two-color blend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorBlend {
    /// Source channels.
    pub start: [i16; 3],
    /// Target minus source, per channel.
    pub delta: [i16; 3],
}

impl ColorBlend {
    /// Blend from `from` to `to`.
    pub fn new(from: Rgb8, to: Rgb8) -> Self {
        let s = from.channels().map(i16::from);
        let e = to.channels().map(i16::from);
        Self {
            start: s,
            delta: [e[0] - s[0], e[1] - s[1], e[2] - s[2]],
        }
    }

    /// Blend between two hex colors.
    pub fn from_hex(from: &str, to: &str) -> MorphResult<Self> {
        Ok(Self::new(Rgb8::from_hex(from)?, Rgb8::from_hex(to)?))
    }

    /// Channels are truncated toward zero, not rounded.
    pub fn evaluate(&self, t: f64) -> Rgb8 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let channel =
            |i: usize| (f64::from(self.start[i]) + f64::from(self.delta[i]) * t).trunc() as u8;
        Rgb8::new(channel(0), channel(1), channel(2))
    }

    /// Color at `t = 0`.
    pub fn start_color(&self) -> Rgb8 {
        self.evaluate(0.0)
    }

    /// Color at `t = 1`.
    pub fn end_color(&self) -> Rgb8 {
        self.evaluate(1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/color.rs"]
mod tests;

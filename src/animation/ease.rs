use std::f64::consts::PI;
use std::str::FromStr;

use crate::foundation::error::MorphError;

/// Progress curve a timeline applies before notifying a track. Names follow
/// the `in` / `out` / `inOut` convention of web animation libraries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// `t^2`.
    InQuad,
    /// Mirror of `InQuad`.
    OutQuad,
    /// Quadratic ease in, then out.
    InOutQuad,
    /// `t^3`.
    InCubic,
    /// Mirror of `InCubic`.
    OutCubic,
    /// Cubic ease in, then out.
    InOutCubic,
    /// `t^4`.
    InQuart,
    /// Mirror of `InQuart`.
    OutQuart,
    /// Quartic ease in, then out.
    InOutQuart,
    /// Quarter cosine wave.
    InSine,
    /// Quarter sine wave.
    OutSine,
    /// Half cosine wave.
    InOutSine,
}

impl Ease {
    /// Every curve, in declaration order.
    pub const ALL: [Ease; 13] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
    ];

    /// Map progress in `[0, 1]` (clamped) onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => power_in(t, 2),
            Self::OutQuad => power_out(t, 2),
            Self::InOutQuad => power_in_out(t, 2),
            Self::InCubic => power_in(t, 3),
            Self::OutCubic => power_out(t, 3),
            Self::InOutCubic => power_in_out(t, 3),
            Self::InQuart => power_in(t, 4),
            Self::OutQuart => power_out(t, 4),
            Self::InOutQuart => power_in_out(t, 4),
            Self::InSine => 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => (t * PI / 2.0).sin(),
            Self::InOutSine => (1.0 - (t * PI).cos()) / 2.0,
        }
    }

    /// camelCase name, as used in JSON configs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "inQuad",
            Self::OutQuad => "outQuad",
            Self::InOutQuad => "inOutQuad",
            Self::InCubic => "inCubic",
            Self::OutCubic => "outCubic",
            Self::InOutCubic => "inOutCubic",
            Self::InQuart => "inQuart",
            Self::OutQuart => "outQuart",
            Self::InOutQuart => "inOutQuart",
            Self::InSine => "inSine",
            Self::OutSine => "outSine",
            Self::InOutSine => "inOutSine",
        }
    }
}

fn power_in(t: f64, p: i32) -> f64 {
    t.powi(p)
}

fn power_out(t: f64, p: i32) -> f64 {
    1.0 - (1.0 - t).powi(p)
}

fn power_in_out(t: f64, p: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(p - 1) * t.powi(p)
    } else {
        1.0 - (2.0 - 2.0 * t).powi(p) / 2.0
    }
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = MorphError;

    /// Case-insensitive; an `ease` prefix (`easeInOutQuad`) is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_prefix("ease").unwrap_or(&wanted);
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MorphError::validation(format!("unknown ease {s:?}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

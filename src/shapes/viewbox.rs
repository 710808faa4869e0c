use std::str::FromStr;

use crate::foundation::error::{MorphError, MorphResult};

/// An SVG `viewBox`. Serialized as its attribute string.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ViewBox {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::new(0.0, 0.0, 200.0, 200.0)
    }
}

impl ViewBox {
    /// Box from its four attribute values.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Accepts whitespace and/or comma separators. Extra fields are ignored.
    pub fn parse(s: &str) -> MorphResult<Self> {
        let parts = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .map(|p| {
                p.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| MorphError::validation(format!("bad viewBox number {p:?}")))
            })
            .collect::<MorphResult<Vec<_>>>()?;
        match parts[..] {
            [min_x, min_y, width, height, ..] => Ok(Self::new(min_x, min_y, width, height)),
            _ => Err(MorphError::validation(format!(
                "viewBox needs 4 numbers, got {s:?}"
            ))),
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &Self) -> Self {
        let min_x = self.min_x.min(other.min_x);
        let min_y = self.min_y.min(other.min_y);
        Self::new(
            min_x,
            min_y,
            self.max_x().max(other.max_x()) - min_x,
            self.max_y().max(other.max_y()) - min_y,
        )
    }

    /// Grow horizontally by `offset` on both sides, making room for pairs
    /// spread apart by the same separation.
    pub fn expand_x(&self, offset: f64) -> Self {
        Self::new(
            self.min_x - offset,
            self.min_y,
            self.width + offset * 2.0,
            self.height,
        )
    }
}

impl std::fmt::Display for ViewBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

impl FromStr for ViewBox {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ViewBox {
    type Error = MorphError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ViewBox> for String {
    fn from(vb: ViewBox) -> Self {
        vb.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/viewbox.rs"]
mod tests;

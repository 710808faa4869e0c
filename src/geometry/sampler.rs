use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::{BezPath, Point, PointSequence};
use crate::foundation::error::{MorphError, MorphResult};

const ARCLEN_ACCURACY: f64 = 1e-4;
const MIN_LENGTH: f64 = 1e-9;

/// Arc-length queries over an outline.
pub trait PathGeometry {
    /// Arc length of the whole outline.
    fn total_length(&self) -> f64;
    /// `len` is clamped to `[0, total_length]`.
    fn point_at_length(&self, len: f64) -> Point;
}

/// [`PathGeometry`] over a flattened segment list of a parsed [`BezPath`].
#[derive(Clone, Debug)]
pub struct KurboGeometry {
    segments: Vec<PathSeg>,
    // Cumulative length at the end of each segment.
    ends: Vec<f64>,
}

impl KurboGeometry {
    /// Parse SVG path data.
    pub fn from_svg(d: &str) -> MorphResult<Self> {
        let path = BezPath::from_svg(d.trim())
            .map_err(|e| MorphError::degenerate(format!("invalid path data: {e}")))?;
        Ok(Self::from_path(&path))
    }

    /// Measure an already-parsed path.
    pub fn from_path(path: &BezPath) -> Self {
        let segments: Vec<PathSeg> = path.segments().collect();
        let mut ends = Vec::with_capacity(segments.len());
        let mut acc = 0.0;
        for seg in &segments {
            acc += seg.arclen(ARCLEN_ACCURACY);
            ends.push(acc);
        }
        Self { segments, ends }
    }

    /// Number of drawn segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl PathGeometry for KurboGeometry {
    fn total_length(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    fn point_at_length(&self, len: f64) -> Point {
        let Some(last) = self.segments.last() else {
            return Point::ZERO;
        };
        let total = self.total_length();
        let len = len.clamp(0.0, total);

        let idx = self.ends.partition_point(|&end| end < len);
        if idx >= self.segments.len() {
            return last.eval(1.0);
        }
        let seg = &self.segments[idx];
        let seg_start = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        let local = (len - seg_start).max(0.0);
        let t = seg.inv_arclen(local, ARCLEN_ACCURACY);
        seg.eval(t)
    }
}

/// Uniform-speed traversal: point `i` sits at `total * i / count`.
pub fn sample<G: PathGeometry + ?Sized>(geometry: &G, count: usize) -> MorphResult<PointSequence> {
    if count == 0 {
        return Err(MorphError::degenerate("sample count must be > 0"));
    }
    let total = geometry.total_length();
    if !total.is_finite() || total <= MIN_LENGTH {
        return Err(MorphError::degenerate(format!(
            "outline has no measurable length ({total})"
        )));
    }

    let points = (0..count)
        .map(|i| geometry.point_at_length(total * (i as f64) / (count as f64)))
        .collect::<Vec<_>>();

    if points.iter().any(|p| !p.is_finite()) {
        return Err(MorphError::degenerate("outline produced non-finite samples"));
    }
    Ok(PointSequence::new(points))
}

/// Parse and sample an outline string in one step.
pub fn sample_path(d: &str, count: usize) -> MorphResult<PointSequence> {
    if d.trim().is_empty() {
        return Err(MorphError::degenerate("empty path data"));
    }
    let geometry = KurboGeometry::from_svg(d)?;
    sample(&geometry, count)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sampler.rs"]
mod tests;

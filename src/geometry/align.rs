//! Vertex correspondence: the circular offset (and optionally winding
//! direction) of a target outline that best lines it up with a source outline.

use crate::foundation::core::PointSequence;

/// Search knobs. Strides trade accuracy for speed; they never change which
/// candidates are semantically allowed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlignOptions {
    /// Step between candidate rotation offsets.
    pub offset_stride: usize,
    /// Step between summed index pairs inside one candidate.
    pub distance_stride: usize,
    /// Also search the reversed target (opposite winding).
    pub check_reversal: bool,
    /// Skip the search entirely.
    pub massive: bool,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            offset_stride: 1,
            distance_stride: 1,
            check_reversal: true,
            massive: false,
        }
    }
}

impl AlignOptions {
    /// Strides scaled to the sample count: `n/20` offsets, `n/15` distances.
    pub fn for_samples(samples: usize) -> Self {
        Self {
            offset_stride: (samples / 20).max(1),
            distance_stride: (samples / 15).max(1),
            ..Self::default()
        }
    }

    /// Every offset and every index pair.
    pub fn exhaustive() -> Self {
        Self::default()
    }
}

/// Outcome of [`align`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Alignment {
    /// Rotation applied to the (possibly reversed) target.
    pub offset: usize,
    /// Target winding was flipped.
    pub reversed: bool,
    /// Unnormalized sum of squared distances; only meaningful relative to
    /// other costs computed with the same strides.
    pub cost: f64,
}

impl Alignment {
    /// No rotation, no reversal. What a skipped search reports.
    pub const IDENTITY: Self = Self {
        offset: 0,
        reversed: false,
        cost: f64::INFINITY,
    };

    /// Reverse (if chosen) then rotate the target.
    pub fn apply(&self, target: &PointSequence) -> PointSequence {
        let oriented = if self.reversed {
            target.reversed()
        } else {
            target.clone()
        };
        if self.offset == 0 {
            oriented
        } else {
            oriented.rotated(self.offset)
        }
    }
}

/// Cost of pairing `source[i]` with `target[(i + offset) % n]`.
pub fn offset_cost(
    source: &PointSequence,
    target: &PointSequence,
    offset: usize,
    distance_stride: usize,
) -> f64 {
    let n = source.len().min(target.len());
    if n == 0 {
        return 0.0;
    }
    let step = distance_stride.max(1);
    (0..n)
        .step_by(step)
        .map(|i| (source[i] - target[(i + offset) % n]).hypot2())
        .sum()
}

fn best_offset(
    source: &PointSequence,
    target: &PointSequence,
    opts: &AlignOptions,
) -> (usize, f64) {
    let n = source.len().min(target.len());
    let mut best = (0, f64::INFINITY);
    for offset in (0..n).step_by(opts.offset_stride.max(1)) {
        let cost = offset_cost(source, target, offset, opts.distance_stride);
        if cost < best.1 {
            best = (offset, cost);
        }
    }
    best
}

/// Pick the rotation (and winding, if allowed) of `target` that minimizes
/// [`offset_cost`] against `source`. Offset 0 is always a candidate.
#[tracing::instrument(level = "trace", skip(source, target), fields(n = source.len()))]
pub fn align(source: &PointSequence, target: &PointSequence, opts: &AlignOptions) -> Alignment {
    if opts.massive {
        return Alignment::IDENTITY;
    }
    if source.is_empty() || target.is_empty() {
        return Alignment {
            offset: 0,
            reversed: false,
            cost: 0.0,
        };
    }

    let (offset, cost) = best_offset(source, target, opts);
    let mut chosen = Alignment {
        offset,
        reversed: false,
        cost,
    };

    if opts.check_reversal {
        let (rev_offset, rev_cost) = best_offset(source, &target.reversed(), opts);
        // Ties keep the natural winding.
        if rev_cost < chosen.cost {
            chosen = Alignment {
                offset: rev_offset,
                reversed: true,
                cost: rev_cost,
            };
        }
    }

    tracing::trace!(
        offset = chosen.offset,
        reversed = chosen.reversed,
        cost = chosen.cost,
        "alignment chosen"
    );
    chosen
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/align.rs"]
mod tests;

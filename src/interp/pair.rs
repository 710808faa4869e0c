use crate::foundation::core::PointSequence;
use crate::foundation::error::{MorphError, MorphResult};
use crate::geometry::align::{AlignOptions, Alignment, align};
use crate::geometry::sampler::sample_path;

/// How a pair of outlines is sampled and aligned.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MorphOptions {
    /// Points per outline.
    pub samples: usize,
    /// Run the correspondence search at all.
    pub optimize: bool,
    /// Throughput mode for very dense scenes; disables the search.
    pub massive: bool,
    /// Consider the reversed winding of the target.
    pub check_reversal: bool,
    /// Horizontal spread for side-by-side layouts: source moves by
    /// `-separation`, target by `+separation`.
    pub separation: f64,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            samples: 120,
            optimize: true,
            massive: false,
            check_reversal: true,
            separation: 0.0,
        }
    }
}

impl MorphOptions {
    /// Search settings derived from these options.
    pub fn align_options(&self) -> AlignOptions {
        AlignOptions {
            check_reversal: self.check_reversal,
            massive: self.massive,
            ..AlignOptions::for_samples(self.samples)
        }
    }
}

/// Source and target samples in animated correspondence: `a[i]` travels to `b[i]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MorphPair {
    a: PointSequence,
    b: PointSequence,
}

impl MorphPair {
    /// Pair two sequences of equal length.
    pub fn new(a: PointSequence, b: PointSequence) -> MorphResult<Self> {
        if a.len() != b.len() {
            return Err(MorphError::validation(format!(
                "morph pair length mismatch: {} vs {}",
                a.len(),
                b.len()
            )));
        }
        Ok(Self { a, b })
    }

    /// Source samples.
    pub fn a(&self) -> &PointSequence {
        &self.a
    }

    /// Target samples, already aligned.
    pub fn b(&self) -> &PointSequence {
        &self.b
    }

    /// Samples per side.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// `true` for an empty pair.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Pose snapshot: source below 1, target at or above it.
    pub fn pose(&self, t: f64) -> &PointSequence {
        if t >= 1.0 { &self.b } else { &self.a }
    }

    /// Shift the source left and the target right by `offset`.
    pub fn separated(self, offset: f64) -> Self {
        if offset == 0.0 {
            return self;
        }
        Self {
            a: self.a.translated(-offset, 0.0),
            b: self.b.translated(offset, 0.0),
        }
    }
}

/// Sample both outlines, align the target onto the source, and freeze the pair.
#[tracing::instrument(level = "debug", skip(start_d, end_d), fields(samples = opts.samples))]
pub fn build_pair(start_d: &str, end_d: &str, opts: &MorphOptions) -> MorphResult<MorphPair> {
    let (pair, _) = build_pair_with_alignment(start_d, end_d, opts)?;
    Ok(pair)
}

/// Like [`build_pair`], also reporting the alignment that was applied
/// (`None` when the search was skipped).
pub fn build_pair_with_alignment(
    start_d: &str,
    end_d: &str,
    opts: &MorphOptions,
) -> MorphResult<(MorphPair, Option<Alignment>)> {
    let a = sample_path(start_d, opts.samples)?;
    let b = sample_path(end_d, opts.samples)?;

    let (b, alignment) = if opts.optimize && !opts.massive {
        let alignment = align(&a, &b, &opts.align_options());
        tracing::debug!(
            offset = alignment.offset,
            reversed = alignment.reversed,
            "aligned target outline"
        );
        (alignment.apply(&b), Some(alignment))
    } else {
        (b, None)
    };

    let pair = MorphPair::new(a, b)?.separated(opts.separation);
    Ok((pair, alignment))
}

#[cfg(test)]
#[path = "../../tests/unit/interp/pair.rs"]
mod tests;

//! Pairing multi-path shapes and sizing the work for dense scenes.
//!
//! Shapes with different sub-path counts are matched by cycling the shorter
//! list, so one source path may feed many target paths and vice versa.

use crate::engine::drawable::DrawableHandle;
use crate::engine::target::MorphTarget;
use crate::foundation::core::Rgb8;
use crate::interp::color::ColorBlend;
use crate::interp::pair::{MorphOptions, build_pair};
use crate::shapes::viewbox::ViewBox;

/// A drawing made of independent outlines. `colors` cycle over `paths`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Shape {
    /// SVG path data, one entry per outline.
    pub paths: Vec<String>,
    /// Hex colors.
    pub colors: Vec<String>,
    /// Drawing area; the default box when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_box: Option<ViewBox>,
}

impl Shape {
    /// Shape from path data and colors.
    pub fn new<P, C>(paths: P, colors: C) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            colors: colors.into_iter().map(Into::into).collect(),
            view_box: None,
        }
    }

    /// Attach a view box.
    pub fn with_view_box(mut self, view_box: ViewBox) -> Self {
        self.view_box = Some(view_box);
        self
    }

    /// Number of outlines.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// `true` with no outlines.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Color for path `index`; black when the shape has no colors.
    pub fn color_for(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return FALLBACK_COLOR;
        }
        &self.colors[index % self.colors.len()]
    }

    /// View box, falling back to `0 0 200 200`.
    pub fn view_box_or_default(&self) -> ViewBox {
        self.view_box.unwrap_or_default()
    }
}

const FALLBACK_COLOR: &str = "#000000";

/// One source/target pairing produced by [`plan_slots`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorphSlot<'a> {
    /// Position in the longer path list.
    pub index: usize,
    /// Source outline.
    pub start_path: &'a str,
    /// Target outline.
    pub end_path: &'a str,
    /// Source color.
    pub start_color: &'a str,
    /// Target color.
    pub end_color: &'a str,
}

/// Cover the longer path list, cycling the shorter one by index modulo its
/// own length. Either side empty yields no slots.
pub fn plan_slots<'a>(start: &'a Shape, end: &'a Shape) -> Vec<MorphSlot<'a>> {
    if start.is_empty() || end.is_empty() {
        return Vec::new();
    }
    let count = start.len().max(end.len());
    (0..count)
        .map(|index| {
            let s = index % start.len();
            let e = index % end.len();
            MorphSlot {
                index,
                start_path: &start.paths[s],
                end_path: &end.paths[e],
                start_color: start.color_for(s),
                end_color: end.color_for(e),
            }
        })
        .collect()
}

/// Level-of-detail thresholds keyed on the busier shape's path count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SamplingPolicy {
    /// Above this many paths the alignment search is skipped.
    pub massive_threshold: usize,
    /// Above this many paths fewer samples are taken.
    pub dense_threshold: usize,
    /// Samples per outline once massive.
    pub massive_samples: usize,
    /// Samples per outline once dense.
    pub dense_samples: usize,
    /// Samples per outline otherwise.
    pub default_samples: usize,
    /// In-flight vertex stride once massive.
    pub massive_stride: usize,
}

impl SamplingPolicy {
    /// Tuned for the general shape gallery.
    pub const UNIVERSAL: Self = Self {
        massive_threshold: 100,
        dense_threshold: 50,
        massive_samples: 30,
        dense_samples: 60,
        default_samples: 120,
        massive_stride: 2,
    };

    /// Tuned for infographic templates, which get dense sooner.
    pub const INFOGRAPHIC: Self = Self {
        massive_threshold: 80,
        dense_threshold: 40,
        massive_samples: 40,
        dense_samples: 80,
        default_samples: 120,
        massive_stride: 2,
    };

    /// Budget for a scene whose busier shape has `max_paths` outlines.
    pub fn budget(&self, max_paths: usize) -> SamplingBudget {
        let massive = max_paths > self.massive_threshold;
        let samples = if massive {
            self.massive_samples
        } else if max_paths > self.dense_threshold {
            self.dense_samples
        } else {
            self.default_samples
        };
        SamplingBudget {
            massive,
            samples: samples.max(1),
            motion_stride: if massive { self.massive_stride.max(1) } else { 1 },
        }
    }
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self::INFOGRAPHIC
    }
}

/// Resolved level of detail for one scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SamplingBudget {
    /// Alignment search skipped.
    pub massive: bool,
    /// Samples per outline.
    pub samples: usize,
    /// Vertex stride for in-flight frames.
    pub motion_stride: usize,
}

impl SamplingBudget {
    /// Budget for morphing `start` into `end`.
    pub fn for_shapes(policy: &SamplingPolicy, start: &Shape, end: &Shape) -> Self {
        policy.budget(start.len().max(end.len()))
    }
}

/// Build one engine target per slot. `opts.samples` and `opts.massive` are
/// replaced by the policy's budget. Outlines that fail to sample produce a
/// target without geometry; bad colors fall back to black.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(start = start.len(), end = end.len())
)]
pub fn build_targets<F>(
    start: &Shape,
    end: &Shape,
    policy: &SamplingPolicy,
    opts: &MorphOptions,
    mut make_drawable: F,
) -> Vec<MorphTarget>
where
    F: FnMut(&MorphSlot<'_>) -> DrawableHandle,
{
    let budget = SamplingBudget::for_shapes(policy, start, end);
    let opts = MorphOptions {
        samples: budget.samples,
        massive: budget.massive,
        ..*opts
    };
    tracing::debug!(
        massive = budget.massive,
        samples = budget.samples,
        "planned sampling budget"
    );

    plan_slots(start, end)
        .iter()
        .map(|slot| {
            let pair = match build_pair(slot.start_path, slot.end_path, &opts) {
                Ok(pair) => Some(pair),
                Err(err) => {
                    tracing::warn!(slot = slot.index, %err, "sub-path skipped");
                    None
                }
            };
            let color = ColorBlend::new(
                parse_color(slot.start_color),
                parse_color(slot.end_color),
            );
            MorphTarget::new(make_drawable(slot), pair, color, budget.samples)
        })
        .collect()
}

fn parse_color(hex: &str) -> Rgb8 {
    Rgb8::from_hex(hex).unwrap_or_else(|err| {
        tracing::warn!(%err, "using black");
        Rgb8::BLACK
    })
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/plan.rs"]
mod tests;

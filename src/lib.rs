//! svgmorph is a vector path morphing engine.
//!
//! Two outlines are resampled at equal arc-length steps, the target samples are
//! rotated (and optionally reversed) to best match the source, and the engine
//! blends outline, color and transform for every registered target on each tick
//! of a host-supplied timeline:
//!
//! - Build a [`MorphPair`] with [`build_pair`] (or whole [`Shape`]s with [`build_targets`])
//! - Register [`MorphTarget`]s with a [`MorphEngine`]
//! - Render a resting pose with [`MorphEngine::render_static`] or attach playback to a
//!   [`Timeline`] with [`MorphEngine::play`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod engine;
pub(crate) mod geometry;
pub(crate) mod interp;
pub(crate) mod outline;
pub(crate) mod shapes;

pub use crate::foundation::core::{Affine, BezPath, Point, PointSequence, Rgb8, Vec2};
pub use crate::foundation::error::{MorphError, MorphResult};
pub use crate::foundation::math::{fmt_fixed, lerp, round_half_up};

pub use crate::animation::ease::Ease;
pub use crate::animation::timeline::{ManualTimeline, ProgressTrack, Timeline};
pub use crate::engine::drawable::{Drawable, DrawableHandle, SvgPathElement};
pub use crate::engine::morph_engine::{
    EngineConfig, MorphEngine, Phase, PlayOptions, Playback, Registration,
};
pub use crate::engine::target::{MorphTarget, TargetId};
pub use crate::geometry::align::{AlignOptions, Alignment, align, offset_cost};
pub use crate::geometry::sampler::{KurboGeometry, PathGeometry, sample, sample_path};
pub use crate::interp::color::ColorBlend;
pub use crate::interp::pair::{MorphOptions, MorphPair, build_pair, build_pair_with_alignment};
pub use crate::interp::transform::{TransformBlend, TransformDescriptor};
pub use crate::outline::builder::{build_animated, build_static};
pub use crate::shapes::library::{
    circle_path, flower, grid, pie_slice_path, preset, preset_names, rect_path,
    rounded_rect_path, skyline, swarm, triangle_path,
};
pub use crate::shapes::plan::{
    MorphSlot, SamplingBudget, SamplingPolicy, Shape, build_targets, plan_slots,
};
pub use crate::shapes::viewbox::ViewBox;

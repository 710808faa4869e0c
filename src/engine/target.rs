use crate::engine::drawable::DrawableHandle;
use crate::interp::color::ColorBlend;
use crate::interp::pair::MorphPair;
use crate::interp::transform::TransformBlend;
use crate::outline::builder::{build_animated, build_static};

/// Opaque registry key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(pub(crate) u64);

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "target#{}", self.0)
    }
}

/// Everything needed to animate one drawable.
///
/// `pair` is `None` when the outlines could not be sampled; such targets stay
/// registered but are skipped at render time.
pub struct MorphTarget {
    drawable: DrawableHandle,
    pair: Option<MorphPair>,
    color: ColorBlend,
    sample_budget: usize,
    transform: Option<TransformBlend>,
    motion_stride: Option<usize>,
}

impl MorphTarget {
    /// `sample_budget` caps the vertices of resting outlines; `0` means no cap.
    pub fn new(
        drawable: DrawableHandle,
        pair: Option<MorphPair>,
        color: ColorBlend,
        sample_budget: usize,
    ) -> Self {
        Self {
            drawable,
            pair,
            color,
            sample_budget,
            transform: None,
            motion_stride: None,
        }
    }

    /// Also blend a transform alongside the outline.
    pub fn with_transform(mut self, transform: TransformBlend) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Per-target vertex stride for in-flight frames, overriding the playback's.
    pub fn with_motion_stride(mut self, stride: usize) -> Self {
        self.motion_stride = Some(stride.max(1));
        self
    }

    /// Sampled outlines, if sampling succeeded.
    pub fn pair(&self) -> Option<&MorphPair> {
        self.pair.as_ref()
    }

    /// Color blend.
    pub fn color(&self) -> &ColorBlend {
        &self.color
    }

    /// Transform blend, if any.
    pub fn transform(&self) -> Option<&TransformBlend> {
        self.transform.as_ref()
    }

    /// Handle the target renders into.
    pub fn drawable(&self) -> &DrawableHandle {
        &self.drawable
    }

    fn usable_pair(&self) -> Option<&MorphPair> {
        self.pair.as_ref().filter(|p| !p.is_empty())
    }

    /// Resting pose at `t` snapped to 0 or 1. Returns whether anything was written.
    pub(crate) fn write_pose(&self, t: f64, precision: usize) -> bool {
        let Some(pair) = self.usable_pair() else {
            tracing::debug!("skipping target without geometry");
            return false;
        };
        let Ok(mut dom) = self.drawable.try_borrow_mut() else {
            tracing::warn!("drawable busy, skipping static write");
            return false;
        };

        let snapped = if t >= 1.0 { 1.0 } else { 0.0 };
        let points = pair.pose(snapped);
        let points = if self.sample_budget == 0 {
            points.as_slice()
        } else {
            points.truncated(self.sample_budget)
        };
        let color = self.color.evaluate(snapped);

        dom.set_outline(&build_static(points, precision));
        dom.set_fill(color);
        dom.set_stroke(color);
        let pose = self.transform.map(|tb| tb.pose(snapped));
        dom.set_transform(pose.as_ref());
        true
    }

    /// Blended frame at progress `t`.
    pub(crate) fn write_frame(&self, t: f64, stride: usize) -> bool {
        let Some(pair) = self.usable_pair() else {
            return false;
        };
        let Ok(mut dom) = self.drawable.try_borrow_mut() else {
            tracing::warn!("drawable busy, skipping frame");
            return false;
        };

        let stride = self.motion_stride.unwrap_or(stride);
        let color = self.color.evaluate(t);
        dom.set_outline(&build_animated(
            pair.a().as_slice(),
            pair.b().as_slice(),
            t,
            stride,
        ));
        dom.set_fill(color);
        dom.set_stroke(color);
        if let Some(tb) = &self.transform {
            dom.set_transform(Some(&tb.evaluate(t)));
        }
        true
    }
}

impl std::fmt::Debug for MorphTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphTarget")
            .field("points", &self.pair.as_ref().map(MorphPair::len))
            .field("color", &self.color)
            .field("sample_budget", &self.sample_budget)
            .field("transform", &self.transform)
            .field("motion_stride", &self.motion_stride)
            .finish_non_exhaustive()
    }
}

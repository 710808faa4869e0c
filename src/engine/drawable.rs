use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::foundation::core::Rgb8;
use crate::interp::transform::TransformDescriptor;

/// Write-only surface the engine renders into. Owned by the host; the engine
/// only holds a shared handle.
pub trait Drawable {
    /// Replace the path data.
    fn set_outline(&mut self, d: &str);
    /// Replace the fill color.
    fn set_fill(&mut self, color: Rgb8);
    /// Replace the stroke color.
    fn set_stroke(&mut self, color: Rgb8);
    /// `None` clears any transform.
    fn set_transform(&mut self, transform: Option<&TransformDescriptor>);
}

/// Shared handle the engine writes through.
pub type DrawableHandle = Rc<RefCell<dyn Drawable>>;

/// In-memory `<path>` element: keeps the last written attributes and can
/// serialize itself as SVG markup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgPathElement {
    /// Last written path data.
    pub d: String,
    /// Last written fill.
    pub fill: Option<Rgb8>,
    /// Last written stroke.
    pub stroke: Option<Rgb8>,
    /// Last written transform; `None` once cleared.
    pub transform: Option<TransformDescriptor>,
    /// Static opacity set by the host, never touched by the engine.
    pub fill_opacity: Option<f64>,
    writes: u64,
}

impl SvgPathElement {
    /// Blank element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `fill-opacity`, clamped to `[0, 1]`.
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Number of outline writes received.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Wrap in `Rc<RefCell<_>>` so it can be handed to a target and inspected later.
    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    /// `<path .../>` markup for the current attributes.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.d.len() + 96);
        // Writing into a String cannot fail.
        let _ = write!(out, "<path d=\"{}\"", self.d);
        if let Some(fill) = self.fill {
            let _ = write!(out, " fill=\"{fill}\"");
        }
        if let Some(opacity) = self.fill_opacity {
            let _ = write!(out, " fill-opacity=\"{opacity}\"");
        }
        if let Some(stroke) = self.stroke {
            let _ = write!(out, " stroke=\"{stroke}\" stroke-linejoin=\"round\"");
        }
        if let Some(t) = self.transform {
            let _ = write!(out, " transform=\"{}\"", t.to_svg_transform());
        }
        out.push_str("/>");
        out
    }
}

impl Drawable for SvgPathElement {
    fn set_outline(&mut self, d: &str) {
        self.d.clear();
        self.d.push_str(d);
        self.writes += 1;
    }

    fn set_fill(&mut self, color: Rgb8) {
        self.fill = Some(color);
    }

    fn set_stroke(&mut self, color: Rgb8) {
        self.stroke = Some(color);
    }

    fn set_transform(&mut self, transform: Option<&TransformDescriptor>) {
        self.transform = transform.copied();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/drawable.rs"]
mod tests;

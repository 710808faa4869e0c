//! Point sequences back to closed polyline outlines.
//!
//! Two output qualities are produced on purpose: resting frames use a
//! caller-chosen decimal precision, in-flight frames are quantized to whole
//! coordinates and may skip vertices.

use std::fmt::Write as _;

use crate::foundation::core::Point;
use crate::foundation::math::{fmt_fixed, round_half_up};

/// `M x,y L x,y ... Z` at `precision` decimals. Empty input gives an empty string.
pub fn build_static(points: &[Point], precision: usize) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut d = String::with_capacity(points.len() * (8 + 2 * precision));
    for (i, p) in points.iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&fmt_fixed(p.x, precision));
        d.push(',');
        d.push_str(&fmt_fixed(p.y, precision));
    }
    d.push('Z');
    d
}

/// Blend `from[i]` toward `to[i]` at `t`, visiting every `stride`-th vertex,
/// rounded to integers.
pub fn build_animated(from: &[Point], to: &[Point], t: f64, stride: usize) -> String {
    let n = from.len().min(to.len());
    if n == 0 {
        return String::new();
    }
    let mut d = String::with_capacity(n / stride.max(1) * 10 + 2);
    for (k, i) in (0..n).step_by(stride.max(1)).enumerate() {
        let p = from[i].lerp(to[i], t);
        d.push(if k == 0 { 'M' } else { 'L' });
        // Writing into a String cannot fail.
        let _ = write!(d, "{},{}", quantize(p.x), quantize(p.y));
    }
    d.push('Z');
    d
}

fn quantize(v: f64) -> i64 {
    let r = round_half_up(v);
    if r.is_finite() { r as i64 } else { 0 }
}

#[cfg(test)]
#[path = "../../tests/unit/outline/builder.rs"]
mod tests;

//! Built-in shapes on a 200x200 canvas, plus the path helpers and
//! generators they are made from. Randomized shapes are seeded so every
//! call returns the same outlines.

use std::f64::consts::PI;

use crate::foundation::math::hash_unit;
use crate::shapes::plan::Shape;

const SWARM_SEED: u64 = 0x5377_6172_6d00;
const SKYLINE_SEED: u64 = 0x5379_6c6e_6500;

/// Axis-aligned rectangle from its top-left corner.
pub fn rect_path(x: f64, y: f64, w: f64, h: f64) -> String {
    format!("M {x} {y} h {w} v {h} h {} Z", -w)
}

/// Rectangle with corner radius clamped to half the shorter side.
pub fn rounded_rect_path(x: f64, y: f64, w: f64, h: f64, r: f64) -> String {
    if r <= 0.0 {
        return rect_path(x, y, w, h);
    }
    let r = r.min(w / 2.0).min(h / 2.0);
    let (iw, ih) = (w - 2.0 * r, h - 2.0 * r);
    [
        format!("M {} {y}", x + r),
        format!("h {iw}"),
        format!("a {r} {r} 0 0 1 {r} {r}"),
        format!("v {ih}"),
        format!("a {r} {r} 0 0 1 {} {r}", -r),
        format!("h {}", -iw),
        format!("a {r} {r} 0 0 1 {} {}", -r, -r),
        format!("v {}", -ih),
        format!("a {r} {r} 0 0 1 {r} {}", -r),
        "Z".to_owned(),
    ]
    .join(" ")
}

/// Full circle as two half arcs, starting at its leftmost point.
pub fn circle_path(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M {} {cy} a {r} {r} 0 1 0 {} 0 a {r} {r} 0 1 0 {} 0",
        cx - r,
        r * 2.0,
        -r * 2.0
    )
}

/// Closed polygon through `points`. Despite the name, any vertex count works.
pub fn triangle_path(points: &[(f64, f64)]) -> String {
    let Some(((x0, y0), rest)) = points.split_first() else {
        return String::new();
    };
    let mut d = format!("M {x0} {y0}");
    for (x, y) in rest {
        d.push_str(&format!(" L {x} {y}"));
    }
    d.push_str(" Z");
    d
}

/// Pie wedge between two clock angles in degrees (0 = 12 o'clock).
pub fn pie_slice_path(cx: f64, cy: f64, r: f64, start_deg: f64, end_deg: f64) -> String {
    let at = |deg: f64| {
        let rad = (deg - 90.0).to_radians();
        (cx + r * rad.cos(), cy + r * rad.sin())
    };
    let (sx, sy) = at(end_deg);
    let (ex, ey) = at(start_deg);
    let large_arc = u8::from(end_deg - start_deg > 180.0);
    format!("M {cx} {cy} L {sx} {sy} A {r} {r} 0 {large_arc} 0 {ex} {ey} Z")
}

/// `rows x cols` cells filling the 160x160 square inset by 20.
pub fn grid(rows: usize, cols: usize) -> Vec<String> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    const PADDING: f64 = 20.0;
    const SIZE: f64 = 160.0;
    const GAP: f64 = 1.0;
    let cell_w = SIZE / cols as f64;
    let cell_h = SIZE / rows as f64;
    let (w, h) = (cell_w - GAP * 2.0, cell_h - GAP * 2.0);
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .map(|(r, c)| {
            let x = PADDING + c as f64 * cell_w + GAP;
            let y = PADDING + r as f64 * cell_h + GAP;
            format!(
                "M {x},{y} L {},{y} L {},{} L {x},{} Z",
                x + w,
                x + w,
                y + h,
                y + h
            )
        })
        .collect()
}

/// `count` small dots and diamonds scattered over the canvas.
pub fn swarm(count: usize, seed: u64) -> Vec<String> {
    (0..count as u64)
        .map(|i| {
            let cx = 20.0 + hash_unit(seed, 0, i) * 160.0;
            let cy = 20.0 + hash_unit(seed, 1, i) * 160.0;
            let size = 2.0 + hash_unit(seed, 2, i) * 4.0;
            if hash_unit(seed, 3, i) > 0.5 {
                format!(
                    "M {cx},{cy} m -{size},0 a {size},{size} 0 1,0 {},0 a {size},{size} 0 1,0 -{},0",
                    size * 2.0,
                    size * 2.0
                )
            } else {
                format!(
                    "M {cx},{} L {},{cy} L {cx},{} L {},{cy} Z",
                    cy - size,
                    cx + size,
                    cy + size,
                    cx - size
                )
            }
        })
        .collect()
}

/// Stepped city outline plus two cloud strokes.
pub fn skyline(seed: u64) -> Vec<String> {
    let mut d = String::from("M 10,180 ");
    let mut x = 10.0_f64;
    let mut i = 0_u64;
    while x < 190.0 {
        let width = 10.0 + hash_unit(seed, 0, i) * 20.0;
        let top = 180.0 - (40.0 + hash_unit(seed, 1, i) * 100.0);
        d.push_str(&format!("L {x},{top} L {},{top} L {},180 ", x + width, x + width));
        x += width;
        i += 1;
    }
    d.push('Z');
    vec![
        d,
        "M 30,30 Q 50,10 70,30 T 110,30".to_owned(),
        "M 140,50 Q 150,40 160,50".to_owned(),
    ]
}

/// Eight quadratic petals around a small center disc.
pub fn flower() -> Vec<String> {
    const CENTER: f64 = 100.0;
    const PETALS: usize = 8;
    const INNER: f64 = 30.0;
    const OUTER: f64 = 90.0;
    let polar = |angle: f64, r: f64| (CENTER + angle.cos() * r, CENTER + angle.sin() * r);
    let mut paths: Vec<String> = (0..PETALS)
        .map(|i| {
            let angle = i as f64 / PETALS as f64 * PI * 2.0;
            let (c1x, c1y) = polar(angle - 0.2, INNER);
            let (tx, ty) = polar(angle, OUTER);
            let (c2x, c2y) = polar(angle + 0.2, INNER);
            format!(
                "M {CENTER},{CENTER} Q {c1x},{c1y} {tx},{ty} Q {c2x},{c2y} {CENTER},{CENTER}"
            )
        })
        .collect();
    paths.push("M 100,100 m -15,0 a 15,15 0 1,0 30,0 a 15,15 0 1,0 -30,0".to_owned());
    paths
}

const PRESET_NAMES: &[&str] = &[
    "circle",
    "menu",
    "polygon",
    "diamond",
    "hexagon",
    "blob",
    "skyline",
    "flower",
    "circuit",
    "mountain",
    "grid100",
    "swarm",
    "grid225",
    "grid400",
    "calligraphy",
    "globe",
    "ripples",
    "wave",
    "cloud",
    "smile",
    "bot",
    "ghost",
    "anchor",
    "thermometer",
    "activity",
    "layers",
    "wind",
    "zap",
];

/// Names accepted by [`preset`].
pub fn preset_names() -> &'static [&'static str] {
    PRESET_NAMES
}

/// Look up a built-in shape by name.
pub fn preset(name: &str) -> Option<Shape> {
    let shape = match name {
        "circle" => Shape::new(
            ["M 100, 100 m -80, 0 a 80,80 0 1,0 160,0 a 80,80 0 1,0 -160,0"],
            ["#3B82F6"],
        ),
        "menu" => Shape::new(
            [
                "M 40,60 L 160,60 L 160,80 L 40,80 Z",
                "M 40,110 L 160,110 L 160,130 L 40,130 Z",
                "M 40,160 L 160,160 L 160,180 L 40,180 Z",
            ],
            ["#64748B", "#475569", "#334155"],
        ),
        "polygon" => Shape::new(
            ["M 100,20 L 170,60 L 170,140 L 100,180 L 30,140 L 30,60 Z"],
            ["#F59E0B"],
        ),
        "diamond" => Shape::new(["M 100,20 L 180,100 L 100,180 L 20,100 Z"], ["#38BDF8"]),
        "blob" => Shape::new(
            [
                "M 100 18 C 122 24 138 40 150 60 C 168 72 178 92 176 114 \
                 C 174 138 158 154 140 166 C 124 178 104 186 84 182 \
                 C 62 178 42 164 32 144 C 20 124 18 102 26 82 \
                 C 34 60 50 38 72 26 C 82 20 92 16 100 18 Z",
            ],
            ["#60A5FA"],
        ),
        "hexagon" => Shape::new(
            [
                "M 100 24 L 132 36 L 164 62 L 172 98 L 160 132 L 132 156 \
                 L 100 176 L 68 156 L 40 132 L 28 98 L 36 62 L 68 36 Z",
            ],
            ["#F97316"],
        ),
        "skyline" => Shape::new(skyline(SKYLINE_SEED), ["#3730A3", "#4338CA", "#4F46E5"]),
        "flower" => Shape::new(
            flower(),
            [
                "#EC4899", "#D946EF", "#A855F7", "#8B5CF6", "#EC4899", "#D946EF", "#A855F7",
                "#8B5CF6", "#F43F5E",
            ],
        ),
        "circuit" => Shape::new(
            [
                "M 40,40 L 90,40 L 90,90 M 85,90 a 5,5 0 1,0 10,0 a 5,5 0 1,0 -10,0",
                "M 160,160 L 110,160 L 110,110 M 105,110 a 5,5 0 1,0 10,0 a 5,5 0 1,0 -10,0",
                "M 160,40 L 130,40 L 130,160 L 160,160",
                "M 40,160 L 70,160 L 70,40 L 40,40",
                "M 80,80 L 120,80 L 120,120 L 80,120 Z",
            ],
            ["#0EA5E9", "#0284C7", "#0369A1", "#075985", "#0C4A6E"],
        ),
        "mountain" => Shape::new(
            [
                "M 20,160 L 70,80 L 120,160 Z",
                "M 80,160 L 130,60 L 180,160 Z",
                "M 45,140 L 70,110 L 95,140 Z",
            ],
            ["#10B981", "#34D399", "#059669"],
        ),
        "grid100" => Shape::new(grid(10, 10), ["#F472B6", "#EC4899", "#DB2777"]),
        "swarm" => Shape::new(
            swarm(150, SWARM_SEED),
            ["#60A5FA", "#3B82F6", "#2563EB", "#1D4ED8", "#93C5FD"],
        ),
        "grid225" => Shape::new(grid(15, 15), ["#10B981", "#34D399", "#059669"]),
        "grid400" => Shape::new(grid(20, 20), ["#F87171", "#FB7185", "#F43F5E"]),
        "calligraphy" => Shape::new(
            [
                "M 90,30 Q 100,20 110,30 Q 120,40 100,50",
                "M 40,60 Q 100,55 160,60",
                "M 100,60 Q 80,100 40,160",
                "M 100,60 Q 120,100 160,160 L 170,155",
            ],
            ["#1F2937", "#374151", "#4B5563", "#6B7280"],
        ),
        "globe" => Shape::new(
            [
                "M 100,100 m -90,0 a 90,90 0 1,0 180,0 a 90,90 0 1,0 -180,0",
                "M 10,100 Q 100,180 190,100",
                "M 10,100 Q 100,20 190,100",
                "M 100,10 Q 40,100 100,190",
                "M 100,10 Q 160,100 100,190",
            ],
            ["#2563EB", "#3B82F6", "#60A5FA", "#93C5FD", "#BFDBFE"],
        ),
        "ripples" => Shape::new(
            [15.0, 35.0, 55.0].map(|r| circle_path(100.0, 100.0, r)),
            ["#22D3EE", "#38BDF8", "#7DD3FC"],
        ),
        "wave" => Shape::new(
            [
                "M 20,70 Q 60,40 100,70 T 180,70",
                "M 20,110 Q 60,80 100,110 T 180,110",
                "M 20,150 Q 60,120 100,150 T 180,150",
            ],
            ["#A78BFA", "#8B5CF6", "#C4B5FD"],
        ),
        "cloud" => Shape::new(
            [
                "M 60,130 Q 40,130 40,110 Q 40,90 60,90 Q 65,70 85,70 Q 95,50 120,55 \
                 Q 135,40 155,50 Q 175,60 170,80 Q 190,90 180,110 Q 175,130 150,130 Z",
            ],
            ["#38BDF8"],
        ),
        "smile" => Shape::new(
            [
                "M 100,20 a 80,80 0 1,0 0.01,0 Z",
                "M 70,80 a 8,8 0 1,0 16,0 a 8,8 0 1,0 -16,0",
                "M 130,80 a 8,8 0 1,0 16,0 a 8,8 0 1,0 -16,0",
                "M 60,120 Q 100,150 140,120 Q 100,165 60,120 Z",
            ],
            ["#FDE047", "#F59E0B", "#FBBF24", "#FACC15"],
        ),
        "bot" => Shape::new(
            [
                "M 50,60 L 150,60 L 150,140 L 50,140 Z",
                "M 100,40 L 100,60",
                "M 96,34 a 4,4 0 1,0 8,0 a 4,4 0 1,0 -8,0",
                "M 75,90 a 10,10 0 1,0 20,0 a 10,10 0 1,0 -20,0",
                "M 105,90 a 10,10 0 1,0 20,0 a 10,10 0 1,0 -20,0",
                "M 80,115 L 120,115 L 120,125 L 80,125 Z",
            ],
            ["#22C55E", "#16A34A", "#4ADE80", "#15803D", "#86EFAC", "#22C55E"],
        ),
        "ghost" => Shape::new(
            [
                "M 50,70 Q 100,20 150,70 L 150,150 Q 135,140 120,150 Q 105,160 90,150 \
                 Q 75,140 60,150 Q 45,160 50,140 Z",
                "M 75,85 a 7,7 0 1,0 14,0 a 7,7 0 1,0 -14,0",
                "M 111,85 a 7,7 0 1,0 14,0 a 7,7 0 1,0 -14,0",
                "M 80,115 Q 100,130 120,115 Q 100,140 80,115 Z",
            ],
            ["#A855F7", "#C084FC", "#E9D5FF", "#9333EA"],
        ),
        "anchor" => Shape::new(
            [
                "M 100,30 a 15,15 0 1,0 0.01,0 Z",
                "M 95,45 L 105,45 L 105,130 L 95,130 Z",
                "M 60,85 L 140,85 L 140,95 L 60,95 Z",
                "M 40,120 Q 100,170 160,120 L 150,120 Q 100,150 50,120 Z",
            ],
            ["#0EA5E9", "#0284C7", "#0369A1", "#38BDF8"],
        ),
        "thermometer" => Shape::new(
            [
                "M 100,150 a 20,20 0 1,0 0.01,0 Z",
                "M 90,40 L 110,40 L 110,150 L 90,150 Z",
                "M 96,70 L 104,70 L 104,150 L 96,150 Z",
            ],
            ["#F97316", "#FB7185", "#EF4444"],
        ),
        "activity" => Shape::new(
            ["M 30,120 L 60,120 L 80,80 L 100,140 L 120,100 L 140,120 L 170,120"],
            ["#F43F5E"],
        ),
        "layers" => Shape::new(
            [
                triangle_path(&[(40.0, 60.0), (100.0, 30.0), (160.0, 60.0), (100.0, 90.0)]),
                triangle_path(&[(40.0, 90.0), (100.0, 60.0), (160.0, 90.0), (100.0, 120.0)]),
                triangle_path(&[(40.0, 120.0), (100.0, 90.0), (160.0, 120.0), (100.0, 150.0)]),
            ],
            ["#8B5CF6", "#6366F1", "#A5B4FC"],
        ),
        "wind" => Shape::new(
            [
                "M 30,80 Q 80,55 130,80 T 190,80",
                "M 20,110 Q 70,90 120,110 T 180,110",
                "M 40,140 Q 80,125 120,140 T 170,140",
            ],
            ["#38BDF8", "#7DD3FC", "#0EA5E9"],
        ),
        "zap" => Shape::new(
            ["M 110,20 L 70,110 L 110,110 L 90,180 L 150,80 L 110,80 Z"],
            ["#FACC15"],
        ),
        _ => return None,
    };
    Some(shape)
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/library.rs"]
mod tests;

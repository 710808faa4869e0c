/// Linear interpolation, exact at `t = 0` and `t = 1`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Round half toward positive infinity (`-2.5` becomes `-2`).
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Fixed-point formatting in the manner of `Number.prototype.toFixed`: ties
/// round away from zero, so `-2.5` at precision 0 prints `-3`. Never emits `-0`.
pub fn fmt_fixed(v: f64, precision: usize) -> String {
    let scale = 10f64.powi(precision.min(12) as i32);
    let rounded = round_half_up(v.abs() * scale).copysign(v) / scale;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.precision$}")
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Deterministic value in `[0, 1)` keyed by `(seed, stream, index)`.
pub(crate) fn hash_unit(seed: u64, stream: u64, index: u64) -> f64 {
    let mut h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS ^ seed);
    h.write_u64(stream);
    h.write_u64(index);
    // Top 53 bits fill an f64 mantissa exactly.
    (h.finish() >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

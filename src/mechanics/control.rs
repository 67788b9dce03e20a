//! Control mechanics: proportional updates.

/// Proportional approach: x' = clamp(x + rate * (target - x)).
#[inline]
pub fn approach(x: f64, target: f64, rate: f64, lo: f64, hi: f64) -> f64 {
    (x + rate * (target - x)).clamp(lo, hi)
}

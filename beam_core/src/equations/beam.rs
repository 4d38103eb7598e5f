//! # Point-Load Beam Formulas
//!
//! Closed-form contributions of a single point load to the internal forces
//! and deflection of a straight beam of length `L`.
//!
//! ## Notation
//!
//! - `L` = Beam length
//! - `x` = Position along beam from the left end
//! - `a` = Load position from the left end
//! - `P` = Point load magnitude (signed, caller-defined convention)
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia
//!
//! ## Support condition
//!
//! Moment and shear are summed from the left end with no support reaction
//! term. This is exact for a cantilever fixed at `x = 0` with the loads
//! to its right. For a simply-supported beam the reactions would have to be
//! solved first, which this crate does not do.

use crate::loads::PointLoad;

/// Moment at `x` caused by a point load `p` at `a`
///
/// # Formula
/// - M(x) = P(x - a)  for a ≤ x
/// - M(x) = 0         for a > x
#[inline]
pub fn point_load_moment(p: f64, a: f64, x: f64) -> f64 {
    if a <= x {
        p * (x - a)
    } else {
        0.0
    }
}

/// Shear at `x` caused by a point load `p` at `a`
///
/// # Formula
/// - V(x) = P  for a ≤ x
/// - V(x) = 0  for a > x
#[inline]
pub fn point_load_shear(p: f64, a: f64, x: f64) -> f64 {
    if a <= x {
        p
    } else {
        0.0
    }
}

/// Deflection estimate for a single point load `p` at `a` acting alone
///
/// # Formula
/// ```text
/// δ = P·a·(L² - a²) / (6EI)
/// ```
///
/// Zero at both ends of the beam. The caller guarantees `E·I ≠ 0`.
///
/// # Example
/// ```rust
/// use beam_core::equations::beam::point_load_deflection;
///
/// let d = point_load_deflection(10.0, 2.0, 10.0, 200_000.0, 500.0);
/// assert!((d - 3.2e-6).abs() < 1e-15);
/// ```
#[inline]
pub fn point_load_deflection(p: f64, a: f64, l: f64, e: f64, i: f64) -> f64 {
    p * a * (l.powi(2) - a.powi(2)) / (6.0 * e * i)
}

/// Moment at `x` by direct superposition of every load, Σ Pᵢ(x - aᵢ) for aᵢ ≤ x
///
/// O(n) per station. The solver uses a sweep instead; this is the reference.
pub fn superposed_moment(loads: &[PointLoad], x: f64) -> f64 {
    loads
        .iter()
        .map(|l| point_load_moment(l.magnitude, l.position, x))
        .sum()
}

/// Shear at `x` by direct superposition of every load, Σ Pᵢ for aᵢ ≤ x
pub fn superposed_shear(loads: &[PointLoad], x: f64) -> f64 {
    loads
        .iter()
        .map(|l| point_load_shear(l.magnitude, l.position, x))
        .sum()
}

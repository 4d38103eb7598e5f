//! # Cross-Section Property Formulas
//!
//! Geometric properties of a solid rectangular cross-section, used by the
//! stress and deflection calculations.
//!
//! ## Notation
//!
//! - `I` = Moment of inertia (second moment of area) about the neutral axis
//! - `c` = Distance from neutral axis to extreme fiber (`yMax`)
//! - `Q` = First moment of area of the part above the neutral axis
//! - `b` = Width of section
//! - `d` = Depth (height) of section
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate moment of inertia for rectangular section about centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │ ════════│ ← neutral axis at d/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bd³/12
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(10.0, 20.0);
/// assert!((i - 6666.667).abs() < 0.001);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Distance from the neutral axis to the extreme fiber
///
/// # Formula
/// c = d/2
#[inline]
pub fn rectangular_extreme_fiber(d: f64) -> f64 {
    d / 2.0
}

/// First moment of area about the neutral axis, taken over the half-section
/// above it
///
/// ```text
///     ┌─────────┐  ─┐
///     │░░░░░░░░░│   │ d/2, centroid at d/4
///     │═════════│  ─┘ ← neutral axis
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// Q = (b·d/2)·(d/4) = bd²/8
///
/// Used in τ = VQ/(Ib). For a rectangle this gives τ_max = 1.5·V/(bd).
#[inline]
pub fn rectangular_first_moment(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 8.0
}

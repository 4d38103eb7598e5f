//! Stress Calculator
//!
//! Converts the moment and shear extrema into extreme-fiber bending stress
//! and neutral-axis shear stress.
//!
//! ```text
//! σ = M·yMax / I
//! τ = V·Q / (I·b)
//! ```
//!
//! A validated [`CrossSection`](crate::section::CrossSection) always has
//! positive dimensions, but `I = bh³/12` can still underflow to zero for
//! extremely small sections, so both formulas check their denominators.

use serde::{Deserialize, Serialize};

use super::internal_forces::InternalForces;
use crate::errors::{CalcError, CalcResult};
use crate::section::SectionProperties;

/// Bending and shear stress for one beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressResult {
    /// Maximum bending stress at the extreme fiber
    pub max_bending_stress: f64,

    /// Maximum shear stress at the neutral axis
    pub max_shear_stress: f64,
}

/// Bending stress σ = M·yMax / I
///
/// # Errors
/// [`CalcError::InvalidSection`] if `moment_of_inertia` is zero.
///
/// # Example
/// ```rust
/// use beam_core::calculations::stress::bending_stress;
///
/// assert_eq!(bending_stress(1000.0, 2000.0, 10.0).unwrap(), 5.0);
/// assert!(bending_stress(1000.0, 0.0, 10.0).is_err());
/// ```
pub fn bending_stress(max_moment: f64, moment_of_inertia: f64, y_max: f64) -> CalcResult<f64> {
    if moment_of_inertia == 0.0 {
        return Err(CalcError::invalid_section("Moment of inertia cannot be zero"));
    }
    Ok(max_moment * y_max / moment_of_inertia)
}

/// Shear stress τ = V·Q / (I·b)
///
/// # Errors
/// - [`CalcError::InvalidSection`] if `moment_of_inertia` is zero
/// - [`CalcError::DivisionByZero`] if `width` is zero
///
/// # Example
/// ```rust
/// use beam_core::calculations::stress::shear_stress;
///
/// assert_eq!(shear_stress(100.0, 50.0, 2000.0, 5.0).unwrap(), 0.5);
/// ```
pub fn shear_stress(
    max_shear: f64,
    first_moment: f64,
    moment_of_inertia: f64,
    width: f64,
) -> CalcResult<f64> {
    if moment_of_inertia == 0.0 {
        return Err(CalcError::invalid_section("Moment of inertia cannot be zero"));
    }
    if width == 0.0 {
        return Err(CalcError::division_by_zero("width"));
    }
    Ok(max_shear * first_moment / (moment_of_inertia * width))
}

/// Both stresses from the solver output and the section properties
pub fn calculate_stresses(
    forces: &InternalForces,
    props: &SectionProperties,
) -> CalcResult<StressResult> {
    let max_bending_stress =
        bending_stress(forces.max_bending_moment, props.moment_of_inertia, props.y_max)?;
    let max_shear_stress = shear_stress(
        forces.max_shear_force,
        props.first_moment,
        props.moment_of_inertia,
        props.width,
    )?;

    Ok(StressResult {
        max_bending_stress,
        max_shear_stress,
    })
}

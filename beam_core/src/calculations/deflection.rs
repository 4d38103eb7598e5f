//! Deflection Estimator
//!
//! Each load is evaluated as if it acted alone,
//! `δᵢ = Pᵢ·aᵢ·(L² − aᵢ²) / (6EI)`, and the largest magnitude is reported.
//! Contributions are not summed at a common point, so for several loads of
//! the same sign this underestimates the true superposed deflection.

use crate::equations::beam::point_load_deflection;
use crate::errors::{CalcError, CalcResult};
use crate::model::BeamModel;

/// Single-load deflections, in stored load order
///
/// # Errors
/// [`CalcError::InvalidSection`] if the section's moment of inertia is zero.
pub fn load_deflections(model: &BeamModel) -> CalcResult<Vec<f64>> {
    let i = model.section().moment_of_inertia();
    if i == 0.0 {
        return Err(CalcError::invalid_section("Moment of inertia cannot be zero"));
    }
    let (l, e) = (model.length(), model.elastic_modulus());

    Ok(model
        .loads()
        .iter()
        .map(|load| point_load_deflection(load.magnitude, load.position, l, e, i))
        .collect())
}

/// max |δᵢ| over the loads; zero for an unloaded beam
pub fn max_deflection(model: &BeamModel) -> CalcResult<f64> {
    Ok(load_deflections(model)?
        .into_iter()
        .fold(0.0_f64, |max, d| max.max(d.abs())))
}

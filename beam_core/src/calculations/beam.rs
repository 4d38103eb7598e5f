//! # Point-Load Beam Calculation
//!
//! Runs the full pipeline for one beam:
//!
//! ```text
//! BeamModel ─┬─ internal_forces::solve ── stress::calculate_stresses ─┐
//!            └─ deflection::max_deflection ───────────────────────────┴─ BeamResults
//! ```
//!
//! Any failure aborts the beam; there are no partial results.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::calculate;
//! use beam_core::loads::PointLoad;
//! use beam_core::model::BeamInput;
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     length: 10.0,
//!     width: 6.0,
//!     height: 10.0,
//!     elastic_modulus: 200_000.0,
//!     loads: vec![PointLoad::new(2.0, 10.0)],
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.max_shear_force, 10.0);
//! assert_eq!(result.max_bending_moment, 80.0);
//! ```

use serde::{Deserialize, Serialize};

use super::deflection::max_deflection;
use super::internal_forces::{solve, InternalForces};
use super::results::BeamResults;
use super::stress::calculate_stresses;
use crate::errors::CalcResult;
use crate::model::{BeamInput, BeamModel};

/// Results plus the station values they were derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamAnalysis {
    pub forces: InternalForces,
    pub results: BeamResults,
}

/// Analyze a validated model, keeping the per-station forces.
pub fn analyze_detailed(model: &BeamModel) -> CalcResult<BeamAnalysis> {
    let forces = solve(model);
    let stresses = calculate_stresses(&forces, &model.section().properties())?;
    let deflection = max_deflection(model)?;
    let results = BeamResults::assemble(&forces, &stresses, deflection);
    Ok(BeamAnalysis { forces, results })
}

/// Analyze a validated model.
///
/// Pure: the same model always yields bit-identical results.
pub fn analyze(model: &BeamModel) -> CalcResult<BeamResults> {
    analyze_detailed(model).map(|a| a.results)
}

/// Validate raw input and analyze it.
///
/// # Returns
///
/// * `Ok(BeamResults)` - All five result values
/// * `Err(CalcError)` - The first validation or analysis failure
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResults> {
    let model = input.to_model()?;
    analyze(&model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::loads::PointLoad;
    use crate::section::CrossSection;

    fn test_input() -> BeamInput {
        BeamInput {
            label: "B-1".to_string(),
            length: 10.0,
            width: 6.0,
            height: 10.0,
            elastic_modulus: 200_000.0,
            loads: vec![
                PointLoad::new(7.5, -40.0),
                PointLoad::new(2.0, 10.0),
                PointLoad::new(5.0, 25.0),
            ],
        }
    }

    #[test]
    fn test_zero_loads_give_zero_results() {
        let mut input = test_input();
        input.loads.clear();
        let r = calculate(&input).unwrap();
        assert_eq!(r.max_bending_moment, 0.0);
        assert_eq!(r.max_shear_force, 0.0);
        assert_eq!(r.max_deflection, 0.0);
        assert_eq!(r.max_bending_stress, 0.0);
        assert_eq!(r.max_shear_stress, 0.0);
    }

    #[test]
    fn test_single_load_pipeline() {
        let mut input = test_input();
        input.loads = vec![PointLoad::new(2.0, 10.0)];
        let r = calculate(&input).unwrap();

        // I = 500, yMax = 5, Q = 6 * 100 / 8 = 75
        assert_eq!(r.max_bending_moment, 80.0);
        assert_eq!(r.max_shear_force, 10.0);
        assert_eq!(r.max_bending_stress, 80.0 * 5.0 / 500.0);
        assert_eq!(r.max_shear_stress, 10.0 * 75.0 / (500.0 * 6.0));
        assert_eq!(r.max_deflection, 10.0 * 2.0 * (100.0 - 4.0) / (6.0 * 200_000.0 * 500.0));
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let model = test_input().to_model().unwrap();
        let a = analyze(&model).unwrap();
        let b = analyze(&model).unwrap();
        assert!(a.bit_identical(&b));
    }

    #[test]
    fn test_load_order_does_not_change_bits() {
        let forward = test_input();
        let mut reversed = test_input();
        reversed.loads.reverse();
        let a = calculate(&forward).unwrap();
        let b = calculate(&reversed).unwrap();
        assert!(a.bit_identical(&b));
    }

    #[test]
    fn test_detailed_keeps_stations() {
        let model = test_input().to_model().unwrap();
        let detailed = analyze_detailed(&model).unwrap();
        // 0, 2, 5, 7.5, 10
        assert_eq!(detailed.forces.stations.len(), 5);
        assert_eq!(detailed.results, analyze(&model).unwrap());
    }

    #[test]
    fn test_invalid_input_produces_no_results() {
        let mut input = test_input();
        input.width = -1.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_GEOMETRY");

        let mut input = test_input();
        input.height = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_GEOMETRY");

        let mut input = test_input();
        input.loads.push(PointLoad::new(10.01, 1.0));
        assert!(matches!(
            calculate(&input).unwrap_err(),
            CalcError::OutOfRangeLoad { index: 3, .. }
        ));
    }

    #[test]
    fn test_underflowed_section_aborts_analysis() {
        let tiny = CrossSection::new(1e-100, 1e-100).unwrap();
        let model = BeamModel::new(1.0, tiny, 1.0, [PointLoad::new(0.5, 1.0)]).unwrap();
        let err = analyze(&model).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SECTION");
    }
}

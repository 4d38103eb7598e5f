//! Results Assembly
//!
//! Packages the computed scalars into the immutable record handed to report
//! writers. The record carries no reference back to the model.

use serde::{Deserialize, Serialize};

use super::internal_forces::InternalForces;
use super::stress::StressResult;

/// Conventional labels, in the order writers emit them
pub const RESULT_LABELS: [&str; 5] = [
    "Max Bending Moment",
    "Max Shear Force",
    "Max Bending Stress",
    "Max Shear Stress",
    "Max Deflection",
];

/// Analysis results for one beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_bending_moment": 8000.0,
///   "max_shear_force": 1000.0,
///   "max_bending_stress": 12000000.0,
///   "max_shear_stress": 75000.0,
///   "max_deflection": 0.00012
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamResults {
    /// max |M(x)| over the candidate stations
    pub max_bending_moment: f64,

    /// max |V(x)| over the candidate stations
    pub max_shear_force: f64,

    /// σ = M·yMax / I
    pub max_bending_stress: f64,

    /// τ = V·Q / (I·b)
    pub max_shear_stress: f64,

    /// Largest single-load deflection magnitude
    pub max_deflection: f64,
}

impl BeamResults {
    /// Assemble from the solver, stress and deflection outputs
    pub fn assemble(forces: &InternalForces, stresses: &StressResult, max_deflection: f64) -> Self {
        BeamResults {
            max_bending_moment: forces.max_bending_moment,
            max_shear_force: forces.max_shear_force,
            max_bending_stress: stresses.max_bending_stress,
            max_shear_stress: stresses.max_shear_stress,
            max_deflection,
        }
    }

    /// Values paired with [`RESULT_LABELS`]
    pub fn labeled_values(&self) -> [(&'static str, f64); 5] {
        [
            (RESULT_LABELS[0], self.max_bending_moment),
            (RESULT_LABELS[1], self.max_shear_force),
            (RESULT_LABELS[2], self.max_bending_stress),
            (RESULT_LABELS[3], self.max_shear_stress),
            (RESULT_LABELS[4], self.max_deflection),
        ]
    }

    /// True when every field is bit-for-bit equal
    pub fn bit_identical(&self, other: &Self) -> bool {
        self.labeled_values()
            .iter()
            .zip(other.labeled_values().iter())
            .all(|((_, a), (_, b))| a.to_bits() == b.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BeamResults {
        let forces = InternalForces {
            stations: Vec::new(),
            max_bending_moment: 8000.0,
            max_shear_force: 1000.0,
        };
        let stresses = StressResult {
            max_bending_stress: 1.2e7,
            max_shear_stress: 75_000.0,
        };
        BeamResults::assemble(&forces, &stresses, 1.2e-4)
    }

    #[test]
    fn test_assemble() {
        let r = sample();
        assert_eq!(r.max_bending_moment, 8000.0);
        assert_eq!(r.max_shear_force, 1000.0);
        assert_eq!(r.max_bending_stress, 1.2e7);
        assert_eq!(r.max_shear_stress, 75_000.0);
        assert_eq!(r.max_deflection, 1.2e-4);
    }

    #[test]
    fn test_labeled_values_order() {
        let labels: Vec<&str> = sample().labeled_values().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, RESULT_LABELS.to_vec());
        assert_eq!(sample().labeled_values()[2].1, 1.2e7);
    }

    #[test]
    fn test_bit_identical_detects_sign_flip() {
        let a = sample();
        let mut b = a;
        assert!(a.bit_identical(&b));
        b.max_deflection = -b.max_deflection;
        assert!(!a.bit_identical(&b));
    }

    #[test]
    fn test_result_serialization() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("max_bending_stress"));
        let roundtrip: BeamResults = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, sample());
    }
}

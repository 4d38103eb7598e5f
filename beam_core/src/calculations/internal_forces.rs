//! Internal Force Solver
//!
//! Bending moment and shear force at every candidate station, and their
//! maximum magnitudes.
//!
//! ## Definitions
//!
//! ```text
//! M(x) = Σ Pᵢ·(x − aᵢ)   over loads with aᵢ ≤ x
//! V(x) = Σ Pᵢ            over loads with aᵢ ≤ x
//! ```
//!
//! Loads are summed from the left end with no reaction term (see
//! [`crate::equations::beam`] for the support condition this implies).
//!
//! ## Method
//!
//! The model stores its loads sorted, so both quantities are evaluated in a
//! single left-to-right sweep. Between consecutive breakpoints the moment
//! grows by `V·Δx`; at a load the shear steps by `P`. That is O(n) after the
//! sort, against O(n²) for evaluating [`superposed_moment`] at every station.
//! Summation order is fixed by the stored load order, so results are
//! bit-reproducible.
//!
//! [`superposed_moment`]: crate::equations::beam::superposed_moment

use serde::{Deserialize, Serialize};

use super::stations::StationSet;
use crate::model::BeamModel;

/// Moment and shear evaluated at one station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationForces {
    /// Station position from the left end
    pub position: f64,

    /// Bending moment M(x), signed
    pub moment: f64,

    /// Shear force V(x), signed
    pub shear: f64,
}

/// Output of the solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalForces {
    /// Values at each candidate station, ascending by position
    pub stations: Vec<StationForces>,

    /// max |M(x)| over the stations
    pub max_bending_moment: f64,

    /// max |V(x)| over the stations
    pub max_shear_force: f64,
}

impl InternalForces {
    /// Station where |M| is largest (first one on ties)
    pub fn governing_moment_station(&self) -> Option<&StationForces> {
        self.stations
            .iter()
            .find(|s| s.moment.abs() == self.max_bending_moment)
    }

    /// Station where |V| is largest (first one on ties)
    pub fn governing_shear_station(&self) -> Option<&StationForces> {
        self.stations
            .iter()
            .find(|s| s.shear.abs() == self.max_shear_force)
    }
}

/// Solve moment and shear at every candidate station of `model`.
///
/// # Example
///
/// ```rust
/// use beam_core::calculations::internal_forces::solve;
/// use beam_core::loads::PointLoad;
/// use beam_core::model::BeamModel;
/// use beam_core::section::CrossSection;
///
/// let section = CrossSection::new(1.0, 1.0).unwrap();
/// let model = BeamModel::new(10.0, section, 1.0, [PointLoad::new(4.0, 100.0)]).unwrap();
///
/// let forces = solve(&model);
/// assert_eq!(forces.max_shear_force, 100.0);
/// assert_eq!(forces.max_bending_moment, 600.0); // 100 * (10 - 4), at x = L
/// ```
pub fn solve(model: &BeamModel) -> InternalForces {
    let stations = StationSet::for_model(model);
    let loads = model.loads();

    let mut shear = 0.0_f64;
    let mut moment = 0.0_f64;
    let mut cursor = 0.0_f64;
    let mut next = 0;

    let mut values = Vec::with_capacity(stations.len());
    let mut max_bending_moment = 0.0_f64;
    let mut max_shear_force = 0.0_f64;

    for x in stations.iter() {
        while let Some(load) = loads.get(next).filter(|l| l.position <= x) {
            moment += shear * (load.position - cursor);
            cursor = load.position;
            shear += load.magnitude;
            next += 1;
        }
        moment += shear * (x - cursor);
        cursor = x;

        max_bending_moment = max_bending_moment.max(moment.abs());
        max_shear_force = max_shear_force.max(shear.abs());
        values.push(StationForces {
            position: x,
            moment,
            shear,
        });
    }

    InternalForces {
        stations: values,
        max_bending_moment,
        max_shear_force,
    }
}

/// max |M(x)| over the candidate stations
pub fn max_bending_moment(model: &BeamModel) -> f64 {
    solve(model).max_bending_moment
}

/// max |V(x)| over the candidate stations
pub fn max_shear_force(model: &BeamModel) -> f64 {
    solve(model).max_shear_force
}

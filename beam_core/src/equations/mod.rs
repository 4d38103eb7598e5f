//! # Structural Mechanics Equations
//!
//! The closed-form formulas used by the calculations, kept in one place so
//! they can be checked against references independently of the solver.
//!
//! ## Modules
//!
//! - [`beam`] - Point-load moment, shear and deflection contributions
//! - [`section`] - Rectangular cross-section properties (I, c, Q)
//!
//! ## Sign Conventions
//!
//! Load sign is caller-defined. Moment and shear keep the sign of the loads
//! that produce them; the solver reports extrema as magnitudes.

pub mod beam;
pub mod section;

pub use beam::{
    point_load_deflection,
    point_load_moment,
    point_load_shear,
    superposed_moment,
    superposed_shear,
};

pub use section::{
    rectangular_extreme_fiber,
    rectangular_first_moment,
    rectangular_moment_of_inertia,
};

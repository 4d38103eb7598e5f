//! # Beam Calculations
//!
//! The analysis pipeline, split by component:
//!
//! - [`stations`] - Candidate station set `{0} ∪ load positions ∪ {L}`
//! - [`internal_forces`] - Moment and shear at the stations, and their maxima
//! - [`stress`] - Bending and shear stress from the maxima
//! - [`deflection`] - Per-load deflection estimate
//! - [`results`] - The immutable [`BeamResults`] record
//! - [`beam`] - `analyze(model)` / `calculate(input)` entry points
//! - [`batch`] - Parallel analysis of many beams
//!
//! Every function here is pure: no I/O, no logging, no shared state.

pub mod batch;
pub mod beam;
pub mod deflection;
pub mod internal_forces;
pub mod results;
pub mod stations;
pub mod stress;

// Re-export commonly used types
pub use batch::{analyze_batch, analyze_batch_detailed, calculate_batch};
pub use beam::{analyze, analyze_detailed, calculate, BeamAnalysis};
pub use internal_forces::{InternalForces, StationForces};
pub use results::{BeamResults, RESULT_LABELS};
pub use stations::StationSet;
pub use stress::StressResult;

//! # beam_core - Point-Load Beam Analysis Engine
//!
//! `beam_core` computes, for a single-span beam with a rectangular section
//! and a set of transverse point loads, the maximum bending moment and shear
//! force, the resulting bending and shear stress, and an estimated maximum
//! deflection.
//!
//! ## Design Philosophy
//!
//! - **Validate once**: [`BeamModel`] and [`CrossSection`] reject bad input at construction
//! - **Stateless**: Pure functions from an immutable model to an immutable result
//! - **Deterministic**: Loads are stored in a total order, so results are bit-reproducible
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze, BeamModel, CrossSection, PointLoad};
//!
//! let section = CrossSection::new(6.0, 10.0)?;
//! let model = BeamModel::new(10.0, section, 200_000.0, [PointLoad::new(2.0, 10.0)])?;
//!
//! let results = analyze(&model)?;
//! assert_eq!(results.max_bending_moment, 80.0);
//! assert_eq!(results.max_shear_force, 10.0);
//! # Ok::<(), beam_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Raw [`BeamInput`] and validated [`BeamModel`]
//! - [`section`] - Rectangular [`CrossSection`] and its properties
//! - [`loads`] - [`PointLoad`]
//! - [`calculations`] - Internal forces, stress, deflection, results
//! - [`equations`] - Closed-form formulas used by the calculations
//! - [`report`] - JSON report envelope
//! - [`file_io`] - Beam data readers and results writers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod model;
pub mod report;
pub mod section;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, analyze_batch, calculate, calculate_batch, BeamResults};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_beam_input, save_report_json, save_results_csv};
pub use loads::PointLoad;
pub use model::{BeamInput, BeamModel};
pub use report::AnalysisReport;
pub use section::CrossSection;

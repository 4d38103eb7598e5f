//! Batch Analysis
//!
//! Analyses share no state, so independent beams run in parallel on the
//! rayon thread pool. Output order matches input order, and one failing
//! beam never affects another.

use rayon::prelude::*;

use super::beam::{analyze, analyze_detailed, calculate, BeamAnalysis};
use super::results::BeamResults;
use crate::errors::CalcResult;
use crate::model::{BeamInput, BeamModel};

/// Analyze validated models in parallel
pub fn analyze_batch(models: &[BeamModel]) -> Vec<CalcResult<BeamResults>> {
    models.par_iter().map(analyze).collect()
}

/// Analyze validated models in parallel, keeping per-station forces
pub fn analyze_batch_detailed(models: &[BeamModel]) -> Vec<CalcResult<BeamAnalysis>> {
    models.par_iter().map(analyze_detailed).collect()
}

/// Validate and analyze raw inputs in parallel
pub fn calculate_batch(inputs: &[BeamInput]) -> Vec<CalcResult<BeamResults>> {
    inputs.par_iter().map(calculate).collect()
}

//! # Analysis Report
//!
//! The JSON envelope written for one analyzed beam.
//!
//! ```text
//! AnalysisReport
//! ├── meta: ReportMetadata (schema version, label, source file, timestamp)
//! ├── results: BeamResults
//! └── stations: Option<Vec<StationForces>> (only when requested)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{BeamAnalysis, BeamResults, StationForces};

/// Current schema version for report files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Report metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Schema version of this report
    pub version: String,

    /// Beam label
    pub label: String,

    /// Input file the beam was read from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// When the report was generated
    pub generated: DateTime<Utc>,
}

/// One beam's results, ready to serialize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub meta: ReportMetadata,

    pub results: BeamResults,

    /// Per-station moment and shear
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stations: Option<Vec<StationForces>>,
}

impl AnalysisReport {
    /// Build a report stamped with the current time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::calculations::analyze_detailed;
    /// use beam_core::model::BeamInput;
    /// use beam_core::report::AnalysisReport;
    ///
    /// let input = BeamInput {
    ///     label: "B-1".to_string(),
    ///     length: 4.0,
    ///     width: 1.0,
    ///     height: 2.0,
    ///     elastic_modulus: 100.0,
    ///     loads: Vec::new(),
    /// };
    /// let analysis = analyze_detailed(&input.to_model().unwrap()).unwrap();
    ///
    /// let report = AnalysisReport::new(&input.label, &analysis).with_source("b1.csv");
    /// assert_eq!(report.meta.label, "B-1");
    /// assert!(report.stations.is_none());
    /// ```
    pub fn new(label: impl Into<String>, analysis: &BeamAnalysis) -> Self {
        AnalysisReport {
            meta: ReportMetadata {
                version: SCHEMA_VERSION.to_string(),
                label: label.into(),
                source: None,
                generated: Utc::now(),
            },
            results: analysis.results,
            stations: None,
        }
    }

    /// Record the input file (builder pattern)
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.meta.source = Some(source.into());
        self
    }

    /// Include per-station forces from the analysis (builder pattern)
    pub fn with_stations(mut self, analysis: &BeamAnalysis) -> Self {
        self.stations = Some(analysis.forces.stations.clone());
        self
    }
}

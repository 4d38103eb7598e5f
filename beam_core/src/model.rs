//! # Beam Model
//!
//! [`BeamInput`] is the raw, JSON-friendly description of a beam as it comes
//! from a file or an API call. [`BeamModel`] is the validated, immutable form
//! the analysis runs on. All validation happens in [`BeamModel::new`]; once a
//! model exists, every analysis step can trust its invariants:
//!
//! - `length > 0` and finite
//! - `elastic_modulus > 0` and finite
//! - every load has a finite magnitude and `0 ≤ position ≤ length`
//! - loads are stored in ascending position order (ties by magnitude)

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::PointLoad;
use crate::section::CrossSection;

/// Input parameters for one beam.
///
/// Any consistent unit system works (e.g. N, mm, MPa); results come out in
/// the same system.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "length": 10.0,
///   "width": 0.1,
///   "height": 0.2,
///   "elastic_modulus": 200000000000.0,
///   "loads": [
///     { "position": 2.0, "magnitude": 1000.0 },
///     { "position": 6.5, "magnitude": -250.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    /// Beam length
    pub length: f64,

    /// Section width
    pub width: f64,

    /// Section height
    pub height: f64,

    /// Young's modulus of the beam material
    pub elastic_modulus: f64,

    /// Point loads, in any order
    #[serde(default)]
    pub loads: Vec<PointLoad>,
}

impl BeamInput {
    /// Validate and convert into an immutable [`BeamModel`]
    pub fn to_model(&self) -> CalcResult<BeamModel> {
        let section = CrossSection::new(self.width, self.height)?;
        BeamModel::new(self.length, section, self.elastic_modulus, self.loads.iter().copied())
    }
}

/// Validated, immutable beam: geometry, material and loads.
///
/// The model owns a private copy of its loads; nothing outside can reorder
/// or mutate them after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamModel {
    length: f64,
    section: CrossSection,
    elastic_modulus: f64,
    loads: Vec<PointLoad>,
}

impl BeamModel {
    /// Build a model, validating every input.
    ///
    /// # Errors
    ///
    /// - [`CalcError::InvalidGeometry`] if `length` is not positive and finite
    /// - [`CalcError::InvalidInput`] if `elastic_modulus` is not positive and
    ///   finite, or a load magnitude is not finite
    /// - [`CalcError::OutOfRangeLoad`] if a load lies outside `[0, length]`;
    ///   `index` is the load's position in the supplied sequence
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::loads::PointLoad;
    /// use beam_core::model::BeamModel;
    /// use beam_core::section::CrossSection;
    ///
    /// let section = CrossSection::new(0.1, 0.2).unwrap();
    /// let model = BeamModel::new(
    ///     10.0,
    ///     section,
    ///     200e9,
    ///     [PointLoad::new(7.0, 500.0), PointLoad::new(2.0, 1000.0)],
    /// )
    /// .unwrap();
    ///
    /// // Stored in ascending position order
    /// assert_eq!(model.loads()[0].position, 2.0);
    ///
    /// let err = BeamModel::new(10.0, section, 200e9, [PointLoad::new(10.5, 1.0)]).unwrap_err();
    /// assert_eq!(err.error_code(), "OUT_OF_RANGE_LOAD");
    /// ```
    pub fn new(
        length: f64,
        section: CrossSection,
        elastic_modulus: f64,
        loads: impl IntoIterator<Item = PointLoad>,
    ) -> CalcResult<Self> {
        if !length.is_finite() || length <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "length",
                length.to_string(),
                "Beam length must be positive and finite",
            ));
        }
        if !elastic_modulus.is_finite() || elastic_modulus <= 0.0 {
            return Err(CalcError::invalid_input(
                "elastic_modulus",
                elastic_modulus.to_string(),
                "Elastic modulus must be positive and finite",
            ));
        }

        let mut stored = Vec::new();
        for (index, load) in loads.into_iter().enumerate() {
            // NaN positions fail this check as well
            if !(0.0..=length).contains(&load.position) {
                return Err(CalcError::out_of_range_load(index, load.position, length));
            }
            if !load.magnitude.is_finite() {
                return Err(CalcError::invalid_input(
                    format!("loads[{}].magnitude", index),
                    load.magnitude.to_string(),
                    "Load magnitude must be finite",
                ));
            }
            stored.push(load);
        }
        stored.sort_by(PointLoad::station_order);

        Ok(Self {
            length,
            section,
            elastic_modulus,
            loads: stored,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn section(&self) -> &CrossSection {
        &self.section
    }

    pub fn elastic_modulus(&self) -> f64 {
        self.elastic_modulus
    }

    /// Loads in ascending position order
    pub fn loads(&self) -> &[PointLoad] {
        &self.loads
    }

    pub fn load_count(&self) -> usize {
        self.loads.len()
    }
}

impl TryFrom<&BeamInput> for BeamModel {
    type Error = CalcError;

    fn try_from(input: &BeamInput) -> CalcResult<Self> {
        input.to_model()
    }
}

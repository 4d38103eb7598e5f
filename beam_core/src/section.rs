//! # Rectangular Cross-Section
//!
//! A validated width/height pair and the section properties derived from it.
//! Validation happens once, in [`CrossSection::new`]; every later formula can
//! assume positive, finite dimensions.

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    rectangular_extreme_fiber, rectangular_first_moment, rectangular_moment_of_inertia,
};
use crate::errors::{CalcError, CalcResult};

/// Solid rectangular cross-section
///
/// Fields are private so a `CrossSection` can only exist with positive,
/// finite dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrossSection {
    width: f64,
    height: f64,
}

/// Derived properties of a [`CrossSection`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Moment of inertia I = bh³/12
    pub moment_of_inertia: f64,

    /// Distance from neutral axis to extreme fiber, yMax = h/2
    pub y_max: f64,

    /// First moment of area of the half-section, Q = bh²/8
    pub first_moment: f64,

    /// Width at the neutral axis (the `b` in τ = VQ/(Ib))
    pub width: f64,
}

impl CrossSection {
    /// Create a cross-section, rejecting non-positive or non-finite dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::section::CrossSection;
    ///
    /// let section = CrossSection::new(50.0, 100.0).unwrap();
    /// assert_eq!(section.properties().y_max, 50.0);
    ///
    /// assert!(CrossSection::new(0.0, 100.0).is_err());
    /// ```
    pub fn new(width: f64, height: f64) -> CalcResult<Self> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Moment of inertia about the neutral axis
    pub fn moment_of_inertia(&self) -> f64 {
        rectangular_moment_of_inertia(self.width, self.height)
    }

    /// Extreme fiber distance
    pub fn y_max(&self) -> f64 {
        rectangular_extreme_fiber(self.height)
    }

    /// First moment of area about the neutral axis
    pub fn first_moment(&self) -> f64 {
        rectangular_first_moment(self.width, self.height)
    }

    /// All derived properties at once
    pub fn properties(&self) -> SectionProperties {
        SectionProperties {
            moment_of_inertia: self.moment_of_inertia(),
            y_max: self.y_max(),
            first_moment: self.first_moment(),
            width: self.width,
        }
    }
}

fn check_dimension(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_geometry(
            field,
            value.to_string(),
            "Section dimensions must be positive and finite",
        ));
    }
    Ok(())
}

// Deserialize through `new` so a section read from JSON is validated too.
impl<'de> Deserialize<'de> for CrossSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            width: f64,
            height: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        CrossSection::new(raw.width, raw.height).map_err(serde::de::Error::custom)
    }
}

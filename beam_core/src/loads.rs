//! Point Loads
//!
//! A point load is a transverse force concentrated at one position along the
//! beam. Position is measured from the left end; the range check against the
//! beam length happens when a [`crate::model::BeamModel`] is built, since a
//! load on its own does not know the beam it belongs to.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single transverse point load
///
/// ## JSON Example
///
/// ```json
/// { "position": 2.5, "magnitude": -1200.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Distance from the left end of the beam
    pub position: f64,

    /// Signed load magnitude (N); sign convention is caller-defined
    pub magnitude: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(position: f64, magnitude: f64) -> Self {
        Self {
            position,
            magnitude,
        }
    }

    /// Total order used to store loads: by position, ties by magnitude.
    ///
    /// Uses `f64::total_cmp`, so the resulting order depends only on the
    /// set of loads, not on the order they were supplied in.
    pub fn station_order(&self, other: &Self) -> Ordering {
        self.position
            .total_cmp(&other.position)
            .then(self.magnitude.total_cmp(&other.magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_load() {
        let load = PointLoad::new(6.0, 2500.0);
        assert_eq!(load.position, 6.0);
        assert_eq!(load.magnitude, 2500.0);
    }

    #[test]
    fn test_station_order_breaks_ties_by_magnitude() {
        let mut loads = vec![
            PointLoad::new(3.0, 5.0),
            PointLoad::new(1.0, 7.0),
            PointLoad::new(3.0, -2.0),
        ];
        loads.sort_by(PointLoad::station_order);
        assert_eq!(
            loads,
            vec![
                PointLoad::new(1.0, 7.0),
                PointLoad::new(3.0, -2.0),
                PointLoad::new(3.0, 5.0),
            ]
        );
    }

    #[test]
    fn test_load_serialization() {
        let load = PointLoad::new(2.5, -1200.0);
        let json = serde_json::to_string(&load).unwrap();
        assert_eq!(json, r#"{"position":2.5,"magnitude":-1200.0}"#);
        let roundtrip: PointLoad = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, load);
    }
}

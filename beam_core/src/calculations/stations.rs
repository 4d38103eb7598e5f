//! Candidate Stations
//!
//! With point loads only, moment and shear along the beam are piecewise
//! linear (moment) or piecewise constant (shear), with breaks exactly at the
//! load positions. Their extrema over `[0, L]` therefore occur at a load
//! position or an end of the beam, and evaluating those stations is exact.
//!
//! Supporting distributed loads would require adding the interior stations
//! where their moment curve has a local extremum.

use serde::Serialize;

use crate::model::BeamModel;

/// Sorted, deduplicated positions `{0} ∪ {load positions} ∪ {L}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSet {
    positions: Vec<f64>,
}

impl StationSet {
    /// Stations for a validated model.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::calculations::stations::StationSet;
    /// use beam_core::loads::PointLoad;
    /// use beam_core::model::BeamModel;
    /// use beam_core::section::CrossSection;
    ///
    /// let section = CrossSection::new(1.0, 1.0).unwrap();
    /// let model = BeamModel::new(
    ///     8.0,
    ///     section,
    ///     1.0,
    ///     [PointLoad::new(3.0, 1.0), PointLoad::new(0.0, 1.0), PointLoad::new(3.0, 2.0)],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(StationSet::for_model(&model).positions(), &[0.0, 3.0, 8.0]);
    /// ```
    pub fn for_model(model: &BeamModel) -> Self {
        Self::from_positions(
            model.length(),
            model.loads().iter().map(|l| l.position),
        )
    }

    /// Stations for a beam of `length` with loads at `load_positions`
    pub fn from_positions(length: f64, load_positions: impl IntoIterator<Item = f64>) -> Self {
        let mut positions = vec![0.0];
        positions.extend(load_positions);
        positions.push(length);
        positions.sort_by(f64::total_cmp);
        positions.dedup();
        Self { positions }
    }

    /// Positions in ascending order
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.positions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_loads_gives_both_ends() {
        let s = StationSet::from_positions(5.0, Vec::<f64>::new());
        assert_eq!(s.positions(), &[0.0, 5.0]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_stations_sorted_and_unique() {
        let s = StationSet::from_positions(10.0, [7.0, 2.0, 10.0, 2.0]);
        assert_eq!(s.positions(), &[0.0, 2.0, 7.0, 10.0]);
    }
}

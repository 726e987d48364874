use crate::entities::Plate;
use crate::util::PlateConfig;
use crate::{PlateError, Result};

/// Search objective minimized by the optimizers, see [`Solution::cost`].
pub type Cost = i64;

/// An ordered sequence of plates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub plates: Vec<Plate>,
}

impl Solution {
    pub fn new(plates: Vec<Plate>) -> Self {
        Solution { plates }
    }

    pub fn n_plates(&self) -> usize {
        self.plates.len()
    }

    pub fn n_parts(&self) -> usize {
        self.plates.iter().map(|p| p.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    /// Search objective: `n_plates * plate_size² - n_parts`.
    ///
    /// This is a proxy, not the wasted area: every plate is charged in full and the number of
    /// placed parts (not their area) is subtracted. Lower is better.
    pub fn cost(&self, config: &PlateConfig) -> Cost {
        let total_area = self.n_plates() as u64 * config.plate_area();
        total_area as Cost - self.n_parts() as Cost
    }

    /// Total area covered by the footprints of all placed parts
    pub fn placed_area(&self) -> u64 {
        self.plates.iter().map(|p| p.placed_area()).sum()
    }

    /// Packed-area percentage over all plates, only meant for reporting.
    /// Lies in `[0, 100]` for solutions without overlapping parts.
    pub fn utilization(&self, config: &PlateConfig) -> Result<f64> {
        if self.is_empty() {
            return Err(PlateError::InvalidInput(
                "utilization of a solution without plates is undefined".to_string(),
            ));
        }
        let total_plate_area = self.n_plates() as u64 * config.plate_area();
        Ok(100.0 * self.placed_area() as f64 / total_plate_area as f64)
    }
}

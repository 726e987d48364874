use serde::{Deserialize, Serialize};

/// Geometry of the plates and the clearances required around placed parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateConfig {
    /// Side length of the square plates
    pub plate_size: u32,
    /// Minimum clearance between a part and the plate edge, or between two parts
    pub buffer: u32,
    /// Spacing between consecutively placed parts along the packing direction
    pub separation: u32,
}

impl PlateConfig {
    pub fn plate_area(&self) -> u64 {
        self.plate_size as u64 * self.plate_size as u64
    }

    /// Largest footprint side that still fits on an empty plate
    pub fn max_part_side(&self) -> u32 {
        self.plate_size.saturating_sub(2 * self.buffer)
    }
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            plate_size: 500,
            buffer: 5,
            separation: 10,
        }
    }
}

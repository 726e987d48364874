use crate::constraints;
use crate::entities::{PlacedPart, TimeBucket};

/// A plate and the parts placed on it, in placement order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plate {
    pub parts: Vec<PlacedPart>,
}

impl Plate {
    pub fn new(parts: Vec<PlacedPart>) -> Self {
        Plate { parts }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The first placed part determines the time bucket of the plate
    pub fn first(&self) -> Option<&PlacedPart> {
        self.parts.first()
    }

    pub fn bucket(&self) -> Option<TimeBucket> {
        self.first().map(|p| p.bucket())
    }

    pub fn push(&mut self, part: PlacedPart) {
        self.parts.push(part);
    }

    /// Whether `part` can be added without overlapping any part already on the plate
    pub fn fits(&self, part: &PlacedPart, buffer: u32) -> bool {
        constraints::fits(self, part, buffer)
    }

    pub fn placed_area(&self) -> u64 {
        self.parts.iter().map(|p| p.area()).sum()
    }
}

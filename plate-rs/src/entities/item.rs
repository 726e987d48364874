use crate::entities::TimeBucket;
use jiff::civil::DateTime;

/// An ordered part type, of which `quantity` units have to be placed on plates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: usize,
    pub name: String,
    /// Smallest of the first two declared dimensions
    pub width: u32,
    /// Largest of the first two declared dimensions
    pub height: u32,
    /// Third declared dimension, carried along but never used for placement
    pub depth: u32,
    pub quantity: usize,
    pub order_time: DateTime,
}

impl Item {
    /// Creates an item from its declared `[d0, d1, d2]` dimensions.
    /// The footprint on a plate is the ascending-sorted pair `(d0, d1)`.
    pub fn new(
        id: usize,
        name: String,
        dimensions: [u32; 3],
        quantity: usize,
        order_time: DateTime,
    ) -> Self {
        let [d0, d1, depth] = dimensions;
        Item {
            id,
            name,
            width: d0.min(d1),
            height: d0.max(d1),
            depth,
            quantity,
            order_time,
        }
    }

    pub fn bucket(&self) -> TimeBucket {
        TimeBucket::of(&self.order_time)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

use crate::entities::{Item, TimeBucket};
use crate::geometry::Rect;
use jiff::civil::DateTime;

/// A single physical unit of an [`Item`] at a position on a plate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedPart {
    pub item_id: usize,
    pub order_time: DateTime,
    /// Area occupied on the plate, anchored at the placement position
    pub footprint: Rect,
}

impl PlacedPart {
    pub fn new(item: &Item, x: u32, y: u32) -> Self {
        PlacedPart {
            item_id: item.id,
            order_time: item.order_time,
            footprint: Rect::new(x, y, item.width, item.height),
        }
    }

    pub fn x(&self) -> u32 {
        self.footprint.x_min
    }

    pub fn y(&self) -> u32 {
        self.footprint.y_min
    }

    pub fn bucket(&self) -> TimeBucket {
        TimeBucket::of(&self.order_time)
    }

    pub fn area(&self) -> u64 {
        self.footprint.area()
    }
}

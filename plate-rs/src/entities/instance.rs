use crate::entities::{Item, TimeBucket};
use crate::util::PlateConfig;
use crate::{PlateError, Result};
use itertools::Itertools;

/// The static (unmodifiable) set of orders to be packed.
/// Items are kept sorted ascending by order time and their ids match their index.
#[derive(Clone, Debug)]
pub struct Instance {
    items: Vec<Item>,
}

impl Instance {
    pub fn new(items: Vec<Item>) -> Self {
        assert!(
            items.iter().enumerate().all(|(i, item)| item.id == i),
            "All items should have consecutive IDs starting from 0. IDs: {:?}",
            items.iter().map(|item| item.id).collect_vec()
        );
        assert!(
            items
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.order_time <= b.order_time),
            "items should be sorted by order time"
        );
        Self { items }
    }

    /// Verifies that every item can be placed on an empty plate.
    pub fn validate(&self, config: &PlateConfig) -> Result<()> {
        let max_side = config.max_part_side();
        match self
            .items
            .iter()
            .find(|item| item.width > max_side || item.height > max_side)
        {
            Some(item) => Err(PlateError::InvalidInput(format!(
                "item {} ({}x{}) does not fit on a {}x{} plate with a buffer of {}",
                item.name, item.width, item.height, config.plate_size, config.plate_size, config.buffer
            ))),
            None => Ok(()),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    /// Items ordered within `bucket`, in order time order
    pub fn items_in(&self, bucket: TimeBucket) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.bucket() == bucket)
    }

    /// Total number of physical parts to be placed
    pub fn total_part_qty(&self) -> usize {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

use log::debug;
use plate_rs::constraints;
use plate_rs::entities::{Item, PlacedPart, Plate, Solution};
use plate_rs::util::{PlateConfig, assertions};

/// Greedy left-to-right, top-to-bottom shelf packer.
///
/// Units are placed in the order of the items (expected to be sorted by order time).
/// A new plate is opened when the next unit no longer fits vertically or when it belongs
/// to another time bucket than the first part of the current plate.
/// It never looks back, so its quality is the bar the optimizers have to clear.
pub struct ShelfBuilder {
    config: PlateConfig,
    plates: Vec<Plate>,
    current: Plate,
    x: u32,
    y: u32,
    /// Height of the tallest part on the current shelf
    shelf_height: u32,
}

impl ShelfBuilder {
    pub fn new(config: PlateConfig) -> Self {
        Self {
            config,
            plates: vec![],
            current: Plate::default(),
            x: config.buffer,
            y: config.buffer,
            shelf_height: 0,
        }
    }

    /// Places every unit of every item and returns the resulting solution.
    pub fn build<'a>(mut self, items: impl IntoIterator<Item = &'a Item>) -> Solution {
        for item in items {
            for _ in 0..item.quantity {
                self.place(item);
            }
        }
        self.close_plate();

        let solution = Solution::new(self.plates);
        debug_assert!(assertions::plates_are_single_bucket(&solution));
        debug_assert!(
            self.config.separation < self.config.buffer
                || assertions::solution_is_overlap_free(&solution, self.config.buffer)
        );

        debug!(
            "[BASE] {} parts on {} plates",
            solution.n_parts(),
            solution.n_plates()
        );
        solution
    }

    fn place(&mut self, item: &Item) {
        let PlateConfig {
            plate_size,
            buffer,
            separation,
        } = self.config;
        let (width, height) = (item.width, item.height);

        if self.x + width + buffer > plate_size {
            //wrap to the next shelf
            self.x = buffer;
            self.y += self.shelf_height + separation;
            self.shelf_height = 0;
        }

        if self.y + height + buffer > plate_size {
            self.close_plate();
        }

        let bucket_changed = self
            .current
            .first()
            .is_some_and(|first| !constraints::compatible(&first.order_time, &item.order_time));
        if bucket_changed {
            self.close_plate();
        }

        self.current.push(PlacedPart::new(item, self.x, self.y));
        self.x += width + separation;
        self.shelf_height = self.shelf_height.max(height);
    }

    /// Stores the current plate (if it holds any parts) and resets the cursor.
    fn close_plate(&mut self) {
        let plate = std::mem::take(&mut self.current);
        if !plate.is_empty() {
            self.plates.push(plate);
        }
        self.x = self.config.buffer;
        self.y = self.config.buffer;
        self.shelf_height = 0;
    }
}

/// Builds the baseline solution for `items` (expected sorted by order time).
pub fn baseline_solution<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    config: &PlateConfig,
) -> Solution {
    ShelfBuilder::new(*config).build(items)
}

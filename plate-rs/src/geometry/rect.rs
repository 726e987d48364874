use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on a plate, in integer plate units.
/// `x_min`/`y_min` is the placement position, the extents are the footprint of the part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    pub fn width(&self) -> u32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> u32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns true unless `self` lies entirely left of, right of, above or below `other`
    /// once the gap between them is required to be at least `buffer`.
    #[inline(always)]
    pub fn collides_with_buffered(&self, other: &Rect, buffer: u32) -> bool {
        let separated = self.x_max + buffer <= other.x_min
            || self.x_min >= other.x_max + buffer
            || self.y_max + buffer <= other.y_min
            || self.y_min >= other.y_max + buffer;
        !separated
    }

    /// Whether `self` keeps at least `buffer` clearance to all edges of a square plate.
    pub fn inside_plate(&self, plate_size: u32, buffer: u32) -> bool {
        self.x_min >= buffer
            && self.y_min >= buffer
            && self.x_max + buffer <= plate_size
            && self.y_max + buffer <= plate_size
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;
    use test_case::test_case;

    #[test_case(Rect::new(5, 5, 100, 100), Rect::new(115, 5, 100, 100), false; "shelf neighbours")]
    #[test_case(Rect::new(5, 5, 100, 100), Rect::new(110, 5, 100, 100), false; "gap equal to buffer")]
    #[test_case(Rect::new(5, 5, 100, 100), Rect::new(109, 5, 100, 100), true; "gap below buffer")]
    #[test_case(Rect::new(5, 5, 100, 100), Rect::new(5, 110, 100, 100), false; "stacked rows")]
    #[test_case(Rect::new(5, 5, 100, 100), Rect::new(50, 50, 10, 10), true; "contained")]
    #[test_case(Rect::new(200, 200, 10, 10), Rect::new(5, 5, 100, 100), false; "far away")]
    fn buffered_collision(a: Rect, b: Rect, expected: bool) {
        assert_eq!(a.collides_with_buffered(&b, 5), expected);
        assert_eq!(b.collides_with_buffered(&a, 5), expected);
    }

    #[test]
    fn plate_containment() {
        assert!(Rect::new(5, 5, 490, 490).inside_plate(500, 5));
        assert!(!Rect::new(5, 5, 491, 10).inside_plate(500, 5));
        assert!(!Rect::new(4, 5, 10, 10).inside_plate(500, 5));
    }
}

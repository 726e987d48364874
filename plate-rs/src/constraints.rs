use crate::entities::{PlacedPart, Plate, TimeBucket};
use jiff::civil::DateTime;

/// Two placed parts conflict unless one lies entirely left of, right of, above or below the
/// other with at least `buffer` clearance in between.
pub fn overlaps(a: &PlacedPart, b: &PlacedPart, buffer: u32) -> bool {
    a.footprint.collides_with_buffered(&b.footprint, buffer)
}

/// Two order times are compatible iff they fall in the same [`TimeBucket`].
pub fn compatible(t1: &DateTime, t2: &DateTime) -> bool {
    TimeBucket::of(t1) == TimeBucket::of(t2)
}

/// Whether `part` overlaps none of the parts on `plate`.
/// Containment within the plate boundary is the caller's responsibility.
pub fn fits(plate: &Plate, part: &PlacedPart, buffer: u32) -> bool {
    plate.parts.iter().all(|other| !overlaps(part, other, buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;
    use jiff::civil::date;
    use test_case::test_case;

    fn item(id: usize, w: u32, h: u32, hour: i8) -> Item {
        let t = date(2024, 1, 1).at(hour, 0, 0, 0);
        Item::new(id, format!("item_{id}"), [w, h, 10], 1, t)
    }

    #[test_case(8; "morning")]
    #[test_case(12; "noon")]
    #[test_case(23; "evening")]
    fn compatibility_is_reflexive(hour: i8) {
        let t = date(2024, 3, 15).at(hour, 30, 0, 0);
        assert!(compatible(&t, &t));
    }

    #[test]
    fn different_buckets_are_incompatible() {
        let morning = date(2024, 1, 1).at(8, 0, 0, 0);
        let afternoon = date(2024, 1, 1).at(14, 0, 0, 0);
        let next_morning = date(2024, 1, 2).at(11, 0, 0, 0);
        assert!(!compatible(&morning, &afternoon));
        assert!(!compatible(&afternoon, &morning));
        assert!(compatible(&morning, &next_morning));
    }

    #[test]
    fn fits_checks_every_part_on_the_plate() {
        let a = item(0, 100, 100, 8);
        let plate = Plate::new(vec![PlacedPart::new(&a, 5, 5), PlacedPart::new(&a, 115, 5)]);

        assert!(fits(&plate, &PlacedPart::new(&a, 225, 5), 5));
        assert!(fits(&plate, &PlacedPart::new(&a, 5, 115), 5));
        assert!(!fits(&plate, &PlacedPart::new(&a, 200, 5), 5));
        assert!(!fits(&plate, &PlacedPart::new(&a, 60, 60), 5));
        assert!(fits(&Plate::default(), &PlacedPart::new(&a, 60, 60), 5));
    }

    #[test]
    fn overlap_ignores_item_identity() {
        let a = item(0, 50, 80, 8);
        let b = item(1, 50, 80, 15);
        assert!(overlaps(&PlacedPart::new(&a, 5, 5), &PlacedPart::new(&b, 5, 5), 5));
        assert!(!overlaps(&PlacedPart::new(&a, 5, 5), &PlacedPart::new(&b, 65, 5), 5));
    }
}

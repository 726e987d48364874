use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Half-day window an order belongs to.
/// Parts from different windows are never placed on the same plate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeBucket {
    /// 00:00:00 up to and including 11:59:59
    Morning,
    /// 12:00:00 up to and including 23:59:59
    Afternoon,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 2] = [TimeBucket::Morning, TimeBucket::Afternoon];

    pub fn of(order_time: &DateTime) -> Self {
        match order_time.hour() < 12 {
            true => TimeBucket::Morning,
            false => TimeBucket::Afternoon,
        }
    }
}

impl Display for TimeBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeBucket::Morning => write!(f, "morning"),
            TimeBucket::Afternoon => write!(f, "afternoon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeBucket;
    use jiff::civil::date;
    use test_case::test_case;

    #[test_case(0, 0, 0, TimeBucket::Morning; "midnight")]
    #[test_case(8, 0, 0, TimeBucket::Morning; "eight")]
    #[test_case(11, 59, 59, TimeBucket::Morning; "last morning second")]
    #[test_case(12, 0, 0, TimeBucket::Afternoon; "noon")]
    #[test_case(14, 0, 0, TimeBucket::Afternoon; "two pm")]
    #[test_case(23, 59, 59, TimeBucket::Afternoon; "last second")]
    fn bucket_boundaries(hour: i8, minute: i8, second: i8, expected: TimeBucket) {
        let t = date(2024, 1, 1).at(hour, minute, second, 0);
        assert_eq!(TimeBucket::of(&t), expected);
    }
}

mod instance;
mod item;
mod placed_part;
mod plate;
mod solution;
mod time_bucket;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use placed_part::PlacedPart;

#[doc(inline)]
pub use plate::Plate;

#[doc(inline)]
pub use solution::Cost;

#[doc(inline)]
pub use solution::Solution;

#[doc(inline)]
pub use time_bucket::TimeBucket;

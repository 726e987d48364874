mod export;
mod import;

/// External (serializable) representations of orders and solutions.
pub mod ext_repr;

#[doc(inline)]
pub use export::export;

#[doc(inline)]
pub use export::write_csv;

#[doc(inline)]
pub use import::import;

#[doc(inline)]
pub use import::parse_order;

#[doc(inline)]
pub use import::read_orders;

/// Format of the order timestamps, both in the input and the output
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Various checks to verify the correctness of solutions, used in tests and `debug_assert!` blocks
pub mod assertions;

/// Configuration of the plate geometry
pub mod config;

#[doc(inline)]
pub use config::PlateConfig;

//! Core library for packing time-bucketed parts onto fixed-size square plates.

/// Placement constraints: buffered overlap, time-bucket compatibility and plate fit
pub mod constraints;

/// Entities to model the plate packing problem
pub mod entities;

/// Axis-aligned geometry used for footprints on a plate
pub mod geometry;

/// Importing order lists into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::PlateError;

#[doc(inline)]
pub use error::Result;

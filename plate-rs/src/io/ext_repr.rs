use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// A single row of the order list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtOrder {
    pub name: String,
    /// Declared dimensions, `"<d0>x<d1>x<d2>"` in the order list
    pub dimensions: [u32; 3],
    /// Number of units to produce
    pub quantity: usize,
    pub order_time: DateTime,
}

/// A part as written to the output, one per placed unit
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtPlacedPart {
    pub part_name: String,
    /// Formatted as `YYYY-MM-DD HH:MM:SS`
    pub order_time: String,
    pub x_position: u32,
    pub y_position: u32,
}

/// A plate of the solution
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtPlate {
    /// 1-based position of the plate in the solution
    pub plate_number: usize,
    pub parts: Vec<ExtPlacedPart>,
}

/// A complete solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Search objective of the solution (lower is better)
    pub cost: i64,
    /// Packed-area percentage, undefined for a solution without plates
    pub utilization: Option<f64>,
    pub plates: Vec<ExtPlate>,
}

use crate::config::PlateOptConfig;
use crate::report::ImprovementReport;
use plate_rs::io::ext_repr::ExtSolution;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct PlateOptOutput {
    /// Name of the algorithm that produced the solution
    pub algorithm: String,
    pub solution: ExtSolution,
    pub report: ImprovementReport,
    pub config: PlateOptConfig,
}

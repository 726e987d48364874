use log::info;
use plate_rs::entities::Solution;
use plate_rs::util::PlateConfig;
use plate_rs::{PlateError, Result};
use serde::{Deserialize, Serialize};

/// Comparison of an optimized solution against the baseline, in packed-area terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementReport {
    pub baseline_plates: usize,
    pub optimized_plates: usize,
    /// Packed-area percentage of the baseline
    pub baseline_utilization: f64,
    /// Packed-area percentage of the optimized solution
    pub optimized_utilization: f64,
    /// Relative change of the utilization: `(optimized - baseline) / baseline * 100`
    pub efficiency_improvement_pct: f64,
}

impl ImprovementReport {
    /// Fails with [`PlateError::InvalidInput`] if either solution has no plates
    /// or the baseline covers no area at all.
    pub fn new(baseline: &Solution, optimized: &Solution, config: &PlateConfig) -> Result<Self> {
        let baseline_utilization = baseline.utilization(config)?;
        let optimized_utilization = optimized.utilization(config)?;
        if baseline_utilization <= 0.0 {
            return Err(PlateError::InvalidInput(
                "baseline covers no area, relative improvement is undefined".to_string(),
            ));
        }

        Ok(Self {
            baseline_plates: baseline.n_plates(),
            optimized_plates: optimized.n_plates(),
            baseline_utilization,
            optimized_utilization,
            efficiency_improvement_pct: (optimized_utilization - baseline_utilization)
                / baseline_utilization
                * 100.0,
        })
    }

    pub fn log(&self, tag: &str) {
        info!(
            "[{tag}] plates used: {} (baseline: {})",
            self.optimized_plates, self.baseline_plates
        );
        info!(
            "[{tag}] utilization: {:.3}% (baseline: {:.3}%)",
            self.optimized_utilization, self.baseline_utilization
        );
        info!(
            "[{tag}] efficiency improvement: {:.3}%",
            self.efficiency_improvement_pct
        );
    }
}

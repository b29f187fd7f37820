//! Comparison against the global average.

use crate::parameters::GLOBAL_AVERAGE_KG_PER_DAY;
use serde::Serialize;

/// A daily total set against [`GLOBAL_AVERAGE_KG_PER_DAY`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageComparison {
    pub total: f64,
    pub average: f64,
    /// `total - average`, negative when below the average.
    pub delta_kg: f64,
    pub is_above_average: bool,
}

impl AverageComparison {
    pub fn is_below_average(&self) -> bool {
        self.delta_kg < 0.0
    }
}

/// Compare a daily total with the global average.
pub fn compare_to_average(total: f64) -> AverageComparison {
    let delta_kg = total - GLOBAL_AVERAGE_KG_PER_DAY;
    AverageComparison {
        total,
        average: GLOBAL_AVERAGE_KG_PER_DAY,
        delta_kg,
        is_above_average: delta_kg > 0.0,
    }
}

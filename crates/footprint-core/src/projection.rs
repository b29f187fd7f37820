//! Projected footprint after a set of hypothetical lifestyle changes.
//!
//! The changes are fixed: halve transport (public transport or carpooling),
//! cut diet by 30% (less meat) and energy by 20% (efficiency). Lifestyle
//! emissions are left unchanged.

use crate::breakdown::EmissionsBreakdown;
use serde::Serialize;

pub const TRANSPORT_SAVINGS_RATIO: f64 = 0.5;
pub const DIET_SAVINGS_RATIO: f64 = 0.3;
pub const ENERGY_SAVINGS_RATIO: f64 = 0.2;

/// Current and projected daily totals (kg CO₂/day).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReductionProjection {
    pub current_total: f64,
    pub projected_total: f64,
    /// Reduction relative to the current total, in percent.
    ///
    /// Zero when the current total is zero.
    pub reduction_percent: f64,
}

/// Project the footprint after applying the fixed savings ratios.
pub fn project_reduction(breakdown: &EmissionsBreakdown) -> ReductionProjection {
    let savings = breakdown.transport * TRANSPORT_SAVINGS_RATIO
        + breakdown.diet * DIET_SAVINGS_RATIO
        + breakdown.energy * ENERGY_SAVINGS_RATIO;
    let projected_total = breakdown.total - savings;

    let reduction_percent = if breakdown.total > 0.0 {
        (breakdown.total - projected_total) / breakdown.total * 100.0
    } else {
        0.0
    };

    ReductionProjection {
        current_total: breakdown.total,
        projected_total,
        reduction_percent,
    }
}

//! Actionable advice derived from a breakdown.
//!
//! Rules are checked independently and in a fixed order. The final
//! above/below-average pair always contributes exactly one insight, so the
//! result is never empty.

use crate::breakdown::EmissionsBreakdown;
use crate::parameters::GLOBAL_AVERAGE_KG_PER_DAY;
use serde::Serialize;

/// Transport emissions above which public transport is suggested (kg CO₂/day).
pub const TRANSPORT_THRESHOLD: f64 = 3.0;
/// Diet emissions above which eating less meat is suggested (kg CO₂/day).
pub const DIET_THRESHOLD: f64 = 2.0;
/// Energy emissions above which efficiency measures are suggested (kg CO₂/day).
pub const ENERGY_THRESHOLD: f64 = 4.0;

/// Shown by presentation layers when there is nothing more specific to say.
pub const FALLBACK_MESSAGE: &str =
    "Your carbon footprint is already quite low! Keep up the good work.";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum InsightKind {
    Transport,
    Diet,
    Energy,
    AboveAverage,
    BelowAverage,
}

impl InsightKind {
    pub fn message(&self) -> &'static str {
        match self {
            InsightKind::Transport => {
                "Consider using public transport or carpooling to reduce your transport emissions."
            }
            InsightKind::Diet => {
                "Reducing meat consumption, especially red meat, can significantly lower your dietary carbon footprint."
            }
            InsightKind::Energy => {
                "Switch to energy-efficient appliances and consider renewable energy sources for your home."
            }
            InsightKind::AboveAverage => {
                "Your carbon footprint is above the global average. Small changes in multiple areas can make a big difference."
            }
            InsightKind::BelowAverage => {
                "Great job! Your carbon footprint is below the global average. Keep up the sustainable habits!"
            }
        }
    }

    pub fn impact_note(&self) -> &'static str {
        match self {
            InsightKind::Transport => "Could reduce transport emissions by up to 50%",
            InsightKind::Diet => "Vegetarian diet could reduce food emissions by 30-50%",
            InsightKind::Energy => "Could reduce energy emissions by 20-30%",
            InsightKind::AboveAverage => "Aim to reduce by 10-20% in the next 6 months",
            InsightKind::BelowAverage => {
                "Consider inspiring others with your eco-friendly choices"
            }
        }
    }
}

/// A single piece of advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
    pub impact_note: String,
}

impl From<InsightKind> for Insight {
    fn from(kind: InsightKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
            impact_note: kind.impact_note().to_string(),
        }
    }
}

/// Derive the ordered list of insights for a breakdown and daily total.
///
/// The total is passed separately from the breakdown so callers can ask
/// about a total other than `breakdown.total`.
pub fn derive_insights(breakdown: &EmissionsBreakdown, total: f64) -> Vec<Insight> {
    let mut kinds = Vec::with_capacity(4);

    if breakdown.transport > TRANSPORT_THRESHOLD {
        kinds.push(InsightKind::Transport);
    }
    if breakdown.diet > DIET_THRESHOLD {
        kinds.push(InsightKind::Diet);
    }
    if breakdown.energy > ENERGY_THRESHOLD {
        kinds.push(InsightKind::Energy);
    }
    if total > GLOBAL_AVERAGE_KG_PER_DAY {
        kinds.push(InsightKind::AboveAverage);
    } else {
        kinds.push(InsightKind::BelowAverage);
    }

    kinds.into_iter().map(Insight::from).collect()
}

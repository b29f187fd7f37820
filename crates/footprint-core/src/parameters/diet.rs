//! Diet parameters

use crate::kinds::MeatLevel;
use serde::{Deserialize, Serialize};

/// Daily dietary baseline before any local-food discount.
///
/// The baseline is reduced by `local_food_percent / 200`, so an entirely
/// local diet halves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietParameters {
    /// Default: 3.3 kg CO₂/day
    pub high: f64,
    /// Default: 2.2 kg CO₂/day
    pub medium: f64,
    /// Default: 1.5 kg CO₂/day
    pub low: f64,
    /// Default: 1.1 kg CO₂/day
    pub none: f64,
}

impl DietParameters {
    /// Daily baseline for a meat-consumption level (kg CO₂/day).
    pub fn baseline(&self, meat: MeatLevel) -> f64 {
        match meat {
            MeatLevel::High => self.high,
            MeatLevel::Medium => self.medium,
            MeatLevel::Low => self.low,
            MeatLevel::None => self.none,
        }
    }

    pub(crate) fn coefficients(&self) -> [(&'static str, f64); 4] {
        [
            ("diet.high", self.high),
            ("diet.medium", self.medium),
            ("diet.low", self.low),
            ("diet.none", self.none),
        ]
    }
}

impl Default for DietParameters {
    fn default() -> Self {
        Self {
            high: 3.3,
            medium: 2.2,
            low: 1.5,
            none: 1.1,
        }
    }
}

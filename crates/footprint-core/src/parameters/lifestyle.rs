//! Lifestyle parameters
//!
//! Air travel and consumer purchases.

use crate::kinds::ShoppingLevel;
use serde::{Deserialize, Serialize};

/// Parameters for flights and shopping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleParameters {
    /// Emissions per hour of flight (kg CO₂/h).
    ///
    /// Yearly flight hours are spread evenly over 365 days.
    ///
    /// Default: 90.0 kg CO₂/h
    pub flights: f64,

    /// Daily emissions from shopping habits.
    pub shopping: ShoppingParameters,
}

impl Default for LifestyleParameters {
    fn default() -> Self {
        Self {
            flights: 90.0,
            shopping: ShoppingParameters::default(),
        }
    }
}

/// Flat daily shopping emissions (kg CO₂/day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoppingParameters {
    /// Default: 10.0 kg CO₂/day
    pub high: f64,
    /// Default: 5.0 kg CO₂/day
    pub medium: f64,
    /// Default: 2.0 kg CO₂/day
    pub low: f64,
}

impl ShoppingParameters {
    /// Daily emissions for a shopping level (kg CO₂/day).
    pub fn daily(&self, shopping: ShoppingLevel) -> f64 {
        match shopping {
            ShoppingLevel::High => self.high,
            ShoppingLevel::Medium => self.medium,
            ShoppingLevel::Low => self.low,
        }
    }
}

impl Default for ShoppingParameters {
    fn default() -> Self {
        Self {
            high: 10.0,
            medium: 5.0,
            low: 2.0,
        }
    }
}

impl LifestyleParameters {
    pub(crate) fn coefficients(&self) -> [(&'static str, f64); 4] {
        [
            ("lifestyle.flights", self.flights),
            ("lifestyle.shopping.high", self.shopping.high),
            ("lifestyle.shopping.medium", self.shopping.medium),
            ("lifestyle.shopping.low", self.shopping.low),
        ]
    }
}

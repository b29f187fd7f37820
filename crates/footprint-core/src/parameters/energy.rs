//! Household energy parameters
//!
//! Grid electricity is charged per kWh. Heating is a flat daily figure that
//! depends only on the kind of heating.

use crate::kinds::HeatingKind;
use serde::{Deserialize, Serialize};

/// Parameters for home energy use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyParameters {
    /// Grid electricity intensity (kg CO₂/kWh).
    ///
    /// Monthly consumption is converted to a daily rate by dividing by 30
    /// before this factor is applied.
    ///
    /// Default: 0.5 kg CO₂/kWh (average grid)
    pub electricity: f64,

    /// Daily heating emissions by heating kind.
    pub heating: HeatingParameters,
}

impl Default for EnergyParameters {
    fn default() -> Self {
        Self {
            electricity: 0.5,
            heating: HeatingParameters::default(),
        }
    }
}

/// Flat daily heating emissions (kg CO₂/day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatingParameters {
    /// Default: 2.0 kg CO₂/day
    pub natural_gas: f64,
    /// Default: 1.5 kg CO₂/day
    pub electric: f64,
    /// Default: 0.3 kg CO₂/day
    pub renewable: f64,
}

impl HeatingParameters {
    /// Daily emissions for a heating kind (kg CO₂/day).
    pub fn daily(&self, heating: HeatingKind) -> f64 {
        match heating {
            HeatingKind::NaturalGas => self.natural_gas,
            HeatingKind::Electric => self.electric,
            HeatingKind::Renewable => self.renewable,
        }
    }
}

impl Default for HeatingParameters {
    fn default() -> Self {
        Self {
            natural_gas: 2.0,
            electric: 1.5,
            renewable: 0.3,
        }
    }
}

impl EnergyParameters {
    pub(crate) fn coefficients(&self) -> [(&'static str, f64); 4] {
        [
            ("energy.electricity", self.electricity),
            ("energy.heating.naturalGas", self.heating.natural_gas),
            ("energy.heating.electric", self.heating.electric),
            ("energy.heating.renewable", self.heating.renewable),
        ]
    }
}

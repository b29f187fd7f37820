//! Transport parameters
//!
//! Per-kilometre emission rates for the daily commute.

use crate::kinds::VehicleKind;
use serde::{Deserialize, Serialize};

/// Emission rate per kilometre travelled, by vehicle kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportParameters {
    /// Private car (kg CO₂/km).
    ///
    /// Default: 0.21 kg CO₂/km
    pub car: f64,

    /// Bus (kg CO₂/km).
    ///
    /// Default: 0.08 kg CO₂/km
    pub bus: f64,

    /// Bicycle (kg CO₂/km).
    ///
    /// Default: 0.0 kg CO₂/km
    pub bike: f64,

    /// Motorcycle (kg CO₂/km).
    ///
    /// Default: 0.11 kg CO₂/km
    pub motorcycle: f64,
}

impl TransportParameters {
    /// Emission rate for a vehicle kind (kg CO₂/km).
    pub fn rate(&self, vehicle: VehicleKind) -> f64 {
        match vehicle {
            VehicleKind::Car => self.car,
            VehicleKind::Bus => self.bus,
            VehicleKind::Bike => self.bike,
            VehicleKind::Motorcycle => self.motorcycle,
        }
    }

    pub(crate) fn coefficients(&self) -> [(&'static str, f64); 4] {
        [
            ("transport.car", self.car),
            ("transport.bus", self.bus),
            ("transport.bike", self.bike),
            ("transport.motorcycle", self.motorcycle),
        ]
    }
}

impl Default for TransportParameters {
    fn default() -> Self {
        Self {
            car: 0.21,
            bus: 0.08,
            bike: 0.0,
            motorcycle: 0.11,
        }
    }
}

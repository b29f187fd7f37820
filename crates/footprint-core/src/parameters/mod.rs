//! Emission coefficients
//!
//! This module contains the per-unit emission rates used by the calculator.
//! Each parameter struct provides defaults matching the reference table and
//! can be partially overridden from TOML:
//!
//! ```toml
//! [transport]
//! car = 0.17
//!
//! [energy.heating]
//! naturalGas = 2.4
//! ```

mod diet;
mod energy;
mod lifestyle;
mod transport;

pub use diet::DietParameters;
pub use energy::{EnergyParameters, HeatingParameters};
pub use lifestyle::{LifestyleParameters, ShoppingParameters};
pub use transport::TransportParameters;

use crate::errors::{FootprintError, FootprintResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Global average footprint (kg CO₂/day).
///
/// Roughly 6 tonnes per person per year spread over 365 days. Only used for
/// comparison, never as a calculation input.
pub const GLOBAL_AVERAGE_KG_PER_DAY: f64 = 16.4;

/// The complete set of emission coefficients.
///
/// A table is validated once when it is loaded and is not mutated afterwards;
/// the calculator only ever holds it by value and reads from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoefficientTable {
    pub transport: TransportParameters,
    pub diet: DietParameters,
    pub energy: EnergyParameters,
    pub lifestyle: LifestyleParameters,
}

impl CoefficientTable {
    /// Parse a (possibly partial) table from TOML and validate it.
    ///
    /// Keys that are not present keep their default values.
    pub fn from_toml_str(source: &str) -> FootprintResult<Self> {
        let table: Self = toml::from_str(source)?;
        table.validate()?;
        debug!(?table, "Loaded coefficient table");
        Ok(table)
    }

    /// Read and validate a table from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FootprintResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check that every coefficient is finite and non-negative.
    pub fn validate(&self) -> FootprintResult<()> {
        let coefficients = self
            .transport
            .coefficients()
            .into_iter()
            .chain(self.diet.coefficients())
            .chain(self.energy.coefficients())
            .chain(self.lifestyle.coefficients());

        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(FootprintError::InvalidCoefficient {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{HeatingKind, MeatLevel, ShoppingLevel, VehicleKind};

    #[test]
    fn test_default_table_is_valid() {
        assert!(CoefficientTable::default().validate().is_ok());
    }

    #[test]
    fn test_default_lookups() {
        let table = CoefficientTable::default();

        assert_eq!(table.transport.rate(VehicleKind::Car), 0.21);
        assert_eq!(table.transport.rate(VehicleKind::Bike), 0.0);
        assert_eq!(table.diet.baseline(MeatLevel::None), 1.1);
        assert_eq!(table.energy.heating.daily(HeatingKind::Renewable), 0.3);
        assert_eq!(table.lifestyle.shopping.daily(ShoppingLevel::High), 10.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let table = CoefficientTable::from_toml_str(
            r#"
            [transport]
            car = 0.17

            [energy.heating]
            naturalGas = 2.4
            "#,
        )
        .unwrap();

        assert_eq!(table.transport.car, 0.17);
        assert_eq!(table.transport.bus, 0.08);
        assert_eq!(table.energy.heating.natural_gas, 2.4);
        assert_eq!(table.energy.heating.electric, 1.5);
        assert_eq!(table.energy.electricity, 0.5);
        assert_eq!(table.diet, DietParameters::default());
        assert_eq!(table.lifestyle, LifestyleParameters::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        let table = CoefficientTable::from_toml_str("").unwrap();
        assert_eq!(table, CoefficientTable::default());
    }

    #[test]
    fn test_negative_coefficient_rejected() {
        let err = CoefficientTable::from_toml_str("[lifestyle]\nflights = -1.0\n").unwrap_err();
        match err {
            FootprintError::InvalidCoefficient { name, value } => {
                assert_eq!(name, "lifestyle.flights");
                assert_eq!(value, -1.0);
            }
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_coefficient_rejected() {
        let mut table = CoefficientTable::default();
        table.diet.low = f64::NAN;
        assert!(matches!(
            table.validate(),
            Err(FootprintError::InvalidCoefficient { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = CoefficientTable::from_toml_str("[transport\ncar = 1").unwrap_err();
        assert!(matches!(err, FootprintError::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip_uses_form_keys() {
        let serialised = toml::to_string(&CoefficientTable::default()).unwrap();
        assert!(serialised.contains("naturalGas = 2.0"));

        let deserialised = CoefficientTable::from_toml_str(&serialised).unwrap();
        assert_eq!(deserialised, CoefficientTable::default());
    }
}

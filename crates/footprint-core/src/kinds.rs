//! Closed selection sets offered by the input form.
//!
//! Each enumeration maps one-to-one onto a row of the coefficient table. The
//! string form of every variant is the key used by the form and by TOML
//! configuration files (`car`, `naturalGas`, ...).

use crate::errors::{FootprintError, FootprintResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mode of transport used for the daily commute.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VehicleKind {
    Car,
    Bus,
    Bike,
    Motorcycle,
}

/// How much meat the household eats.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeatLevel {
    High,
    Medium,
    Low,
    /// No meat at all. Always written `MeatLevel::None` to avoid confusion with `Option`.
    None,
}

/// Primary source of home heating.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeatingKind {
    NaturalGas,
    Electric,
    Renewable,
}

/// How much new stuff is bought.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShoppingLevel {
    High,
    Medium,
    Low,
}

/// Shared behaviour of the form selection enums.
pub trait FormKind: Copy + Sized + 'static {
    /// Name of the form field, used in error messages.
    const FIELD: &'static str;
    /// Every variant, in the order the form lists them.
    const ALL: &'static [Self];

    /// Key used by the form and configuration files.
    fn as_str(&self) -> &'static str;
}

fn parse_kind<K: FormKind>(value: &str) -> FootprintResult<K> {
    let key = value.trim();
    K::ALL
        .iter()
        .copied()
        .find(|kind| kind.as_str() == key)
        .ok_or_else(|| FootprintError::UnknownKind {
            field: K::FIELD,
            value: value.to_string(),
            expected: K::ALL
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

impl FormKind for VehicleKind {
    const FIELD: &'static str = "vehicle kind";
    const ALL: &'static [Self] = &[Self::Car, Self::Bus, Self::Bike, Self::Motorcycle];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Bike => "bike",
            Self::Motorcycle => "motorcycle",
        }
    }
}

impl FormKind for MeatLevel {
    const FIELD: &'static str = "meat level";
    const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low, Self::None];

    fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::None => "none",
        }
    }
}

impl FormKind for HeatingKind {
    const FIELD: &'static str = "heating kind";
    const ALL: &'static [Self] = &[Self::NaturalGas, Self::Electric, Self::Renewable];

    fn as_str(&self) -> &'static str {
        match self {
            Self::NaturalGas => "naturalGas",
            Self::Electric => "electric",
            Self::Renewable => "renewable",
        }
    }
}

impl FormKind for ShoppingLevel {
    const FIELD: &'static str = "shopping level";
    const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

macro_rules! impl_form_kind_traits {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $kind {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $kind {
                type Err = FootprintError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_kind(s)
                }
            }
        )+
    };
}

impl_form_kind_traits!(VehicleKind, MeatLevel, HeatingKind, ShoppingLevel);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_keys() {
        assert_eq!("car".parse::<VehicleKind>().unwrap(), VehicleKind::Car);
        assert_eq!(
            "motorcycle".parse::<VehicleKind>().unwrap(),
            VehicleKind::Motorcycle
        );
        assert_eq!("none".parse::<MeatLevel>().unwrap(), MeatLevel::None);
        assert_eq!(
            "naturalGas".parse::<HeatingKind>().unwrap(),
            HeatingKind::NaturalGas
        );
        assert_eq!("low".parse::<ShoppingLevel>().unwrap(), ShoppingLevel::Low);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" bus\n".parse::<VehicleKind>().unwrap(), VehicleKind::Bus);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "plane".parse::<VehicleKind>().unwrap_err();
        match err {
            FootprintError::UnknownKind {
                field,
                value,
                expected,
            } => {
                assert_eq!(field, "vehicle kind");
                assert_eq!(value, "plane");
                assert_eq!(expected, "car, bus, bike, motorcycle");
            }
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert!("natural_gas".parse::<HeatingKind>().is_err());
        assert!("NaturalGas".parse::<HeatingKind>().is_err());
    }

    #[test]
    fn test_display_matches_serde() {
        for kind in HeatingKind::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
        for level in MeatLevel::ALL {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
    }
}

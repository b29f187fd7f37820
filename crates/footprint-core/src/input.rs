//! Calculator input.
//!
//! [`RawUserInput`] is the untrusted form state: every field is optional and
//! numeric fields may hold arbitrary text. [`RawUserInput::parse`] is the one
//! place numeric values are coerced. Anything that does not parse to a
//! finite, non-negative number becomes 0. Selection fields are parsed
//! strictly and an unknown key is an error.
//!
//! [`UserInput`] is the validated record the calculator consumes.

use crate::errors::FootprintResult;
use crate::kinds::{HeatingKind, MeatLevel, ShoppingLevel, VehicleKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Validated lifestyle inputs.
///
/// Only built through [`RawUserInput::parse`] or in code, never deserialised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInput {
    /// One-way commute distance per day (km).
    pub commute_distance_km: f64,
    pub vehicle: VehicleKind,
    pub meat: MeatLevel,
    /// Share of food that is locally sourced, 0-100.
    pub local_food_percent: u32,
    pub electricity_kwh_per_month: f64,
    pub heating: HeatingKind,
    pub flight_hours_per_year: f64,
    pub shopping: ShoppingLevel,
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            commute_distance_km: 0.0,
            vehicle: VehicleKind::Car,
            meat: MeatLevel::Medium,
            local_food_percent: 0,
            electricity_kwh_per_month: 0.0,
            heating: HeatingKind::NaturalGas,
            flight_hours_per_year: 0.0,
            shopping: ShoppingLevel::Medium,
        }
    }
}

/// A numeric form value, either already numeric or as typed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Form state as submitted, before coercion.
///
/// Field names follow the form element ids (`commuteDistance`, `vehicleType`,
/// ...). A missing field falls back to the [`UserInput`] default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawUserInput {
    pub commute_distance: Option<RawNumber>,
    pub vehicle_type: Option<String>,
    pub meat_consumption: Option<String>,
    pub local_food: Option<RawNumber>,
    pub electricity_usage: Option<RawNumber>,
    pub heating_type: Option<String>,
    pub flight_hours: Option<RawNumber>,
    pub shopping_habits: Option<String>,
}

impl RawUserInput {
    /// Read raw input from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FootprintResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&source)?)
    }

    /// Overlay the fields set in `overrides` on top of `self`.
    pub fn merge(self, overrides: RawUserInput) -> RawUserInput {
        RawUserInput {
            commute_distance: overrides.commute_distance.or(self.commute_distance),
            vehicle_type: overrides.vehicle_type.or(self.vehicle_type),
            meat_consumption: overrides.meat_consumption.or(self.meat_consumption),
            local_food: overrides.local_food.or(self.local_food),
            electricity_usage: overrides.electricity_usage.or(self.electricity_usage),
            heating_type: overrides.heating_type.or(self.heating_type),
            flight_hours: overrides.flight_hours.or(self.flight_hours),
            shopping_habits: overrides.shopping_habits.or(self.shopping_habits),
        }
    }

    /// Coerce numeric fields and parse selection fields.
    pub fn parse(&self) -> FootprintResult<UserInput> {
        let defaults = UserInput::default();

        Ok(UserInput {
            commute_distance_km: self.commute_distance.as_ref().map_or(0.0, coerce_number),
            vehicle: parse_or(&self.vehicle_type, defaults.vehicle)?,
            meat: parse_or(&self.meat_consumption, defaults.meat)?,
            local_food_percent: self.local_food.as_ref().map_or(0, coerce_percent_number),
            electricity_kwh_per_month: self.electricity_usage.as_ref().map_or(0.0, coerce_number),
            heating: parse_or(&self.heating_type, defaults.heating)?,
            flight_hours_per_year: self.flight_hours.as_ref().map_or(0.0, coerce_number),
            shopping: parse_or(&self.shopping_habits, defaults.shopping)?,
        })
    }
}

fn parse_or<K: std::str::FromStr<Err = crate::errors::FootprintError>>(
    value: &Option<String>,
    default: K,
) -> FootprintResult<K> {
    match value {
        Some(value) => value.parse(),
        None => Ok(default),
    }
}

fn coerce_number(value: &RawNumber) -> f64 {
    match value {
        RawNumber::Number(number) => non_negative(*number, || number.to_string()),
        RawNumber::Text(text) => coerce_float(text),
    }
}

fn coerce_percent_number(value: &RawNumber) -> u32 {
    match value {
        // Numbers are truncated the same way the integer prefix of text is
        RawNumber::Number(number) if number.is_finite() => {
            number.trunc().clamp(0.0, 100.0) as u32
        }
        RawNumber::Number(number) => {
            warn!(value = %number, "Non-finite percentage; treating as zero");
            0
        }
        RawNumber::Text(text) => coerce_percent(text),
    }
}

fn non_negative(value: f64, raw: impl FnOnce() -> String) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else if value == 0.0 {
        // Also maps -0.0 to 0.0
        0.0
    } else {
        warn!(
            value = %raw(),
            "Numeric input is not a finite non-negative number; treating as zero"
        );
        0.0
    }
}

/// Longest prefix of `text` (after leading whitespace) that reads as a number.
fn numeric_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f64>().ok())
}

/// Coerce free text to a non-negative number.
///
/// The leading numeric part is used, so `"12km"` reads as 12. Empty text is
/// silently 0; other unparsable, non-finite or negative values are logged and
/// become 0.
pub fn coerce_float(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }
    match numeric_prefix(text) {
        Some(value) => non_negative(value, || text.to_string()),
        None => {
            warn!(value = %text, "Could not parse numeric input; treating as zero");
            0.0
        }
    }
}

/// Coerce free text to a whole percentage in 0-100.
///
/// Only the leading integer part is read (`"50.7"` is 50). Unparsable text is
/// 0 and values outside the slider range are clamped.
pub fn coerce_percent(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let digits = &rest[..digits_len];

    if digits.is_empty() {
        if !trimmed.is_empty() {
            warn!(value = %text, "Could not parse percentage; treating as zero");
        }
        return 0;
    }
    if negative {
        return 0;
    }
    // Overflowing digit strings are far above the range anyway
    digits.parse::<u64>().unwrap_or(u64::MAX).min(100) as u32
}

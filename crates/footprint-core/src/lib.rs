//! Daily household carbon footprint estimation.
//!
//! A handful of lifestyle inputs are mapped onto daily kg CO₂-equivalent
//! emissions for four categories using a fixed table of linear coefficients.
//!
//! # Module Organisation
//!
//! - `parameters`: the coefficient table and the global average
//! - `kinds`: the closed selection sets (vehicle, diet, heating, shopping)
//! - `input`: raw form state and its coercion into [`UserInput`]
//! - `calculator`: [`EmissionsCalculator`]
//! - `comparison`, `projection`, `insights`: views derived from a breakdown
//!
//! ```
//! use footprint_core::{EmissionsCalculator, UserInput, VehicleKind};
//!
//! let calculator = EmissionsCalculator::new();
//! let input = UserInput {
//!     commute_distance_km: 10.0,
//!     vehicle: VehicleKind::Bus,
//!     ..UserInput::default()
//! };
//! let breakdown = calculator.compute(&input);
//! assert!((breakdown.transport - 0.8).abs() < 1e-12);
//! ```

pub mod breakdown;
pub mod calculator;
pub mod comparison;
pub mod errors;
pub mod input;
pub mod insights;
pub mod kinds;
pub mod parameters;
pub mod projection;

pub use breakdown::{Category, EmissionsBreakdown};
pub use calculator::{EmissionsCalculator, FootprintReport};
pub use comparison::AverageComparison;
pub use errors::{FootprintError, FootprintResult};
pub use input::{RawNumber, RawUserInput, UserInput};
pub use insights::{Insight, InsightKind, FALLBACK_MESSAGE};
pub use kinds::{FormKind, HeatingKind, MeatLevel, ShoppingLevel, VehicleKind};
pub use parameters::{CoefficientTable, GLOBAL_AVERAGE_KG_PER_DAY};
pub use projection::ReductionProjection;

//! Emissions calculator
//!
//! Maps a [`UserInput`] onto daily emissions for each category using the
//! linear coefficients of a [`CoefficientTable`].
//!
//! # Formulas
//!
//! All rates are daily kg CO₂-equivalent:
//!
//! - Transport: $d \times r_{vehicle}$
//! - Diet: $b_{meat} \times (1 - p_{local} / 200)$
//! - Energy: $E_{month} / 30 \times r_{electricity} + h_{heating}$
//! - Lifestyle: $H_{flights} / 365 \times r_{flight} + s_{shopping}$
//!
//! The local-food divisor is 200, not 100: an entirely local diet halves the
//! dietary baseline rather than removing it.

use crate::breakdown::EmissionsBreakdown;
use crate::comparison::{compare_to_average, AverageComparison};
use crate::input::UserInput;
use crate::insights::{derive_insights, Insight};
use crate::parameters::CoefficientTable;
use crate::projection::{project_reduction, ReductionProjection};
use serde::Serialize;
use tracing::debug;

/// Divisor applied to the local-food percentage.
pub const LOCAL_FOOD_DIVISOR: f64 = 200.0;
/// Days used to turn monthly electricity use into a daily rate.
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Days used to turn yearly flight hours into a daily rate.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Everything the presentation layer needs for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintReport {
    pub input: UserInput,
    pub breakdown: EmissionsBreakdown,
    pub comparison: AverageComparison,
    pub projection: ReductionProjection,
    pub insights: Vec<Insight>,
}

/// Stateless calculator over a fixed coefficient table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmissionsCalculator {
    coefficients: CoefficientTable,
}

impl EmissionsCalculator {
    /// Create a calculator with the default coefficient table.
    pub fn new() -> Self {
        Self::from_coefficients(CoefficientTable::default())
    }

    /// Create a calculator from an already validated table.
    pub fn from_coefficients(coefficients: CoefficientTable) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &CoefficientTable {
        &self.coefficients
    }

    /// Daily emissions for each category and their total.
    pub fn compute(&self, input: &UserInput) -> EmissionsBreakdown {
        let breakdown = EmissionsBreakdown::from_categories(
            self.transport_emissions(input),
            self.diet_emissions(input),
            self.energy_emissions(input),
            self.lifestyle_emissions(input),
        );
        debug!(
            transport = breakdown.transport,
            diet = breakdown.diet,
            energy = breakdown.energy,
            lifestyle = breakdown.lifestyle,
            total = breakdown.total,
            "Computed emissions breakdown"
        );
        breakdown
    }

    pub fn transport_emissions(&self, input: &UserInput) -> f64 {
        input.commute_distance_km * self.coefficients.transport.rate(input.vehicle)
    }

    pub fn diet_emissions(&self, input: &UserInput) -> f64 {
        let local_discount = f64::from(input.local_food_percent) / LOCAL_FOOD_DIVISOR;
        self.coefficients.diet.baseline(input.meat) * (1.0 - local_discount)
    }

    pub fn energy_emissions(&self, input: &UserInput) -> f64 {
        let energy = &self.coefficients.energy;
        input.electricity_kwh_per_month / DAYS_PER_MONTH * energy.electricity
            + energy.heating.daily(input.heating)
    }

    pub fn lifestyle_emissions(&self, input: &UserInput) -> f64 {
        let lifestyle = &self.coefficients.lifestyle;
        input.flight_hours_per_year / DAYS_PER_YEAR * lifestyle.flights
            + lifestyle.shopping.daily(input.shopping)
    }

    /// See [`compare_to_average`].
    pub fn compare_to_average(&self, total: f64) -> AverageComparison {
        compare_to_average(total)
    }

    /// See [`project_reduction`].
    pub fn project_reduction(&self, breakdown: &EmissionsBreakdown) -> ReductionProjection {
        project_reduction(breakdown)
    }

    /// See [`derive_insights`].
    pub fn derive_insights(&self, breakdown: &EmissionsBreakdown, total: f64) -> Vec<Insight> {
        derive_insights(breakdown, total)
    }

    /// Run the calculation and every derived view.
    pub fn report(&self, input: &UserInput) -> FootprintReport {
        let breakdown = self.compute(input);
        FootprintReport {
            input: input.clone(),
            comparison: self.compare_to_average(breakdown.total),
            projection: self.project_reduction(&breakdown),
            insights: self.derive_insights(&breakdown, breakdown.total),
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{FormKind, HeatingKind, MeatLevel, ShoppingLevel, VehicleKind};
    use is_close::is_close;

    fn default_calculator() -> EmissionsCalculator {
        EmissionsCalculator::from_coefficients(CoefficientTable::default())
    }

    fn input() -> UserInput {
        UserInput::default()
    }

    // ===== Transport =====

    #[test]
    fn test_transport_car() {
        let calculator = default_calculator();
        let input = UserInput {
            commute_distance_km: 10.0,
            vehicle: VehicleKind::Car,
            ..input()
        };

        let transport = calculator.transport_emissions(&input);
        assert!(is_close!(transport, 2.1), "Expected 2.1, got {}", transport);
    }

    #[test]
    fn test_transport_scales_linearly_for_every_vehicle() {
        let calculator = default_calculator();
        for &vehicle in VehicleKind::ALL {
            let rate = calculator.coefficients().transport.rate(vehicle);
            for distance in [0.0, 1.0, 12.5, 80.0] {
                let input = UserInput {
                    commute_distance_km: distance,
                    vehicle,
                    ..input()
                };
                assert_eq!(calculator.transport_emissions(&input), distance * rate);
            }
        }
    }

    #[test]
    fn test_bike_has_no_transport_emissions() {
        let calculator = default_calculator();
        let input = UserInput {
            commute_distance_km: 42.0,
            vehicle: VehicleKind::Bike,
            ..input()
        };
        assert_eq!(calculator.transport_emissions(&input), 0.0);
    }

    // ===== Diet =====

    #[test]
    fn test_diet_local_food_discount() {
        let calculator = default_calculator();
        let diet = |local_food_percent| {
            calculator.diet_emissions(&UserInput {
                meat: MeatLevel::High,
                local_food_percent,
                ..input()
            })
        };

        assert!(is_close!(diet(0), 3.3));
        assert!(is_close!(diet(100), 1.65), "Expected 1.65, got {}", diet(100));
        assert_eq!(diet(200), 0.0);
    }

    #[test]
    fn test_diet_without_meat() {
        let calculator = default_calculator();
        let input = UserInput {
            meat: MeatLevel::None,
            ..input()
        };
        assert!(is_close!(calculator.diet_emissions(&input), 1.1));
    }

    // ===== Energy =====

    #[test]
    fn test_energy_electric_heating() {
        let calculator = default_calculator();
        let input = UserInput {
            electricity_kwh_per_month: 300.0,
            heating: HeatingKind::Electric,
            ..input()
        };

        let energy = calculator.energy_emissions(&input);
        assert!(is_close!(energy, 6.5), "Expected 6.5, got {}", energy);
    }

    #[test]
    fn test_energy_heating_only() {
        let calculator = default_calculator();
        let input = UserInput {
            heating: HeatingKind::Renewable,
            ..input()
        };
        assert!(is_close!(calculator.energy_emissions(&input), 0.3));
    }

    // ===== Lifestyle =====

    #[test]
    fn test_lifestyle_no_flights() {
        let calculator = default_calculator();
        let input = UserInput {
            flight_hours_per_year: 0.0,
            shopping: ShoppingLevel::Low,
            ..input()
        };
        assert!(is_close!(calculator.lifestyle_emissions(&input), 2.0));
    }

    #[test]
    fn test_lifestyle_flights_are_spread_over_the_year() {
        let calculator = default_calculator();
        let input = UserInput {
            flight_hours_per_year: 36.5,
            shopping: ShoppingLevel::Medium,
            ..input()
        };

        // 36.5 / 365 * 90 = 9.0, plus 5.0 for medium shopping
        let lifestyle = calculator.lifestyle_emissions(&input);
        assert!(is_close!(lifestyle, 14.0), "Expected 14.0, got {}", lifestyle);
    }

    // ===== Whole calculation =====

    #[test]
    fn test_compute_is_deterministic() {
        let calculator = default_calculator();
        let input = UserInput {
            commute_distance_km: 17.3,
            vehicle: VehicleKind::Motorcycle,
            meat: MeatLevel::Low,
            local_food_percent: 33,
            electricity_kwh_per_month: 412.0,
            heating: HeatingKind::NaturalGas,
            flight_hours_per_year: 7.5,
            shopping: ShoppingLevel::High,
        };

        let first = calculator.compute(&input);
        let second = calculator.compute(&input);

        assert_eq!(first.total.to_bits(), second.total.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_coefficients_are_used() {
        let mut table = CoefficientTable::default();
        table.transport.car = 1.0;
        table.lifestyle.shopping.medium = 0.0;
        let calculator = EmissionsCalculator::from_coefficients(table);

        let input = UserInput {
            commute_distance_km: 5.0,
            ..input()
        };
        let breakdown = calculator.compute(&input);

        assert_eq!(breakdown.transport, 5.0);
        assert_eq!(breakdown.lifestyle, 0.0);
    }

    #[test]
    fn test_report_bundles_derived_views() {
        let calculator = default_calculator();
        let input = UserInput {
            commute_distance_km: 20.0,
            ..input()
        };

        let report = calculator.report(&input);

        assert_eq!(report.breakdown, calculator.compute(&input));
        assert_eq!(report.comparison.total, report.breakdown.total);
        assert_eq!(report.projection.current_total, report.breakdown.total);
        assert!(!report.insights.is_empty());
        assert_eq!(report.input, input);
    }
}

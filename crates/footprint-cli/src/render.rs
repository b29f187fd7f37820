//! Terminal rendering of a footprint report.
//!
//! Three charts are drawn as horizontal text bars: emissions by category, the
//! footprint against the global average, and the effect of the projected
//! changes. They are followed by the list of insights.

use footprint_core::{AverageComparison, FootprintReport, ReductionProjection, FALLBACK_MESSAGE};
use std::io::{self, Write};

/// Headroom above the largest bar, matching a chart axis that ends at 110% of the maximum.
const AXIS_HEADROOM: f64 = 1.1;

/// Draws reports as plain text.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Width of a full-scale bar in characters.
    pub bar_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { bar_width: 40 }
    }
}

impl TextRenderer {
    pub fn render(&self, report: &FootprintReport, out: &mut dyn Write) -> io::Result<()> {
        self.render_categories(report, out)?;
        writeln!(out)?;
        self.render_comparison(&report.comparison, out)?;
        writeln!(out)?;
        self.render_impact(&report.projection, out)?;
        writeln!(out)?;
        render_insights(report, out)
    }

    fn bar(&self, value: f64, axis_max: f64) -> String {
        if axis_max <= 0.0 || value <= 0.0 {
            return String::new();
        }
        let len = (value / axis_max * self.bar_width as f64).round() as usize;
        "█".repeat(len.min(self.bar_width))
    }

    fn render_categories(&self, report: &FootprintReport, out: &mut dyn Write) -> io::Result<()> {
        let breakdown = &report.breakdown;
        let axis_max = breakdown.max_category() * AXIS_HEADROOM;

        writeln!(out, "Emissions by category (kg CO₂ per day)")?;
        for (category, value) in breakdown.categories() {
            writeln!(
                out,
                "  {:<10} {:<width$} {:.2} kg CO₂",
                category.label(),
                self.bar(value, axis_max),
                value,
                width = self.bar_width
            )?;
        }
        writeln!(out, "  {:<10} {:.2} kg CO₂", "Total", breakdown.total)
    }

    fn render_comparison(
        &self,
        comparison: &AverageComparison,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let combined = comparison.total + comparison.average;
        let share = |value: f64| {
            if combined > 0.0 {
                value / combined * 100.0
            } else {
                0.0
            }
        };

        writeln!(out, "Compared with the global average")?;
        for (label, value) in [
            ("Your Footprint", comparison.total),
            ("Global Average", comparison.average),
        ] {
            writeln!(
                out,
                "  {:<15} {:<width$} {:.1} kg ({:.1}%)",
                label,
                self.bar(share(value), 100.0),
                value,
                share(value),
                width = self.bar_width
            )?;
        }

        if comparison.is_below_average() {
            writeln!(
                out,
                "  Great job! Your footprint is {:.1} kg lower than average.",
                -comparison.delta_kg
            )
        } else {
            writeln!(
                out,
                "  Your footprint is {:.1} kg higher than average.",
                comparison.delta_kg
            )
        }
    }

    fn render_impact(
        &self,
        projection: &ReductionProjection,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let axis_max = projection.current_total.max(projection.projected_total) * AXIS_HEADROOM;

        writeln!(out, "Impact of sustainable changes")?;
        for (label, value) in [
            ("Current", projection.current_total),
            ("With Changes", projection.projected_total),
        ] {
            writeln!(
                out,
                "  {:<13} {:<width$} {:.1} kg",
                label,
                self.bar(value, axis_max),
                value,
                width = self.bar_width
            )?;
        }
        writeln!(
            out,
            "  Potential reduction: {:.1}%",
            projection.reduction_percent
        )
    }
}

fn render_insights(report: &FootprintReport, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Insights")?;
    if report.insights.is_empty() {
        return writeln!(out, "  {FALLBACK_MESSAGE}");
    }
    for insight in &report.insights {
        writeln!(out, "  * {}", insight.message)?;
        writeln!(out, "    {}", insight.impact_note)?;
    }
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn render_json(report: &FootprintReport, out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

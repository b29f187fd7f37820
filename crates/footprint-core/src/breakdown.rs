//! Per-category emissions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four independent contributors summed into the total.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Category {
    Transport,
    Diet,
    Energy,
    Lifestyle,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Diet,
        Category::Energy,
        Category::Lifestyle,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Diet => "Diet",
            Category::Energy => "Energy",
            Category::Lifestyle => "Lifestyle",
        }
    }

    /// Chart colour as a hex RGB string.
    pub fn colour(&self) -> &'static str {
        match self {
            Category::Transport => "#3B82F6",
            Category::Diet => "#EF4444",
            Category::Energy => "#F59E0B",
            Category::Lifestyle => "#8B5CF6",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily emissions by category (kg CO₂/day).
///
/// Always derived from a [`crate::UserInput`]; `total` is the sum of the four
/// categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionsBreakdown {
    pub transport: f64,
    pub diet: f64,
    pub energy: f64,
    pub lifestyle: f64,
    pub total: f64,
}

impl EmissionsBreakdown {
    /// Build a breakdown from the four category values, summing the total.
    pub fn from_categories(transport: f64, diet: f64, energy: f64, lifestyle: f64) -> Self {
        Self {
            transport,
            diet,
            energy,
            lifestyle,
            total: transport + diet + energy + lifestyle,
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.transport,
            Category::Diet => self.diet,
            Category::Energy => self.energy,
            Category::Lifestyle => self.lifestyle,
        }
    }

    /// Iterate over `(category, emissions)` pairs in display order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// The largest single category value.
    pub fn max_category(&self) -> f64 {
        self.categories()
            .map(|(_, value)| value)
            .fold(0.0, f64::max)
    }
}

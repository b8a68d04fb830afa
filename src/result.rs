//! Footprint results and the values derived from them for display

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{AVERAGE_AMERICAN_TONS, LOW_IMPACT_MAX_TONS, MODERATE_IMPACT_MAX_TONS};

/// Annual footprint in metric tons CO2e
///
/// `total` is always the sum of the three category subtotals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub transportation: f64,
    pub home_energy: f64,
    pub food: f64,
    pub total: f64,
}

impl FootprintResult {
    pub fn from_subtotals(transportation: f64, home_energy: f64, food: f64) -> Self {
        Self {
            transportation,
            home_energy,
            food,
            total: transportation + home_energy + food,
        }
    }

    /// Subtotal for one category
    pub fn category(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::HomeEnergy => self.home_energy,
            Category::Food => self.food,
        }
    }

    pub fn impact_level(&self) -> ImpactLevel {
        ImpactLevel::from_total(self.total)
    }

    /// Each category's share of the total, in questionnaire order
    ///
    /// A zero total yields 0% for every category.
    pub fn shares(&self) -> Vec<CategoryShare> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let tons = self.category(category);
                let percent = if self.total > 0.0 {
                    tons / self.total * 100.0
                } else {
                    0.0
                };
                CategoryShare {
                    category,
                    tons,
                    percent,
                }
            })
            .collect()
    }

    /// Difference from the average American footprint (negative means below average)
    pub fn versus_average(&self) -> f64 {
        self.total - AVERAGE_AMERICAN_TONS
    }
}

/// Footprint category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transportation,
    HomeEnergy,
    Food,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Transportation, Category::HomeEnergy, Category::Food];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::HomeEnergy => "Home Energy",
            Category::Food => "Food",
        }
    }

    /// Machine-readable name used in CSV/JSON output
    pub fn key(self) -> &'static str {
        match self {
            Category::Transportation => "transportation",
            Category::HomeEnergy => "home_energy",
            Category::Food => "food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One category's portion of the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    pub tons: f64,
    /// 0-100
    pub percent: f64,
}

/// Qualitative rating of a total footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    /// `< 5` Low, `< 10` Moderate, otherwise High
    pub fn from_total(total: f64) -> Self {
        if total < LOW_IMPACT_MAX_TONS {
            ImpactLevel::Low
        } else if total < MODERATE_IMPACT_MAX_TONS {
            ImpactLevel::Moderate
        } else {
            ImpactLevel::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Moderate => "Moderate",
            ImpactLevel::High => "High",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_subtotals() {
        let result = FootprintResult::from_subtotals(1.5, 2.25, 0.75);
        assert_eq!(result.total, 4.5);
    }

    #[test]
    fn test_impact_thresholds() {
        assert_eq!(ImpactLevel::from_total(0.0), ImpactLevel::Low);
        assert_eq!(ImpactLevel::from_total(4.999), ImpactLevel::Low);
        assert_eq!(ImpactLevel::from_total(5.0), ImpactLevel::Moderate);
        assert_eq!(ImpactLevel::from_total(9.999), ImpactLevel::Moderate);
        assert_eq!(ImpactLevel::from_total(10.0), ImpactLevel::High);
        assert_eq!(ImpactLevel::from_total(42.0), ImpactLevel::High);
    }

    #[test]
    fn test_impact_level_labels() {
        assert_eq!(ImpactLevel::Low.to_string(), "Low");
        assert_eq!(ImpactLevel::Moderate.to_string(), "Moderate");
        assert_eq!(ImpactLevel::High.to_string(), "High");
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let result = FootprintResult::from_subtotals(2.0, 1.0, 1.0);
        let shares = result.shares();
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].category, Category::Transportation);
        assert_eq!(shares[0].percent, 50.0);
        assert_eq!(shares[1].percent, 25.0);
        assert_eq!(shares[2].percent, 25.0);
    }

    #[test]
    fn test_shares_of_zero_total() {
        let result = FootprintResult::from_subtotals(0.0, 0.0, 0.0);
        assert!(result.shares().iter().all(|s| s.percent == 0.0));
    }

    #[test]
    fn test_versus_average() {
        let result = FootprintResult::from_subtotals(4.0, 4.0, 4.0);
        assert_eq!(result.versus_average(), -4.0);
    }

    #[test]
    fn test_category_lookup() {
        let result = FootprintResult::from_subtotals(1.0, 2.0, 3.0);
        assert_eq!(result.category(Category::HomeEnergy), 2.0);
        assert_eq!(Category::HomeEnergy.key(), "home_energy");
        assert_eq!(Category::HomeEnergy.to_string(), "Home Energy");
    }

    #[test]
    fn test_result_json_field_names() {
        let result = FootprintResult::from_subtotals(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"home_energy\":2.0"));
        assert!(json.contains("\"total\":6.0"));
    }
}

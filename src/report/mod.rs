//! Text reports over downloaded menu data

use crate::config::ReportSettings;
use crate::menu::{filter_items, filter_numeric, items_with_max, MenuItem};
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Entrees of one brand tied at the highest sugar content
#[derive(Debug, Clone, Serialize)]
pub struct MaxSugarReport {
    pub brand: String,
    pub max_sugar: Option<f64>,
    pub items: Vec<String>,
}

/// Find the brand's entrees with the most sugar
pub fn max_sugar(menu: &[MenuItem], brand: &str, settings: &ReportSettings) -> MaxSugarReport {
    let top = items_with_max(brand_entrees(menu, brand, settings), &settings.sugar_field);
    let max_sugar = top.first().and_then(|item| item.number(&settings.sugar_field));
    let items = top.iter().map(|item| item.display_name().to_string()).collect();

    MaxSugarReport {
        brand: brand.to_string(),
        max_sugar,
        items,
    }
}

impl fmt::Display for MaxSugarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_sugar {
            Some(max) => {
                writeln!(f, "Max sugar: {}", max)?;
                for name in &self.items {
                    writeln!(f, "Item name: {}", name)?;
                }
                Ok(())
            }
            None => writeln!(f, "No entrees with sugar data for {}", self.brand),
        }
    }
}

/// One line of the low sugar report
#[derive(Debug, Clone, Serialize)]
pub struct LowSugarEntry {
    pub name: String,
    pub calories: Option<f64>,
    pub sugars: f64,
}

/// Low sugar entrees of one brand, highest calories first
#[derive(Debug, Clone, Serialize)]
pub struct LowSugarReport {
    pub brand: String,
    pub entries: Vec<LowSugarEntry>,
}

/// List the brand's entrees under the sugar threshold, by calories descending
///
/// Items with equal calories keep their menu order; items without calorie
/// data come last.
pub fn low_sugar(menu: &[MenuItem], brand: &str, settings: &ReportSettings) -> LowSugarReport {
    let threshold = settings.low_sugar_threshold;
    let entrees = brand_entrees(menu, brand, settings);

    let mut entries: Vec<LowSugarEntry> =
        filter_numeric(entrees, &settings.sugar_field, |sugar| sugar < threshold)
            .into_iter()
            .map(|item| LowSugarEntry {
                name: item.display_name().to_string(),
                calories: item.number(&settings.calorie_field),
                sugars: item.number(&settings.sugar_field).unwrap_or_default(),
            })
            .collect();

    entries.sort_by(|a, b| match (a.calories, b.calories) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    LowSugarReport {
        brand: brand.to_string(),
        entries,
    }
}

impl fmt::Display for LowSugarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.brand)?;
        writeln!(f, "{}", "=".repeat(self.brand.chars().count()))?;
        for entry in &self.entries {
            let calories = entry
                .calories
                .map(|c| c.to_string())
                .unwrap_or_else(|| "?".to_string());
            writeln!(f, "{}: {}cal, {}g sugar", entry.name, calories, entry.sugars)?;
        }
        Ok(())
    }
}

fn brand_entrees<'a>(menu: &'a [MenuItem], brand: &str, settings: &ReportSettings) -> Vec<&'a MenuItem> {
    let brand_items = filter_items(menu, &settings.brand_field, &Value::from(brand), false);
    filter_items(
        brand_items,
        &settings.category_field,
        &Value::from(settings.category_value.as_str()),
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn menu() -> Vec<MenuItem> {
        serde_json::from_value(json!([
            {"brand_name": "Qdoba", "menu_category": "entree", "item_name": "Chicken Burrito", "nf_sugars": 4, "nf_calories": 800},
            {"brand_name": "Qdoba", "menu_category": "entree", "item_name": "Steak Bowl", "nf_sugars": 2, "nf_calories": 600},
            {"brand_name": "Qdoba", "menu_category": "entree", "item_name": "Veggie Taco", "nf_sugars": 1, "nf_calories": 250},
            {"brand_name": "Qdoba", "menu_category": "entree", "item_name": "Pork Taco", "nf_sugars": 0, "nf_calories": 600},
            {"brand_name": "Qdoba", "menu_category": "entree", "item_name": "Mole Bowl", "nf_sugars": 11, "nf_calories": 700},
            {"brand_name": "Qdoba", "menu_category": "entree", "item_name": "Queso Bowl", "nf_sugars": 11, "nf_calories": 900},
            {"brand_name": "Qdoba", "menu_category": "drink", "item_name": "Soda", "nf_sugars": 60, "nf_calories": 240},
            {"brand_name": "Chipotle", "menu_category": "entree", "item_name": "Sofritas", "nf_sugars": 20, "nf_calories": 500}
        ]))
        .unwrap()
    }

    #[test]
    fn test_max_sugar_ignores_other_brands_and_categories() {
        let report = max_sugar(&menu(), "Qdoba", &ReportSettings::default());

        assert_eq!(report.max_sugar, Some(11.0));
        assert_eq!(report.items, vec!["Mole Bowl", "Queso Bowl"]);
        assert_eq!(
            report.to_string(),
            "Max sugar: 11\nItem name: Mole Bowl\nItem name: Queso Bowl\n"
        );
    }

    #[test]
    fn test_max_sugar_unknown_brand() {
        let report = max_sugar(&menu(), "Five Guys", &ReportSettings::default());
        assert_eq!(report.max_sugar, None);
        assert!(report.items.is_empty());
    }

    #[test]
    fn test_low_sugar_ordering() {
        let report = low_sugar(&menu(), "Qdoba", &ReportSettings::default());
        let names: Vec<_> = report.entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["Steak Bowl", "Pork Taco", "Veggie Taco"]);
        assert_eq!(
            report.to_string(),
            "Qdoba\n=====\n\
             Steak Bowl: 600cal, 2g sugar\n\
             Pork Taco: 600cal, 0g sugar\n\
             Veggie Taco: 250cal, 1g sugar\n"
        );
    }

    #[test]
    fn test_low_sugar_threshold_is_configurable() {
        let settings = ReportSettings {
            low_sugar_threshold: 5.0,
            ..Default::default()
        };
        let report = low_sugar(&menu(), "Qdoba", &settings);
        assert_eq!(report.entries.len(), 4);
        assert_eq!(report.entries[0].name, "Chicken Burrito");
    }
}

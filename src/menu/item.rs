//! Menu item schema
//!
//! The remote API returns a flat `fields` object per hit. Every field we ask
//! for is declared once in `menu_item_schema!`, which generates the typed
//! struct, the request field list and the by-name accessor from that single
//! declaration.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use tracing::debug;

macro_rules! menu_item_schema {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty ),* $(,)?) => {
        /// A single menu item as returned inside a search hit's `fields`
        ///
        /// Absent and `null` fields both read as the type's default and are not
        /// written back out. A value of the wrong type leaves the typed field at
        /// its default and is kept verbatim in `extra`, as are keys outside the
        /// schema.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
        pub struct MenuItem {
            $(
                $(#[$meta])*
                pub $field: $ty,
            )*
            /// Fields not covered by the schema, or not of the schema's type
            pub extra: Map<String, Value>,
        }

        /// Field names requested from the search endpoint, in request order
        pub const FIELDS: &[&str] = &[$(stringify!($field)),*];

        impl MenuItem {
            /// Look up a field by its remote name
            ///
            /// Unknown names fall through to `extra`; anything missing is `null`.
            pub fn get(&self, name: &str) -> Value {
                let typed = match name {
                    $(stringify!($field) => to_json(&self.$field),)*
                    _ => Value::Null,
                };
                match typed {
                    Value::Null => self.extra.get(name).cloned().unwrap_or(Value::Null),
                    value => value,
                }
            }
        }

        impl From<Map<String, Value>> for MenuItem {
            fn from(mut raw: Map<String, Value>) -> Self {
                Self {
                    $($field: take_field(&mut raw, stringify!($field)),)*
                    extra: raw,
                }
            }
        }

        impl From<MenuItem> for Map<String, Value> {
            fn from(item: MenuItem) -> Self {
                let mut map = item.extra;
                $(put_field(&mut map, stringify!($field), &item.$field);)*
                map
            }
        }
    };
}

menu_item_schema! {
    brand_name: Option<String>,
    item_name: Option<String>,
    brand_id: Option<String>,
    item_id: Option<String>,
    upc: Option<String>,
    item_type: Option<i64>,
    item_description: Option<String>,
    nf_ingredient_statement: Option<String>,
    nf_water_grams: Option<Number>,
    nf_calories: Option<Number>,
    nf_calories_from_fat: Option<Number>,
    nf_total_fat: Option<Number>,
    nf_saturated_fat: Option<Number>,
    nf_monounsaturated_fat: Option<Number>,
    nf_polyunsaturated_fat: Option<Number>,
    nf_trans_fatty_acid: Option<Number>,
    nf_cholesterol: Option<Number>,
    nf_sodium: Option<Number>,
    nf_total_carbohydrate: Option<Number>,
    nf_dietary_fiber: Option<Number>,
    /// Grams of sugar per serving
    nf_sugars: Option<Number>,
    nf_protein: Option<Number>,
    nf_vitamin_a_iu: Option<Number>,
    nf_vitamin_a_dv: Option<Number>,
    nf_vitamin_c_mg: Option<Number>,
    nf_vitamin_c_dv: Option<Number>,
    nf_calcium_mg: Option<Number>,
    nf_calcium_dv: Option<Number>,
    nf_iron_mg: Option<Number>,
    nf_iron_dv: Option<Number>,
    nf_potassium: Option<Number>,
    nf_refuse_pct: Option<Number>,
    nf_servings_per_container: Option<Number>,
    nf_serving_size_qty: Option<Number>,
    nf_serving_size_unit: Option<String>,
    nf_serving_weight_grams: Option<Number>,
    allergen_contains_milk: Option<bool>,
    allergen_contains_eggs: Option<bool>,
    allergen_contains_fish: Option<bool>,
    allergen_contains_shellfish: Option<bool>,
    allergen_contains_tree_nuts: Option<bool>,
    allergen_contains_peanuts: Option<bool>,
    allergen_contains_wheat: Option<bool>,
    allergen_contains_soybeans: Option<bool>,
    allergen_contains_gluten: Option<bool>,
    images_front_full_url: Option<String>,
    updated_at: Option<String>,
    section_ids: Vec<String>,
}

impl MenuItem {
    /// Numeric value of a field, if it holds a number
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).as_f64()
    }

    /// Display name, falling back to the item id
    pub fn display_name(&self) -> &str {
        self.item_name
            .as_deref()
            .or(self.item_id.as_deref())
            .unwrap_or("<unnamed>")
    }

    /// All field names carried by this item: schema fields first, then extras
    pub fn field_names(&self) -> Vec<String> {
        FIELDS
            .iter()
            .map(|f| f.to_string())
            .chain(self.extra.keys().filter(|k| !FIELDS.contains(&k.as_str())).cloned())
            .collect()
    }
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Remove `name` from `raw` and decode it, leaving off-type values in place
fn take_field<T: DeserializeOwned + Default>(raw: &mut Map<String, Value>, name: &str) -> T {
    match raw.remove(name) {
        None | Some(Value::Null) => T::default(),
        Some(value) => match T::deserialize(&value) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Keeping {} as raw value: {}", name, e);
                raw.insert(name.to_string(), value);
                T::default()
            }
        },
    }
}

fn put_field<T: Serialize>(map: &mut Map<String, Value>, name: &str, value: &T) {
    match to_json(value) {
        Value::Null => {}
        Value::Array(list) if list.is_empty() => {}
        value => {
            map.insert(name.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_list_matches_request_order() {
        assert_eq!(FIELDS.len(), 48);
        assert_eq!(FIELDS[0], "brand_name");
        assert_eq!(FIELDS[20], "nf_sugars");
        assert_eq!(FIELDS[47], "section_ids");
    }

    #[test]
    fn test_deserialize_with_nulls_and_extras() {
        let item: MenuItem = serde_json::from_value(json!({
            "item_name": "Big Mac",
            "brand_name": "McDonald's",
            "nf_sugars": 9,
            "nf_calories": null,
            "section_ids": null,
            "allergen_contains_milk": true,
            "menu_category": "entree"
        }))
        .unwrap();

        assert_eq!(item.item_name.as_deref(), Some("Big Mac"));
        assert_eq!(item.nf_sugars, Some(Number::from(9)));
        assert_eq!(item.nf_calories, None);
        assert!(item.section_ids.is_empty());
        assert_eq!(item.allergen_contains_milk, Some(true));
        assert_eq!(item.extra.get("menu_category"), Some(&json!("entree")));
    }

    #[test]
    fn test_get_by_name() {
        let item: MenuItem = serde_json::from_value(json!({
            "item_name": "Fries",
            "nf_sodium": 230.5,
            "sugar": 5
        }))
        .unwrap();

        assert_eq!(item.get("item_name"), json!("Fries"));
        assert_eq!(item.number("nf_sodium"), Some(230.5));
        assert_eq!(item.get("nf_protein"), Value::Null);
        assert_eq!(item.number("sugar"), Some(5.0));
        assert_eq!(item.get("missing"), Value::Null);
    }

    #[test]
    fn test_serialization_keeps_extras() {
        let item: MenuItem = serde_json::from_value(json!({
            "item_name": "Taco",
            "menu_category": "entree"
        }))
        .unwrap();

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["item_name"], json!("Taco"));
        assert_eq!(value["menu_category"], json!("entree"));
    }

    #[test]
    fn test_serialization_is_verbatim() {
        let source = json!({
            "item_name": "Big Mac",
            "nf_calories": 540,
            "nf_sugars": 9,
            "nf_sodium": 970.5,
            "item_type": 1,
            "nf_protein": null,
            "section_ids": ["s1"]
        });
        let item: MenuItem = serde_json::from_value(source).unwrap();
        let text = serde_json::to_string(&item).unwrap();

        assert!(text.contains("\"nf_calories\":540"));
        assert!(!text.contains("540.0"));
        assert!(text.contains("\"nf_sugars\":9"));
        assert!(!text.contains("null"));
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "item_name": "Big Mac",
                "nf_calories": 540,
                "nf_sugars": 9,
                "nf_sodium": 970.5,
                "item_type": 1,
                "section_ids": ["s1"]
            })
        );
    }

    #[test]
    fn test_off_type_value_is_kept_raw() {
        let item: MenuItem = serde_json::from_value(json!({
            "item_name": "Kids Fries",
            "nf_serving_size_qty": "1/2",
            "nf_calories": 110
        }))
        .unwrap();

        assert_eq!(item.nf_serving_size_qty, None);
        assert_eq!(item.get("nf_serving_size_qty"), json!("1/2"));
        assert_eq!(item.number("nf_serving_size_qty"), None);
        assert_eq!(item.number("nf_calories"), Some(110.0));
        assert_eq!(
            item.field_names().iter().filter(|f| *f == "nf_serving_size_qty").count(),
            1
        );

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["nf_serving_size_qty"], json!("1/2"));
    }
}

//! Single-pass helpers over menu item sequences
//!
//! Every helper preserves input order. Filters borrow from the input so they
//! can be chained without cloning items.

use super::item::MenuItem;
use serde_json::Value;

/// Items whose `field` equals `value`, or the complement when `negate` is set
///
/// Numbers compare by value, so `5` matches `5.0`. A missing field is `null`.
pub fn filter_items<'a, I>(items: I, field: &str, value: &Value, negate: bool) -> Vec<&'a MenuItem>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    items
        .into_iter()
        .filter(|item| values_match(&item.get(field), value) != negate)
        .collect()
}

/// Items whose numeric `field` satisfies `predicate`; non-numeric values never match
pub fn filter_numeric<'a, I, F>(items: I, field: &str, predicate: F) -> Vec<&'a MenuItem>
where
    I: IntoIterator<Item = &'a MenuItem>,
    F: Fn(f64) -> bool,
{
    items
        .into_iter()
        .filter(|item| item.number(field).map(&predicate).unwrap_or(false))
        .collect()
}

/// Raw value of `field` for every item
pub fn extract<'a, I>(items: I, field: &str) -> Vec<Value>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    items.into_iter().map(|item| item.get(field)).collect()
}

/// Numeric value of `field` for every item, `None` where it is not a number
pub fn extract_numeric<'a, I>(items: I, field: &str) -> Vec<Option<f64>>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    items.into_iter().map(|item| item.number(field)).collect()
}

/// Largest numeric value of `field`, ignoring items without one
pub fn max_value<'a, I>(items: I, field: &str) -> Option<f64>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    extract_numeric(items, field)
        .into_iter()
        .flatten()
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
}

/// Smallest numeric value of `field`, ignoring items without one
pub fn min_value<'a, I>(items: I, field: &str) -> Option<f64>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    extract_numeric(items, field)
        .into_iter()
        .flatten()
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))
}

/// Every item tied at the maximum of `field`
///
/// There is no guarantee only one item holds the maximum, so this returns all
/// of them. Empty when no item carries a number.
pub fn items_with_max<'a, I>(items: I, field: &str) -> Vec<&'a MenuItem>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let items: Vec<&MenuItem> = items.into_iter().collect();
    match max_value(items.iter().copied(), field) {
        Some(max) => filter_numeric(items, field, |v| v == max),
        None => Vec::new(),
    }
}

/// Every item tied at the minimum of `field`
pub fn items_with_min<'a, I>(items: I, field: &str) -> Vec<&'a MenuItem>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let items: Vec<&MenuItem> = items.into_iter().collect();
    match min_value(items.iter().copied(), field) {
        Some(min) => filter_numeric(items, field, |v| v == min),
        None => Vec::new(),
    }
}

/// Field names of a menu, taken from its first item
pub fn field_names(items: &[MenuItem]) -> Vec<String> {
    items.first().map(MenuItem::field_names).unwrap_or_default()
}

/// Parse a command-line value: JSON literals when they parse, plain strings otherwise
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Equality with numbers compared as `f64`
pub fn values_match(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => left == right,
    }
}

//! Histograms of numeric menu fields
//!
//! Bins span `[0, x_max]` in equal steps. Every bin is half-open except the
//! last, which also takes values equal to `x_max`.

use crate::menu::{extract_numeric, max_value, MenuItem, RestaurantMenu};
use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error;

/// Y-axis label for every menu histogram
pub const Y_LABEL: &str = "Number of menu items";

#[derive(Debug, Error, PartialEq)]
pub enum HistogramError {
    #[error("no numeric values for field {0:?}")]
    NoData(String),

    #[error("histogram range must be positive, got x_max = {0}")]
    InvalidRange(f64),

    #[error("histogram needs at least one bin")]
    NoBins,
}

/// Histogram construction options
#[derive(Debug, Clone)]
pub struct HistogramOptions {
    pub bins: usize,
    /// Upper edge of the last bin; defaults to the largest value
    pub x_max: Option<f64>,
    pub title: Option<String>,
    /// X-axis label; defaults to the field name
    pub label: Option<String>,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bins: 20,
            x_max: None,
            title: None,
            label: None,
        }
    }
}

/// Binned counts of one numeric field
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub title: Option<String>,
    pub label: String,
    /// `bins + 1` edges from 0 to `x_max`
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    /// Values below zero or above `x_max`
    pub out_of_range: usize,
    /// Items without a numeric value
    pub missing: usize,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins over `[0, x_max]`
    pub fn from_values(
        values: &[Option<f64>],
        bins: usize,
        x_max: Option<f64>,
    ) -> Result<Self, HistogramError> {
        if bins == 0 {
            return Err(HistogramError::NoBins);
        }

        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let x_max = match x_max {
            Some(max) => max,
            None => present
                .iter()
                .copied()
                .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
                .ok_or_else(|| HistogramError::NoData(String::new()))?,
        };
        if !(x_max > 0.0 && x_max.is_finite()) {
            return Err(HistogramError::InvalidRange(x_max));
        }

        let width = x_max / bins as f64;
        let edges = (0..=bins).map(|i| i as f64 * width).collect();
        let mut counts = vec![0; bins];
        let mut out_of_range = 0;

        for &value in &present {
            if !(0.0..=x_max).contains(&value) {
                out_of_range += 1;
                continue;
            }
            let index = ((value / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        Ok(Self {
            title: None,
            label: String::new(),
            edges,
            counts,
            out_of_range,
            missing: values.len() - present.len(),
        })
    }

    /// Histogram of `field` across `items`
    pub fn from_menu<'a, I>(
        items: I,
        field: &str,
        options: &HistogramOptions,
    ) -> Result<Self, HistogramError>
    where
        I: IntoIterator<Item = &'a MenuItem>,
    {
        let values = extract_numeric(items, field);
        let mut histogram = Self::from_values(&values, options.bins, options.x_max).map_err(|e| match e {
            HistogramError::NoData(_) => HistogramError::NoData(field.to_string()),
            other => other,
        })?;

        histogram.title = options.title.clone();
        histogram.label = options.label.clone().unwrap_or_else(|| field.to_string());
        Ok(histogram)
    }

    /// One histogram per restaurant, all sharing the same x range
    ///
    /// The shared range is the largest value across every menu unless
    /// `options.x_max` is set. Each histogram is titled with its restaurant.
    pub fn compare(
        menus: &[RestaurantMenu],
        field: &str,
        options: &HistogramOptions,
    ) -> Result<Vec<Self>, HistogramError> {
        let x_max = match options.x_max {
            Some(max) => max,
            None => max_value(menus.iter().flat_map(|m| m.menu.iter()), field)
                .ok_or_else(|| HistogramError::NoData(field.to_string()))?,
        };

        menus
            .iter()
            .map(|menu| {
                let options = HistogramOptions {
                    x_max: Some(x_max),
                    title: Some(menu.name.clone()),
                    ..options.clone()
                };
                Self::from_menu(&menu.menu, field, &options)
            })
            .collect()
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Number of values placed in a bin
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Render as a horizontal text bar chart, longest bar `width` characters
    pub fn render(&self, width: usize) -> String {
        let mut out = String::new();
        let peak = self.counts.iter().copied().max().unwrap_or(0);

        if let Some(title) = &self.title {
            let _ = writeln!(out, "{}", title);
        }
        let _ = writeln!(out, "{} ({})", self.label, Y_LABEL);

        let precision = if self.edges.last().copied().unwrap_or(0.0) >= 100.0 { 0 } else { 1 };
        let edge_width = self
            .edges
            .iter()
            .map(|e| format!("{:.*}", precision, e).len())
            .max()
            .unwrap_or(1);

        for (i, count) in self.counts.iter().enumerate() {
            let bar = if peak == 0 {
                0
            } else {
                (count * width).div_ceil(peak)
            };
            let close = if i + 1 == self.counts.len() { ']' } else { ')' };
            let _ = writeln!(
                out,
                "[{:>w$.p$}, {:>w$.p$}{} {} {}",
                self.edges[i],
                self.edges[i + 1],
                close,
                "#".repeat(bar),
                count,
                w = edge_width,
                p = precision,
            );
        }

        if self.out_of_range > 0 {
            let _ = writeln!(out, "{} value(s) outside the range", self.out_of_range);
        }
        if self.missing > 0 {
            let _ = writeln!(out, "{} item(s) without a value", self.missing);
        }
        out
    }
}

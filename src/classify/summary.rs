//! Per-category breakdown: unique values with occurrence counts.

use super::{Category, Classification};
use rustc_hash::FxHashMap;
use std::fmt;

/// One distinct value and how many times it occurred in its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

impl fmt::Display for ValueCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        write!(f, "{} (appears {} time{})", self.value, self.count, plural)
    }
}

/// Breakdown of one category.
///
/// `entries` lists each distinct value once, in first-seen order;
/// `total` counts every occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub total: usize,
    pub entries: Vec<ValueCount>,
}

impl CategorySummary {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Summaries for all six categories, in reporting order.
pub fn summarize(classification: &Classification) -> Vec<CategorySummary> {
    classification
        .iter()
        .map(|(category, values)| CategorySummary {
            category,
            total: values.len(),
            entries: tally(values),
        })
        .collect()
}

fn tally(values: &[String]) -> Vec<ValueCount> {
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();
    let mut entries: Vec<ValueCount> = Vec::new();

    for value in values {
        match slots.get(value.as_str()) {
            Some(&slot) => entries[slot].count += 1,
            None => {
                slots.insert(value.as_str(), entries.len());
                entries.push(ValueCount {
                    value: value.clone(),
                    count: 1,
                });
            }
        }
    }

    entries
}

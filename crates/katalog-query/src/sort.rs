// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Ascending),
            "desc" => Some(Self::Descending),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Selected sort order for a list page. `field = None` preserves the
/// incoming order, which is already the store's recency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<F> {
    pub field: Option<F>,
    pub direction: SortDirection,
}

impl<F> Default for SortOrder<F> {
    fn default() -> Self {
        Self {
            field: None,
            direction: SortDirection::Ascending,
        }
    }
}

/// Canonical comparison key: NFKC + Unicode lowercase.
#[must_use]
pub fn collation_key(input: &str) -> String {
    input.nfkc().collect::<String>().to_lowercase()
}

/// Stable reorder of the whole collection by the chosen field. The
/// accessor resolves the field to its text value; rows without a text
/// value for that field are not comparable and keep their original
/// positions, while the comparable rows are reordered among the
/// remaining slots. Equal keys keep their incoming relative order in
/// both directions. Runs before pagination.
pub fn sort_rows<T: Clone, F: Copy>(
    rows: &mut [T],
    order: &SortOrder<F>,
    text_of: impl Fn(&T, F) -> Option<String>,
) {
    let Some(field) = order.field else {
        return;
    };
    let mut keyed: Vec<(usize, String)> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| text_of(row, field).map(|text| (index, collation_key(&text))))
        .collect();
    if keyed.len() <= 1 {
        return;
    }
    let direction = order.direction;
    keyed.sort_by(|a, b| {
        let by_key = match direction {
            SortDirection::Ascending => a.1.cmp(&b.1),
            SortDirection::Descending => b.1.cmp(&a.1),
        };
        match by_key {
            Ordering::Equal => a.0.cmp(&b.0),
            other => other,
        }
    });
    let mut slots: Vec<usize> = keyed.iter().map(|(index, _)| *index).collect();
    slots.sort_unstable();
    let reordered: Vec<T> = keyed.iter().map(|(index, _)| rows[*index].clone()).collect();
    for (slot, row) in slots.into_iter().zip(reordered) {
        rows[slot] = row;
    }
}

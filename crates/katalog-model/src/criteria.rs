// SPDX-License-Identifier: Apache-2.0

//! Criteria objects handed to the record-store client.
//!
//! A criteria value bundles the optional equality constraints of one kind
//! with an optional free-text term. Term matching is case-insensitive
//! substring, OR-ed across a fixed per-kind field list; the same
//! semantics are applied remotely by the store and locally by the
//! in-memory store used in tests.

use crate::animal::{AgeClass, AnimalRecord, Sex, Zone};
use crate::plant::{PlantCategory, PlantRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimalCriteria {
    pub sex: Option<Sex>,
    pub age_class: Option<AgeClass>,
    pub zone: Option<Zone>,
    pub term: Option<String>,
}

impl AnimalCriteria {
    /// An unconstrained criteria value must be served by list-all, never
    /// by an empty-filtered search.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.sex.is_none() && self.age_class.is_none() && self.zone.is_none() && self.term.is_none()
    }

    #[must_use]
    pub fn matches(&self, record: &AnimalRecord) -> bool {
        if self.sex.is_some_and(|sex| sex != record.sex) {
            return false;
        }
        if self.age_class.is_some_and(|age| age != record.age_class) {
            return false;
        }
        if self.zone.is_some_and(|zone| zone != record.zone) {
            return false;
        }
        match &self.term {
            None => true,
            Some(term) => contains_fold(
                [
                    record.owner_name.as_str(),
                    record.species.as_str(),
                    record.zone.as_label(),
                ],
                term,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlantCriteria {
    pub category: Option<PlantCategory>,
    pub term: Option<String>,
}

impl PlantCriteria {
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none() && self.term.is_none()
    }

    #[must_use]
    pub fn matches(&self, record: &PlantRecord) -> bool {
        if self.category.is_some_and(|category| category != record.category) {
            return false;
        }
        match &self.term {
            None => true,
            Some(term) => contains_fold(
                [
                    record.name.as_str(),
                    record.scientific_name.as_deref().unwrap_or(""),
                ],
                term,
            ),
        }
    }
}

fn contains_fold<'a>(fields: impl IntoIterator<Item = &'a str>, term: &str) -> bool {
    let needle = term.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

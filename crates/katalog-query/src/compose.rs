// SPDX-License-Identifier: Apache-2.0

//! Filter/search composer.
//!
//! Raw selections arrive as strings straight from the query surface; an
//! empty string is the "All" choice and clears the constraint rather
//! than matching the empty string. Non-empty selections must belong to
//! the declared label sets.

use katalog_model::{AgeClass, AnimalCriteria, PlantCategory, PlantCriteria, Sex, Zone};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeError {
    pub field: &'static str,
    pub value: String,
}

impl ComposeError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl Display for ComposeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} value: {:?}", self.field, self.value)
    }
}

impl std::error::Error for ComposeError {}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimalSelection {
    pub sex: String,
    pub age_class: String,
    pub zone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlantSelection {
    pub category: String,
}

pub fn compose_animal_criteria(
    selection: &AnimalSelection,
    term: &str,
) -> Result<AnimalCriteria, ComposeError> {
    Ok(AnimalCriteria {
        sex: optional(&selection.sex, |raw| {
            Sex::parse(raw).map_err(|_| ComposeError::new("jenis_kelamin", raw))
        })?,
        age_class: optional(&selection.age_class, |raw| {
            AgeClass::parse(raw).map_err(|_| ComposeError::new("rentang_usia", raw))
        })?,
        zone: optional(&selection.zone, |raw| {
            Zone::parse(raw).map_err(|_| ComposeError::new("lokasi", raw))
        })?,
        term: compose_term(term),
    })
}

pub fn compose_plant_criteria(
    selection: &PlantSelection,
    term: &str,
) -> Result<PlantCriteria, ComposeError> {
    Ok(PlantCriteria {
        category: optional(&selection.category, |raw| {
            PlantCategory::parse(raw).map_err(|_| ComposeError::new("jenis_tanaman", raw))
        })?,
        term: compose_term(term),
    })
}

fn optional<T>(
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, ComposeError>,
) -> Result<Option<T>, ComposeError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        parse(raw).map(Some)
    }
}

// The source surface treated any non-empty term as a search, including
// whitespace-only input; that rule is kept.
fn compose_term(term: &str) -> Option<String> {
    if term.is_empty() {
        None
    } else {
        Some(term.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_clears_every_constraint() {
        let criteria =
            compose_animal_criteria(&AnimalSelection::default(), "").expect("compose");
        assert!(criteria.is_unconstrained());
        assert_eq!(criteria.zone, None);
    }

    #[test]
    fn empty_zone_is_no_constraint_not_empty_equality() {
        let selection = AnimalSelection {
            zone: String::new(),
            ..AnimalSelection::default()
        };
        let criteria = compose_animal_criteria(&selection, "").expect("compose");
        assert_eq!(criteria.zone, None);
    }

    #[test]
    fn labels_parse_into_typed_constraints() {
        let selection = AnimalSelection {
            sex: "Jantan".to_string(),
            age_class: "Dewasa laktasi".to_string(),
            zone: "RW 3".to_string(),
        };
        let criteria = compose_animal_criteria(&selection, "sapi").expect("compose");
        assert_eq!(criteria.sex, Some(Sex::Male));
        assert_eq!(criteria.age_class, Some(AgeClass::AdultLactating));
        assert_eq!(criteria.zone, Some(Zone::Rw3));
        assert_eq!(criteria.term.as_deref(), Some("sapi"));
    }

    #[test]
    fn unknown_label_is_a_composition_error() {
        let selection = AnimalSelection {
            zone: "RW 9".to_string(),
            ..AnimalSelection::default()
        };
        let err = compose_animal_criteria(&selection, "").expect_err("compose");
        assert_eq!(err.field, "lokasi");
        assert_eq!(err.value, "RW 9");
    }

    #[test]
    fn whitespace_term_still_composes_a_search() {
        let criteria =
            compose_animal_criteria(&AnimalSelection::default(), "  ").expect("compose");
        assert_eq!(criteria.term.as_deref(), Some("  "));
        assert!(!criteria.is_unconstrained());
    }

    #[test]
    fn plant_selection_composes_category() {
        let selection = PlantSelection {
            category: "Hortikultura".to_string(),
        };
        let criteria = compose_plant_criteria(&selection, "").expect("compose");
        assert_eq!(criteria.category, Some(PlantCategory::Horticulture));
        assert_eq!(criteria.term, None);
    }
}

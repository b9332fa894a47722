// SPDX-License-Identifier: Apache-2.0

use crate::animal::ParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const PLANT_ID_MAX_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlantId(String);

impl PlantId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("plant id"));
        }
        if input.len() > PLANT_ID_MAX_LEN {
            return Err(ParseError::TooLong("plant id", PLANT_ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum PlantCategory {
    #[serde(rename = "Pangan")]
    Staple,
    #[serde(rename = "Hortikultura")]
    Horticulture,
}

impl PlantCategory {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "Pangan" => Ok(Self::Staple),
            "Hortikultura" => Ok(Self::Horticulture),
            _ => Err(ParseError::UnknownLabel(
                "plant category must be one of 'Pangan', 'Hortikultura'",
            )),
        }
    }

    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Staple => "Pangan",
            Self::Horticulture => "Hortikultura",
        }
    }
}

/// One pest or disease entry. The canonical record shape stores these as
/// structured lists; legacy flat rows are normalized into this shape at
/// the store decode boundary, where a missing position yields an empty
/// string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PestEntry {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "penyebab", default)]
    pub cause: String,
    #[serde(rename = "gejala", default)]
    pub symptoms: String,
    #[serde(rename = "pengendalian", default)]
    pub control: String,
}

impl PestEntry {
    #[must_use]
    pub fn new(name: String, cause: String, symptoms: String, control: String) -> Self {
        Self {
            name,
            cause,
            symptoms,
            control,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantRecord {
    pub id: PlantId,
    #[serde(rename = "terakhir_diperbarui")]
    pub last_updated: NaiveDate,
    #[serde(rename = "nama_tanaman")]
    pub name: String,
    #[serde(rename = "nama_latin", default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(rename = "jenis_tanaman")]
    pub category: PlantCategory,
    #[serde(rename = "hama", default)]
    pub pests: Vec<PestEntry>,
    #[serde(rename = "penyakit", default)]
    pub diseases: Vec<PestEntry>,
}

impl PlantRecord {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: PlantId,
        last_updated: NaiveDate,
        name: String,
        scientific_name: Option<String>,
        category: PlantCategory,
        pests: Vec<PestEntry>,
        diseases: Vec<PestEntry>,
    ) -> Self {
        Self {
            id,
            last_updated,
            name,
            scientific_name,
            category,
            pests,
            diseases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plant_id_rejects_empty_and_oversized() {
        assert!(PlantId::parse("").is_err());
        assert!(PlantId::parse(&"x".repeat(PLANT_ID_MAX_LEN + 1)).is_err());
        assert_eq!(PlantId::parse("tan-12").expect("parse").as_str(), "tan-12");
    }

    #[test]
    fn plant_record_decodes_structured_shape() {
        let raw = r#"{
            "id": "tan-1",
            "terakhir_diperbarui": "2024-01-15",
            "nama_tanaman": "Padi Varietas IR64",
            "jenis_tanaman": "Pangan",
            "hama": [
                {"nama": "Wereng Batang Coklat", "penyebab": "Nilaparvata lugens",
                 "gejala": "Daun menguning", "pengendalian": "Insektisida sistemik"}
            ],
            "penyakit": []
        }"#;
        let record: PlantRecord = serde_json::from_str(raw).expect("decode");
        assert_eq!(record.category, PlantCategory::Staple);
        assert_eq!(record.scientific_name, None);
        assert_eq!(record.pests.len(), 1);
        assert_eq!(record.pests[0].name, "Wereng Batang Coklat");
        assert!(record.diseases.is_empty());
    }
}

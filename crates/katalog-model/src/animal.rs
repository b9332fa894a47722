// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    TooLong(&'static str, usize),
    UnknownLabel(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::UnknownLabel(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AnimalId(i64);

impl AnimalId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl Display for AnimalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Neighborhood zone labels used by the data-entry process. The set is
/// fixed; records never carry a zone outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum Zone {
    #[serde(rename = "RW 1")]
    Rw1,
    #[serde(rename = "RW 2")]
    Rw2,
    #[serde(rename = "RW 3")]
    Rw3,
    #[serde(rename = "RW 4")]
    Rw4,
    #[serde(rename = "RW 5")]
    Rw5,
    #[serde(rename = "RW 6")]
    Rw6,
    #[serde(rename = "RW 7")]
    Rw7,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Self::Rw1,
        Self::Rw2,
        Self::Rw3,
        Self::Rw4,
        Self::Rw5,
        Self::Rw6,
        Self::Rw7,
    ];

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "RW 1" => Ok(Self::Rw1),
            "RW 2" => Ok(Self::Rw2),
            "RW 3" => Ok(Self::Rw3),
            "RW 4" => Ok(Self::Rw4),
            "RW 5" => Ok(Self::Rw5),
            "RW 6" => Ok(Self::Rw6),
            "RW 7" => Ok(Self::Rw7),
            _ => Err(ParseError::UnknownLabel("zone must be one of RW 1..RW 7")),
        }
    }

    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Rw1 => "RW 1",
            Self::Rw2 => "RW 2",
            Self::Rw3 => "RW 3",
            Self::Rw4 => "RW 4",
            Self::Rw5 => "RW 5",
            Self::Rw6 => "RW 6",
            Self::Rw7 => "RW 7",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum Sex {
    #[serde(rename = "Jantan")]
    Male,
    #[serde(rename = "Betina")]
    Female,
}

impl Sex {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "Jantan" => Ok(Self::Male),
            "Betina" => Ok(Self::Female),
            _ => Err(ParseError::UnknownLabel(
                "sex must be one of 'Jantan', 'Betina'",
            )),
        }
    }

    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Male => "Jantan",
            Self::Female => "Betina",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum AgeClass {
    #[serde(rename = "Anakan")]
    Juvenile,
    #[serde(rename = "Dewasa non laktasi")]
    AdultNonLactating,
    #[serde(rename = "Dewasa laktasi")]
    AdultLactating,
}

impl AgeClass {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "Anakan" => Ok(Self::Juvenile),
            "Dewasa non laktasi" => Ok(Self::AdultNonLactating),
            "Dewasa laktasi" => Ok(Self::AdultLactating),
            _ => Err(ParseError::UnknownLabel(
                "age class must be one of 'Anakan', 'Dewasa non laktasi', 'Dewasa laktasi'",
            )),
        }
    }

    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Juvenile => "Anakan",
            Self::AdultNonLactating => "Dewasa non laktasi",
            Self::AdultLactating => "Dewasa laktasi",
        }
    }
}

/// Disease/vaccination history. Canonically `Pernah` / `Tidak pernah`,
/// but a legacy data-entry variant stored free text in these columns.
/// Decoding is total: the canonical labels map exactly, a blank or `-`
/// value means `Tidak pernah`, any other non-empty text means `Pernah`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(from = "String")]
pub enum HistoryFlag {
    #[serde(rename = "Pernah")]
    Ever,
    #[serde(rename = "Tidak pernah")]
    Never,
}

impl HistoryFlag {
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim() {
            "Pernah" => Self::Ever,
            "Tidak pernah" | "" | "-" => Self::Never,
            _ => Self::Ever,
        }
    }

    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Ever => "Pernah",
            Self::Never => "Tidak pernah",
        }
    }
}

impl From<String> for HistoryFlag {
    fn from(raw: String) -> Self {
        Self::normalize(&raw)
    }
}

// Wire rows may carry bookkeeping columns (`created_at`, ...) added by the
// managed store; unknown fields are ignored rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnimalRecord {
    pub id: AnimalId,
    #[serde(rename = "terakhir_diperbarui")]
    pub last_updated: NaiveDate,
    #[serde(rename = "nama_pemilik")]
    pub owner_name: String,
    #[serde(rename = "lokasi")]
    pub zone: Zone,
    #[serde(rename = "jenis_hewan")]
    pub species: String,
    #[serde(rename = "jenis_kelamin")]
    pub sex: Sex,
    #[serde(rename = "rentang_usia")]
    pub age_class: AgeClass,
    #[serde(rename = "riwayat_penyakit")]
    pub disease_history: HistoryFlag,
    #[serde(rename = "riwayat_vaksin")]
    pub vaccine_history: HistoryFlag,
}

impl AnimalRecord {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: AnimalId,
        last_updated: NaiveDate,
        owner_name: String,
        zone: Zone,
        species: String,
        sex: Sex,
        age_class: AgeClass,
        disease_history: HistoryFlag,
        vaccine_history: HistoryFlag,
    ) -> Self {
        Self {
            id,
            last_updated,
            owner_name,
            zone,
            species,
            sex,
            age_class,
            disease_history,
            vaccine_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_labels_round_trip() {
        for zone in Zone::ALL {
            assert_eq!(Zone::parse(zone.as_label()).expect("parse"), zone);
        }
        assert!(Zone::parse("RW 8").is_err());
        assert!(Zone::parse("rw 1").is_err());
    }

    #[test]
    fn history_flag_normalizes_legacy_text() {
        assert_eq!(HistoryFlag::normalize("Pernah"), HistoryFlag::Ever);
        assert_eq!(HistoryFlag::normalize("Tidak pernah"), HistoryFlag::Never);
        assert_eq!(HistoryFlag::normalize(""), HistoryFlag::Never);
        assert_eq!(HistoryFlag::normalize("  -  "), HistoryFlag::Never);
        assert_eq!(HistoryFlag::normalize("Cacar pada 2023"), HistoryFlag::Ever);
    }

    #[test]
    fn animal_record_decodes_wire_names() {
        let raw = r#"{
            "id": 3,
            "terakhir_diperbarui": "2024-01-13",
            "nama_pemilik": "Ahmad Wijaya",
            "lokasi": "RW 3",
            "jenis_hewan": "Ayam",
            "jenis_kelamin": "Betina",
            "rentang_usia": "Anakan",
            "riwayat_penyakit": "Tidak pernah",
            "riwayat_vaksin": "Pernah"
        }"#;
        let record: AnimalRecord = serde_json::from_str(raw).expect("decode");
        assert_eq!(record.id, AnimalId::new(3));
        assert_eq!(record.zone, Zone::Rw3);
        assert_eq!(record.sex, Sex::Female);
        assert_eq!(record.age_class, AgeClass::Juvenile);
        assert_eq!(record.disease_history, HistoryFlag::Never);
        assert_eq!(record.vaccine_history, HistoryFlag::Ever);
    }

    #[test]
    fn animal_record_encodes_wire_labels() {
        let record = AnimalRecord::new(
            AnimalId::new(1),
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
            "Budi Santoso".to_string(),
            Zone::Rw1,
            "Sapi".to_string(),
            Sex::Female,
            AgeClass::AdultLactating,
            HistoryFlag::Ever,
            HistoryFlag::Ever,
        );
        let value = serde_json::to_value(&record).expect("encode");
        assert_eq!(value["lokasi"], "RW 1");
        assert_eq!(value["jenis_kelamin"], "Betina");
        assert_eq!(value["rentang_usia"], "Dewasa laktasi");
        assert_eq!(value["riwayat_penyakit"], "Pernah");
    }
}

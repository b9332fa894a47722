// SPDX-License-Identifier: Apache-2.0

//! Enumerated sort fields and their accessors.
//!
//! Sort fields are resolved through an explicit field-to-accessor mapping
//! rather than a runtime field-name lookup. An accessor yields the
//! field's wire text where the field is string-valued (dates as ISO
//! strings, enumerated fields as their wire labels) and `None` where it
//! is not; rows without a text value are not reordered.

use katalog_model::{AnimalRecord, PlantRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalSortField {
    Id,
    LastUpdated,
    OwnerName,
    Zone,
    Species,
    Sex,
    AgeClass,
    DiseaseHistory,
    VaccineHistory,
}

impl AnimalSortField {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "terakhir_diperbarui" => Some(Self::LastUpdated),
            "nama_pemilik" => Some(Self::OwnerName),
            "lokasi" => Some(Self::Zone),
            "jenis_hewan" => Some(Self::Species),
            "jenis_kelamin" => Some(Self::Sex),
            "rentang_usia" => Some(Self::AgeClass),
            "riwayat_penyakit" => Some(Self::DiseaseHistory),
            "riwayat_vaksin" => Some(Self::VaccineHistory),
            _ => None,
        }
    }
}

/// The numeric id is deliberately not sortable; everything else compares
/// as wire text.
#[must_use]
pub fn animal_sort_text(record: &AnimalRecord, field: AnimalSortField) -> Option<String> {
    match field {
        AnimalSortField::Id => None,
        AnimalSortField::LastUpdated => Some(record.last_updated.to_string()),
        AnimalSortField::OwnerName => Some(record.owner_name.clone()),
        AnimalSortField::Zone => Some(record.zone.as_label().to_string()),
        AnimalSortField::Species => Some(record.species.clone()),
        AnimalSortField::Sex => Some(record.sex.as_label().to_string()),
        AnimalSortField::AgeClass => Some(record.age_class.as_label().to_string()),
        AnimalSortField::DiseaseHistory => Some(record.disease_history.as_label().to_string()),
        AnimalSortField::VaccineHistory => Some(record.vaccine_history.as_label().to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantSortField {
    Id,
    LastUpdated,
    Name,
    ScientificName,
    Category,
}

impl PlantSortField {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "terakhir_diperbarui" => Some(Self::LastUpdated),
            "nama_tanaman" => Some(Self::Name),
            "nama_latin" => Some(Self::ScientificName),
            "jenis_tanaman" => Some(Self::Category),
            _ => None,
        }
    }
}

#[must_use]
pub fn plant_sort_text(record: &PlantRecord, field: PlantSortField) -> Option<String> {
    match field {
        PlantSortField::Id => Some(record.id.as_str().to_string()),
        PlantSortField::LastUpdated => Some(record.last_updated.to_string()),
        PlantSortField::Name => Some(record.name.clone()),
        PlantSortField::ScientificName => record.scientific_name.clone(),
        PlantSortField::Category => Some(record.category.as_label().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use katalog_model::{
        AgeClass, AnimalId, HistoryFlag, PlantCategory, PlantId, Sex, Zone,
    };

    #[test]
    fn animal_fields_parse_wire_names() {
        assert_eq!(
            AnimalSortField::parse("nama_pemilik"),
            Some(AnimalSortField::OwnerName)
        );
        assert_eq!(
            AnimalSortField::parse("terakhir_diperbarui"),
            Some(AnimalSortField::LastUpdated)
        );
        assert_eq!(AnimalSortField::parse("owner_name"), None);
    }

    #[test]
    fn animal_id_has_no_sort_text() {
        let record = AnimalRecord::new(
            AnimalId::new(7),
            NaiveDate::from_ymd_opt(2024, 1, 11).expect("date"),
            "Joko Susilo".to_string(),
            Zone::Rw5,
            "Kerbau".to_string(),
            Sex::Female,
            AgeClass::AdultLactating,
            HistoryFlag::Never,
            HistoryFlag::Ever,
        );
        assert_eq!(animal_sort_text(&record, AnimalSortField::Id), None);
        assert_eq!(
            animal_sort_text(&record, AnimalSortField::LastUpdated).as_deref(),
            Some("2024-01-11")
        );
        assert_eq!(
            animal_sort_text(&record, AnimalSortField::Zone).as_deref(),
            Some("RW 5")
        );
    }

    #[test]
    fn plant_scientific_name_is_optional_text() {
        let record = PlantRecord::new(
            PlantId::parse("tan-1").expect("id"),
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
            "Padi Varietas IR64".to_string(),
            None,
            PlantCategory::Staple,
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(plant_sort_text(&record, PlantSortField::ScientificName), None);
        assert_eq!(
            plant_sort_text(&record, PlantSortField::Id).as_deref(),
            Some("tan-1")
        );
    }
}

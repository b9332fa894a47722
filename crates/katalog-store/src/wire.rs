// SPDX-License-Identifier: Apache-2.0

//! Plant row normalization.
//!
//! Two row shapes are live on the `tanaman` table: the canonical
//! structured shape (`hama` / `penyakit` entry lists) and a legacy flat
//! shape (comma-delimited `potensi_*`, `gejala_*`, `pengendalian_*`
//! columns). Normalization runs once here, at the decode boundary:
//! structured columns win when present; legacy columns are split and
//! zipped by position, missing positions yielding empty strings.

use crate::{StoreError, StoreErrorCode};
use chrono::NaiveDate;
use katalog_model::{PestEntry, PlantCategory, PlantId, PlantRecord};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlantRow {
    #[serde(deserialize_with = "id_text")]
    id: String,
    #[serde(rename = "terakhir_diperbarui")]
    last_updated: NaiveDate,
    #[serde(rename = "nama_tanaman")]
    name: String,
    #[serde(rename = "nama_latin", default)]
    scientific_name: Option<String>,
    #[serde(rename = "jenis_tanaman")]
    category: PlantCategory,
    #[serde(rename = "hama", default)]
    pests: Option<Vec<PestEntry>>,
    #[serde(rename = "penyakit", default)]
    diseases: Option<Vec<PestEntry>>,
    #[serde(rename = "potensi_hama", default)]
    pest_names: Option<String>,
    #[serde(rename = "gejala_hama", default)]
    pest_symptoms: Option<String>,
    #[serde(rename = "pengendalian_hama", default)]
    pest_controls: Option<String>,
    #[serde(rename = "potensi_penyakit", default)]
    disease_names: Option<String>,
    #[serde(rename = "gejala_penyakit", default)]
    disease_symptoms: Option<String>,
    #[serde(rename = "pengendalian_penyakit", default)]
    disease_controls: Option<String>,
}

impl PlantRow {
    pub(crate) fn canonical(self) -> Result<PlantRecord, StoreError> {
        let id = PlantId::parse(&self.id)
            .map_err(|e| StoreError::new(StoreErrorCode::Decode, format!("plant id: {e}")))?;
        let structured = self.pests.is_some() || self.diseases.is_some();
        let (pests, diseases) = if structured {
            (
                self.pests.unwrap_or_default(),
                self.diseases.unwrap_or_default(),
            )
        } else {
            (
                zip_entries(&self.pest_names, &self.pest_symptoms, &self.pest_controls),
                zip_entries(
                    &self.disease_names,
                    &self.disease_symptoms,
                    &self.disease_controls,
                ),
            )
        };
        Ok(PlantRecord::new(
            id,
            self.last_updated,
            self.name,
            self.scientific_name,
            self.category,
            pests,
            diseases,
        ))
    }
}

// Legacy rows carry numeric ids, canonical rows string ids.
fn id_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

fn split_list(raw: &Option<String>) -> Vec<String> {
    raw.as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn zip_entries(
    names: &Option<String>,
    symptoms: &Option<String>,
    controls: &Option<String>,
) -> Vec<PestEntry> {
    let names = split_list(names);
    let symptoms = split_list(symptoms);
    let controls = split_list(controls);
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            PestEntry::new(
                name,
                String::new(),
                symptoms.get(index).cloned().unwrap_or_default(),
                controls.get(index).cloned().unwrap_or_default(),
            )
        })
        .collect()
}

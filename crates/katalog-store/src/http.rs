// SPDX-License-Identifier: Apache-2.0

//! PostgREST-style HTTP implementation of [`RecordStore`].
//!
//! Reads are plain GETs against `{base}/rest/v1/{table}` with the store's
//! filter grammar: `column=eq.value` for equality, and an `or=(...)`
//! group of `ilike` patterns for the free-text term. The access key is
//! carried in both the `apikey` header and as a bearer token. No request
//! timeout is set; the transport's defaults apply.

use crate::wire::PlantRow;
use crate::{RecordStore, StoreError, StoreErrorCode};
use async_trait::async_trait;
use katalog_model::{
    AnimalCriteria, AnimalId, AnimalRecord, PlantCriteria, PlantId, PlantRecord,
};
use serde::de::DeserializeOwned;
use tracing::{error, instrument};

const ANIMAL_TABLE: &str = "hewan";
const PLANT_TABLE: &str = "tanaman";
const RECENCY_ORDER: &str = "terakhir_diperbarui.desc";

const ANIMAL_SEARCH_COLUMNS: [&str; 3] = ["nama_pemilik", "jenis_hewan", "lokasi"];
const PLANT_SEARCH_COLUMNS: [&str; 2] = ["nama_tanaman", "nama_latin"];

pub struct HttpRecordStore {
    base_url: String,
    access_key: String,
    client: reqwest::Client,
}

impl HttpRecordStore {
    #[must_use]
    pub fn new(endpoint: String, access_key: String) -> Self {
        Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            access_key,
            client: reqwest::Client::new(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    #[instrument(name = "store_fetch", skip(self, params))]
    async fn fetch<T: DeserializeOwned>(
        &self,
        table: &str,
        params: Vec<(String, String)>,
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .client
            .get(self.table_url(table))
            .query(&params)
            .header("apikey", &self.access_key)
            .bearer_auth(&self.access_key)
            .send()
            .await
            .map_err(|e| {
                error!(table, "store request failed: {e}");
                StoreError::new(StoreErrorCode::Transport, format!("request failed: {e}"))
            })?;
        let status = response.status();
        if !status.is_success() {
            error!(table, %status, "store query rejected");
            return Err(StoreError::new(
                StoreErrorCode::Status,
                format!("query rejected with status {status}"),
            ));
        }
        response.json::<Vec<T>>().await.map_err(|e| {
            error!(table, "store response decode failed: {e}");
            StoreError::new(StoreErrorCode::Decode, format!("decode failed: {e}"))
        })
    }
}

fn recency_params() -> Vec<(String, String)> {
    vec![
        ("select".to_string(), "*".to_string()),
        ("order".to_string(), RECENCY_ORDER.to_string()),
    ]
}

fn term_group(columns: &[&str], term: &str) -> String {
    let patterns: Vec<String> = columns
        .iter()
        .map(|column| format!("{column}.ilike.*{term}*"))
        .collect();
    format!("({})", patterns.join(","))
}

fn animal_params(criteria: &AnimalCriteria) -> Vec<(String, String)> {
    let mut params = recency_params();
    if let Some(sex) = criteria.sex {
        params.push(("jenis_kelamin".to_string(), format!("eq.{}", sex.as_label())));
    }
    if let Some(age_class) = criteria.age_class {
        params.push((
            "rentang_usia".to_string(),
            format!("eq.{}", age_class.as_label()),
        ));
    }
    if let Some(zone) = criteria.zone {
        params.push(("lokasi".to_string(), format!("eq.{}", zone.as_label())));
    }
    if let Some(term) = &criteria.term {
        params.push(("or".to_string(), term_group(&ANIMAL_SEARCH_COLUMNS, term)));
    }
    params
}

fn plant_params(criteria: &PlantCriteria) -> Vec<(String, String)> {
    let mut params = recency_params();
    if let Some(category) = criteria.category {
        params.push((
            "jenis_tanaman".to_string(),
            format!("eq.{}", category.as_label()),
        ));
    }
    if let Some(term) = &criteria.term {
        params.push(("or".to_string(), term_group(&PLANT_SEARCH_COLUMNS, term)));
    }
    params
}

fn by_id_params(id: &str) -> Vec<(String, String)> {
    vec![
        ("select".to_string(), "*".to_string()),
        ("id".to_string(), format!("eq.{id}")),
        ("limit".to_string(), "1".to_string()),
    ]
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn list_animals(&self) -> Result<Vec<AnimalRecord>, StoreError> {
        self.fetch(ANIMAL_TABLE, recency_params()).await
    }

    async fn search_animals(
        &self,
        criteria: &AnimalCriteria,
    ) -> Result<Vec<AnimalRecord>, StoreError> {
        self.fetch(ANIMAL_TABLE, animal_params(criteria)).await
    }

    async fn animal_by_id(&self, id: AnimalId) -> Result<Option<AnimalRecord>, StoreError> {
        let rows: Vec<AnimalRecord> = self
            .fetch(ANIMAL_TABLE, by_id_params(&id.to_string()))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn list_plants(&self) -> Result<Vec<PlantRecord>, StoreError> {
        let rows: Vec<PlantRow> = self.fetch(PLANT_TABLE, recency_params()).await?;
        rows.into_iter().map(PlantRow::canonical).collect()
    }

    async fn search_plants(
        &self,
        criteria: &PlantCriteria,
    ) -> Result<Vec<PlantRecord>, StoreError> {
        let rows: Vec<PlantRow> = self.fetch(PLANT_TABLE, plant_params(criteria)).await?;
        rows.into_iter().map(PlantRow::canonical).collect()
    }

    async fn plant_by_id(&self, id: &PlantId) -> Result<Option<PlantRecord>, StoreError> {
        let rows: Vec<PlantRow> = self.fetch(PLANT_TABLE, by_id_params(id.as_str())).await?;
        rows.into_iter().next().map(PlantRow::canonical).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katalog_model::{Sex, Zone};

    #[test]
    fn list_queries_select_everything_in_recency_order() {
        let params = recency_params();
        assert_eq!(
            params,
            vec![
                ("select".to_string(), "*".to_string()),
                ("order".to_string(), "terakhir_diperbarui.desc".to_string()),
            ]
        );
    }

    #[test]
    fn animal_criteria_formats_equality_and_search_params() {
        let criteria = AnimalCriteria {
            sex: Some(Sex::Female),
            zone: Some(Zone::Rw3),
            term: Some("sapi".to_string()),
            ..AnimalCriteria::default()
        };
        let params = animal_params(&criteria);
        assert!(params.contains(&("jenis_kelamin".to_string(), "eq.Betina".to_string())));
        assert!(params.contains(&("lokasi".to_string(), "eq.RW 3".to_string())));
        assert!(params.contains(&(
            "or".to_string(),
            "(nama_pemilik.ilike.*sapi*,jenis_hewan.ilike.*sapi*,lokasi.ilike.*sapi*)"
                .to_string()
        )));
    }

    #[test]
    fn unset_constraints_emit_no_params() {
        let params = animal_params(&AnimalCriteria::default());
        assert_eq!(params.len(), 2);
        let params = plant_params(&PlantCriteria::default());
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn by_id_lookup_is_limited_to_one_row() {
        let params = by_id_params("42");
        assert!(params.contains(&("id".to_string(), "eq.42".to_string())));
        assert!(params.contains(&("limit".to_string(), "1".to_string())));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_the_endpoint() {
        let store = HttpRecordStore::new(
            "https://store.example/".to_string(),
            "anon-key".to_string(),
        );
        assert_eq!(
            store.table_url("hewan"),
            "https://store.example/rest/v1/hewan"
        );
    }
}

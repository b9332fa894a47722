// SPDX-License-Identifier: Apache-2.0

//! In-process store used by tests.
//!
//! Replicates the remote matching semantics: exact equality filters,
//! case-insensitive substring search over the per-kind field lists, and
//! recency ordering. Adds call counters plus failure/latency injection
//! for exercising the fetch lifecycle.

use crate::{RecordStore, StoreError, StoreErrorCode};
use async_trait::async_trait;
use katalog_model::{
    AnimalCriteria, AnimalId, AnimalRecord, PlantCriteria, PlantId, PlantRecord,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoryRecordStore {
    animals: Mutex<Vec<AnimalRecord>>,
    plants: Mutex<Vec<PlantRecord>>,
    pub list_calls: AtomicU64,
    pub search_calls: AtomicU64,
    fail_queries: AtomicBool,
    delays: Mutex<VecDeque<Duration>>,
}

impl MemoryRecordStore {
    #[must_use]
    pub fn with_animals(animals: Vec<AnimalRecord>) -> Self {
        Self {
            animals: Mutex::new(animals),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_plants(plants: Vec<PlantRecord>) -> Self {
        Self {
            plants: Mutex::new(plants),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_records(animals: Vec<AnimalRecord>, plants: Vec<PlantRecord>) -> Self {
        Self {
            animals: Mutex::new(animals),
            plants: Mutex::new(plants),
            ..Self::default()
        }
    }

    /// Make every subsequent query fail with a transport error.
    pub fn fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::Relaxed);
    }

    /// Queue an artificial latency; each query consumes one entry, in
    /// call order.
    pub async fn push_delay(&self, delay: Duration) {
        self.delays.lock().await.push_back(delay);
    }

    async fn pace(&self) -> Result<(), StoreError> {
        let delay = self.delays.lock().await.pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_queries.load(Ordering::Relaxed) {
            return Err(StoreError::new(
                StoreErrorCode::Transport,
                "injected query failure",
            ));
        }
        Ok(())
    }
}

fn recent_first_animals(mut rows: Vec<AnimalRecord>) -> Vec<AnimalRecord> {
    rows.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
    rows
}

fn recent_first_plants(mut rows: Vec<PlantRecord>) -> Vec<PlantRecord> {
    rows.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
    rows
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list_animals(&self) -> Result<Vec<AnimalRecord>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        self.pace().await?;
        Ok(recent_first_animals(self.animals.lock().await.clone()))
    }

    async fn search_animals(
        &self,
        criteria: &AnimalCriteria,
    ) -> Result<Vec<AnimalRecord>, StoreError> {
        self.search_calls.fetch_add(1, Ordering::Relaxed);
        self.pace().await?;
        let rows = self.animals.lock().await.clone();
        Ok(recent_first_animals(
            rows.into_iter()
                .filter(|record| criteria.matches(record))
                .collect(),
        ))
    }

    async fn animal_by_id(&self, id: AnimalId) -> Result<Option<AnimalRecord>, StoreError> {
        self.pace().await?;
        Ok(self
            .animals
            .lock()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    async fn list_plants(&self) -> Result<Vec<PlantRecord>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        self.pace().await?;
        Ok(recent_first_plants(self.plants.lock().await.clone()))
    }

    async fn search_plants(
        &self,
        criteria: &PlantCriteria,
    ) -> Result<Vec<PlantRecord>, StoreError> {
        self.search_calls.fetch_add(1, Ordering::Relaxed);
        self.pace().await?;
        let rows = self.plants.lock().await.clone();
        Ok(recent_first_plants(
            rows.into_iter()
                .filter(|record| criteria.matches(record))
                .collect(),
        ))
    }

    async fn plant_by_id(&self, id: &PlantId) -> Result<Option<PlantRecord>, StoreError> {
        self.pace().await?;
        Ok(self
            .plants
            .lock()
            .await
            .iter()
            .find(|record| &record.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use katalog_model::{AgeClass, HistoryFlag, Sex, Zone};

    fn animal(id: i64, day: u32, owner: &str, zone: Zone) -> AnimalRecord {
        AnimalRecord::new(
            AnimalId::new(id),
            NaiveDate::from_ymd_opt(2024, 1, day).expect("date"),
            owner.to_string(),
            zone,
            "Sapi".to_string(),
            Sex::Female,
            AgeClass::AdultLactating,
            HistoryFlag::Never,
            HistoryFlag::Ever,
        )
    }

    #[tokio::test]
    async fn lists_come_back_most_recent_first() {
        let store = MemoryRecordStore::with_animals(vec![
            animal(1, 11, "Budi Santoso", Zone::Rw1),
            animal(2, 15, "Siti Aminah", Zone::Rw2),
            animal(3, 13, "Ahmad Wijaya", Zone::Rw3),
        ]);
        let rows = store.list_animals().await.expect("list");
        let ids: Vec<i64> = rows.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn search_applies_equality_and_term_together() {
        let store = MemoryRecordStore::with_animals(vec![
            animal(1, 11, "Budi Santoso", Zone::Rw1),
            animal(2, 15, "Siti Aminah", Zone::Rw3),
            animal(3, 13, "Ahmad Wijaya", Zone::Rw3),
        ]);
        let criteria = AnimalCriteria {
            zone: Some(Zone::Rw3),
            term: Some("ahmad".to_string()),
            ..AnimalCriteria::default()
        };
        let rows = store.search_animals(&criteria).await.expect("search");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, AnimalId::new(3));
    }

    #[tokio::test]
    async fn by_id_distinguishes_absence_from_failure() {
        let store = MemoryRecordStore::with_animals(vec![animal(1, 11, "Budi", Zone::Rw1)]);
        assert!(store
            .animal_by_id(AnimalId::new(1))
            .await
            .expect("found")
            .is_some());
        assert!(store
            .animal_by_id(AnimalId::new(99))
            .await
            .expect("absent")
            .is_none());
        store.fail_queries(true);
        let err = store
            .animal_by_id(AnimalId::new(1))
            .await
            .expect_err("failure");
        assert_eq!(err.code, StoreErrorCode::Transport);
    }
}

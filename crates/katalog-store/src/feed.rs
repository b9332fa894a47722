// SPDX-License-Identifier: Apache-2.0

//! Fetch lifecycle for one list-page instance.
//!
//! A [`ListFeed`] owns the criteria of a single list page and publishes
//! the page's phase through a watch channel: `Idle → Loading → { Ready,
//! Failed }`, re-entering `Loading` whenever the criteria value changes.
//! Every issued fetch carries a generation tag; a completion whose tag is
//! no longer the latest issued is discarded, so a slow stale response
//! can never overwrite a newer result.

use crate::{RecordStore, StoreError};
use async_trait::async_trait;
use katalog_model::{AnimalCriteria, AnimalRecord, PlantCriteria, PlantRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedPhase<T> {
    Idle,
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> FeedPhase<T> {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }
}

/// Binds a feed to one record kind of the shared store.
#[async_trait]
pub trait CollectionSource: Send + Sync + 'static {
    type Record: Clone + Send + Sync + 'static;
    type Criteria: Clone + PartialEq + Send + Sync + 'static;

    fn is_unconstrained(criteria: &Self::Criteria) -> bool;
    async fn fetch_all(&self) -> Result<Vec<Self::Record>, StoreError>;
    async fn fetch_matching(
        &self,
        criteria: &Self::Criteria,
    ) -> Result<Vec<Self::Record>, StoreError>;
}

pub struct ListFeed<S: CollectionSource> {
    source: Arc<S>,
    criteria: Mutex<S::Criteria>,
    generation: Arc<AtomicU64>,
    phase: watch::Sender<FeedPhase<S::Record>>,
}

impl<S: CollectionSource> ListFeed<S> {
    /// Create the feed and start its first fetch immediately; the first
    /// observable phase is `Loading`. Must run inside a tokio runtime.
    #[must_use]
    pub fn spawn(source: Arc<S>, criteria: S::Criteria) -> Arc<Self> {
        let (phase, _) = watch::channel(FeedPhase::Idle);
        let feed = Arc::new(Self {
            source,
            criteria: Mutex::new(criteria),
            generation: Arc::new(AtomicU64::new(0)),
            phase,
        });
        feed.refetch();
        feed
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedPhase<S::Record>> {
        self.phase.subscribe()
    }

    #[must_use]
    pub fn current(&self) -> FeedPhase<S::Record> {
        self.phase.borrow().clone()
    }

    /// Adopt a new criteria value. An unchanged value is a no-op; a
    /// changed one re-enters `Loading` and refetches.
    pub fn set_criteria(&self, next: S::Criteria) {
        {
            let mut current = self
                .criteria
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if *current == next {
                return;
            }
            *current = next;
        }
        self.refetch();
    }

    /// Re-run the fetch under the current criteria: unconstrained
    /// criteria list everything, constrained criteria search.
    pub fn refetch(&self) {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let criteria = self
            .criteria
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        self.phase.send_replace(FeedPhase::Loading);
        let source = Arc::clone(&self.source);
        let latest = Arc::clone(&self.generation);
        let phase = self.phase.clone();
        tokio::spawn(async move {
            let outcome = if S::is_unconstrained(&criteria) {
                source.fetch_all().await
            } else {
                source.fetch_matching(&criteria).await
            };
            if latest.load(Ordering::Acquire) != generation {
                // Superseded by a later fetch; the stale result loses.
                return;
            }
            phase.send_replace(match outcome {
                Ok(records) => FeedPhase::Ready(records),
                Err(error) => FeedPhase::Failed(error.to_string()),
            });
        });
    }

    /// Wait for the first settled phase.
    pub async fn settled(&self) -> FeedPhase<S::Record> {
        let mut receiver = self.subscribe();
        loop {
            {
                let current = receiver.borrow_and_update();
                if current.is_settled() {
                    return current.clone();
                }
            }
            if receiver.changed().await.is_err() {
                return self.current();
            }
        }
    }
}

pub struct AnimalSource {
    store: Arc<dyn RecordStore>,
}

impl AnimalSource {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionSource for AnimalSource {
    type Record = AnimalRecord;
    type Criteria = AnimalCriteria;

    fn is_unconstrained(criteria: &AnimalCriteria) -> bool {
        criteria.is_unconstrained()
    }

    async fn fetch_all(&self) -> Result<Vec<AnimalRecord>, StoreError> {
        self.store.list_animals().await
    }

    async fn fetch_matching(
        &self,
        criteria: &AnimalCriteria,
    ) -> Result<Vec<AnimalRecord>, StoreError> {
        self.store.search_animals(criteria).await
    }
}

pub struct PlantSource {
    store: Arc<dyn RecordStore>,
}

impl PlantSource {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionSource for PlantSource {
    type Record = PlantRecord;
    type Criteria = PlantCriteria;

    fn is_unconstrained(criteria: &PlantCriteria) -> bool {
        criteria.is_unconstrained()
    }

    async fn fetch_all(&self) -> Result<Vec<PlantRecord>, StoreError> {
        self.store.list_plants().await
    }

    async fn fetch_matching(
        &self,
        criteria: &PlantCriteria,
    ) -> Result<Vec<PlantRecord>, StoreError> {
        self.store.search_plants(criteria).await
    }
}

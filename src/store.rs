//! In-memory record store.
//!
//! Records live in a single ordered `Vec` guarded by one lock. Every operation
//! first waits out the configured artificial delay, then takes the lock and
//! performs its whole search-then-mutate step while holding it. The delay is
//! not under the lock, so concurrent requests wait in parallel and apply their
//! effects in the order their delays elapse.

use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{Record, RecordFields, RecordId};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

pub fn seed_records() -> Vec<Record> {
    vec![
        Record::named(1, "Beni"),
        Record::named(2, "James"),
        Record::named(3, "Bryan"),
    ]
}

#[derive(Debug)]
pub struct RecordStore {
    records: RwLock<Vec<Record>>,
    delay: Duration,
}

impl RecordStore {
    pub fn new(delay: Duration) -> Self {
        Self::with_records(Vec::new(), delay)
    }

    /// Store holding the three startup records.
    pub fn seeded(delay: Duration) -> Self {
        Self::with_records(seed_records(), delay)
    }

    pub fn with_records(records: Vec<Record>, delay: Duration) -> Self {
        Self {
            records: RwLock::new(records),
            delay,
        }
    }

    pub async fn list(&self) -> Vec<Record> {
        self.simulate_latency().await;
        self.records.read().await.clone()
    }

    /// Appends a record built from `fields` and returns it with its new id.
    pub async fn create(&self, fields: RecordFields) -> Record {
        self.simulate_latency().await;

        let mut records = self.records.write().await;
        let record = Record::new(next_id(&records), fields);
        records.push(record.clone());

        debug!(id = record.id, "record created");
        record
    }

    /// Replaces every non-id field of the first record with `id`.
    /// Fields missing from `fields` are dropped, not merged.
    pub async fn update(&self, id: RecordId, fields: RecordFields) -> Option<Record> {
        self.simulate_latency().await;

        let mut records = self.records.write().await;
        let slot = records.iter_mut().find(|record| record.id == id)?;
        *slot = Record::new(id, fields);

        debug!(id, "record replaced");
        Some(slot.clone())
    }

    pub async fn delete(&self, id: RecordId) -> Option<Record> {
        self.simulate_latency().await;

        let mut records = self.records.write().await;
        let index = records.iter().position(|record| record.id == id)?;
        let removed = records.remove(index);

        debug!(id, "record deleted");
        Some(removed)
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// One past the id of the last record, or 1 for an empty store. Depends on the
/// current tail, so removing the tail lets its id be handed out again.
fn next_id(records: &[Record]) -> RecordId {
    records
        .last()
        .map_or(1, |record| record.id.saturating_add(1))
}

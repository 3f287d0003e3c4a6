use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::query::ReservationQuery;
use crate::domain::model::{Reservation, ReservationDraft, SlotTime};
use crate::domain::ports::{ReservationStorage, STORAGE_KEY};
use crate::utils::error::{ReservaError, Result};
use crate::utils::validation::Validate;

/// Authoritative owner of the reservation collection. Constructed once via
/// [`ReservationStore::open`] and handed out by reference; callers hold only
/// transient copies of the records and re-query after every mutation.
///
/// Mutations serialize through a single lock held across the check and the
/// persistence write, so two concurrent bookings cannot both pass the
/// availability check before either commits.
pub struct ReservationStore<S: ReservationStorage> {
    storage: S,
    records: Mutex<Vec<Reservation>>,
}

impl<S: ReservationStorage> ReservationStore<S> {
    /// Loads the persisted collection. A key that was never written is an
    /// empty collection; malformed JSON is discarded with a warning rather
    /// than taking the store down. Read failures surface to the caller.
    pub async fn open(storage: S) -> Result<Self> {
        let records: Vec<Reservation> = match storage.load().await? {
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("discarding malformed '{}' data: {}", STORAGE_KEY, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        tracing::debug!("opened store with {} reservations", records.len());
        Ok(Self {
            storage,
            records: Mutex::new(records),
        })
    }

    /// Current collection, insertion order preserved.
    pub async fn list_all(&self) -> Vec<Reservation> {
        self.records.lock().await.clone()
    }

    /// True iff no existing reservation occupies `date` at `start_time`.
    pub async fn is_slot_available(&self, date: NaiveDate, start_time: SlotTime) -> bool {
        let records = self.records.lock().await;
        slot_is_free(&records, date, start_time)
    }

    /// Books a slot. The availability check runs again here, under the
    /// mutation lock, so a slot taken between form-open and submit is still
    /// rejected. The whole collection is rewritten on success (last write
    /// wins, the existing store format).
    pub async fn create(&self, draft: ReservationDraft) -> Result<Reservation> {
        draft.validate()?;

        let mut records = self.records.lock().await;
        if !slot_is_free(&records, draft.date, draft.start_time) {
            return Err(ReservaError::SlotConflict {
                date: draft.date,
                start_time: draft.start_time,
            });
        }

        let reservation = draft.into_reservation(Uuid::new_v4().to_string());
        records.push(reservation.clone());

        if let Err(e) = self.persist(&records).await {
            records.pop();
            return Err(e);
        }

        tracing::debug!(id = %reservation.id, "created reservation");
        Ok(reservation)
    }

    /// Removes the reservation with `id`, or reports `NotFound`.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.lock().await;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ReservaError::NotFound { id: id.to_string() })?;

        let removed = records.remove(index);
        if let Err(e) = self.persist(&records).await {
            records.insert(index, removed);
            return Err(e);
        }

        tracing::debug!(id, "deleted reservation");
        Ok(())
    }

    /// Applies the query's filters (all ANDed) over the collection,
    /// preserving insertion order.
    pub async fn query(&self, filter: &ReservationQuery) -> Vec<Reservation> {
        let records = self.records.lock().await;
        records.iter().filter(|r| filter.matches(r)).cloned().collect()
    }

    async fn persist(&self, records: &[Reservation]) -> Result<()> {
        let data = serde_json::to_vec_pretty(records)?;
        tracing::debug!("writing {} bytes to '{}'", data.len(), STORAGE_KEY);
        self.storage.save(&data).await
    }
}

// Only the start of a booking identifies its slot; a longer booking does not
// block later start times inside its interval.
fn slot_is_free(records: &[Reservation], date: NaiveDate, start_time: SlotTime) -> bool {
    !records
        .iter()
        .any(|r| r.date == date && r.start_time == start_time)
}

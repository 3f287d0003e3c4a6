pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{LocalStorage, MemoryStorage};
pub use crate::core::export::to_csv;
pub use crate::core::query::{DateRange, ReservationQuery};
pub use crate::core::store::ReservationStore;
pub use domain::model::{Reservation, ReservationDraft, SlotTime, SportType};
pub use domain::ports::{ReservationStorage, STORAGE_KEY};
pub use utils::error::{ReservaError, Result};

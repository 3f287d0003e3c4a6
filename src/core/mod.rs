pub mod export;
pub mod query;
pub mod store;

pub use crate::domain::model::{Reservation, ReservationDraft, SlotTime, SportType};
pub use crate::domain::ports::ReservationStorage;
pub use crate::utils::error::Result;

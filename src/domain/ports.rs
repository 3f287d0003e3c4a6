use crate::utils::error::Result;

/// Logical key the reservation collection lives under, whatever the backend
/// maps it to (a file name, a map key, a database row).
pub const STORAGE_KEY: &str = "reservations";

/// Persistence port for the reservation collection. `load` yields `None`
/// when the key has never been written; the store treats that as an empty
/// collection. Serialization stays on the store's side, so a backend only
/// moves bytes.
pub trait ReservationStorage: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn save(&self, data: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;
}

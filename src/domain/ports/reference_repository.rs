use crate::domain::entities::reference_store::ReferenceStore;
use crate::domain::error::DomainError;

/// Durable storage for a whole reference store.
pub trait ReferenceRepository: Send + Sync {
    /// Replaces whatever was stored before with `store`, vectors included.
    fn save(&self, store: &ReferenceStore) -> Result<(), DomainError>;

    /// `Ok(None)` when nothing has been stored yet. Data that exists but
    /// cannot be read back is `DomainError::StorageCorrupt`.
    fn load(&self) -> Result<Option<ReferenceStore>, DomainError>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

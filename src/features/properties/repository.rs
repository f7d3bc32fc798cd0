use crate::features::properties::models::{District, Property, Room};
use crate::features::properties::schemas::{DistrictIn, NewProperty, NewRoom};
use crate::utilities::errors::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// District persistence. Districts are write-once: the save path always
/// inserts a fresh row, even when an identical name/price pair is already
/// stored, and no update or delete flow exists.
#[async_trait]
pub trait DistrictRepository: Send + Sync {
    async fn save(&self, district: DistrictIn) -> Result<District, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<District>, AppError>;
}

/// Property rows, without their district or rooms. Composition into full
/// aggregates happens in the service layer.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn save(&self, property: NewProperty) -> Result<Property, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, AppError>;
    async fn find_all(&self) -> Result<Vec<Property>, AppError>;
    /// Removes the row, reporting whether it existed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

/// Room rows, always scoped to an owning property.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Persists the batch, returning the stored rows in input order.
    async fn save_all(&self, rooms: Vec<NewRoom>) -> Result<Vec<Room>, AppError>;
    async fn find_by_property(&self, property_id: Uuid) -> Result<Vec<Room>, AppError>;
    /// Removes every room of the property, returning how many were removed.
    async fn delete_by_property(&self, property_id: Uuid) -> Result<u64, AppError>;
}

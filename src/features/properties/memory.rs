//! In-memory backends. Rows live in plain vectors behind a [`RwLock`] and
//! reads clone rows out, so repeated lookups return equal values rather than
//! shared instances. Suited to tests and to embedding without a database.

use crate::features::properties::models::{District, Property, Room};
use crate::features::properties::repository::{
    DistrictRepository, PropertyRepository, RoomRepository,
};
use crate::features::properties::schemas::{DistrictIn, NewProperty, NewRoom};
use crate::utilities::errors::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryDistrictRepository {
    rows: RwLock<Vec<District>>,
}

impl InMemoryDistrictRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DistrictRepository for InMemoryDistrictRepository {
    async fn save(&self, district: DistrictIn) -> Result<District, AppError> {
        let row = District {
            id: Uuid::new_v4(),
            name: district.name,
            price_per_m2: district.price_per_m2,
        };
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<District>, AppError> {
        Ok(self.rows.read().await.iter().find(|d| d.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryPropertyRepository {
    rows: RwLock<Vec<Property>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn save(&self, property: NewProperty) -> Result<Property, AppError> {
        let row = Property {
            id: Uuid::new_v4(),
            name: property.name,
            district_id: property.district_id,
        };
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, AppError> {
        Ok(self.rows.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Property>, AppError> {
        Ok(self.rows.read().await.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryRoomRepository {
    rows: RwLock<Vec<Room>>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn save_all(&self, rooms: Vec<NewRoom>) -> Result<Vec<Room>, AppError> {
        let stored: Vec<Room> = rooms
            .into_iter()
            .map(|room| Room {
                id: Uuid::new_v4(),
                property_id: Some(room.property_id),
                name: room.name,
                length: room.length,
                width: room.width,
            })
            .collect();
        self.rows.write().await.extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn find_by_property(&self, property_id: Uuid) -> Result<Vec<Room>, AppError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| r.property_id == Some(property_id))
            .cloned()
            .collect())
    }

    async fn delete_by_property(&self, property_id: Uuid) -> Result<u64, AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.property_id != Some(property_id));
        Ok((before - rows.len()) as u64)
    }
}

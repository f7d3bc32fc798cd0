use std::sync::Arc;

use crate::features::properties::models::{Property, Room};
use crate::features::properties::repository::{
    DistrictRepository, PropertyRepository, RoomRepository,
};
use crate::features::properties::schemas::{NewProperty, NewRoom, PropertyIn, PropertyOut};
use crate::utilities::errors::AppError;
use bigdecimal::BigDecimal;
use tracing::{debug, warn};
use uuid::Uuid;

/// Orchestrates the three repositories into property aggregates. Stateless;
/// backends are injected through the constructor and shared behind [`Arc`].
pub struct PropertyService {
    districts: Arc<dyn DistrictRepository>,
    properties: Arc<dyn PropertyRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl PropertyService {
    pub fn new(
        districts: Arc<dyn DistrictRepository>,
        properties: Arc<dyn PropertyRepository>,
        rooms: Arc<dyn RoomRepository>,
    ) -> Self {
        Self {
            districts,
            properties,
            rooms,
        }
    }

    /// Persists a property aggregate: the district first, then the property
    /// row pointing at it, then the rooms attached to the fresh property id.
    ///
    /// The district is always inserted anew, never looked up, so repeated
    /// saves with identical district values produce distinct rows. The three
    /// writes run sequentially without a surrounding transaction; a failed
    /// room batch leaves the district and property rows behind.
    pub async fn save(&self, property: PropertyIn) -> Result<PropertyOut, AppError> {
        let PropertyIn {
            name,
            district,
            rooms,
        } = property;

        let district = self.districts.save(district).await?;
        let saved = self
            .properties
            .save(NewProperty {
                name,
                district_id: district.id,
            })
            .await?;

        let rooms: Vec<NewRoom> = rooms
            .into_iter()
            .map(|room| room.attach(saved.id))
            .collect();
        let rooms = self.rooms.save_all(rooms).await?;

        debug!("saved property {} with {} rooms", saved.id, rooms.len());

        Ok(PropertyOut {
            id: saved.id,
            name: saved.name,
            district,
            rooms,
        })
    }

    /// Fetches a property aggregate with its district and rooms. Rooms come
    /// back with the owning reference cleared so the aggregate does not point
    /// at itself.
    pub async fn find_by_id(&self, id: Uuid) -> Result<PropertyOut, AppError> {
        let property = self
            .properties
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFoundError {
                resource: "property",
                id,
            })?;

        self.assemble(property).await
    }

    /// Sum of `length * width` over the property's rooms. A property without
    /// rooms totals 0.0.
    pub async fn total_area(&self, id: Uuid) -> Result<f64, AppError> {
        let property = self.find_by_id(id).await?;

        Ok(property.rooms.iter().map(Room::area).sum())
    }

    /// Total price of a property: the summed room area multiplied by the
    /// district's price per square meter, carried out in decimal arithmetic.
    pub async fn price_by_id(&self, id: Uuid) -> Result<BigDecimal, AppError> {
        let property = self.find_by_id(id).await?;
        let total_area: f64 = property.rooms.iter().map(Room::area).sum();

        Ok(BigDecimal::try_from(total_area)? * property.district.price_per_m2)
    }

    /// Every stored property, composed the same way as [`Self::find_by_id`].
    pub async fn list(&self) -> Result<Vec<PropertyOut>, AppError> {
        let properties = self.properties.find_all().await?;

        let mut out = Vec::with_capacity(properties.len());
        for property in properties {
            out.push(self.assemble(property).await?);
        }

        Ok(out)
    }

    /// Deletes a property and its rooms. The district row stays behind:
    /// districts are never shared between properties and nothing else in the
    /// flow removes them.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let property = self
            .properties
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFoundError {
                resource: "property",
                id,
            })?;

        let removed = self.rooms.delete_by_property(property.id).await?;
        self.properties.delete(property.id).await?;

        debug!("removed property {} and {} rooms", property.id, removed);

        Ok(())
    }

    async fn assemble(&self, property: Property) -> Result<PropertyOut, AppError> {
        let district = match self.districts.find_by_id(property.district_id).await? {
            Some(district) => district,
            None => {
                warn!(
                    "property {} references missing district {}",
                    property.id, property.district_id
                );
                return Err(AppError::NotFoundError {
                    resource: "district",
                    id: property.district_id,
                });
            }
        };

        let mut rooms = self.rooms.find_by_property(property.id).await?;
        for room in &mut rooms {
            room.property_id = None;
        }

        Ok(PropertyOut {
            id: property.id,
            name: property.name,
            district,
            rooms,
        })
    }
}

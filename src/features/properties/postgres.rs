//! Postgres backends over an injected [`PgPool`]. Pool construction, TLS and
//! schema migration stay with the caller; the expected tables are:
//!
//! ```sql
//! CREATE TABLE districts (
//!     id UUID PRIMARY KEY,
//!     name TEXT NOT NULL,
//!     price_per_m2 NUMERIC NOT NULL
//! );
//!
//! CREATE TABLE properties (
//!     id UUID PRIMARY KEY,
//!     name TEXT NOT NULL,
//!     district_id UUID NOT NULL REFERENCES districts (id)
//! );
//!
//! CREATE TABLE rooms (
//!     id UUID PRIMARY KEY,
//!     property_id UUID NOT NULL REFERENCES properties (id),
//!     name TEXT NOT NULL,
//!     length DOUBLE PRECISION NOT NULL,
//!     width DOUBLE PRECISION NOT NULL
//! );
//! ```

use crate::features::properties::models::{District, Property, Room};
use crate::features::properties::repository::{
    DistrictRepository, PropertyRepository, RoomRepository,
};
use crate::features::properties::schemas::{DistrictIn, NewProperty, NewRoom};
use crate::utilities::errors::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

pub struct PgDistrictRepository {
    pool: PgPool,
}

impl PgDistrictRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DistrictRepository for PgDistrictRepository {
    async fn save(&self, district: DistrictIn) -> Result<District, AppError> {
        let row = sqlx::query_as::<_, District>(
            r#"
            INSERT INTO districts (id, name, price_per_m2)
            VALUES ($1, $2, $3)
            RETURNING id, name, price_per_m2
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&district.name)
        .bind(&district.price_per_m2)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<District>, AppError> {
        let row = sqlx::query_as::<_, District>(
            r#"
            SELECT id, name, price_per_m2
            FROM districts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}

pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn save(&self, property: NewProperty) -> Result<Property, AppError> {
        let row = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (id, name, district_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, district_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&property.name)
        .bind(property.district_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, AppError> {
        let row = sqlx::query_as::<_, Property>(
            r#"
            SELECT id, name, district_id
            FROM properties
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Property>, AppError> {
        let rows = sqlx::query_as::<_, Property>(
            r#"
            SELECT id, name, district_id
            FROM properties
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn save_all(&self, rooms: Vec<NewRoom>) -> Result<Vec<Room>, AppError> {
        // One insert per row so the returned order matches the input order.
        let mut stored = Vec::with_capacity(rooms.len());
        for room in rooms {
            let row = sqlx::query_as::<_, Room>(
                r#"
                INSERT INTO rooms (id, property_id, name, length, width)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, property_id, name, length, width
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(room.property_id)
            .bind(&room.name)
            .bind(room.length)
            .bind(room.width)
            .fetch_one(&self.pool)
            .await?;
            stored.push(row);
        }

        debug!("inserted {} room rows", stored.len());

        Ok(stored)
    }

    async fn find_by_property(&self, property_id: Uuid) -> Result<Vec<Room>, AppError> {
        let rows = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, property_id, name, length, width
            FROM rooms
            WHERE property_id = $1
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete_by_property(&self, property_id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM rooms WHERE property_id = $1")
            .bind(property_id)
            .execute(&self.pool)
            .await?;

        debug!(
            "deleted {} room rows for property {}",
            result.rows_affected(),
            property_id
        );

        Ok(result.rows_affected())
    }
}

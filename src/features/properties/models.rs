use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow, Deserialize, Serialize, PartialEq, Default, Debug, Clone)]
#[sqlx(default)]
pub struct District {
    pub id: Uuid,
    pub name: String,
    pub price_per_m2: BigDecimal,
}

#[derive(FromRow, Deserialize, Serialize, PartialEq, Default, Debug, Clone)]
#[sqlx(default)]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub district_id: Uuid,
}

#[derive(FromRow, Deserialize, Serialize, PartialEq, Default, Debug, Clone)]
#[sqlx(default)]
pub struct Room {
    pub id: Uuid,
    // Owning property key. Always set in storage, cleared on the read path so
    // returned aggregates do not point back at themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<Uuid>,
    pub name: String,
    pub length: f64,
    pub width: f64,
}

impl Room {
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

use crate::features::properties::models::{District, Room};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -- =====================
// -- IN
// -- =====================
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct DistrictIn {
    pub name: String,
    pub price_per_m2: BigDecimal,
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct RoomIn {
    pub name: String,
    pub length: f64,
    pub width: f64,
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct PropertyIn {
    pub name: String,
    pub district: DistrictIn,
    pub rooms: Vec<RoomIn>,
}

// -- =====================
// -- NEW (rows ready to insert)
// -- =====================
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub name: String,
    pub district_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct NewRoom {
    pub property_id: Uuid,
    pub name: String,
    pub length: f64,
    pub width: f64,
}

impl RoomIn {
    pub fn attach(self, property_id: Uuid) -> NewRoom {
        NewRoom {
            property_id,
            name: self.name,
            length: self.length,
            width: self.width,
        }
    }
}

// -- =====================
// -- OUT
// -- =====================
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct PropertyOut {
    pub id: Uuid,
    pub name: String,
    pub district: District,
    pub rooms: Vec<Room>,
}

use std::sync::Arc;

use crate::features::properties::memory::{
    InMemoryDistrictRepository, InMemoryPropertyRepository, InMemoryRoomRepository,
};
use crate::features::properties::repository::RoomRepository;
use crate::features::properties::schemas::{DistrictIn, PropertyIn, RoomIn};
use crate::features::properties::service::PropertyService;
use crate::utilities::errors::AppError;
use bigdecimal::BigDecimal;
use serde_json::json;
use uuid::Uuid;

fn setup() -> (PropertyService, Arc<InMemoryRoomRepository>) {
    let rooms = Arc::new(InMemoryRoomRepository::new());
    let service = PropertyService::new(
        Arc::new(InMemoryDistrictRepository::new()),
        Arc::new(InMemoryPropertyRepository::new()),
        rooms.clone(),
    );
    (service, rooms)
}

fn dec(value: &str) -> BigDecimal {
    value.parse().unwrap()
}

fn room(name: &str, length: f64, width: f64) -> RoomIn {
    RoomIn {
        name: name.to_string(),
        length,
        width,
    }
}

fn sample_property() -> PropertyIn {
    PropertyIn {
        name: "Casa Laguna".to_string(),
        district: DistrictIn {
            name: "Riverside".to_string(),
            price_per_m2: dec("97.00"),
        },
        rooms: vec![
            room("Bedroom", 8.00, 2.50),
            room("Kitchen", 10.00, 3.75),
            room("Bathroom", 4.50, 3.00),
        ],
    }
}

fn second_property() -> PropertyIn {
    PropertyIn {
        name: "Loft Allende".to_string(),
        district: DistrictIn {
            name: "Centro".to_string(),
            price_per_m2: dec("120.50"),
        },
        rooms: vec![room("Studio", 5.00, 4.00)],
    }
}

#[tokio::test]
async fn save_assigns_ids_and_keeps_input_values() {
    let (service, _) = setup();

    let saved = service.save(sample_property()).await.unwrap();

    assert_ne!(saved.id, Uuid::nil());
    assert_ne!(saved.district.id, Uuid::nil());
    assert_eq!(saved.name, "Casa Laguna");
    assert_eq!(saved.district.name, "Riverside");
    assert_eq!(saved.district.price_per_m2, dec("97.00"));

    let names: Vec<&str> = saved.rooms.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Bedroom", "Kitchen", "Bathroom"]);
    assert_eq!(saved.rooms[0].length, 8.00);
    assert_eq!(saved.rooms[0].width, 2.50);

    let mut ids: Vec<Uuid> = saved.rooms.iter().map(|r| r.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn save_attaches_every_room_to_the_new_property() {
    let (service, _) = setup();

    let saved = service.save(sample_property()).await.unwrap();

    for room in &saved.rooms {
        assert_eq!(room.property_id, Some(saved.id));
    }
}

#[tokio::test]
async fn every_save_inserts_a_fresh_district() {
    let (service, _) = setup();

    let first = service.save(sample_property()).await.unwrap();
    let second = service.save(sample_property()).await.unwrap();

    assert_ne!(first.district.id, second.district.id);
    assert_eq!(first.district.name, second.district.name);
    assert_eq!(first.district.price_per_m2, second.district.price_per_m2);
}

#[tokio::test]
async fn find_by_id_returns_the_composed_aggregate() {
    let (service, _) = setup();
    let saved = service.save(sample_property()).await.unwrap();

    let found = service.find_by_id(saved.id).await.unwrap();

    assert_eq!(found.id, saved.id);
    assert_eq!(found.name, saved.name);
    assert_eq!(found.district, saved.district);

    let names: Vec<&str> = found.rooms.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Bedroom", "Kitchen", "Bathroom"]);
    assert!(found.rooms.iter().all(|r| r.property_id.is_none()));
}

#[tokio::test]
async fn find_by_id_is_repeatable() {
    let (service, _) = setup();
    let saved = service.save(sample_property()).await.unwrap();

    let first = service.find_by_id(saved.id).await.unwrap();
    let second = service.find_by_id(saved.id).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn find_by_id_of_an_unknown_property_is_not_found() {
    let (service, _) = setup();
    let saved = service.save(sample_property()).await.unwrap();
    let missing = Uuid::new_v4();

    let err = service.find_by_id(missing).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFoundError { resource: "property", id } if id == missing
    ));

    // The failed lookup must not disturb what is stored.
    assert_eq!(service.list().await.unwrap().len(), 1);
    assert!(service.find_by_id(saved.id).await.is_ok());
}

#[tokio::test]
async fn total_area_sums_every_room() {
    let (service, _) = setup();
    let saved = service.save(sample_property()).await.unwrap();

    let total = service.total_area(saved.id).await.unwrap();

    assert_eq!(total, 71.0);
}

#[tokio::test]
async fn total_area_of_a_roomless_property_is_zero() {
    let (service, _) = setup();
    let mut property = sample_property();
    property.rooms.clear();
    let saved = service.save(property).await.unwrap();

    let total = service.total_area(saved.id).await.unwrap();

    assert_eq!(total, 0.0);
}

#[tokio::test]
async fn total_area_of_an_unknown_property_is_not_found() {
    let (service, _) = setup();
    let missing = Uuid::new_v4();

    let err = service.total_area(missing).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFoundError { resource: "property", id } if id == missing
    ));
}

#[tokio::test]
async fn price_multiplies_total_area_by_district_price() {
    let (service, _) = setup();
    let saved = service.save(sample_property()).await.unwrap();

    let price = service.price_by_id(saved.id).await.unwrap();

    assert_eq!(price, dec("6887.00"));
}

#[tokio::test]
async fn price_of_a_roomless_property_is_zero() {
    let (service, _) = setup();
    let mut property = sample_property();
    property.rooms.clear();
    let saved = service.save(property).await.unwrap();

    let price = service.price_by_id(saved.id).await.unwrap();

    assert_eq!(price, dec("0"));
}

#[tokio::test]
async fn price_of_an_unknown_property_is_not_found() {
    let (service, _) = setup();
    let missing = Uuid::new_v4();

    let err = service.price_by_id(missing).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFoundError { resource: "property", id } if id == missing
    ));
}

#[tokio::test]
async fn detached_rooms_serialize_without_an_owner_key() {
    let (service, _) = setup();
    let saved = service.save(sample_property()).await.unwrap();

    let found = service.find_by_id(saved.id).await.unwrap();
    let value = serde_json::to_value(&found.rooms[0]).unwrap();
    assert!(value.get("property_id").is_none());
    assert_eq!(value["name"], json!("Bedroom"));

    // Straight out of save the owner is still attached, and serialized.
    let value = serde_json::to_value(&saved.rooms[0]).unwrap();
    assert_eq!(value["property_id"], json!(saved.id));
}

#[tokio::test]
async fn room_batches_keep_order_and_property_scope() {
    let (service, rooms) = setup();

    let first = service.save(sample_property()).await.unwrap();
    let second = service.save(second_property()).await.unwrap();

    let stored = rooms.find_by_property(first.id).await.unwrap();
    let names: Vec<&str> = stored.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Bedroom", "Kitchen", "Bathroom"]);
    assert!(stored.iter().all(|r| r.property_id == Some(first.id)));

    let stored = rooms.find_by_property(second.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Studio");
}

#[tokio::test]
async fn list_returns_every_property_composed() {
    let (service, _) = setup();
    service.save(sample_property()).await.unwrap();
    service.save(second_property()).await.unwrap();

    let listed = service.list().await.unwrap();

    assert_eq!(listed.len(), 2);
    for entry in &listed {
        let direct = service.find_by_id(entry.id).await.unwrap();
        assert_eq!(*entry, direct);
    }
}

#[tokio::test]
async fn remove_deletes_the_property_and_its_rooms() {
    let (service, rooms) = setup();
    let saved = service.save(sample_property()).await.unwrap();

    service.remove(saved.id).await.unwrap();

    let err = service.find_by_id(saved.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFoundError { .. }));
    assert!(rooms.find_by_property(saved.id).await.unwrap().is_empty());
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_of_an_unknown_property_is_not_found() {
    let (service, _) = setup();
    service.save(sample_property()).await.unwrap();
    let missing = Uuid::new_v4();

    let err = service.remove(missing).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::NotFoundError { resource: "property", id } if id == missing
    ));
    assert_eq!(service.list().await.unwrap().len(), 1);
}

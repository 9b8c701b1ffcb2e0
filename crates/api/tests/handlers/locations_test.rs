use std::sync::Arc;

use axum::http::StatusCode;
use mockall::predicate;
use openhours_api::{ApiState, handlers::locations::{INVALID_DAY_MESSAGE, resolve_day}};
use openhours_core::{
    errors::LocationError,
    models::{
        availability::AvailabilityResponse,
        day::DayOfWeek,
        location::{Location, NewLocation},
    },
};
use openhours_store::{LocationStore, mock::MockLocationStore};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, monday, new_location, server_for, t};

fn ids(response: &AvailabilityResponse) -> Vec<u32> {
    response.locations.iter().map(|l| l.id).collect()
}

#[rstest]
#[case("monday", vec![1, 2, 4, 7, 8, 9, 10])]
#[case("Saturday", vec![1, 2, 3, 4, 5, 7, 8, 9, 10])]
#[case("SUNDAY", vec![4, 8, 9])]
#[tokio::test]
async fn test_available_locations_for_seed_catalog(#[case] day: &str, #[case] expected: Vec<u32>) {
    let ctx = TestContext::seeded().await;

    let response = ctx
        .server()
        .get("/api/locations/available")
        .add_query_param("day", day)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: AvailabilityResponse = response.json();
    assert_eq!(ids(&body), expected);
    assert_eq!(body.total_count, expected.len());
    assert!(body.locations.iter().all(|l| l.is_available));
}

#[tokio::test]
async fn test_available_locations_message_and_wire_shape() {
    let ctx = TestContext::seeded().await;

    let body: Value = ctx
        .server()
        .get("/api/locations/available")
        .add_query_param("day", "sunday")
        .await
        .json();

    assert_eq!(
        body["message"],
        "Found 3 locations available between 10 AM and 1 PM on Sunday"
    );
    assert_eq!(body["totalCount"], 3);
    assert_eq!(
        body["locations"][0],
        json!({
            "id": 4,
            "name": "Mega Mart",
            "type": "Supermarket",
            "address": "101 Broadway",
            "openTime": "09:00:00",
            "closeTime": "21:00:00",
            "isAvailableBetween10And1": true
        })
    );
}

#[tokio::test]
async fn test_available_locations_empty_catalog() {
    let ctx = TestContext::with_locations(&[]).await;

    let body: AvailabilityResponse = ctx
        .server()
        .get("/api/locations/available")
        .add_query_param("day", "Wednesday")
        .await
        .json();

    assert!(body.locations.is_empty());
    assert_eq!(body.total_count, 0);
    assert_eq!(
        body.message,
        "No locations available between 10 AM and 1 PM on Wednesday"
    );
}

#[tokio::test]
async fn test_available_locations_defaults_to_today() {
    let ctx = TestContext::seeded().await;

    for path in ["/api/locations/available", "/api/locations/available?day="] {
        let response = ctx.server().get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: AvailabilityResponse = response.json();
        let mentions_a_day = DayOfWeek::ALL
            .iter()
            .any(|day| body.message.ends_with(&format!("on {day}")));
        assert!(mentions_a_day, "unexpected message: {}", body.message);
    }
}

#[rstest]
#[case("Funday")]
#[case("mon")]
#[case("7")]
#[tokio::test]
async fn test_available_locations_rejects_invalid_day(#[case] day: &str) {
    let ctx = TestContext::seeded().await;

    let response = ctx
        .server()
        .get("/api/locations/available")
        .add_query_param("day", day)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], INVALID_DAY_MESSAGE);
}

#[test]
fn test_resolve_day() {
    assert_eq!(resolve_day(None, DayOfWeek::Friday).unwrap(), DayOfWeek::Friday);
    assert_eq!(resolve_day(Some(""), DayOfWeek::Friday).unwrap(), DayOfWeek::Friday);
    assert_eq!(resolve_day(Some("tuesday"), DayOfWeek::Friday).unwrap(), DayOfWeek::Tuesday);
    assert!(matches!(
        resolve_day(Some("tues"), DayOfWeek::Friday),
        Err(LocationError::Validation(_))
    ));
}

#[tokio::test]
async fn test_get_location_by_id() {
    let ctx = TestContext::seeded().await;

    let response = ctx.server().get("/api/locations/3").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let location: Location = response.json();
    assert_eq!(location.id, 3);
    assert_eq!(location.name, "Style Cuts");
    assert_eq!(location.available_time_slots.len(), 6);
}

#[tokio::test]
async fn test_get_location_not_found() {
    let ctx = TestContext::seeded().await;

    let response = ctx.server().get("/api/locations/999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Location with ID 999 not found");
}

#[tokio::test]
async fn test_add_location_assigns_next_id_and_persists() {
    let ctx = TestContext::seeded().await;
    let server = ctx.server();

    let response = server
        .post("/api/locations")
        .json(&json!({
            "id": 500,
            "name": "Corner Shop",
            "type": "Shop",
            "address": "1 High St",
            "availableTimeSlots": [
                { "dayOfWeek": "Monday", "openTime": "08:00:00", "closeTime": "20:00:00" }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.header("location"), "/api/locations/11");
    let created: Location = response.json();
    assert_eq!(created.id, 11);
    assert_eq!(created.name, "Corner Shop");

    let fetched: Location = server.get("/api/locations/11").await.json();
    assert_eq!(fetched, created);

    let on_disk: Vec<Location> = serde_json::from_str(
        &std::fs::read_to_string(ctx.dir.path().join("locations.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(on_disk.last(), Some(&created));
}

#[tokio::test]
async fn test_added_location_shows_up_as_available() {
    let ctx = TestContext::with_locations(&[]).await;
    let server = ctx.server();

    server
        .post("/api/locations")
        .json(&new_location("Early Bird", monday(t(9, 0), t(18, 0))))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/locations")
        .json(&new_location("Late Riser", monday(t(11, 0), t(18, 0))))
        .await
        .assert_status(StatusCode::CREATED);

    let body: AvailabilityResponse = server
        .get("/api/locations/available")
        .add_query_param("day", "monday")
        .await
        .json();

    assert_eq!(ids(&body), vec![1]);
    assert!(body.message.contains("Found 1"));
}

#[rstest]
#[case(json!({ "name": "", "type": "Shop", "address": "x",
    "availableTimeSlots": [{ "dayOfWeek": "Monday", "openTime": "08:00:00", "closeTime": "20:00:00" }] }),
    "Location name is required")]
#[case(json!({ "name": "No Hours", "type": "Shop", "address": "x", "availableTimeSlots": [] }),
    "At least one time slot is required")]
#[case(json!({ "name": "No Hours", "type": "Shop", "address": "x" }),
    "At least one time slot is required")]
#[tokio::test]
async fn test_add_location_validation(#[case] payload: Value, #[case] expected: &str) {
    let ctx = TestContext::seeded().await;

    let response = ctx.server().post("/api/locations").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], expected);
    assert_eq!(ctx.store.snapshot().await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_store_failure_is_a_generic_500() {
    let mut store = MockLocationStore::new();
    store
        .expect_snapshot()
        .times(1)
        .returning(|| Err(eyre::eyre!("disk unavailable")));

    let server = server_for(ApiState::new(Arc::new(store), "unused.csv"));
    let response = server
        .get("/api/locations/available")
        .add_query_param("day", "monday")
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "An error occurred while processing your request");
}

#[tokio::test]
async fn test_get_location_uses_store_lookup() {
    let mut store = MockLocationStore::new();
    store
        .expect_get()
        .with(predicate::eq(42))
        .times(1)
        .returning(|id| {
            Ok(Some(Location::from_new(
                id,
                NewLocation {
                    name: "Mocked".to_string(),
                    kind: "Shop".to_string(),
                    address: "Nowhere".to_string(),
                    available_time_slots: monday(t(9, 0), t(17, 0)),
                },
            )))
        });

    let server = server_for(ApiState::new(Arc::new(store), "unused.csv"));
    let location: Location = server.get("/api/locations/42").await.json();

    assert_eq!(location.id, 42);
    assert_eq!(location.name, "Mocked");
}

#[tokio::test]
async fn test_invalid_payload_is_not_appended() {
    let mut store = MockLocationStore::new();
    store.expect_append().never();

    let server = server_for(ApiState::new(Arc::new(store), "unused.csv"));
    let response = server
        .post("/api/locations")
        .json(&new_location("", monday(t(9, 0), t(17, 0))))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_id_is_a_json_400() {
    let ctx = TestContext::seeded().await;

    let response = ctx.server().get("/api/locations/abc").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[rstest]
#[case::unknown_slot_day(json!({ "name": "Odd Hours", "type": "Shop", "address": "x",
    "availableTimeSlots": [{ "dayOfWeek": "Funday", "openTime": "08:00:00", "closeTime": "20:00:00" }] }))]
#[case::bad_time(json!({ "name": "Odd Hours", "type": "Shop", "address": "x",
    "availableTimeSlots": [{ "dayOfWeek": "Monday", "openTime": "8 o'clock", "closeTime": "20:00:00" }] }))]
#[case::wrong_shape(json!(["not", "an", "object"]))]
#[tokio::test]
async fn test_undecodable_payload_is_a_json_400(#[case] payload: Value) {
    let ctx = TestContext::seeded().await;

    let response = ctx.server().post("/api/locations").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert_eq!(ctx.store.snapshot().await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_non_json_body_is_a_json_400() {
    let ctx = TestContext::seeded().await;

    let response = ctx.server().post("/api/locations").text("name=Corner Shop").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

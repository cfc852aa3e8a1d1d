use super::*;
use time::macros::datetime;

#[test]
fn create_trip_request_serializes_exact_payload_shape() {
    let request = CreateTripRequest {
        destination: "Florianópolis".to_owned(),
        starts_at: datetime!(2024-07-10 0:00 UTC),
        ends_at: datetime!(2024-07-15 0:00 UTC),
        emails_to_invite: vec!["ana@example.com".to_owned(), "bo@example.com".to_owned()],
        owner_name: "Diego".to_owned(),
        owner_email: "diego@example.com".to_owned(),
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "destination": "Florianópolis",
            "starts_at": "2024-07-10T00:00:00Z",
            "ends_at": "2024-07-15T00:00:00Z",
            "emails_to_invite": ["ana@example.com", "bo@example.com"],
            "owner_name": "Diego",
            "owner_email": "diego@example.com",
        })
    );
}

#[test]
fn create_trip_response_reads_camel_case_trip_id() {
    let response: CreateTripResponse = serde_json::from_str(r#"{"tripId":"abc-123"}"#).unwrap();
    assert_eq!(response.trip_id, "abc-123");
}

#[test]
fn create_trip_response_rejects_missing_trip_id() {
    assert!(serde_json::from_str::<CreateTripResponse>(r#"{"trip_id":"abc"}"#).is_err());
}

#[test]
fn create_activity_request_serializes_title_and_occurs_at() {
    let request = CreateActivityRequest { title: "Dinner".to_owned(), occurs_at: "2024-07-10T20:00".to_owned() };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "title": "Dinner", "occurs_at": "2024-07-10T20:00" })
    );
}

#[test]
fn trip_envelope_parses_millisecond_timestamps() {
    let body = r#"{"trip":{"id":"t1","destination":"Lisbon","starts_at":"2024-07-10T00:00:00.000Z","ends_at":"2024-07-12T00:00:00.000Z","is_confirmed":true}}"#;
    let envelope: TripEnvelope = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.trip.destination, "Lisbon");
    assert_eq!(envelope.trip.starts_at, datetime!(2024-07-10 0:00 UTC));
    assert_eq!(envelope.trip.ends_at, datetime!(2024-07-12 0:00 UTC));
    assert!(envelope.trip.is_confirmed);
}

#[test]
fn trip_is_confirmed_defaults_to_false() {
    let body = r#"{"id":"t1","destination":"Lisbon","starts_at":"2024-07-10T00:00:00Z","ends_at":"2024-07-12T00:00:00Z"}"#;
    let trip: Trip = serde_json::from_str(body).unwrap();
    assert!(!trip.is_confirmed);
}

#[test]
fn activities_envelope_keeps_day_grouping() {
    let body = r#"{"activities":[
        {"date":"2024-07-10T00:00:00.000Z","activities":[
            {"id":"a1","title":"Museum","occurs_at":"2024-07-10T10:00:00.000Z"}
        ]},
        {"date":"2024-07-11T00:00:00.000Z","activities":[]}
    ]}"#;
    let envelope: ActivitiesEnvelope = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.activities.len(), 2);
    assert_eq!(envelope.activities[0].activities[0].title, "Museum");
    assert_eq!(envelope.activities[0].activities[0].occurs_at, datetime!(2024-07-10 10:00 UTC));
    assert!(envelope.activities[1].activities.is_empty());
}

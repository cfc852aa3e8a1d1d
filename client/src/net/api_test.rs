use super::*;

#[test]
fn trips_endpoint_appends_collection_path() {
    assert_eq!(trips_endpoint("http://localhost:3333"), "http://localhost:3333/trips");
}

#[test]
fn trip_endpoint_formats_expected_path() {
    assert_eq!(trip_endpoint("http://api.test", "t-9"), "http://api.test/trips/t-9");
}

#[test]
fn trip_activities_endpoint_formats_expected_path() {
    assert_eq!(
        trip_activities_endpoint("http://api.test", "t-9"),
        "http://api.test/trips/t-9/activities"
    );
}

#[test]
fn api_error_messages_include_status() {
    assert_eq!(ApiError::Status(422).to_string(), "trip service responded with status 422");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

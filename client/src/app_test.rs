use super::*;

#[test]
fn trip_path_uses_returned_identifier() {
    assert_eq!(trip_path("4f1c"), "/trips/4f1c");
}

use super::*;

#[test]
fn confirmation_summary_includes_destination_and_dates() {
    assert_eq!(
        confirmation_summary(" Lisbon ", Some("Jul 10 to Jul 15")),
        "To confirm the trip to Lisbon on Jul 10 to Jul 15, fill in your details below."
    );
}

#[test]
fn confirmation_summary_without_dates() {
    assert_eq!(
        confirmation_summary("Lisbon", None),
        "To confirm the trip to Lisbon, fill in your details below."
    );
}

use super::*;

fn draft(title: &str, occurs_at: &str) -> ActivityDraft {
    ActivityDraft { title: title.to_owned(), occurs_at: occurs_at.to_owned() }
}

#[test]
fn validate_passes_raw_input_through() {
    let request = draft(" Surf lesson ", "2024-07-11T09:30").validate().unwrap();
    assert_eq!(request.title, "Surf lesson");
    assert_eq!(request.occurs_at, "2024-07-11T09:30");
}

#[test]
fn validate_requires_title() {
    assert_eq!(draft("  ", "2024-07-11T09:30").validate(), Err(DraftError::MissingTitle));
}

#[test]
fn validate_requires_occurs_at() {
    assert_eq!(draft("Surf", "").validate(), Err(DraftError::MissingOccursAt));
}

#[test]
fn validate_rejects_unparseable_occurs_at() {
    assert_eq!(draft("Surf", "tomorrow morning").validate(), Err(DraftError::InvalidOccursAt));
}

use super::*;

#[test]
fn guests_summary_prompts_when_empty() {
    assert_eq!(guests_summary(0), "Who will be on the trip?");
}

#[test]
fn guests_summary_counts_invitees() {
    assert_eq!(guests_summary(1), "1 person invited");
    assert_eq!(guests_summary(3), "3 people invited");
}

/// Reason a draft is not ready to be submitted.
///
/// Pages log these and abort the submission without user-facing feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("destination is required")]
    MissingDestination,
    #[error("trip start and end dates are required")]
    MissingDates,
    #[error("at least one guest must be invited")]
    NoGuests,
    #[error("owner name and email are required")]
    MissingOwner,
    #[error("activity title is required")]
    MissingTitle,
    #[error("activity date and time are required")]
    MissingOccursAt,
    #[error("activity date and time are not valid")]
    InvalidOccursAt,
}

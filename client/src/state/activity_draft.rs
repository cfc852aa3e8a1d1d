//! Form state of the register-activity modal.

#[cfg(test)]
#[path = "activity_draft_test.rs"]
mod activity_draft_test;

use super::draft_error::DraftError;
use crate::net::types::CreateActivityRequest;
use crate::util::dates;

/// Unsaved activity: a title and the raw `datetime-local` input value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityDraft {
    pub title: String,
    pub occurs_at: String,
}

impl ActivityDraft {
    /// Build the `POST /trips/{trip_id}/activities` body.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] when the title or time is empty, or the time
    /// is not a `datetime-local` value.
    pub fn validate(&self) -> Result<CreateActivityRequest, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let occurs_at = self.occurs_at.trim();
        if occurs_at.is_empty() {
            return Err(DraftError::MissingOccursAt);
        }
        if dates::parse_datetime_local(occurs_at).is_none() {
            return Err(DraftError::InvalidOccursAt);
        }
        Ok(CreateActivityRequest { title: title.to_owned(), occurs_at: occurs_at.to_owned() })
    }
}

//! In-memory draft of the trip being created.
//!
//! DESIGN
//! ======
//! The draft is the single source of truth for every step of the create-trip
//! form. Components write into it through a shared `RwSignal`; `validate`
//! is the only path from a draft to a wire request.

#[cfg(test)]
#[path = "trip_draft_test.rs"]
mod trip_draft_test;

use time::Date;

use super::draft_error::DraftError;
use crate::net::types::CreateTripRequest;
use crate::util::dates;

/// Start and end day picked for the trip. Either bound may still be unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl DateRange {
    pub fn set_from(&mut self, date: Option<Date>) {
        self.from = date;
        self.normalize();
    }

    pub fn set_to(&mut self, date: Option<Date>) {
        self.to = date;
        self.normalize();
    }

    /// Both bounds, once the range is complete.
    pub fn bounds(&self) -> Option<(Date, Date)> {
        Some((self.from?, self.to?))
    }

    /// `Jul 10 to Jul 15`, or `None` while either bound is missing.
    pub fn label(&self) -> Option<String> {
        let (from, to) = self.bounds()?;
        Some(format!("{} to {}", dates::short_label(from), dates::short_label(to)))
    }

    // An end before the start is read as the user picking the days in reverse.
    fn normalize(&mut self) {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if to < from {
                self.from = Some(to);
                self.to = Some(from);
            }
        }
    }
}

/// Outcome of [`TripDraft::add_email`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailChange {
    Added,
    Duplicate,
    Ignored,
}

/// Unsaved create-trip form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripDraft {
    pub destination: String,
    pub dates: DateRange,
    pub owner_name: String,
    pub owner_email: String,
    pub emails_to_invite: Vec<String>,
}

impl TripDraft {
    /// Append an invitee. Blank input and already-invited addresses are no-ops.
    pub fn add_email(&mut self, raw: &str) -> EmailChange {
        let email = raw.trim();
        if email.is_empty() {
            return EmailChange::Ignored;
        }
        if self.emails_to_invite.iter().any(|e| e == email) {
            return EmailChange::Duplicate;
        }
        self.emails_to_invite.push(email.to_owned());
        EmailChange::Added
    }

    pub fn remove_email(&mut self, email: &str) {
        self.emails_to_invite.retain(|e| e != email);
    }

    /// Build the `POST /trips` body, or report the first missing field.
    ///
    /// Fields are checked in form order: destination, dates, guests, owner.
    ///
    /// # Errors
    ///
    /// Returns the [`DraftError`] for the first required field that is empty.
    pub fn validate(&self) -> Result<CreateTripRequest, DraftError> {
        let destination = self.destination.trim();
        if destination.is_empty() {
            return Err(DraftError::MissingDestination);
        }
        let (from, to) = self.dates.bounds().ok_or(DraftError::MissingDates)?;
        if self.emails_to_invite.is_empty() {
            return Err(DraftError::NoGuests);
        }
        let owner_name = self.owner_name.trim();
        let owner_email = self.owner_email.trim();
        if owner_name.is_empty() || owner_email.is_empty() {
            return Err(DraftError::MissingOwner);
        }

        Ok(CreateTripRequest {
            destination: destination.to_owned(),
            starts_at: dates::utc_midnight(from),
            ends_at: dates::utc_midnight(to),
            emails_to_invite: self.emails_to_invite.clone(),
            owner_name: owner_name.to_owned(),
            owner_email: owner_email.to_owned(),
        })
    }
}

//! State of the trip-details page.

#[cfg(test)]
#[path = "trip_details_test.rs"]
mod trip_details_test;

use crate::net::types::{ActivityDay, Trip};
use crate::util::dates;

/// Loaded trip, its activities, and the activity modal flag.
#[derive(Clone, Debug, Default)]
pub struct TripDetailsState {
    pub trip: Option<Trip>,
    pub activities: Vec<ActivityDay>,
    pub loading: bool,
    pub error: Option<String>,
    pub activity_modal_open: bool,
}

impl TripDetailsState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_loaded(&mut self, trip: Trip, activities: Vec<ActivityDay>) {
        self.trip = Some(trip);
        self.activities = activities;
        self.loading = false;
        self.error = None;
    }

    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn open_activity_modal(&mut self) {
        self.activity_modal_open = true;
    }

    pub fn close_activity_modal(&mut self) {
        self.activity_modal_open = false;
    }

    /// `Jul 10 to Jul 15` for the loaded trip.
    pub fn dates_label(&self) -> Option<String> {
        let trip = self.trip.as_ref()?;
        Some(format!(
            "{} to {}",
            dates::short_label(trip.starts_at.date()),
            dates::short_label(trip.ends_at.date())
        ))
    }

    pub fn activity_count(&self) -> usize {
        self.activities.iter().map(|day| day.activities.len()).sum()
    }
}

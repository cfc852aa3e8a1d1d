//! Open/close state of the multi-step create-trip form.

#[cfg(test)]
#[path = "create_trip_flow_test.rs"]
mod create_trip_flow_test;

/// Which steps and modals of the create-trip page are showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreateTripFlow {
    /// Second step revealed; destination and dates are locked while set.
    pub guest_input_open: bool,
    pub guest_modal_open: bool,
    pub confirm_modal_open: bool,
    /// A `POST /trips` is in flight.
    pub submitting: bool,
}

impl CreateTripFlow {
    pub fn open_guest_input(&mut self) {
        self.guest_input_open = true;
    }

    pub fn close_guest_input(&mut self) {
        self.guest_input_open = false;
    }

    pub fn open_guest_modal(&mut self) {
        self.guest_modal_open = true;
    }

    pub fn close_guest_modal(&mut self) {
        self.guest_modal_open = false;
    }

    pub fn open_confirm_modal(&mut self) {
        self.confirm_modal_open = true;
    }

    pub fn close_confirm_modal(&mut self) {
        self.confirm_modal_open = false;
    }

    /// Mark a submission as started. Returns `false` if one is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

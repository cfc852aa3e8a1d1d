//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form steps and modals. They receive the page's
//! draft/flow signals as props and report user intent through callbacks.

pub mod button;
pub mod confirm_trip_modal;
pub mod create_activity_modal;
pub mod destination_and_date_step;
pub mod invite_guests_modal;
pub mod invite_guests_step;

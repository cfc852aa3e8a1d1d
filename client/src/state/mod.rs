//! Client-side form and page state.
//!
//! DESIGN
//! ======
//! State is split by concern (`trip_draft`, `create_trip_flow`,
//! `activity_draft`, `trip_details`) so components depend on small focused
//! models. All of it is transient: nothing here outlives the page.

pub mod activity_draft;
pub mod create_trip_flow;
pub mod draft_error;
pub mod trip_details;
pub mod trip_draft;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and date handling
//! from page and component logic to improve reuse and testability.

pub mod browser;
pub mod config;
pub mod dates;

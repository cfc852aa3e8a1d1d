//! Networking modules for the remote trip API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and `types` defines the request/response
//! bodies exchanged with the trip service.

pub mod api;
pub mod types;

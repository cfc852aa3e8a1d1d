//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and async orchestration and delegates
//! rendering details to `components`.

pub mod create_trip;
pub mod trip_details;

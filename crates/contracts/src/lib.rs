//! Shared request/response types for the analytics backend.
//!
//! The backend is an external service; these types describe its JSON shapes
//! and normalise sloppy numeric cells once, at the deserialization boundary.

pub mod dashboards;
pub mod shared;
pub mod usecases;

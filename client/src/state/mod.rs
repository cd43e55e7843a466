//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! `assist` drives the chat column and detail panel, `discovery` drives the
//! sidebar and discovery sections.

pub mod assist;
pub mod discovery;
pub mod slices;

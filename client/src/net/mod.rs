//! Networking modules for the assistant backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the two REST calls, `error` types their failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod types;

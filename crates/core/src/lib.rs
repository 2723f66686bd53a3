//! Shared domain primitives for the CaseTrack workspace.
//!
//! Holds the types and errors that both the database layer and the API
//! layer depend on. No I/O happens here.

pub mod error;
pub mod types;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod client_repo;
pub mod document_repo;
pub mod matter_repo;

pub use client_repo::ClientRepo;
pub use document_repo::DocumentRepo;
pub use matter_repo::MatterRepo;

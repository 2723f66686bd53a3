//! Request handlers, one module per entity.

pub mod client;
pub mod document;
pub mod matter;

//! Multi-step admin operations spanning object storage and the row store.
//!
//! Workflows take the capability traits directly so they can be driven by
//! the handlers and by tests with in-memory fakes alike.

pub mod gallery;
pub mod upload;

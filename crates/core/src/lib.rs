//! Domain building blocks for the thinkLab Studios site server.
//!
//! This crate has no I/O: it holds the shared error type, id/timestamp
//! aliases, section labels, the gallery filter and the upload helpers so the
//! database, backend and API crates can all depend on it.

pub mod error;
pub mod gallery;
pub mod sections;
pub mod types;
pub mod upload;

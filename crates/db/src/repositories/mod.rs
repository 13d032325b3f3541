//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod website_image_repo;

pub use website_image_repo::WebsiteImageRepo;

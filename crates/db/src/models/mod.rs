//! Row models and DTOs.

pub mod website_image;

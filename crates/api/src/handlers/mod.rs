pub mod auth;
pub mod dashboard;
pub mod images;
pub mod pages;
pub mod public;

//! Session gate extractors for the admin area.
//!
//! - [`session::RequireSession`] -- admin API calls; rejects with 401 JSON.
//! - [`session::PageSession`] -- admin pages; redirects to the login page.

pub mod session;

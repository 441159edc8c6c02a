// WME Agency Site - Core
//
// This crate serves the agency marketing site: the contact page document and
// its static assets, plus a small JSON API (health check, office directory,
// contact-form submission).

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;

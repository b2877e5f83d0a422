//! Nexus web client and common exports.
//!
//! A Dioxus single-page app for the campus community platform: communities,
//! events, leaderboards and profiles, backed by the Nexus REST API.

pub mod app;
pub mod app_root;
pub mod error;

pub use app::{components, pages, routes};
pub use app::routes::Routes;

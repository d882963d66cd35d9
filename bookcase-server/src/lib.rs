//! # bookcase-server
//!
//! HTTP surface of the bookcase catalog service.
//!
//! Routing, parameter binding, status mapping, and the activity-recording
//! middleware live here; everything behind the handlers is the typed
//! operation contract of `bookcase-core`. The process entry point owns the
//! store clients and injects them through [`state::AppState`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

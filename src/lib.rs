//! First-order thermal step-response simulator with a small web front end.

/// HTTP pages and the JSON calculation endpoint.
#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
pub mod io;
pub mod logging;
pub mod scenario;
/// Step-response calculator, usable without the web layer.
pub mod sim;

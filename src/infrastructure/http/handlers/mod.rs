//! HTTP Handlers

mod api;
mod not_found;
mod payload;

pub use api::*;
pub use not_found::*;
pub use payload::*;

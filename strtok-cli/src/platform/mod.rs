//! Platform - presentation of results
//!
//! All terminal formatting lives here; the core never prints.

pub mod render;

pub use render::render;

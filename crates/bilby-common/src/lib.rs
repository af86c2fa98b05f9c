//! Common utilities for the Bilby toolkit.
//!
//! This crate provides shared infrastructure used alongside the selector
//! builder:
//! - **Geometry** - simple value objects such as [`geometry::Rectangle`]
//! - **JSON** - serialize/deserialize passthrough over `serde_json`

pub mod geometry;
pub mod json;

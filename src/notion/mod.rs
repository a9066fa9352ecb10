//! Notion destination database

pub mod client;
pub mod index;
pub mod properties;

pub use client::*;
pub use index::*;
pub use properties::{PropertyBuilder, PropertyValue};

//! HTTP connection management

pub mod http;

pub use http::*;

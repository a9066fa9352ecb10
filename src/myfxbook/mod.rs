//! Myfxbook source account API

pub mod client;

pub use client::*;

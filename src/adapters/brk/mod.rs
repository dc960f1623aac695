//! Bitcoin Research Kit Adapter
//!
//! HTTP metric source backed by a BRK instance's date-indexed vector API.

pub mod client;

pub use client::{BrkClient, BrkConfig, DEFAULT_API_BASE};

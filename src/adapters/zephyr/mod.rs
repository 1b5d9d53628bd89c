//! Zephyr ZAPI adapter: HTTP client plus wire-record boundary mapping.

pub mod client;
mod models;

pub use client::ZephyrClient;

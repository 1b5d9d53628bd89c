//! Adapters implementing the domain ports against external services.

pub mod zephyr;

pub use zephyr::ZephyrClient;

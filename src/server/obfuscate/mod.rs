// Obfuscation forwarding module

// Endpoint configuration
#[cfg(feature = "server")]
pub mod config;

// HTTP client for the external service
#[cfg(feature = "server")]
pub mod services;

// Server handlers
pub mod handlers;
pub use handlers::*;

/// Top level client owning the session and every service
pub mod client;
/// Application configuration module
pub mod config;
/// Cancellation and deadline context for requests
pub mod context;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing the service implementations
pub mod services;

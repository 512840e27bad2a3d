/// Authentication service interface
pub mod auth;
/// Organization service interface
pub mod organization;
/// Repository service interface
pub mod repository;
/// Tag service interface
pub mod tag;
/// User service interface
pub mod user;
/// Webhook service interface
pub mod webhook;

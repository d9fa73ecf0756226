//! Application service layer - use cases, config, authentication

pub mod app;
pub mod auth;
pub mod config;
pub mod repository;

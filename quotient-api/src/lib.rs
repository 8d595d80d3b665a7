//! # Quotient API Server Library
//!
//! This library provides the core functionality for the Quotient API server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: Route handlers and the named-route table

pub mod app;
pub mod config;
pub mod error;
pub mod routes;

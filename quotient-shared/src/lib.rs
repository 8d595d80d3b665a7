//! # Quotient Shared Library
//!
//! This crate contains the types and database utilities shared between the
//! Quotient API server and the worker.
//!
//! ## Module Organization
//!
//! - `models`: Database models
//! - `db`: Connection pool and migration runner

pub mod db;
pub mod models;

/// Current version of the Quotient shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Database models
///
/// - `user`: User accounts

pub mod user;

pub use user::{CreateUser, User};

//! # Quotient Worker Library
//!
//! Task definitions and the registration boundary for the Quotient worker.
//! The queue/broker that schedules invocations is an external collaborator;
//! this crate only defines what a task is, which tasks exist, and how a
//! runtime dispatches one by name.
//!
//! ## Modules
//!
//! - `tasks`: The `Task` trait, error taxonomy, and task implementations
//! - `registry`: Name-keyed task registry used by the external runtime
//!
//! ## Example
//!
//! ```no_run
//! use quotient_worker::registry::TaskRegistry;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = TaskRegistry::with_builtin_tasks();
//! let result = registry.invoke("divide", json!({ "x": 10, "y": 2 })).await?;
//! assert_eq!(result.as_f64(), Some(5.0));
//! # Ok(())
//! # }
//! ```

pub mod registry;
pub mod tasks;

/// Task definitions
///
/// A task is a named unit of deferred work invoked by an external queue
/// runtime. Task bodies are synchronous and allowed to block; the registry
/// confines them to the blocking thread pool when dispatching.
///
/// # Tasks
///
/// - **divide**: waits a fixed delay, then computes a quotient

pub mod divide;
pub mod task_trait;

// Re-export main types
pub use divide::DivideTask;
pub use task_trait::{Task, TaskError, TaskResult};

/// Core Task trait and types
///
/// This module defines the contract that all worker tasks implement. The
/// invocation contract (how arguments arrive, how results are serialized)
/// belongs to the external queue runtime; tasks only see JSON in and JSON
/// out.
///
/// # Task Contract
///
/// All tasks must:
/// 1. Implement the `Task` trait
/// 2. Accept JSON arguments and return a JSON result
/// 3. Surface failures as `TaskError` — no local retry or recovery
///
/// Task bodies are synchronous and may block their thread (sleep, I/O).
/// Dispatchers are expected to run them on a blocking-capable thread; see
/// `TaskRegistry::invoke`.
///
/// # Example
///
/// ```
/// use quotient_worker::tasks::{Task, TaskResult};
/// use serde_json::Value as JsonValue;
///
/// struct EchoTask;
///
/// impl Task for EchoTask {
///     fn name(&self) -> &str {
///         "echo"
///     }
///
///     fn run(&self, args: JsonValue) -> TaskResult<JsonValue> {
///         Ok(args)
///     }
/// }
/// ```
use serde_json::Value as JsonValue;

/// Task error types
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Invalid task arguments
    #[error("Invalid task arguments: {0}")]
    InvalidArguments(String),

    /// No task registered under the requested name
    #[error("Unknown task: {0}")]
    UnknownTask(String),

    /// Task execution failed
    #[error("Task execution failed: {0}")]
    ExecutionFailed(String),
}

/// Task result type alias
pub type TaskResult<T> = Result<T, TaskError>;

/// Core Task trait
///
/// All worker tasks implement this trait.
pub trait Task: Send + Sync {
    /// Returns the task name
    ///
    /// Used for registry lookup and logging.
    fn name(&self) -> &str;

    /// Executes the task with the given arguments
    ///
    /// Synchronous by design: task bodies inherited their blocking nature
    /// from the worker model, and callers dispatch them off the async
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns a `TaskError` on failure; the caller inherits whatever
    /// failure policy the external queue runtime defines.
    fn run(&self, args: JsonValue) -> TaskResult<JsonValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(TaskError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            TaskError::UnknownTask("frobnicate".to_string()).to_string(),
            "Unknown task: frobnicate"
        );
        assert_eq!(
            TaskError::InvalidArguments("missing x".to_string()).to_string(),
            "Invalid task arguments: missing x"
        );
    }
}

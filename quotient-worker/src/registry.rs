/// Task registry
///
/// The registration boundary between task definitions and the external
/// queue runtime: the Rust counterpart of a task-registration decorator.
/// Tasks are registered under their name once at startup; the runtime
/// dispatches invocations through `invoke`.
///
/// # Example
///
/// ```no_run
/// use quotient_worker::registry::TaskRegistry;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = TaskRegistry::with_builtin_tasks();
///
/// let result = registry.invoke("divide", json!({ "x": 10, "y": 2 })).await?;
/// assert_eq!(result.as_f64(), Some(5.0));
/// # Ok(())
/// # }
/// ```
use crate::tasks::{DivideTask, Task, TaskError, TaskResult};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;

/// Name-keyed task registry
pub struct TaskRegistry {
    tasks: HashMap<String, Arc<dyn Task>>,
}

impl TaskRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        TaskRegistry {
            tasks: HashMap::new(),
        }
    }

    /// Creates a registry with all built-in tasks registered
    pub fn with_builtin_tasks() -> Self {
        let mut registry = TaskRegistry::new();
        registry.register(Arc::new(DivideTask::new()));
        registry
    }

    /// Registers a task under its own name
    ///
    /// Registering a second task with the same name replaces the first.
    pub fn register(&mut self, task: Arc<dyn Task>) {
        tracing::debug!(task = task.name(), "Registered task");
        self.tasks.insert(task.name().to_string(), task);
    }

    /// Looks up a task by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Task>> {
        self.tasks.get(name).cloned()
    }

    /// Returns the names of all registered tasks
    pub fn names(&self) -> Vec<&str> {
        self.tasks.keys().map(String::as_str).collect()
    }

    /// Invokes a task by name
    ///
    /// Task bodies are synchronous and may block, so the invocation runs on
    /// tokio's blocking thread pool; the async runtime keeps making progress
    /// while the task sleeps.
    ///
    /// # Errors
    ///
    /// - `TaskError::UnknownTask` if no task is registered under `name`
    /// - whatever error the task itself returns
    /// - `TaskError::ExecutionFailed` if the task panics
    pub async fn invoke(&self, name: &str, args: JsonValue) -> TaskResult<JsonValue> {
        let task = self
            .get(name)
            .ok_or_else(|| TaskError::UnknownTask(name.to_string()))?;

        tracing::info!(task = name, "Invoking task");

        tokio::task::spawn_blocking(move || task.run(args))
            .await
            .map_err(|e| TaskError::ExecutionFailed(format!("Task panicked: {}", e)))?
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Deferred divide task
///
/// Waits a fixed delay, then computes a quotient. The execution order is
/// fixed: emit one diagnostic log line, sleep, then divide. The delay is
/// non-cancellable and blocks the executing thread for its full duration,
/// including when the invocation is going to fail.
///
/// # Arguments (JSON)
///
/// ```json
/// {
///   "x": 10,    // dividend
///   "y": 2      // divisor
/// }
/// ```
///
/// # Errors
///
/// - `TaskError::DivisionByZero` when `y` is 0
/// - `TaskError::InvalidArguments` when the arguments are missing or
///   non-numeric
///
/// No retry, timeout, or backoff: the invoking queue runtime inherits its
/// own failure policy.
///
/// # Example
///
/// ```
/// use quotient_worker::tasks::{DivideTask, Task};
/// use serde_json::json;
/// use std::time::Duration;
///
/// let task = DivideTask::with_delay(Duration::from_millis(10));
/// let result = task.run(json!({ "x": 10, "y": 2 })).unwrap();
/// assert_eq!(result.as_f64(), Some(5.0));
/// ```
use crate::tasks::{Task, TaskError, TaskResult};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::thread;
use std::time::Duration;

/// Delay applied before every division (5 seconds in production)
pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

/// Divide task arguments
#[derive(Debug, Clone, Deserialize)]
struct DivideArgs {
    /// Dividend
    x: f64,

    /// Divisor
    y: f64,
}

/// Deferred divide task implementation
pub struct DivideTask {
    /// Delay before the division is performed
    ///
    /// Defaults to `DEFAULT_DELAY`; shortened in tests.
    delay: Duration,
}

impl DivideTask {
    /// Creates a divide task with the production delay
    pub fn new() -> Self {
        DivideTask {
            delay: DEFAULT_DELAY,
        }
    }

    /// Creates a divide task with a custom delay
    pub fn with_delay(delay: Duration) -> Self {
        DivideTask { delay }
    }

    /// Returns the configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DivideTask {
    fn default() -> Self {
        Self::new()
    }
}

impl Task for DivideTask {
    fn name(&self) -> &str {
        "divide"
    }

    fn run(&self, args: JsonValue) -> TaskResult<JsonValue> {
        tracing::info!("shared task");

        thread::sleep(self.delay);

        // Arguments are not examined until after the delay, so every
        // failure surfaces only once the full wait has elapsed.
        let args: DivideArgs = serde_json::from_value(args)
            .map_err(|e| TaskError::InvalidArguments(e.to_string()))?;

        if args.y == 0.0 {
            return Err(TaskError::DivisionByZero);
        }

        Ok(JsonValue::from(args.x / args.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Instant;

    fn fast_task() -> DivideTask {
        DivideTask::with_delay(Duration::from_millis(10))
    }

    #[test]
    fn test_task_name() {
        assert_eq!(DivideTask::new().name(), "divide");
    }

    #[test]
    fn test_default_delay_is_five_seconds() {
        assert_eq!(DivideTask::new().delay(), Duration::from_secs(5));
    }

    #[test]
    fn test_divide_returns_quotient() {
        let result = fast_task().run(json!({ "x": 10, "y": 2 })).unwrap();
        assert_eq!(result.as_f64(), Some(5.0));
    }

    #[test]
    fn test_divide_fractional_quotient() {
        let result = fast_task().run(json!({ "x": 1, "y": 4 })).unwrap();
        assert_eq!(result.as_f64(), Some(0.25));
    }

    #[test]
    fn test_divide_by_zero_fails() {
        let err = fast_task().run(json!({ "x": 5, "y": 0 })).unwrap_err();
        assert!(matches!(err, TaskError::DivisionByZero));
    }

    #[test]
    fn test_delay_elapses_before_zero_divisor_error() {
        let delay = Duration::from_millis(50);
        let task = DivideTask::with_delay(delay);

        let start = Instant::now();
        let err = task.run(json!({ "x": 5, "y": 0 })).unwrap_err();

        assert!(matches!(err, TaskError::DivisionByZero));
        assert!(start.elapsed() >= delay);
    }

    #[test]
    fn test_non_numeric_arguments_fail() {
        let err = fast_task()
            .run(json!({ "x": "ten", "y": 2 }))
            .unwrap_err();
        assert!(matches!(err, TaskError::InvalidArguments(_)));
    }

    #[test]
    fn test_missing_arguments_fail() {
        let err = fast_task().run(json!({ "x": 10 })).unwrap_err();
        assert!(matches!(err, TaskError::InvalidArguments(_)));
    }
}

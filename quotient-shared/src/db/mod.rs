/// Database utilities
///
/// - `pool`: Connection pool creation and health checks
/// - `migrations`: Migration runner

pub mod migrations;
pub mod pool;

pub use migrations::run_migrations;
pub use pool::{create_pool, health_check, DatabaseConfig};

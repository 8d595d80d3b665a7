/// Common test utilities for integration tests
///
/// Shared infrastructure for the API integration tests:
/// - Test database setup (connect + migrate)
/// - Router construction
/// - Per-test unique usernames/emails and cleanup

use quotient_api::app::{build_router, AppState};
use quotient_api::config::Config;
use quotient_shared::db::migrations::run_migrations;
use sqlx::PgPool;
use uuid::Uuid;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub config: Config,

    /// Unique suffix appended to every username/email this test creates,
    /// so parallel tests never collide and cleanup only touches own rows.
    marker: String,
}

impl TestContext {
    /// Creates a new test context against the configured database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;
        run_migrations(&db).await?;

        let state = AppState::new(db.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext {
            db,
            app,
            config,
            marker: Uuid::new_v4().to_string(),
        })
    }

    /// Returns a username unique to this test run
    pub fn username(&self, base: &str) -> String {
        format!("{}-{}", base, self.marker)
    }

    /// Returns an email unique to this test run
    pub fn email(&self, base: &str) -> String {
        format!("{}-{}@example.com", base, self.marker)
    }

    /// Cleans up rows created by this test
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM users WHERE username LIKE $1")
            .bind(format!("%-{}", self.marker))
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

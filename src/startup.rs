//! Database startup: connection pool, schema migration, and default data.

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    config::Config,
    data::{
        achievement::AchievementRepository, badge::BadgeRepository,
        cursor_theme::CursorThemeRepository, gradient_theme::GradientThemeRepository,
        quest::QuestRepository, shop::ShopRepository, site_theme::SiteThemeRepository,
        title::TitleRepository,
    },
    error::AppError,
    model::seed::SeedReport,
};

/// Maximum pooled connections. There is no overflow: this is a hard cap.
const POOL_SIZE: u32 = 3;

/// Seconds to wait for a free connection before failing the request.
const POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Seconds after which a pooled connection is recycled.
const POOL_RECYCLE_SECS: u64 = 280;

/// Creates the database connection pool from configuration.
///
/// The pool is created lazily and health-checks (pre-pings) each connection
/// before handing it out, so this call succeeds even when the database is
/// unreachable; connectivity problems surface from the first query instead.
/// SQLx statement logging is disabled.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool handle for the configured database
/// - `Err(AppError::DbErr(_))` - The database URL could not be parsed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(POOL_SIZE)
        .acquire_timeout(Duration::from_secs(POOL_ACQUIRE_TIMEOUT_SECS))
        .max_lifetime(Duration::from_secs(POOL_RECYCLE_SECS))
        .test_before_acquire(true)
        .connect_lazy(true)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Brings the schema up to date and seeds default data.
///
/// Runs pending migrations (or drops and recreates everything when
/// `reset_database` is set), probes connectivity with a trivial query, then
/// runs the seed pass. The caller is expected to treat an `Err` as non-fatal:
/// a broken database must not prevent the web process from starting.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection pool
///
/// # Returns
/// - `Ok(SeedReport)` - Schema is current; per-entity seed outcomes
/// - `Err(AppError::DbErr(_))` - Migration or the connectivity probe failed
pub async fn initialize_database(
    config: &Config,
    db: &DatabaseConnection,
) -> Result<SeedReport, AppError> {
    if config.reset_database {
        tracing::warn!("RESET_DATABASE is set; dropping and recreating all tables");
        Migrator::fresh(db).await?;
    } else {
        Migrator::up(db, None).await?;
    }

    db.execute_unprepared("SELECT 1").await?;

    Ok(seed_default_data(db).await)
}

/// Populates default rows for every seedable entity kind.
///
/// Runs the seed routines in a fixed order. Each step checks whether its
/// table is empty and only then inserts defaults; each step is independently
/// guarded, so a failure is recorded in the report and the remaining steps
/// still run.
///
/// # Arguments
/// - `db` - Database connection pool
///
/// # Returns
/// - `SeedReport` - Outcome of every seed step, in execution order
pub async fn seed_default_data(db: &DatabaseConnection) -> SeedReport {
    let mut report = SeedReport::new();

    report.record("site themes", SiteThemeRepository::new(db).seed_defaults().await);
    report.record("quests", QuestRepository::new(db).seed_defaults().await);
    report.record(
        "achievements",
        AchievementRepository::new(db).seed_defaults().await,
    );
    report.record("titles", TitleRepository::new(db).seed_defaults().await);
    report.record(
        "gradient themes",
        GradientThemeRepository::new(db).seed_defaults().await,
    );
    report.record(
        "cursor themes",
        CursorThemeRepository::new(db).seed_defaults().await,
    );
    report.record("shop items", ShopRepository::new(db).seed_defaults().await);
    report.record("badges", BadgeRepository::new(db).seed_defaults().await);

    report
}

#[cfg(test)]
mod test {
    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::model::seed::SeedOutcome;

    /// Tests that a full seed pass populates every entity kind.
    ///
    /// Expected: all eight steps report Seeded with a non-zero row count
    #[tokio::test]
    async fn seeds_every_entity_kind() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let report = seed_default_data(db).await;

        assert_eq!(report.steps().len(), 8);
        for step in report.steps() {
            assert!(
                matches!(step.outcome, SeedOutcome::Seeded(n) if n > 0),
                "step '{}' was not seeded: {:?}",
                step.kind,
                step.outcome
            );
        }
    }

    /// Tests that a second seed pass leaves populated tables alone.
    ///
    /// Expected: every step reports AlreadyPopulated on the second run
    #[tokio::test]
    async fn second_pass_reports_already_populated() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        seed_default_data(db).await;
        let report = seed_default_data(db).await;

        for step in report.steps() {
            assert!(
                matches!(step.outcome, SeedOutcome::AlreadyPopulated),
                "step '{}' re-seeded: {:?}",
                step.kind,
                step.outcome
            );
        }
    }

    /// Tests that one failing seed step does not stop the rest.
    ///
    /// The quest table is deliberately missing, so the quest step fails with
    /// a database error while every other step still runs.
    ///
    /// Expected: quests step Failed, all seven other steps Seeded
    #[tokio::test]
    async fn failing_step_does_not_abort_sequence() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::SiteTheme)
            .with_table(entity::prelude::Achievement)
            .with_table(entity::prelude::CustomTitle)
            .with_table(entity::prelude::GradientTheme)
            .with_table(entity::prelude::CursorTheme)
            .with_table(entity::prelude::ShopItem)
            .with_table(entity::prelude::Badge)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let report = seed_default_data(db).await;

        assert_eq!(report.steps().len(), 8);
        for step in report.steps() {
            if step.kind == "quests" {
                assert!(matches!(step.outcome, SeedOutcome::Failed(_)));
            } else {
                assert!(
                    matches!(step.outcome, SeedOutcome::Seeded(n) if n > 0),
                    "step '{}' did not survive the quest failure: {:?}",
                    step.kind,
                    step.outcome
                );
            }
        }
    }

    /// Tests that initialization errors are returned, not panicked.
    ///
    /// A lazy pool pointing at a database file that cannot be created makes
    /// the migration step fail; `main` logs this error and keeps serving.
    ///
    /// Expected: Err from initialize_database, no panic
    #[tokio::test]
    async fn unreachable_database_yields_error() {
        let config = crate::config::Config {
            secret_key: "test".to_string(),
            database_url: "sqlite://does-not-exist/unreachable.db".to_string(),
            listen_addr: "127.0.0.1:0".to_string(),
            api_enabled: true,
            reset_database: false,
        };

        let db = connect_to_database(&config).await.unwrap();
        let result = initialize_database(&config, &db).await;

        assert!(result.is_err());
    }
}

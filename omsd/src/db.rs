//! Database CLI subcommands for omsd.
//!
//! Provides `db migrate` and `db status` commands.

use anyhow::{anyhow, Result};
use sqlx::{PgPool, Row};
use std::env;
use tracing::{info, warn};

/// Run database CLI subcommands.
///
/// Supported commands:
/// - `omsd db migrate` - Run pending migrations
/// - `omsd db status` - Check connectivity and migration status
pub async fn run_db_command(args: Vec<String>) -> Result<()> {
    if args.len() < 3 {
        return Err(anyhow!("Usage: omsd db <migrate|status>"));
    }

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| anyhow!("DATABASE_URL environment variable is required for db commands"))?;

    let pool = PgPool::connect(&database_url).await?;

    match args[2].as_str() {
        "migrate" => migrate(&pool).await,
        "status" => status(&pool).await,
        other => Err(anyhow!("Unknown db command: {}. Use migrate or status", other)),
    }
}

/// Run all pending migrations.
///
/// Idempotent: safe to run multiple times.
async fn migrate(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");

    sqlx::migrate!("../migrations").run(pool).await?;

    info!("Migrations completed successfully");
    Ok(())
}

/// Check database connectivity and migration status.
async fn status(pool: &PgPool) -> Result<()> {
    // Check connectivity
    let result: i64 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await?;
    if result != 1 {
        return Err(anyhow!("Database connectivity check failed"));
    }
    info!("Database connectivity: OK");

    // Runtime query: sqlx::query! would require a database at compile time
    let rows = sqlx::query(
        r#"
        SELECT version, description, success
        FROM _sqlx_migrations
        ORDER BY version DESC
        "#,
    )
    .fetch_all(pool)
    .await;

    match rows {
        Ok(migrations) if !migrations.is_empty() => {
            info!("Applied migrations:");
            for migration in migrations {
                let version: i64 = migration.try_get("version")?;
                let description: String = migration.try_get("description")?;
                let success: bool = migration.try_get("success")?;

                let marker = if success { "ok" } else { "failed" };
                info!("  v{}: {} ({})", version, description, marker);
            }
        }
        Ok(_) => {
            warn!("No migrations applied yet (run `omsd db migrate` first)");
        }
        Err(e) => {
            // Table might not exist yet
            if e.to_string().contains("_sqlx_migrations") {
                warn!("Migration table not found (run `omsd db migrate` first)");
            } else {
                return Err(e.into());
            }
        }
    }

    Ok(())
}

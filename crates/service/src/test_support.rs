#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_with_config;
use configs::DatabaseConfig;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connection for DB-backed tests; `None` when `DATABASE_URL` is not set.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip db-backed test");
        return Ok(None);
    }

    let migrated = *MIGRATED
        .get_or_init(|| async {
            let mut cfg = DatabaseConfig::default();
            cfg.normalize_from_env();
            cfg.max_connections = 2;
            cfg.min_connections = 1;
            match connect_with_config(&cfg).await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(e) => {
                    eprintln!("connect db for migration failed: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return Err(anyhow::anyhow!("database migration failed"));
    }

    // Return a fresh connection for the current test's runtime
    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env();
    cfg.max_connections = 5;
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    Ok(Some(connect_with_config(&cfg).await?))
}

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

/// Initializes the SQLite connection pool and runs pending migrations.
///
/// Reads `DATABASE_URL`, defaulting to a local database file that is created
/// on first start. Panics on connection or migration failure since the
/// application cannot serve requests without storage.
pub async fn init_db_pool() -> SqlitePool {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:maktab.db?mode=rwc".to_string());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

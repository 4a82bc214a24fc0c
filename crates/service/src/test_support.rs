#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh database for one test. Defaults to in-memory sqlite; set
/// `TEST_DATABASE_URL` to run against postgres instead.
///
/// The pool is pinned to a single connection: every `sqlite::memory:`
/// connection is its own database, so a wider pool would scatter tables.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let url =
        std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let mut opts = ConnectOptions::new(url);
    opts.max_connections(1).min_connections(1);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

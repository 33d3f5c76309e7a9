use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};

use crate::DbPool;

const SCHEMA_SQL: &str = include_str!("../migrations/2025-06-01-000000_create_records/up.sql");

/// Per-connection setup run by the pool whenever it opens a connection.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionSetup;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionSetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000;")
            .and_then(|_| conn.batch_execute(SCHEMA_SQL))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn is_in_memory(database_url: &str) -> bool {
    database_url == ":memory:" || database_url.contains("mode=memory")
}

/// Builds the pool. An in-memory database lives inside a single connection,
/// so it gets a one-connection pool that never recycles.
pub fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool, PoolError> {
    let database_url = database_url
        .strip_prefix("sqlite://")
        .unwrap_or(database_url);
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let builder = Pool::<ConnectionManager<SqliteConnection>>::builder()
        .connection_customizer(Box::new(ConnectionSetup));
    let builder = if is_in_memory(database_url) {
        builder
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        builder.max_size(max_size.max(1))
    };

    let pool = builder.build(manager)?;
    log::info!("Database pool ready for {}", database_url);
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::prelude::*;

    #[test]
    fn schema_is_created_on_first_connection() {
        let pool = build_pool(":memory:", 4).unwrap();
        let mut conn = pool.get().unwrap();
        let count: i64 = crate::schema::schools::table
            .count()
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn memory_urls_are_detected() {
        assert!(is_in_memory(":memory:"));
        assert!(is_in_memory("file:db?mode=memory&cache=shared"));
        assert!(!is_in_memory("school_connect.db"));
    }
}

use crate::db::pool::DbPool;
use crate::db::schema::ensure_schema;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Creates the attendance, tasks, employee_status and log tables if missing.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_schema(conn)?;
    Ok(())
}

/// Open the database at `path` and make sure the schema is in place.
///
/// Any failure here means the store is unusable and is meant to be fatal
/// for the caller.
pub fn open_store(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

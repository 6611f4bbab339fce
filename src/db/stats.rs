use crate::db::pool::DbPool;
use crate::db::schema::TABLES;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

/// Row count of every known table.
pub fn table_counts(pool: &mut DbPool) -> rusqlite::Result<Vec<(&'static str, i64)>> {
    let mut out = Vec::new();
    for table in TABLES {
        let count: i64 = pool
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        out.push((table, count));
    }
    Ok(out)
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROWS PER TABLE
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for (table, count) in table_counts(pool)? {
        println!("    {:<16} {}{}{}", table, GREEN, count, RESET);
    }

    //
    // 3) OPEN TASKS
    //
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM tasks WHERE is_user_done = 0 OR is_admin_done = 0",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Open tasks:{} {}", CYAN, RESET, open);

    println!();
    Ok(())
}

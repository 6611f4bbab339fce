use crate::db::attendance::{load_all_attendance, load_attendance_for};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::status::{load_all_statuses, load_status};
use crate::db::tasks::{load_all_tasks, load_tasks_for};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportTable {
    Attendance,
    Tasks,
    Status,
}

impl ExportTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportTable::Attendance => "attendance",
            ExportTable::Tasks => "tasks",
            ExportTable::Status => "status",
        }
    }
}

/// Flat row shapes, so CSV headers come straight from serde.
#[derive(Debug, Serialize)]
struct AttendanceRow {
    id: i64,
    user: String,
    date: String,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct TaskRow {
    id: i64,
    assigner: String,
    assignee: String,
    description: String,
    deadline: String,
    assignee_done: bool,
    approver_done: bool,
    completed: bool,
}

#[derive(Debug, Serialize)]
struct StatusRow {
    user: String,
    status: &'static str,
    afk_reason: Option<String>,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export one table, optionally restricted to `user`.
    ///
    /// `file` must be an absolute path; an existing file is only replaced
    /// with `force`. Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        table: ExportTable,
        format: ExportFormat,
        file: &str,
        user: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{file} already exists (use --force to overwrite)"
            )));
        }

        let written = match table {
            ExportTable::Attendance => {
                let rows: Vec<AttendanceRow> = match user {
                    Some(u) => load_attendance_for(&pool.conn, u)?,
                    None => load_all_attendance(&pool.conn)?,
                }
                .into_iter()
                .map(|r| AttendanceRow {
                    id: r.id,
                    user: r.user,
                    date: r.date,
                    status: r.status.to_db_str(),
                })
                .collect();
                write_rows(&rows, format, path)?
            }
            ExportTable::Tasks => {
                let rows: Vec<TaskRow> = match user {
                    Some(u) => load_tasks_for(&pool.conn, u)?,
                    None => load_all_tasks(&pool.conn)?,
                }
                .into_iter()
                .map(|t| TaskRow {
                    completed: t.is_completed(),
                    id: t.id,
                    assigner: t.assigner,
                    assignee: t.assignee,
                    description: t.description,
                    deadline: t.deadline,
                    assignee_done: t.assignee_done,
                    approver_done: t.approver_done,
                })
                .collect();
                write_rows(&rows, format, path)?
            }
            ExportTable::Status => {
                let rows: Vec<StatusRow> = match user {
                    Some(u) => load_status(&pool.conn, u)?.into_iter().collect::<Vec<_>>(),
                    None => load_all_statuses(&pool.conn)?,
                }
                .into_iter()
                .map(|s| StatusRow {
                    user: s.user,
                    status: s.status.to_db_str(),
                    afk_reason: s.afk_reason,
                })
                .collect();
                write_rows(&rows, format, path)?
            }
        };

        if written == 0 {
            warning(format!("No {} rows matched; wrote an empty export.", table.as_str()));
        }

        ttlog(
            &pool.conn,
            "export",
            table.as_str(),
            &format!("{written} rows to {}", path.display()),
        )?;

        Ok(written)
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }
    Ok(rows.len())
}

/// Export JSON pretty-printed.
fn export_json<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    success(format!("JSON export completed: {}", path.display()));
    Ok(())
}

/// Export CSV (header comes from serde).
fn export_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    success(format!("CSV export completed: {}", path.display()));
    Ok(())
}

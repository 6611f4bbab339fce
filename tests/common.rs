#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use staffbot::bot::Dispatcher;
use staffbot::config::Config;
use staffbot::db::initialize::init_db;
use staffbot::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sb() -> Command {
    cargo_bin_cmd!("staffbot")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_staffbot.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI (test mode: no config file written).
pub fn init_db_cli(db_path: &str) {
    sb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Send one chat message through the CLI.
pub fn send(db_path: &str, author: &str, message: &str) -> String {
    let out = sb()
        .args(["--db", db_path, "send", "--as", author, message])
        .output()
        .expect("run staffbot send");
    assert!(out.status.success(), "send failed: {:?}", out);
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// Fresh in-memory store with the schema in place.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Dispatcher over a fresh in-memory store with default settings.
pub fn memory_bot() -> Dispatcher {
    Dispatcher::new(memory_pool(), &Config::with_database(":memory:".to_string()))
}

pub fn count_rows(pool: &DbPool, table: &str) -> i64 {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .expect("count rows")
}

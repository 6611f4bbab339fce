pub mod attendance;
pub mod backup;
pub mod config;
pub mod export;
pub mod log;
pub mod status;
pub mod tasks;

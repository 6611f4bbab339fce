pub mod attendance;
pub mod initialize;
pub mod log;
pub mod pool;
pub mod schema;
pub mod stats;
pub mod status;
pub mod tasks;

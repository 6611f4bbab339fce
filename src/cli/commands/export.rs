use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::initialize::open_store;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        table,
        format,
        file,
        user,
        force,
    } = cmd
    {
        let mut pool = open_store(&cfg.database)?;
        ExportLogic::export(&mut pool, *table, *format, file, user.as_deref(), *force)?;
    }
    Ok(())
}

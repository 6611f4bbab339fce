use crate::bot::{Dispatcher, Message};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::date;
use std::io::{self, BufRead, Write};

/// Open the store and wire it into a dispatcher.
/// The store must be reachable here; failure aborts the command.
pub fn build_dispatcher(cfg: &Config, date_override: Option<&str>) -> AppResult<Dispatcher> {
    let pool = open_store(&cfg.database)?;
    let bot = Dispatcher::new(pool, cfg);

    match date_override {
        Some(d) => {
            let day = date::parse_date(d).ok_or_else(|| {
                AppError::Usage(format!("Invalid date `{d}`, expected YYYY-MM-DD."))
            })?;
            Ok(bot.with_date(day))
        }
        None => Ok(bot),
    }
}

/// Console transport: one `author: message` per line on stdin,
/// replies on stdout. Ends at EOF.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { date } = cmd {
        let mut bot = build_dispatcher(cfg, date.as_deref())?;

        info(format!(
            "staffbot listening on stdin (prefix `{}`), database {}",
            cfg.command_prefix, cfg.database
        ));

        let stdin = io::stdin();
        let mut out = io::stdout().lock();

        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let Some(msg) = Message::from_line(&line) else {
                warning(format!("Skipping malformed line (expected `author: message`): {line}"));
                continue;
            };

            if let Some(reply) = bot.handle(&msg) {
                writeln!(out, "{reply}")?;
                out.flush()?;
            }
        }
    }

    Ok(())
}

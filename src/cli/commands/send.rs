use crate::bot::args::is_valid_user_id;
use crate::bot::{Dispatcher, Message};
use crate::cli::commands::serve::build_dispatcher;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Dispatch one message and print the reply.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Send {
        author,
        message,
        date,
    } = cmd
    {
        if !is_valid_user_id(author) {
            return Err(AppError::Usage(format!(
                "`{author}` cannot be used as a user name (no spaces, ':', '<', '>' or '@')."
            )));
        }

        let mut bot: Dispatcher = build_dispatcher(cfg, date.as_deref())?;

        match bot.handle(&Message::new(author.as_str(), message.as_str())) {
            Some(reply) => println!("{reply}"),
            None => info("Message ignored: it does not start with the command prefix."),
        }
    }

    Ok(())
}

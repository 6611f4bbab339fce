use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;

/// Handle the `config` subcommand.
///
/// Runs before the configuration is loaded, so a broken file can still be
/// printed, checked and repaired from here.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        check_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                println!("📄 {}\n", path.display());
                println!("{}", fs::read_to_string(&path)?);
            } else {
                info(format!("No file at {}; built-in defaults:", path.display()));
                println!("{}", Config::default().to_yaml()?);
            }
        }

        if *edit_config {
            let editor = ConfigLogic::resolve_editor(editor.as_deref());
            let cfg = ConfigLogic::edit(&path, &editor)?;
            success(format!(
                "Configuration saved with '{editor}' (prefix `{}`, {} approver(s))",
                cfg.command_prefix,
                cfg.approvers.len()
            ));
        }

        if *check_config {
            let cfg = ConfigLogic::check(&path)?;
            success(format!(
                "{} is valid (database {}, prefix `{}`)",
                path.display(),
                cfg.database,
                cfg.command_prefix
            ));
        }
    }

    Ok(())
}

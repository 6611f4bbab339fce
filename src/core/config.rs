use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Read the file at `path` and run it through the same validation
    /// the bot applies at startup.
    pub fn check(path: &Path) -> AppResult<Config> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "no configuration file at {} (run `staffbot init` first)",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Config::from_yaml(&content)
    }

    /// `--editor`, then `$EDITOR`, then `$VISUAL`, then the platform default.
    pub fn resolve_editor(explicit: Option<&str>) -> String {
        if let Some(e) = explicit.filter(|e| !e.trim().is_empty()) {
            return e.to_string();
        }
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .ok()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "vi".to_string()
                }
            })
    }

    /// Open `path` in `editor`, then validate what was saved.
    pub fn edit(path: &Path, editor: &str) -> AppResult<Config> {
        let status = Command::new(editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor `{editor}`: {e}")))?;
        if !status.success() {
            return Err(AppError::Config(format!("editor `{editor}` exited with {status}")));
        }
        Self::check(path)
    }
}

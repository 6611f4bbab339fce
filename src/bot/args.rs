//! Positional argument cursor over the text that follows a command name.
//!
//! Words are separated by whitespace; a double-quoted group counts as a
//! single word. `rest` hands back everything left, verbatim.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:<@!?([^\s:<>@]+)>|@?([^\s:<>@]+))$").expect("mention pattern is valid")
    })
}

/// Characters that can never appear in a user id: they delimit mentions
/// or separate the author from the text on a console line.
const RESERVED: [char; 4] = [':', '<', '>', '@'];

/// Whether `name` can be used as a user id, both as a message author and
/// as a mentioned user.
pub fn is_valid_user_id(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || RESERVED.contains(&c))
}

/// Resolve `@name`, `<@name>`, `<@!name>` or a bare `name` to a user id.
pub fn resolve_mention(raw: &str) -> Option<String> {
    let caps = mention_re().captures(raw.trim())?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

pub struct Args<'a> {
    rest: &'a str,
}

impl<'a> Args<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Next word, or `None` once the input is exhausted.
    pub fn next_word(&mut self) -> AppResult<Option<String>> {
        let s = self.rest.trim_start();
        if s.is_empty() {
            self.rest = s;
            return Ok(None);
        }

        if let Some(quoted) = s.strip_prefix('"') {
            let end = quoted
                .find('"')
                .ok_or_else(|| AppError::Usage("Unclosed quote in arguments.".to_string()))?;
            self.rest = &quoted[end + 1..];
            return Ok(Some(quoted[..end].to_string()));
        }

        let end = s.find(char::is_whitespace).unwrap_or(s.len());
        self.rest = &s[end..];
        Ok(Some(s[..end].to_string()))
    }

    pub fn required(&mut self, name: &str) -> AppResult<String> {
        self.next_word()?.ok_or_else(|| missing(name))
    }

    pub fn required_int(&mut self, name: &str) -> AppResult<i64> {
        let raw = self.required(name)?;
        raw.parse::<i64>().map_err(|_| {
            AppError::Usage(format!("`{name}` must be a whole number, got `{raw}`."))
        })
    }

    pub fn required_user(&mut self, name: &str) -> AppResult<String> {
        let raw = self.required(name)?;
        resolve_mention(&raw)
            .ok_or_else(|| AppError::Usage(format!("`{raw}` is not a valid user for `{name}`.")))
    }

    pub fn optional_user(&mut self, name: &str) -> AppResult<Option<String>> {
        match self.next_word()? {
            None => Ok(None),
            Some(raw) => resolve_mention(&raw).map(Some).ok_or_else(|| {
                AppError::Usage(format!("`{raw}` is not a valid user for `{name}`."))
            }),
        }
    }

    /// Everything that is left, trimmed. Must not be empty.
    pub fn rest(&mut self, name: &str) -> AppResult<String> {
        let text = self.rest.trim();
        self.rest = "";
        if text.is_empty() {
            return Err(missing(name));
        }
        Ok(text.to_string())
    }
}

fn missing(name: &str) -> AppError {
    AppError::Usage(format!("`{name}` is a required argument that is missing."))
}

use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

/// Max visible width of the "operation (target)" column.
const OP_WIDTH: usize = 48;

/// Colour of an operation in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "status" => Colour::Cyan,
        "attendance" => Colour::Blue,
        "assign" => Colour::Yellow,
        "done" => Colour::Green,
        "approve" => Colour::Purple,
        "backup" => Colour::Blue,
        "export" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or_else(|_| e.date.clone());

            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let visible = truncate(&op_target, OP_WIDTH);
            let padding = " ".repeat(OP_WIDTH.saturating_sub(visible.chars().count()));

            // only the operation word is coloured
            let color = color_for_operation(&e.operation);
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                e.id,
                date,
                colored,
                padding,
                e.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}

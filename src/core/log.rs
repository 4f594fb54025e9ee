use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::strip_ansi;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const OP_WIDTH_MAX: usize = 48;

/// Colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "book" => Colour::Green,
        "status" => Colour::Yellow,
        "refund" | "del" => Colour::Red,
        "payment" => Colour::Cyan,
        "import" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("add_") || other.starts_with("edit_") => Colour::Blue,
        _ => Colour::White,
    }
}

fn render_op(entry: &LogEntry) -> String {
    let colored = color_for_operation(&entry.operation)
        .paint(entry.operation.as_str())
        .to_string();

    if entry.target.is_empty() {
        colored
    } else {
        format!("{colored} ({})", entry.target)
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<String> = entries.iter().map(render_op).collect();

        let op_w = rendered
            .iter()
            .map(|r| strip_ansi(r).width())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for (entry, op) in entries.iter().zip(rendered) {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op).width()));

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                entry.id,
                date,
                op,
                padding,
                entry.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}

use crate::db::log::load_log;
use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{strip_ansi, truncate};
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// ANSI colour per operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "import" => Colour::Green,
        "export" => Colour::Blue,
        "session" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the internal log, one line per entry.
    pub fn render_log(pool: &mut DbPool) -> AppResult<Vec<String>> {
        let entries = load_log(&pool.conn)?;

        let op_w = entries
            .iter()
            .map(|e| op_target(&e.operation, &e.target).len())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let lines = entries
            .into_iter()
            .map(|e| {
                let color = color_for_operation(&e.operation);
                let visible = truncate(&op_target(&e.operation, &e.target), OP_MAX_WIDTH);

                // only the operation word is coloured
                let colored = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    e.date,
                    colored,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect();

        Ok(lines)
    }

    /// One-line schema state: how many migrations ran and the newest one.
    pub fn schema_line(pool: &DbPool) -> AppResult<String> {
        let versions = applied_versions(&pool.conn)?;
        Ok(match versions.last() {
            Some(latest) => format!(
                "Schema: {} migration(s) applied, latest {latest}",
                versions.len()
            ),
            None => "Schema: no migrations recorded".to_string(),
        })
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        println!("📜 Internal log:\n");
        println!("{}\n", Self::schema_line(pool)?);
        for line in Self::render_log(pool)? {
            println!("{line}");
        }
        Ok(())
    }
}

fn op_target(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    }
}

use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the task table: short id, title, truncated description,
    /// completion glyph, creation timestamp.
    pub fn tasks(tasks: &[Task], description_width: usize) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "STATUS", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.short_id(),
                task.title,
                Self::truncate(&task.description, description_width),
                Self::status(task.completed),
                task.created_at.format("%Y-%m-%d %H:%M:%S")
            ]);
        }
        table.printstd();

        Ok(())
    }

    fn status(completed: bool) -> &'static str {
        if completed {
            "✓"
        } else {
            "✗"
        }
    }

    // Char-aware so multi-byte scripts never split inside a code point.
    fn truncate(text: &str, max: usize) -> String {
        if text.chars().count() <= max {
            return text.to_string();
        }
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

use anyhow::Result;

/// Prints the command overview.
pub fn cmd() -> Result<()> {
    println!("\nAvailable Commands:");
    println!("  add              Add a new task (interactive prompts)");
    println!("  list             Display all tasks (sorted by current preference)");
    println!("  update           Update task title/description (interactive prompts)");
    println!("  delete           Delete a task (interactive prompt)");
    println!("  toggle           Mark task complete/incomplete (interactive prompt)");
    println!("  sort             Change task list sorting order");
    println!("  help             Show this help message");
    println!("  exit, quit       Exit application");
    println!();
    println!("Task IDs can be shortened to any unique prefix (the first 8 characters are shown in listings).");
    Ok(())
}

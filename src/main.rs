use anyhow::Result;
use tydo::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}

use anyhow::Result;
use tripgate::cli;

// Main function
fn main() -> Result<()> {
    let action = cli::start()?;

    action.execute()?;

    Ok(())
}

use crate::cli::actions::{hash, issue, mask, verify, Action};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub fn execute(action: Action) -> Result<()> {
    match action {
        Action::Issue(args) => issue::execute(args),
        Action::Hash(args) => hash::execute(&args),
        Action::Verify(args) => verify::execute(&args),
        Action::Mask(args) => mask::execute(&args),
    }
}

pub mod hash;
pub mod issue;
pub mod mask;
pub mod verify;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    Issue(issue::Args),
    Hash(hash::Args),
    Verify(verify::Args),
    Mask(mask::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub fn execute(self) -> anyhow::Result<()> {
        run::execute(self)
    }
}

use crate::invitation::mask_email;
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub email: String,
}

/// Execute the mask action.
/// # Errors
/// Never fails; masking degrades to returning the input.
pub fn execute(args: &Args) -> Result<()> {
    println!("{}", mask_email(&args.email));
    Ok(())
}

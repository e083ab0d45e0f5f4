use anyhow::{bail, Result};

use crate::cli::AddArgs;

pub fn run(args: AddArgs) -> Result<()> {
    bail!(
        "'add' is not implemented yet (would add {})",
        args.file.display()
    )
}

//! `docnav check` command implementation.

use clap::Args;

use super::DescriptorArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    descriptor: DescriptorArgs,

    /// Enable verbose output (log descriptor discovery and loading).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor cannot be loaded or is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.descriptor.load()?;

        tracing::info!(
            nav = config.theme().nav().len(),
            sidebar_groups = config.theme().sidebar().len(),
            "Descriptor validated"
        );

        Output::new().site_report(&config);
        Ok(())
    }
}

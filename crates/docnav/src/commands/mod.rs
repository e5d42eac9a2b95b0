//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, SiteConfig};

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;

use crate::error::CliError;

/// Descriptor selection shared by all commands.
#[derive(Args)]
pub(crate) struct DescriptorArgs {
    /// Path to descriptor file (default: auto-discover docnav.toml or docnav.json).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site base path (overrides descriptor).
    #[arg(long, env = "DOCNAV_BASE")]
    base: Option<String>,
}

impl DescriptorArgs {
    /// Load and validate the selected descriptor.
    pub(crate) fn load(self) -> Result<SiteConfig, CliError> {
        let cli_settings = CliSettings { base: self.base };
        Ok(SiteConfig::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

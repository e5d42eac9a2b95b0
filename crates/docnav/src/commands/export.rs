//! `docnav export` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use console::Term;
use docnav_config::SiteConfig;

use super::DescriptorArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    descriptor: DescriptorArgs,

    /// Output file for the validated descriptor JSON (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor is invalid or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.descriptor.load()?;

        match self.output {
            Some(path) => {
                write_json(&config, &path)?;
                Output::new().written(&path.display().to_string());
            }
            None => write_json_to(&config, &mut Term::stdout())?,
        }
        Ok(())
    }
}

/// Write the validated descriptor as pretty JSON followed by a newline.
fn write_json_to<W: Write>(config: &SiteConfig, out: &mut W) -> Result<(), CliError> {
    let json = config.to_json_pretty()?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

/// Write the validated descriptor to a file, creating parent directories.
fn write_json(config: &SiteConfig, path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;
    write_json_to(config, &mut file)?;
    tracing::debug!(path = %path.display(), "Wrote descriptor JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_config() -> SiteConfig {
        SiteConfig::from_toml_str(
            r#"
title = "Docs"
description = "Project docs"
base = "/docs/"

[theme]
nav = [{ text = "Home", link = "/" }]

[[theme.socialLinks]]
icon = "github"
link = "https://github.com/example"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_write_json_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".vitepress/site.json");
        let config = sample_config();

        write_json(&config, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with('\n'));
        assert_eq!(SiteConfig::from_json_str(&written).unwrap(), config);
    }

    #[test]
    fn test_write_json_to_stream() {
        let config = sample_config();
        let mut out = Vec::new();

        write_json_to(&config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}\n", config.to_json_pretty().unwrap()));
        assert!(text.contains("\"socialLinks\""));
        assert_eq!(SiteConfig::from_json_str(&text).unwrap(), config);
    }
}

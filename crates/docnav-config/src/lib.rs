//! Site navigation descriptor for docnav.
//!
//! Parses `docnav.toml` (or `docnav.json`) descriptors with serde, validates
//! them in a single fail-fast pass and provides auto-discovery of descriptor
//! files in parent directories.
//!
//! The validated [`SiteConfig`] is immutable and is handed as-is to the site
//! renderer, usually via [`SiteConfig::to_json_pretty`].
//!
//! ## Environment Variable Expansion
//!
//! Path and URL values support environment variable expansion before
//! validation:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! A bare `$` is kept literally. Expanded fields:
//! - `base`
//! - `theme.socialLinks[*].link`

mod expand;
mod icon;
mod raw;
mod site;
mod validate;

use std::path::{Path, PathBuf};

pub use icon::{SocialIcon, UnknownIconName};
pub use raw::{RawNavItem, RawSidebarGroup, RawSiteConfig, RawSocialLink, RawThemeConfig};
pub use site::{NavItem, SidebarGroup, SiteConfig, SocialLink, ThemeConfig};
pub use validate::{DEFAULT_BASE, validate};

/// Descriptor filenames to search for, in priority order.
const CONFIG_FILENAMES: [&str; 2] = ["docnav.toml", "docnav.json"];

/// CLI settings that override descriptor values.
///
/// All fields are optional. Only non-None values override the loaded descriptor.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the site base path.
    pub base: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required field is absent.
    #[error("Missing required field: {0}")]
    MissingField(String),
    /// A required text field is empty or whitespace-only.
    #[error("Field cannot be empty: {0}")]
    EmptyField(String),
    /// A link is not a root-relative path or absolute URL.
    #[error("Invalid link: {0:?}")]
    InvalidLink(String),
    /// A social link icon is not recognized.
    #[error("Unknown social icon: {0:?}")]
    UnknownIcon(String),
    /// The base path does not start and end with `/`.
    #[error("Invalid base path: {0:?} (expected a single segment like \"/docs/\")")]
    InvalidBasePath(String),
    /// A sidebar group has no items.
    #[error("Sidebar group {0:?} has no items")]
    EmptySidebarGroup(String),
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Descriptor field path (e.g., "`theme.socialLinks[0].link`").
        field: String,
        /// Error message (e.g., "${`GITHUB_ORG`} not set").
        message: String,
    },
}

/// Descriptor file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from the file extension. Anything but `.json` is TOML.
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    fn parse(self, content: &str) -> Result<RawSiteConfig, ConfigError> {
        Ok(match self {
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        })
    }
}

impl SiteConfig {
    /// Parse and validate a TOML descriptor.
    ///
    /// Environment references are expanded before validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_raw(Format::Toml.parse(content)?, None)
    }

    /// Parse and validate a JSON descriptor.
    ///
    /// Environment references are expanded before validation.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_raw(Format::Json.parse(content)?, None)
    }

    /// Load a descriptor from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` or `docnav.json` in the current
    /// directory and its parents.
    ///
    /// CLI settings are applied after environment expansion and before
    /// validation, so overridden values are validated too.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the explicit path does not exist or
    /// no descriptor is discovered; otherwise any parse or validation error.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;
        Self::load_in(&cwd, config_path, cli_settings)
    }

    /// Load with discovery rooted at `cwd`.
    fn load_in(
        cwd: &Path,
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => Self::discover_config(cwd)
                .ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAMES[0])))?,
        };

        Self::load_from_file(&path, cli_settings)
    }

    /// Search for a descriptor file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILENAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    tracing::debug!(path = %candidate.display(), "Discovered descriptor");
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load a descriptor from a specific file.
    fn load_from_file(path: &Path, cli_settings: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let format = Format::from_path(path);
        tracing::debug!(path = %path.display(), ?format, "Loading descriptor");

        let content = std::fs::read_to_string(path)?;
        let raw = format.parse(&content)?;
        Self::from_raw(raw, cli_settings)
    }

    /// Expand, apply overrides and validate a raw descriptor.
    fn from_raw(
        mut raw: RawSiteConfig,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        expand::expand_site(&mut raw)?;

        if let Some(settings) = cli_settings {
            apply_cli_settings(&mut raw, settings);
        }

        validate(raw)
    }
}

/// Apply CLI settings to the raw descriptor.
fn apply_cli_settings(raw: &mut RawSiteConfig, settings: &CliSettings) {
    if let Some(base) = &settings.base {
        raw.base = Some(base.clone());
    }
}

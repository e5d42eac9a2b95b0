//! Raw descriptor types as parsed from TOML or JSON.
//!
//! Every field is optional so that absent fields can be reported by name
//! during validation instead of failing inside the deserializer.

use serde::{Deserialize, Serialize};

/// Raw site descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSiteConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL path prefix the site is served under (defaults to `/`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<RawThemeConfig>,
}

/// Raw theme section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawThemeConfig {
    pub nav: Vec<RawNavItem>,
    pub sidebar: Vec<RawSidebarGroup>,
    /// Whether the right-hand outline panel is shown (defaults to `true`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aside: Option<bool>,
    pub social_links: Vec<RawSocialLink>,
}

/// Raw navigation entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNavItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Raw sidebar group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSidebarGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub items: Vec<RawNavItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

/// Raw social link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSocialLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl RawNavItem {
    /// Create a nav entry with both fields set.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            link: Some(link.into()),
        }
    }
}

impl RawSocialLink {
    /// Create a social link with both fields set.
    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            link: Some(link.into()),
        }
    }
}

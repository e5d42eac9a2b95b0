//! Descriptor validation.
//!
//! A single pass over the raw descriptor that either produces a fully
//! validated [`SiteConfig`] or stops at the first problem found.

use std::sync::LazyLock;

use regex::Regex;

use crate::ConfigError;
use crate::icon::{SocialIcon, UnknownIconName};
use crate::raw::{RawNavItem, RawSidebarGroup, RawSiteConfig, RawSocialLink, RawThemeConfig};
use crate::site::{NavItem, SidebarGroup, SiteConfig, SocialLink, ThemeConfig};

static BASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/[\w-]*/$").unwrap());

/// Base path used when the descriptor does not set one.
pub const DEFAULT_BASE: &str = "/";

/// Validate a raw descriptor.
///
/// Declared ordering of nav entries, sidebar groups, group items and social
/// links is preserved. Validating the output of [`SiteConfig::to_raw`] yields
/// an equal value.
///
/// # Errors
///
/// Returns the first [`ConfigError`] encountered, naming the offending field
/// or value.
pub fn validate(raw: RawSiteConfig) -> Result<SiteConfig, ConfigError> {
    let title = require_text(raw.title, "title")?;
    let description = require_text(raw.description, "description")?;
    let base = validate_base(raw.base)?;
    let theme = validate_theme(raw.theme.unwrap_or_default())?;

    Ok(SiteConfig {
        title,
        description,
        base,
        theme,
    })
}

fn validate_base(base: Option<String>) -> Result<String, ConfigError> {
    match base {
        None => Ok(DEFAULT_BASE.to_owned()),
        Some(base) if base == DEFAULT_BASE || BASE_PATTERN.is_match(&base) => Ok(base),
        Some(base) => Err(ConfigError::InvalidBasePath(base)),
    }
}

fn validate_theme(theme: RawThemeConfig) -> Result<ThemeConfig, ConfigError> {
    let nav = theme
        .nav
        .into_iter()
        .enumerate()
        .map(|(i, item)| validate_nav_item(item, &format!("theme.nav[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let sidebar = theme
        .sidebar
        .into_iter()
        .enumerate()
        .map(|(i, group)| validate_sidebar_group(group, &format!("theme.sidebar[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let social_links = theme
        .social_links
        .into_iter()
        .enumerate()
        .map(|(i, link)| validate_social_link(link, &format!("theme.socialLinks[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ThemeConfig {
        nav,
        sidebar,
        aside: theme.aside.unwrap_or(true),
        social_links,
    })
}

fn validate_nav_item(item: RawNavItem, field: &str) -> Result<NavItem, ConfigError> {
    let text = require_text(item.text, &format!("{field}.text"))?;
    let link = require_field(item.link, &format!("{field}.link"))?;
    if !is_nav_link(&link) {
        return Err(ConfigError::InvalidLink(link));
    }
    Ok(NavItem { text, link })
}

fn validate_sidebar_group(
    group: RawSidebarGroup,
    field: &str,
) -> Result<SidebarGroup, ConfigError> {
    let text = require_text(group.text, &format!("{field}.text"))?;
    if group.items.is_empty() {
        return Err(ConfigError::EmptySidebarGroup(text));
    }

    let items = group
        .items
        .into_iter()
        .enumerate()
        .map(|(i, item)| validate_nav_item(item, &format!("{field}.items[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SidebarGroup {
        text,
        items,
        collapsed: group.collapsed,
    })
}

fn validate_social_link(link: RawSocialLink, field: &str) -> Result<SocialLink, ConfigError> {
    let icon = require_field(link.icon, &format!("{field}.icon"))?;
    let icon: SocialIcon = icon
        .parse()
        .map_err(|UnknownIconName(name)| ConfigError::UnknownIcon(name))?;

    let link = require_field(link.link, &format!("{field}.link"))?;
    if !is_http_url(&link) {
        return Err(ConfigError::InvalidLink(link));
    }

    Ok(SocialLink { icon, link })
}

/// Require a field to be present.
fn require_field(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingField(field.to_owned()))
}

/// Require a field to be present and contain more than whitespace.
fn require_text(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    let value = require_field(value, field)?;
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField(field.to_owned()));
    }
    Ok(value)
}

/// Root-relative path or absolute http(s) URL, with no whitespace anywhere.
fn is_nav_link(link: &str) -> bool {
    if link.is_empty() || link.chars().any(char::is_whitespace) {
        return false;
    }
    // `//host/path` is protocol-relative, not root-relative.
    (link.starts_with('/') && !link.starts_with("//")) || is_http_url(link)
}

/// Absolute URL with an http or https scheme and a non-empty host.
fn is_http_url(url: &str) -> bool {
    if url.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    else {
        return false;
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !host.is_empty()
}

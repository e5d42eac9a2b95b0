//! Environment variable expansion for descriptor strings.
//!
//! Only braced references are recognized. A bare `$` is kept as written.

use std::sync::LazyLock;

use regex::Regex;

use crate::ConfigError;
use crate::raw::RawSiteConfig;

static ENV_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[A-Za-z_][A-Za-z0-9_]*(?::-[^}]*)?\}").unwrap());

/// Expand `${VAR}` and `${VAR:-default}` references in a single value.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut last = 0;

    for reference in ENV_REFERENCE.find_iter(value) {
        expanded.push_str(&value[last..reference.start()]);
        let resolved = shellexpand::env(reference.as_str()).map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })?;
        expanded.push_str(&resolved);
        last = reference.end();
    }
    expanded.push_str(&value[last..]);

    Ok(expanded)
}

fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(v) = value {
        *v = expand_env(v, field)?;
    }
    Ok(())
}

/// Expand environment references in `base` and social link URLs.
///
/// `title` and `description` are free text and are never expanded.
pub(crate) fn expand_site(raw: &mut RawSiteConfig) -> Result<(), ConfigError> {
    expand_opt(&mut raw.base, "base")?;

    if let Some(ref mut theme) = raw.theme {
        for (i, social) in theme.social_links.iter_mut().enumerate() {
            expand_opt(&mut social.link, &format!("theme.socialLinks[{i}].link"))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{RawSocialLink, RawThemeConfig};

    #[test]
    fn test_expand_literal_unchanged() {
        assert_eq!(expand_env("/docs/", "base").unwrap(), "/docs/");
    }

    #[test]
    fn test_expand_default_value() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_TEST_UNSET_BASE");
        }
        assert_eq!(
            expand_env("${DOCNAV_TEST_UNSET_BASE:-/fallback/}", "base").unwrap(),
            "/fallback/"
        );
    }

    #[test]
    fn test_expand_missing_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_TEST_MISSING");
        }
        let err = expand_env("${DOCNAV_TEST_MISSING}", "base").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DOCNAV_TEST_MISSING"));
        assert!(err.to_string().contains("base"));
    }

    #[test]
    fn test_expand_bare_dollar_unchanged() {
        assert_eq!(
            expand_env("https://example.com/$HOME/$5", "theme.socialLinks[0].link").unwrap(),
            "https://example.com/$HOME/$5"
        );
    }

    #[test]
    fn test_expand_mixed_text_and_reference() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_TEST_HANDLE", "functools");
        }
        assert_eq!(
            expand_env("https://x.com/${DOCNAV_TEST_HANDLE}?ref=$src", "link").unwrap(),
            "https://x.com/functools?ref=$src"
        );
        unsafe {
            std::env::remove_var("DOCNAV_TEST_HANDLE");
        }
    }

    #[test]
    fn test_expand_site_keeps_free_text() {
        let mut raw = RawSiteConfig {
            title: Some("Pricing in $".to_owned()),
            description: Some("Costs $5, use ${x} in templates, $HOME is your dir".to_owned()),
            ..RawSiteConfig::default()
        };
        let before = raw.clone();
        expand_site(&mut raw).unwrap();

        assert_eq!(raw, before);
    }

    #[test]
    fn test_expand_site_social_link() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_TEST_ORG", "zig-functools");
        }

        let mut raw = RawSiteConfig {
            theme: Some(RawThemeConfig {
                social_links: vec![RawSocialLink::new(
                    "github",
                    "https://github.com/${DOCNAV_TEST_ORG}",
                )],
                ..RawThemeConfig::default()
            }),
            ..RawSiteConfig::default()
        };
        expand_site(&mut raw).unwrap();

        assert_eq!(
            raw.theme.unwrap().social_links[0].link.as_deref(),
            Some("https://github.com/zig-functools")
        );

        unsafe {
            std::env::remove_var("DOCNAV_TEST_ORG");
        }
    }

    #[test]
    fn test_expand_site_names_social_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_TEST_MISSING_URL");
        }

        let mut raw = RawSiteConfig {
            theme: Some(RawThemeConfig {
                social_links: vec![RawSocialLink::new("github", "${DOCNAV_TEST_MISSING_URL}")],
                ..RawThemeConfig::default()
            }),
            ..RawSiteConfig::default()
        };
        let err = expand_site(&mut raw).unwrap_err();

        assert!(err.to_string().contains("theme.socialLinks[0].link"));
    }
}

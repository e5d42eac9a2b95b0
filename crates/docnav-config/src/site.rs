//! Validated site descriptor.
//!
//! Values of these types only come out of [`validate`](crate::validate), so
//! every invariant checked there holds for the whole lifetime of the value.
//! Fields are read through accessors; nothing is mutable after construction.

use serde::Serialize;

use crate::icon::SocialIcon;
use crate::raw::{RawNavItem, RawSidebarGroup, RawSiteConfig, RawSocialLink, RawThemeConfig};

/// Top-level descriptor for a documentation site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) base: String,
    pub(crate) theme: ThemeConfig,
}

/// Navigation and layout settings of the theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub(crate) nav: Vec<NavItem>,
    pub(crate) sidebar: Vec<SidebarGroup>,
    pub(crate) aside: bool,
    pub(crate) social_links: Vec<SocialLink>,
}

/// A single navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub(crate) text: String,
    pub(crate) link: String,
}

/// A labeled cluster of navigation entries shown in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub(crate) text: String,
    pub(crate) items: Vec<NavItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) collapsed: Option<bool>,
}

/// An icon-labeled external profile link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub(crate) icon: SocialIcon,
    pub(crate) link: String,
}

impl SiteConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// URL path prefix, always starting and ending with `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Convert back into the raw form accepted by [`validate`](crate::validate).
    ///
    /// Defaults applied during validation are written out explicitly.
    #[must_use]
    pub fn to_raw(&self) -> RawSiteConfig {
        RawSiteConfig {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            base: Some(self.base.clone()),
            theme: Some(self.theme.to_raw()),
        }
    }

    /// Serialize to pretty-printed JSON for the site renderer.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl ThemeConfig {
    /// Top navigation bar entries in declared order.
    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    /// Sidebar groups in declared order.
    pub fn sidebar(&self) -> &[SidebarGroup] {
        &self.sidebar
    }

    pub fn aside(&self) -> bool {
        self.aside
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    fn to_raw(&self) -> RawThemeConfig {
        RawThemeConfig {
            nav: self.nav.iter().map(NavItem::to_raw).collect(),
            sidebar: self.sidebar.iter().map(SidebarGroup::to_raw).collect(),
            aside: Some(self.aside),
            social_links: self.social_links.iter().map(SocialLink::to_raw).collect(),
        }
    }
}

impl NavItem {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    fn to_raw(&self) -> RawNavItem {
        RawNavItem::new(self.text.as_str(), self.link.as_str())
    }
}

impl SidebarGroup {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Group entries in declared order. Never empty.
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn collapsed(&self) -> Option<bool> {
        self.collapsed
    }

    fn to_raw(&self) -> RawSidebarGroup {
        RawSidebarGroup {
            text: Some(self.text.clone()),
            items: self.items.iter().map(NavItem::to_raw).collect(),
            collapsed: self.collapsed,
        }
    }
}

impl SocialLink {
    pub fn icon(&self) -> SocialIcon {
        self.icon
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    fn to_raw(&self) -> RawSocialLink {
        RawSocialLink::new(self.icon.as_str(), self.link.as_str())
    }
}

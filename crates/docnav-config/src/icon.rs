//! Social link icon identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Icon identifier understood by the site renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    /// All recognized icons, in identifier order.
    pub const ALL: [Self; 11] = [
        Self::Discord,
        Self::Facebook,
        Self::Github,
        Self::Instagram,
        Self::Linkedin,
        Self::Mastodon,
        Self::Npm,
        Self::Slack,
        Self::Twitter,
        Self::X,
        Self::Youtube,
    ];

    /// Identifier as written in the descriptor.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }
}

/// Returned when an identifier is not a known icon.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownIconName(pub String);

impl FromStr for SocialIcon {
    type Err = UnknownIconName;

    // Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| UnknownIconName(s.to_owned()))
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SocialIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

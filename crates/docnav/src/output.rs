//! Terminal reporting for descriptor checks.

use console::{Style, Term};
use docnav_config::SiteConfig;

/// Writes check results to stderr, colored when the terminal supports it.
pub(crate) struct Output {
    term: Term,
    heading: Style,
    ok: Style,
    failure: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            heading: Style::new().cyan().bold(),
            ok: Style::new().green(),
            failure: Style::new().red(),
        }
    }

    /// Report a validated descriptor: title heading, then one line per fact.
    pub(crate) fn site_report(&self, config: &SiteConfig) {
        self.line(&self.heading.apply_to(config.title()).to_string());
        for line in summary_lines(config) {
            self.line(&format!("  {line}"));
        }
        self.line(&self.ok.apply_to("Descriptor is valid").to_string());
    }

    /// Report a completed write of the exported descriptor.
    pub(crate) fn written(&self, target: &str) {
        self.line(&self.ok.apply_to(format!("Descriptor written to {target}")).to_string());
    }

    /// Report a failed command.
    pub(crate) fn failure(&self, msg: &str) {
        self.line(&self.failure.apply_to(format!("Error: {msg}")).to_string());
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

/// Summary lines for a validated descriptor.
fn summary_lines(config: &SiteConfig) -> Vec<String> {
    let theme = config.theme();
    let sidebar_items: usize = theme.sidebar().iter().map(|g| g.items().len()).sum();

    let mut lines = vec![
        format!("Base: {}", config.base()),
        format!("Nav entries: {}", theme.nav().len()),
        format!(
            "Sidebar: {} groups, {sidebar_items} items",
            theme.sidebar().len()
        ),
    ];
    if !theme.social_links().is_empty() {
        let icons: Vec<&str> = theme.social_links().iter().map(|l| l.icon().as_str()).collect();
        lines.push(format!("Social: {}", icons.join(", ")));
    }
    lines
}

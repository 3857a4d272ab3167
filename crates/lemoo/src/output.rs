//! Colored terminal output for listings and command results.
//!
//! Listings go to stdout; errors go to stderr so they survive redirection.

use console::{Style, Term};

/// Width of the rule printed between documents.
const RULE_WIDTH: usize = 70;

/// Message tone, mapped to a terminal style.
#[derive(Clone, Copy)]
enum Tone {
    Plain,
    Success,
    Warning,
    Error,
    Muted,
    Heading,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red(),
            Self::Muted => Style::new().dim(),
            Self::Heading => Style::new().cyan().bold(),
        }
    }
}

/// Terminal output formatter.
pub(crate) struct Output {
    stdout: Term,
    stderr: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        Self::emit(&self.stdout, Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        Self::emit(&self.stdout, Tone::Success, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        Self::emit(&self.stdout, Tone::Warning, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        Self::emit(&self.stderr, Tone::Error, msg);
    }

    /// Secondary detail such as disabled pages.
    pub(crate) fn muted(&self, msg: &str) {
        Self::emit(&self.stdout, Tone::Muted, msg);
    }

    /// Section or tab heading.
    pub(crate) fn heading(&self, msg: &str) {
        Self::emit(&self.stdout, Tone::Heading, msg);
    }

    /// Horizontal rule between documents.
    pub(crate) fn rule(&self) {
        Self::emit(&self.stdout, Tone::Muted, &"-".repeat(RULE_WIDTH));
    }

    fn emit(term: &Term, tone: Tone, msg: &str) {
        // Broken pipes are not worth failing a listing over.
        let _ = term.write_line(&tone.style().apply_to(msg).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tone_keeps_text() {
        console::set_colors_enabled(false);
        assert_eq!(Tone::Plain.style().apply_to("Home").to_string(), "Home");
        assert_eq!(Tone::Heading.style().apply_to("Tabs").to_string(), "Tabs");
    }
}

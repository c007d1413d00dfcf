//! Output formatting.

use console::Term;
use owo_colors::{OwoColorize as _, Style};

/// Longest diagnostic rendered to the user before truncation.
const MAX_DIAGNOSTIC_LEN: usize = 1000;

#[derive(Default)]
struct Styles {
    success: Style,
    warning: Style,
}

impl Styles {
    fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
    }
}

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an informational line. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// Print an indented key/value line. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {key}: {value}");
        }
    }

    /// Print an indented list item. Suppressed when `quiet`.
    pub fn item(&self, msg: &str) {
        if !self.quiet {
            println!("  - {msg}");
        }
    }
}

/// Cap a diagnostic at [`MAX_DIAGNOSTIC_LEN`] characters so a long provider
/// or ssh error does not flood the user's channel.
#[must_use]
pub fn truncate_diagnostic(text: &str) -> String {
    if text.chars().count() <= MAX_DIAGNOSTIC_LEN {
        return text.to_string();
    }
    let truncated: String = text.chars().take(MAX_DIAGNOSTIC_LEN).collect();
    format!("{truncated}…")
}

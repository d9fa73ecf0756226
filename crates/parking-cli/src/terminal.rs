//! Terminal color helpers

use owo_colors::OwoColorize;

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (yellow)
    fn warning(&self) -> String;
    /// Color as error (red)
    fn error(&self) -> String;
    /// Color as prompt or hint (cyan)
    fn info(&self) -> String;
    /// Section heading (bold magenta)
    fn heading(&self) -> String;
    /// Field label (bold)
    fn label(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.green().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.yellow().to_string()
        } else {
            self.to_string()
        }
    }

    fn error(&self) -> String {
        if supports_color() {
            self.red().to_string()
        } else {
            self.to_string()
        }
    }

    fn info(&self) -> String {
        if supports_color() {
            self.cyan().to_string()
        } else {
            self.to_string()
        }
    }

    fn heading(&self) -> String {
        if supports_color() {
            self.magenta().bold().to_string()
        } else {
            self.to_string()
        }
    }

    fn label(&self) -> String {
        if supports_color() {
            self.bold().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }

    fn error(&self) -> String {
        self.as_str().error()
    }

    fn info(&self) -> String {
        self.as_str().info()
    }

    fn heading(&self) -> String {
        self.as_str().heading()
    }

    fn label(&self) -> String {
        self.as_str().label()
    }
}

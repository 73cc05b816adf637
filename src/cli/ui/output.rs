use console::style;

/// Console reporter for command results. Log output goes through tracing;
/// this is only for what the operator is meant to read.
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Final status line, always printed
    pub fn success(&self, message: &str) {
        println!("{}", style(message).green());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("Error:").red().bold(), message);
    }

    /// Follow-up line for an error, on stderr
    pub fn hint(&self, message: &str) {
        eprintln!("  {}", style(message).dim());
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

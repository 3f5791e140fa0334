//! Colored stderr prefixes for generator warnings and fatal errors.
//!
//! Results (the completion summary) go to stdout from `main`; everything here
//! is meant for the operator watching the build.

use colored::Colorize;

/// Report a non-fatal problem, e.g. an empty script, on stderr.
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "WARN".yellow().bold(), message.as_ref());
}

/// Prefix a fatal message with a red `ERROR` tag. Used as the text of
/// `FileError` and of the generator's own `bail!`s.
pub fn error_message(message: impl AsRef<str>) -> String {
    format!("{} {}", "ERROR".red().bold(), message.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_keeps_text() {
        let msg = error_message("read script file a.js");
        assert!(msg.contains("ERROR"));
        assert!(msg.ends_with("read script file a.js"));
    }
}

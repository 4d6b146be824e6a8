//! Small helpers for consistent terminal messages.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Section header, e.g. `=== Ann's turn ===`
pub fn banner(text: &str) -> String {
    format!("=== {} ===", text)
}

/// Add demo mode tag to output line
pub fn tag_demo_output(line: &str) -> String {
    format!("{} [DEMO MODE]", line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_and_error_prefixes() {
        let mut err = Vec::new();
        write_error(&mut err, "bad").unwrap();
        display_warning(&mut err, "careful").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: bad\nWARNING: careful\n");
    }

    #[test]
    fn banner_and_demo_tag() {
        assert_eq!(banner("Game Over"), "=== Game Over ===");
        assert_eq!(tag_demo_output("sim"), "sim [DEMO MODE]");
    }
}

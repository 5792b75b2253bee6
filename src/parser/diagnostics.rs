//! Human-readable syntax error reports
//!
//! A report is the error message, a blank line, the offending source line
//! with its number, and a caret under the offending column:
//!
//! ```text
//! expected 'sf' to close 'daca', found end of input
//!
//!   2 |     scrie x
//!                  ^
//! ```

use crate::parser::parse::SyntaxError;

impl SyntaxError {
    /// Render this error against the `source` it was produced from
    pub fn render(&self, source: &str) -> String {
        let location = self.location();
        let line_text = source_line(source, location.line);

        let prefix = format!("  {} | ", location.line);
        let mut report = format!("{}\n\n{}{}\n", self.message(), prefix, line_text);

        report.push_str(&" ".repeat(prefix.chars().count()));
        // Tabs stay tabs so the caret lines up with the code above it
        for ch in line_text.chars().take(location.column.saturating_sub(1)) {
            report.push(if ch == '\t' { '\t' } else { ' ' });
        }
        report.push('^');

        report
    }
}

/// The 1-based `line` of `source` without its line break, or `""` past the end
fn source_line(source: &str, line: usize) -> &str {
    source
        .split('\n')
        .nth(line.saturating_sub(1))
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use crate::parser::parse::parse;

    #[test]
    fn test_caret_under_offending_token() {
        let source = "x <- 1\ny <- & 2";
        let err = parse(source).unwrap_err();

        let report = err.render(source);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Unexpected character: '&'");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "  2 | y <- & 2");
        assert_eq!(lines[3], "           ^");
    }

    #[test]
    fn test_tabs_are_preserved() {
        let source = "daca x atunci\n\tscrie )";
        let err = parse(source).unwrap_err();

        let report = err.render(source);
        let caret_line = report.lines().last().unwrap();
        assert_eq!(caret_line, "      \t      ^");
    }

    #[test]
    fn test_missing_terminator_at_end_of_input() {
        let source = "daca x atunci\n    scrie x\n";
        let err = parse(source).unwrap_err();

        let report = err.render(source);
        assert!(report.starts_with("expected 'sf' to close 'daca', found end of input"));
        assert!(report.contains("  3 | \n"));
    }
}

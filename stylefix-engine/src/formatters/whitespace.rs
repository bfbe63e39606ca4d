use crate::formatter::{Formatter, Rewrite};
use crate::unit::SourceUnit;
use stylefix_types::FixCategory;

/// Removes trailing spaces and tabs from every line.
///
/// Line endings are preserved as found, including the presence or absence of
/// a final newline; this formatter never changes line structure.
pub struct WhitespaceFormatter;

impl Formatter for WhitespaceFormatter {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn category(&self) -> FixCategory {
        FixCategory::Whitespace
    }

    fn format(&self, unit: &SourceUnit) -> anyhow::Result<Rewrite> {
        let fixed: String = unit
            .text
            .split('\n')
            .map(trim_line)
            .collect::<Vec<_>>()
            .join("\n");

        if fixed == unit.text {
            Ok(Rewrite::Unchanged)
        } else {
            Ok(Rewrite::Changed(fixed))
        }
    }
}

fn trim_line(line: &str) -> String {
    // Keep a CR terminator intact so CRLF files stay CRLF.
    let (body, cr) = match line.strip_suffix('\r') {
        Some(body) => (body, "\r"),
        None => (line, ""),
    };
    format!("{}{}", body.trim_end_matches([' ', '\t']), cr)
}

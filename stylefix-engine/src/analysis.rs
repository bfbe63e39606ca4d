//! Built-in diagnostic analysis.
//!
//! stylefix is not a compiler; this is a line-oriented heuristic that flags
//! import directives whose imported name never appears elsewhere in the file.
//! Anything the heuristic cannot parse with confidence (aliases, grouped
//! imports) is left unflagged: an un-flagged import is never removed.

use stylefix_types::Diagnostic;

/// Rule code for the unnecessary-import diagnostic.
pub const UNNECESSARY_IMPORT_RULE_ID: &str = "SF0005";

/// Category name shared by code-style diagnostics.
pub const STYLE_CATEGORY: &str = "Style";

/// Scan a unit's text and return the diagnostics flagged in it.
pub fn scan(text: &str) -> Vec<Diagnostic> {
    let lines: Vec<&str> = text.lines().collect();
    let mut out = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(name) = import_target(line) else {
            continue;
        };

        let used = lines
            .iter()
            .enumerate()
            .filter(|(other, candidate)| *other != index && import_target(candidate).is_none())
            .any(|(_, body)| contains_identifier(body, name));

        if !used {
            out.push(Diagnostic {
                rule_id: UNNECESSARY_IMPORT_RULE_ID.to_string(),
                category: STYLE_CATEGORY.to_string(),
                line: index,
            });
        }
    }

    out
}

/// The name an import line binds, or `None` when the line is not an import
/// this heuristic understands.
///
/// Recognizes `using Foo.Bar;` and `use foo::bar;` directives. Aliases and
/// grouped imports are skipped rather than guessed at.
fn import_target(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let rest = trimmed
        .strip_prefix("using ")
        .or_else(|| trimmed.strip_prefix("use "))?;
    let body = rest.strip_suffix(';')?.trim();

    if body.is_empty() || body.contains('=') || body.contains('{') || body.contains(' ') {
        return None;
    }
    if !body
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == ':')
    {
        return None;
    }

    let last = body.rsplit(['.', ':']).next()?;
    if last.is_empty() { None } else { Some(last) }
}

/// Whole-identifier containment check.
fn contains_identifier(haystack: &str, ident: &str) -> bool {
    let mut search_from = 0;
    while let Some(pos) = haystack[search_from..].find(ident) {
        let start = search_from + pos;
        let end = start + ident.len();

        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric() && c != '_');
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric() && c != '_');

        if before_ok && after_ok {
            return true;
        }
        search_from = end;
    }
    false
}

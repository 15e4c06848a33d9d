//! Lexical import scanner
//!
//! Finds statically known module specifiers in JS/TS-like source text:
//! `import ... from 'x'`, `import 'x'`, `export ... from 'x'`, `import('x')`
//! and `require('x')`. Only string literals count; `import(name)` or
//! `require('a' + b)` are skipped. Comments and the contents of string and
//! template literals are blanked out first, so text that only looks like an
//! import does not show up. A keyword reached through a member access
//! (`obj.require('x')`) is not an import either.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// One import specifier and where it sits (1-based line and column of the
/// opening quote).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRef {
    pub specifier: String,
    pub line: usize,
    pub column: usize,
}

const LITERAL: &str = r#"(?:'(?P<single>[^'\n]*)'|"(?P<double>[^"\n]*)")"#;

/// Start of input or a character that cannot precede a bare keyword.
const KEYWORD_START: &str = r"(?:^|[^.\w$])";

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // import x from 'y', import { a, b } from "y", export * from 'y'
        format!(r#"{KEYWORD_START}(?:import|export)\b[^;'"`]*?\bfrom\s*{LITERAL}"#),
        // side-effect import 'y'
        format!(r#"{KEYWORD_START}import\s*{LITERAL}"#),
        // import('y'), require('y')
        format!(r#"{KEYWORD_START}(?:import|require)\s*\(\s*{LITERAL}\s*\)"#),
    ]
    .iter()
    .filter_map(|pattern| match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::warn!(pattern, error = %err, "import pattern failed to compile");
            None
        }
    })
    .collect()
});

/// Extract import specifiers in source order.
pub fn scan_imports(source: &str) -> Vec<ImportRef> {
    let code = blank_non_code(source);
    let lines = LineIndex::new(source);

    let mut found: Vec<(usize, String)> = Vec::new();
    for regex in PATTERNS.iter() {
        for caps in regex.captures_iter(&code) {
            let Some(literal) = caps.name("single").or_else(|| caps.name("double")) else {
                continue;
            };
            // the blanked copy shares byte offsets with the source
            let specifier = &source[literal.range()];
            if specifier.is_empty() {
                continue;
            }
            // offset of the opening quote
            let offset = literal.start() - 1;
            if found.iter().any(|(seen, _)| *seen == offset) {
                continue;
            }
            found.push((offset, specifier.to_string()));
        }
    }
    found.sort_by_key(|(offset, _)| *offset);

    found
        .into_iter()
        .map(|(offset, specifier)| {
            let (line, column) = lines.position(source, offset);
            tracing::trace!(specifier = %specifier, line, column, "found import");
            ImportRef {
                specifier,
                line,
                column,
            }
        })
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Str(u8),
}

/// Replace every byte of a comment or of a string literal's contents with a
/// space. Quotes and newlines stay, so byte offsets into the result are valid
/// offsets into the input.
fn blank_non_code(source: &str) -> String {
    let bytes = source.as_bytes();
    let mut out = bytes.to_vec();
    let mut state = State::Code;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();
        match state {
            State::Code => match (b, next) {
                (b'/', Some(b'/')) => {
                    state = State::LineComment;
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    i += 1;
                }
                (b'/', Some(b'*')) => {
                    state = State::BlockComment;
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    i += 1;
                }
                (b'\'' | b'"' | b'`', _) => state = State::Str(b),
                _ => {}
            },
            State::LineComment => {
                if b == b'\n' {
                    state = State::Code;
                } else {
                    out[i] = b' ';
                }
            }
            State::BlockComment => {
                if b == b'*' && next == Some(b'/') {
                    out[i] = b' ';
                    out[i + 1] = b' ';
                    i += 1;
                    state = State::Code;
                } else if b != b'\n' {
                    out[i] = b' ';
                }
            }
            State::Str(quote) => {
                if b == b'\\' {
                    out[i] = b' ';
                    if next.is_some_and(|n| n != b'\n') {
                        out[i + 1] = b' ';
                    }
                    i += 1;
                } else if b == quote || (b == b'\n' && quote != b'`') {
                    state = State::Code;
                } else if b != b'\n' {
                    out[i] = b' ';
                }
            }
        }
        i += 1;
    }

    // Only whole UTF-8 sequences were replaced, so this is still valid UTF-8.
    String::from_utf8_lossy(&out).into_owned()
}

/// Byte offsets of line starts.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { starts }
    }

    fn position(&self, text: &str, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset);
        let start = self.starts[line - 1];
        let column = text[start..offset].chars().count() + 1;
        (line, column)
    }
}

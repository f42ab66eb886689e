//! Recursive-descent reader for the `\entry{..}{..}{..}{..}` micro-syntax.
//!
//! Field groups are matched by explicit brace depth, so definitions and
//! examples may carry nested markup (`\textit{..}`, even record-like text)
//! without cutting the record short. `\{`, `\}` and `\\` are treated as
//! escapes and never change the depth.

use std::ops::Range;

use lexique_types::types::capitalize;
use lexique_types::{Example, Record};

use crate::error::{Result, StoreError};
use crate::syntax::{EXAMPLE_DELIMITER, ITEM_MARKER, RECORD_MARKER, find_all, line_of};

const SNIPPET_CHARS: usize = 160;

/// A record together with where it sits in the scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub record: Record,
    /// First field exactly as written, trimmed
    pub raw_headword: String,
    /// From the record marker to the closing brace of the fourth field
    pub span: Range<usize>,
    /// Non-blank text between this record and the next marker, trimmed
    pub trailing: String,
}

/// Extract every record in `text`, in document order.
///
/// A document without records yields an empty vector. A marker whose four
/// fields cannot be matched aborts the whole parse.
pub fn parse(text: &str) -> Result<Vec<Record>> {
    Ok(parse_records(text)?
        .into_iter()
        .map(|parsed| parsed.record)
        .collect())
}

/// Like [`parse`], keeping spans, raw headwords and trailing text
pub fn parse_records(text: &str) -> Result<Vec<ParsedRecord>> {
    let mut records: Vec<ParsedRecord> = Vec::new();
    let mut pos = 0;

    while let Some(start) = next_marker(text, pos) {
        if let Some(previous) = records.last_mut() {
            previous.trailing = text[previous.span.end..start].trim().to_string();
        }

        let mut scanner = Scanner::new(text, start + RECORD_MARKER.len() - 1);
        let fields = scanner.fields().map_err(|reason| malformed(text, start, reason))?;
        let [headword, word_type, definitions, examples] = fields;

        records.push(ParsedRecord {
            record: Record {
                headword: capitalize(headword.trim()),
                word_type: word_type.trim().to_string(),
                definitions: parse_definitions(definitions),
                examples: parse_examples(examples),
            },
            raw_headword: headword.trim().to_string(),
            span: start..scanner.pos,
            trailing: String::new(),
        });
        pos = scanner.pos;
    }

    if let Some(last) = records.last_mut() {
        last.trailing = text[last.span.end..].trim().to_string();
    }

    Ok(records)
}

/// Split a definitions block on item markers
pub fn parse_definitions(block: &str) -> Vec<String> {
    split_items(block)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Split an examples block into (source, translation) pairs
pub fn parse_examples(block: &str) -> Vec<Example> {
    split_items(block)
        .into_iter()
        .map(|item| match find_top_level(item, EXAMPLE_DELIMITER) {
            Some(at) => Example::new(
                item[..at].trim(),
                unwrap_parens(item[at + EXAMPLE_DELIMITER.len()..].trim()),
            ),
            None => Example::new(item, ""),
        })
        .collect()
}

fn next_marker(text: &str, from: usize) -> Option<usize> {
    find_all(&text[from..], RECORD_MARKER)
        .next()
        .map(|offset| from + offset)
}

fn malformed(text: &str, start: usize, reason: String) -> StoreError {
    StoreError::MalformedRecord {
        line: line_of(text, start),
        offset: start,
        reason,
        snippet: text[start..].chars().take(SNIPPET_CHARS).collect(),
    }
}

fn unwrap_parens(text: &str) -> &str {
    text.strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .map(str::trim)
        .unwrap_or(text)
}

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }

    fn fields(&mut self) -> std::result::Result<[&'a str; 4], String> {
        let headword = self.group("headword")?;
        self.skip_whitespace();
        let word_type = self.group("word type")?;
        self.skip_whitespace();
        let definitions = self.group("definitions")?;
        self.skip_whitespace();
        let examples = self.group("examples")?;
        Ok([headword, word_type, definitions, examples])
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.text[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume one `{...}` group and return its interior
    fn group(&mut self, field: &str) -> std::result::Result<&'a str, String> {
        let rest = &self.text[self.pos..];
        if !rest.starts_with('{') {
            let found: String = rest.chars().take(12).collect();
            return Err(format!("expected '{{' opening the {field} field, found {found:?}"));
        }

        let bytes = rest.as_bytes();
        let mut depth = 0usize;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => {
                    i += 2;
                    continue;
                }
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += i + 1;
                        return Ok(&rest[1..i]);
                    }
                }
                _ => {}
            }
            i += 1;
        }

        Err(format!("unbalanced braces in the {field} field"))
    }
}

/// Items of a block, split on top-level `\item` markers, trimmed, blanks dropped
fn split_items(block: &str) -> Vec<&str> {
    let bytes = block.as_bytes();
    let mut cuts = Vec::new();
    let mut depth = 0i32;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if depth == 0 && is_item_marker(block, i) => {
                cuts.push(i);
                i += ITEM_MARKER.len();
                continue;
            }
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
        i += 1;
    }

    let mut items = Vec::with_capacity(cuts.len() + 1);
    items.push(&block[..cuts.first().copied().unwrap_or(block.len())]);
    for (n, cut) in cuts.iter().enumerate() {
        let end = cuts.get(n + 1).copied().unwrap_or(block.len());
        items.push(&block[cut + ITEM_MARKER.len()..end]);
    }

    items
        .into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

fn is_item_marker(block: &str, at: usize) -> bool {
    block[at..].starts_with(ITEM_MARKER)
        && !block
            .as_bytes()
            .get(at + ITEM_MARKER.len())
            .is_some_and(u8::is_ascii_alphabetic)
}

/// Byte offset of the first `token` outside any brace group
fn find_top_level(text: &str, token: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0i32;
    let mut i = 0;
    while i < bytes.len() {
        if depth == 0 && bytes[i..].starts_with(token.as_bytes()) {
            return Some(i);
        }
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    None
}

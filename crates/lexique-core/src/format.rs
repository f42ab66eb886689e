use std::fmt::Write;

use lexique_types::Record;
use lexique_types::types::capitalize;

use crate::error::{Result, StoreError};

/// Template placeholder characters the generator sometimes leaves behind
const RESERVED: [char; 2] = ['[', ']'];

/// Render one record in the canonical micro-syntax.
///
/// The output is a fixed point of one parse/format cycle: formatting a record
/// read back from formatted text reproduces the same bytes.
pub fn format(record: &Record) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        r"\entry{{{}}}{{{}}}",
        capitalize(&clean(&record.headword)),
        clean(&record.word_type)
    );
    out.push_str("  {\n");
    for definition in &record.definitions {
        let _ = writeln!(out, r"    \item {}", clean(definition));
    }
    out.push_str("  }\n  {\n");
    for example in &record.examples {
        let _ = writeln!(
            out,
            r"    \item {} \\ ({})",
            clean(&example.source),
            clean(&example.translation)
        );
    }
    out.push_str("  }");

    out
}

fn clean(field: &str) -> String {
    field.replace(RESERVED, "").trim().to_string()
}

/// Reject records the formatter would render into text the parser cannot
/// read back as the same record.
pub fn validate(record: &Record) -> Result<()> {
    let invalid = |reason: String| StoreError::InvalidRecord {
        headword: record.headword.clone(),
        reason,
    };

    if clean(&record.headword).is_empty() {
        return Err(invalid("empty headword".into()));
    }
    if record.definitions.is_empty() {
        return Err(invalid("no definitions".into()));
    }

    let fields = std::iter::once(("headword", record.headword.as_str()))
        .chain(std::iter::once(("word type", record.word_type.as_str())))
        .chain(record.definitions.iter().map(|d| ("definition", d.as_str())))
        .chain(record.examples.iter().flat_map(|e| {
            [
                ("example", e.source.as_str()),
                ("translation", e.translation.as_str()),
            ]
        }));

    for (name, value) in fields {
        if !balanced(&clean(value)) {
            return Err(invalid(format!("unbalanced braces in {name} {value:?}")));
        }
        if name == "definition" && clean(value).is_empty() {
            return Err(invalid("empty definition".into()));
        }
        if value.contains(r"\item") {
            return Err(invalid(format!(r"item marker inside {name} {value:?}")));
        }
    }

    for example in &record.examples {
        if example.source.contains(r"\\") {
            return Err(invalid(format!(
                r"line break inside example {:?}",
                example.source
            )));
        }
        if clean(&example.source).is_empty() {
            return Err(invalid("empty example sentence".into()));
        }
    }

    Ok(())
}

fn balanced(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut depth = 0i32;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            // a lone trailing backslash would escape the closing brace
            b'\\' if i + 1 == bytes.len() => return false,
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
        i += 1;
    }
    depth == 0
}

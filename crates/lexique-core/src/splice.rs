//! Edits confined to the record region of a document.
//!
//! Everything before the region start token and from the region end token on
//! is copied through untouched by every function here.

use lexique_types::Record;

use crate::error::{Result, StoreError};
use crate::format::format;
use crate::parser::{ParsedRecord, parse_records};
use crate::syntax::{RECORD_MARKER, REGION_END, REGION_START, find_all};

/// A document cut into its three parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    /// Everything up to and including the region start token
    pub preamble: &'a str,
    /// Text between the two tokens
    pub body: &'a str,
    /// The region end token and everything after it
    pub footer: &'a str,
}

impl Region<'_> {
    /// Byte offset of the body inside the full document
    pub fn body_offset(&self) -> usize {
        self.preamble.len()
    }
}

pub fn locate_region(text: &str) -> Result<Region<'_>> {
    let start = text
        .find(REGION_START)
        .ok_or(StoreError::RegionNotFound {
            missing: "region start token",
        })?
        + REGION_START.len();
    let end = text
        .rfind(REGION_END)
        .filter(|end| *end >= start)
        .ok_or(StoreError::RegionNotFound {
            missing: "region end token",
        })?;

    Ok(Region {
        preamble: &text[..start],
        body: &text[start..end],
        footer: &text[end..],
    })
}

/// Records of the region body, spans relative to the body
pub fn region_records(text: &str) -> Result<(Region<'_>, Vec<ParsedRecord>)> {
    let region = locate_region(text)?;
    let records = parse_records(region.body)?;
    Ok((region, records))
}

/// Re-render the whole region from `records`, in the order given
pub fn replace_region(text: &str, records: &[Record]) -> Result<String> {
    let rendered: Vec<String> = records.iter().map(format).collect();
    replace_region_with(text, "", rendered.iter().map(|r| (r.as_str(), "")))
}

/// Rewrite the region body from already-rendered record texts, in the order
/// given: `lead` at the head of the region and, per record, the free text
/// that followed it.
pub fn replace_region_with<'r>(
    text: &str,
    lead: &str,
    records: impl IntoIterator<Item = (&'r str, &'r str)>,
) -> Result<String> {
    let region = locate_region(text)?;

    let blocks: Vec<String> = records
        .into_iter()
        .map(|(record_text, trailing)| {
            if trailing.is_empty() {
                record_text.to_string()
            } else {
                format!("{record_text}\n{trailing}")
            }
        })
        .collect();

    let mut body = String::from("\n");
    if !lead.is_empty() {
        body.push_str(lead);
        body.push_str("\n\n");
    }
    if !blocks.is_empty() {
        body.push_str(&blocks.join("\n\n"));
        body.push('\n');
    }

    Ok([region.preamble, body.as_str(), region.footer].concat())
}

/// Splice already-rendered record text in as the last element of the region,
/// or as the first when the region holds no record yet.
pub fn insert_at_end(text: &str, record_text: &str) -> Result<String> {
    let region = locate_region(text)?;
    let body_start = region.body_offset();
    let body_end = body_start + region.body.len();
    let has_records = find_all(region.body, RECORD_MARKER).next().is_some();

    let spliced = if has_records {
        let before = text[..body_end].trim_end();
        [before, "\n\n", record_text, "\n", region.footer].concat()
    } else {
        [
            region.preamble,
            "\n",
            record_text,
            "\n",
            region.body.trim_start(),
            region.footer,
        ]
        .concat()
    };

    Ok(spliced)
}

/// Delete the first record whose headword field is exactly `headword`, from
/// its marker up to the next marker or the region end token.
pub fn remove_record(text: &str, headword: &str) -> Result<String> {
    let (region, records) = region_records(text)?;
    let body_start = region.body_offset();

    let index = records
        .iter()
        .position(|parsed| parsed.raw_headword == headword)
        .ok_or_else(|| StoreError::RecordNotFound(headword.to_string()))?;

    let start = body_start + records[index].span.start;
    let end = body_start
        + records
            .get(index + 1)
            .map(|next| next.span.start)
            .unwrap_or(region.body.len());

    Ok([&text[..start], &text[end..]].concat())
}

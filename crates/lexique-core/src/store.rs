use std::collections::HashMap;
use std::collections::hash_map::Entry as MapEntry;
use std::path::{Path, PathBuf};

use lexique_types::Record;
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};
use crate::format::{format, validate};
use crate::normalize::{headword_key, normalize};
use crate::parser::{ParsedRecord, parse_records};
use crate::persist::{DocumentLock, read_document, write_atomic};
use crate::splice::{insert_at_end, region_records, remove_record, replace_region_with};
use crate::syntax::{RECORD_MARKER, find_all, skeleton};

/// Rebuilt documents shorter than this share of the original are refused
const MIN_KEPT_TENTHS: usize = 9;

/// Caller's answer when a headword is already stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateAction {
    Skip,
    View,
    Force,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    Replaced { previous: Record },
    Skipped { existing: String },
    Viewed(Record),
}

#[derive(Debug, Clone)]
struct StoredEntry {
    record: Record,
    /// Headword as written in the document, used to find the record again
    spelling: String,
}

/// Vocabulary records of one document, keyed by normalized headword.
///
/// Every mutation runs read, compute, write under an exclusive lock on the
/// document and writes the whole new text at once; on any error the file is
/// left as it was.
pub struct EntryStore {
    path: PathBuf,
    entries: HashMap<String, StoredEntry>,
}

impl EntryStore {
    /// Open the document at `path`, creating a skeleton document first if it
    /// does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            let _lock = DocumentLock::acquire(&path)?;
            if !path.exists() {
                write_atomic(&path, &skeleton())?;
                info!("Created new vocabulary document: {}", path.display());
            }
        }

        let text = read_document(&path)?;
        let mut store = Self {
            path,
            entries: HashMap::new(),
        };
        store.load(&text)?;

        Ok(store)
    }

    /// Rebuild the in-memory map from document text. Later records win on a
    /// key collision; the document itself is not touched.
    pub fn load(&mut self, text: &str) -> Result<()> {
        let parsed = parse_records(text)?;
        let mut entries: HashMap<String, StoredEntry> = HashMap::with_capacity(parsed.len());

        for ParsedRecord {
            record,
            raw_headword,
            ..
        } in parsed
        {
            let stored = StoredEntry {
                record,
                spelling: raw_headword,
            };
            match entries.entry(normalize(&stored.record.headword)) {
                MapEntry::Occupied(mut slot) => {
                    warn!(
                        "Duplicate headword '{}' collides with '{}' (key '{}'), keeping the later one",
                        stored.spelling,
                        slot.get().spelling,
                        slot.key()
                    );
                    slot.insert(stored);
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(stored);
                }
            }
        }

        self.entries = entries;
        info!("Loaded {} entries from {}", self.entries.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Distinct normalized headwords in memory
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored headword colliding with `word`, if any
    pub fn check_duplicate(&self, word: &str) -> Option<&str> {
        self.entries
            .get(&headword_key(word))
            .map(|entry| entry.record.headword.as_str())
    }

    pub fn get(&self, word: &str) -> Option<&Record> {
        self.entries.get(&headword_key(word)).map(|entry| &entry.record)
    }

    /// All records, ordered by normalized headword
    pub fn records(&self) -> Vec<&Record> {
        self.search("")
    }

    /// Records whose normalized headword starts with the normalized `prefix`
    pub fn search(&self, prefix: &str) -> Vec<&Record> {
        let prefix = headword_key(prefix);
        let mut found: Vec<(&String, &Record)> = self
            .entries
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, entry)| (key, &entry.record))
            .collect();
        found.sort_by(|a, b| a.0.cmp(b.0));
        found.into_iter().map(|(_, record)| record).collect()
    }

    /// Record markers in the document on disk, duplicates included
    pub fn count(&self) -> Result<usize> {
        let text = read_document(&self.path)?;
        Ok(find_all(&text, RECORD_MARKER).count())
    }

    /// Insert `record`, asking `resolve` what to do when its headword is
    /// already stored.
    pub fn add(
        &mut self,
        record: Record,
        resolve: impl FnOnce(&Record) -> DuplicateAction,
    ) -> Result<AddOutcome> {
        if let Some(existing) = self.entries.get(&headword_key(&record.headword)) {
            match resolve(&existing.record) {
                DuplicateAction::Skip => {
                    info!(
                        "Skipping '{}', already stored as '{}'",
                        record.headword, existing.record.headword
                    );
                    return Ok(AddOutcome::Skipped {
                        existing: existing.record.headword.clone(),
                    });
                }
                DuplicateAction::View => return Ok(AddOutcome::Viewed(existing.record.clone())),
                DuplicateAction::Force => {
                    info!("Replacing existing entry '{}'", existing.record.headword);
                }
            }
        }

        self.upsert(record)
    }

    /// Insert `record` only if its headword is new
    pub fn try_insert(&mut self, record: Record) -> Result<AddOutcome> {
        if let Some(existing) = self.check_duplicate(&record.headword) {
            return Err(StoreError::DuplicateKey {
                word: record.headword.clone(),
                existing: existing.to_string(),
            });
        }
        self.upsert(record)
    }

    /// Insert `record` or replace the stored record with the same normalized
    /// headword, then re-sort the document.
    pub fn upsert(&mut self, record: Record) -> Result<AddOutcome> {
        validate(&record)?;

        let _lock = DocumentLock::acquire(&self.path)?;
        let text = read_document(&self.path)?;
        let updated = upsert_text(&text, &record)?;
        write_atomic(&self.path, &updated)?;

        let previous = self
            .entries
            .get(&headword_key(&record.headword))
            .map(|entry| entry.record.clone());
        self.load(&updated)?;

        match previous {
            Some(previous) => {
                info!("Updated entry '{}'", record.headword);
                Ok(AddOutcome::Replaced { previous })
            }
            None => {
                info!("Added entry '{}'", record.headword);
                Ok(AddOutcome::Inserted)
            }
        }
    }

    /// Re-sort the document on disk by normalized headword
    pub fn resort(&mut self) -> Result<()> {
        let _lock = DocumentLock::acquire(&self.path)?;
        let text = read_document(&self.path)?;
        let sorted = resort_text(&text)?;

        if sorted == text {
            debug!("Document already sorted");
        } else {
            write_atomic(&self.path, &sorted)?;
            info!("Entries alphabetized");
        }

        self.load(&sorted)
    }
}

/// Document text after replacing or inserting `record` and re-sorting
pub fn upsert_text(text: &str, record: &Record) -> Result<String> {
    let key = headword_key(&record.headword);
    let (_, parsed) = region_records(text)?;
    let superseded: Vec<&str> = parsed
        .iter()
        .filter(|p| normalize(&p.record.headword) == key)
        .map(|p| p.raw_headword.as_str())
        .collect();

    let mut updated = text.to_string();
    for spelling in superseded {
        debug!("Removing superseded record '{}'", spelling);
        updated = remove_record(&updated, spelling)?;
    }
    let updated = insert_at_end(&updated, &format(record))?;

    resort_text(&updated)
}

/// Region records sorted by normalized headword, one per key (the later
/// wins), each kept byte for byte. Refuses to drop more than a tenth of the
/// document's bytes.
pub fn resort_text(text: &str) -> Result<String> {
    let (region, parsed) = region_records(text)?;
    let Some(first) = parsed.first() else {
        warn!("No entries found to alphabetize");
        return Ok(text.to_string());
    };
    let lead = region.body[..first.span.start].trim();

    let mut latest: HashMap<String, usize> = HashMap::with_capacity(parsed.len());
    for (index, p) in parsed.iter().enumerate() {
        if let Some(earlier) = latest.insert(normalize(&p.record.headword), index) {
            warn!(
                "Dropping duplicate record '{}' in favour of '{}'",
                parsed[earlier].raw_headword, p.raw_headword
            );
        }
    }

    let mut kept: Vec<(String, &ParsedRecord)> = latest
        .into_iter()
        .map(|(key, index)| (key, &parsed[index]))
        .collect();
    kept.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| a.1.record.headword.cmp(&b.1.record.headword))
    });

    // records move as written; only a newly inserted one is ever rendered
    let rebuilt = replace_region_with(
        text,
        lead,
        kept.iter()
            .map(|(_, p)| (&region.body[p.span.clone()], p.trailing.as_str())),
    )?;

    if rebuilt.len() * 10 < text.len() * MIN_KEPT_TENTHS {
        warn!(
            "Significant content loss detected ({} -> {} bytes), aborting",
            text.len(),
            rebuilt.len()
        );
        return Err(StoreError::ContentLossGuardTripped {
            original: text.len(),
            rebuilt: rebuilt.len(),
        });
    }

    Ok(rebuilt)
}

//! DOCX translation-table codec.
//!
//! Encoding emits one 3-row, 2-column table per entry (`key` / base-language
//! row / target-language row), each followed by an empty paragraph — without
//! that separator Word auto-joins adjacent tables and text extraction can no
//! longer tell entries apart.
//!
//! Decoding works on plain text already pulled out of a document. The
//! document's binary layout belongs to the word-processor library; the
//! extraction here only reproduces paragraph order with blank-line gaps, and
//! the decoder is a defensive per-line state machine so a document mangled by
//! a translator degrades to per-entry skips instead of a crash.

use std::{fs::File, io::Read, path::Path};

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow, WidthType};
use quick_xml::{Reader, events::Event};
use serde_json::Value;

use crate::{error::Error, keys::JsonMap, table::TranslationTable};

/// First-cell marker of every entry table.
const KEY_MARKER: &str = "key";

/// Label column width in twentieths of a point. Cosmetic only.
const LABEL_CELL_WIDTH: usize = 1800;

/// Full table width in twentieths of a point. Cosmetic only.
const TABLE_WIDTH: usize = 9600;

fn text_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

fn label_cell(text: &str) -> TableCell {
    text_cell(text).width(LABEL_CELL_WIDTH, WidthType::Dxa)
}

fn entry_table(key: &str, base_row: (&str, &str), target_row: (&str, &str)) -> Table {
    Table::new(vec![
        TableRow::new(vec![label_cell(KEY_MARKER), text_cell(key)]).cant_split(),
        TableRow::new(vec![label_cell(base_row.0), text_cell(base_row.1)]).cant_split(),
        TableRow::new(vec![label_cell(target_row.0), text_cell(target_row.1)]).cant_split(),
    ])
    .width(TABLE_WIDTH, WidthType::Dxa)
}

/// Encodes a translation table into a document: per entry, a table of
/// `("key", key)`, `(base_lang, base_value)`, `(target_lang, target_value or "")`
/// rows, followed by an empty separator paragraph.
pub fn encode(table: &TranslationTable) -> Docx {
    let mut docx = Docx::new();
    for entry in &table.entries {
        docx = docx
            .add_table(entry_table(
                &entry.key,
                (&table.base_language, &entry.base_value),
                (
                    &table.target_language,
                    entry.target_value.as_deref().unwrap_or(""),
                ),
            ))
            .add_paragraph(Paragraph::new());
    }
    docx
}

/// Encodes `table` and packs the document to `path`.
pub fn write_document<P: AsRef<Path>>(table: &TranslationTable, path: P) -> Result<(), Error> {
    let file = File::create(path)?;
    encode(table)
        .build()
        .pack(file)
        .map_err(|e| Error::document_error(format!("failed to pack document: {}", e)))?;
    Ok(())
}

/// Extracts plain text from a `.docx` file: every paragraph's text runs, in
/// document order, each followed by a blank line.
///
/// This stands in for the external text extractor the import path depends
/// on; the decoder treats its output as best-effort either way.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let file = File::open(&path).map_err(Error::Io)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| Error::document_error(format!("not a document container: {}", e)))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::document_error(format!("document body missing: {}", e)))?
        .read_to_string(&mut xml)?;
    paragraphs_from_xml(&xml)
}

/// Walks `word/document.xml`, collecting `<w:t>` run text per `<w:p>`.
fn paragraphs_from_xml(xml: &str) -> Result<String, Error> {
    let mut reader = Reader::from_str(xml);
    let mut in_run_text = false;
    let mut paragraph = String::new();
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"w:t" => in_run_text = false,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"w:p" => {
                text.push_str(&paragraph);
                text.push_str("\n\n");
                paragraph.clear();
            }
            // Self-closing empty paragraphs still separate entries.
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"w:p" => {
                text.push_str(&paragraph);
                text.push_str("\n\n");
                paragraph.clear();
            }
            Ok(Event::Text(e)) if in_run_text => {
                paragraph.push_str(&e.unescape().map_err(Error::XmlParse)?);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
    }
    Ok(text)
}

/// Result of scanning extracted document text.
///
/// Per-entry mismatches are soft: the run still succeeds with whatever
/// parsed, so `missing` and `skipped` exist for reporting only.
#[derive(Debug, Default)]
pub struct DecodeReport {
    /// Key → non-empty target string, in document order.
    pub translations: JsonMap,
    /// Keys whose target-value line was empty.
    pub missing: Vec<String>,
    /// Entries abandoned because the text stopped matching the row pattern.
    pub skipped: usize,
}

enum DecodeState {
    /// Waiting for the literal `key` marker that opens an entry.
    Marker,
    /// Marker seen; next non-blank line is the translation key.
    Key,
    ExpectBaseLang(String),
    ExpectBaseValue(String),
    ExpectTargetLang(String),
    ExpectTargetValue(String),
}

/// Scans extracted document text for the encoder's six-line entry pattern:
/// `key`, key value, base language id, base value, target language id,
/// target value, with blank-line gaps between paragraphs.
///
/// Entries with a non-empty target line are recorded; an empty target line
/// is reported as missing. Any other mismatch (reordered or deleted rows)
/// abandons the current entry and re-synchronizes on the next `key` marker.
pub fn decode(text: &str, base_language: &str, target_language: &str) -> DecodeReport {
    let mut report = DecodeReport::default();
    let mut state = DecodeState::Marker;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            // Blank gaps between paragraphs carry no content. An empty
            // target value is recognized by the next entry's marker instead.
            continue;
        }

        state = match state {
            DecodeState::Marker => {
                if line == KEY_MARKER {
                    DecodeState::Key
                } else {
                    DecodeState::Marker
                }
            }
            DecodeState::Key => DecodeState::ExpectBaseLang(line.to_string()),
            DecodeState::ExpectBaseLang(key) => {
                if line == base_language {
                    DecodeState::ExpectBaseValue(key)
                } else {
                    abandon(&mut report, line)
                }
            }
            DecodeState::ExpectBaseValue(key) => DecodeState::ExpectTargetLang(key),
            DecodeState::ExpectTargetLang(key) => {
                if line == target_language {
                    DecodeState::ExpectTargetValue(key)
                } else {
                    abandon(&mut report, line)
                }
            }
            DecodeState::ExpectTargetValue(key) => {
                if line == KEY_MARKER {
                    // The next entry started before any target text showed
                    // up, so this entry's target paragraph was empty.
                    report.missing.push(key);
                    DecodeState::Key
                } else {
                    report
                        .translations
                        .insert(key, Value::String(line.to_string()));
                    DecodeState::Marker
                }
            }
        };
    }

    // Text ran out mid-entry.
    match state {
        DecodeState::Marker => {}
        DecodeState::ExpectTargetValue(key) => report.missing.push(key),
        _ => report.skipped += 1,
    }

    report
}

/// Counts the abandoned entry and re-synchronizes, letting the offending
/// line double as the next entry's marker.
fn abandon(report: &mut DecodeReport, line: &str) -> DecodeState {
    report.skipped += 1;
    if line == KEY_MARKER {
        DecodeState::Key
    } else {
        DecodeState::Marker
    }
}

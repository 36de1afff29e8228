//! CoNLL-U / CoNLL-X reader for dependency parses.
//!
//! Sentences are separated by blank lines. Token lines carry ten
//! tab-separated columns: ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC.
//! Multiword token ranges (`3-4`) and empty nodes (`5.1`) are skipped.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::grammar::tree::{ConlluRow, DependencyNode, DependencyTree};

const TEXT_COMMENT: &str = "# text =";
const MISSING: &str = "_";

const ID: usize = 0;
const FORM: usize = 1;
const LEMMA: usize = 2;
const UPOS: usize = 3;
const XPOS: usize = 4;
const FEATS: usize = 5;
const HEAD: usize = 6;
const DEPREL: usize = 7;

/// Read every sentence of a CoNLL-U file.
pub fn read_conllu<P: AsRef<Path>>(path: P) -> Result<Vec<ConlluRow>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to open CoNLL-U file: {}", path.as_ref().display()))?;
    read_conllu_str(&content)
}

/// Read every sentence of CoNLL-U formatted text.
pub fn read_conllu_str(content: &str) -> Result<Vec<ConlluRow>> {
    let mut rows = Vec::new();
    let mut text: Option<String> = None;
    let mut block = String::new();
    let mut first_line = 0usize;

    for (line_idx, line) in content.lines().enumerate() {
        let trimmed = line.trim_end_matches('\r');
        if trimmed.trim().is_empty() {
            if !block.is_empty() {
                rows.push(parse_sentence(&block, text.take(), first_line)?);
                block.clear();
            }
            text = None;
            continue;
        }
        if let Some(comment) = trimmed.strip_prefix('#') {
            if trimmed.starts_with(TEXT_COMMENT) {
                text = Some(trimmed[TEXT_COMMENT.len()..].trim().to_string());
            } else {
                log::trace!("Skipping comment: #{}", comment);
            }
            continue;
        }
        if block.is_empty() {
            first_line = line_idx + 1;
        }
        block.push_str(trimmed);
        block.push('\n');
    }
    if !block.is_empty() {
        rows.push(parse_sentence(&block, text.take(), first_line)?);
    }

    log::debug!("Read {} sentences from CoNLL-U input", rows.len());
    Ok(rows)
}

fn parse_sentence(block: &str, text: Option<String>, first_line: usize) -> Result<ConlluRow> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(block.as_bytes());

    let mut tree = DependencyTree::new();
    let mut words = Vec::new();

    for (offset, result) in reader.records().enumerate() {
        let line_no = first_line + offset;
        let record = result.with_context(|| format!("Failed to read line {}", line_no))?;
        let Some(node) = parse_token(&record, line_no)? else {
            continue;
        };
        if let Some(word) = &node.word {
            words.push(word.clone());
        }
        if tree.insert(node).is_some() {
            return Err(anyhow!("Duplicate token id at line {}", line_no));
        }
    }

    let text = text.unwrap_or_else(|| words.join(" "));
    Ok(ConlluRow::new(text, tree))
}

/// `None` for lines that are not plain tokens (ranges and empty nodes).
fn parse_token(record: &StringRecord, line_no: usize) -> Result<Option<DependencyNode>> {
    if record.len() < 8 {
        return Err(anyhow!(
            "Expected at least 8 columns at line {}, found {}",
            line_no,
            record.len()
        ));
    }

    let id = field(record, ID);
    if id.contains('-') || id.contains('.') {
        return Ok(None);
    }
    let address = id
        .parse::<usize>()
        .with_context(|| format!("Invalid token id '{}' at line {}", id, line_no))?;
    if address == 0 {
        return Err(anyhow!("Token id 0 is reserved for the root (line {})", line_no));
    }

    let head = match field(record, HEAD) {
        MISSING | "" => None,
        value => Some(
            value
                .parse::<usize>()
                .with_context(|| format!("Invalid head '{}' at line {}", value, line_no))?,
        ),
    };

    Ok(Some(DependencyNode {
        address,
        word: optional(field(record, FORM)),
        lemma: optional(field(record, LEMMA)),
        ctag: field(record, UPOS).to_string(),
        tag: field(record, XPOS).to_string(),
        feats: match field(record, FEATS) {
            "" => MISSING.to_string(),
            feats => feats.to_string(),
        },
        head,
        rel: field(record, DEPREL).to_string(),
    }))
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or_default().trim()
}

fn optional(value: &str) -> Option<String> {
    match value {
        MISSING | "" => None,
        v => Some(v.to_string()),
    }
}

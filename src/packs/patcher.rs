//! Per-file img backfill from prototypeToken.texture.src
//!
//! Each pack file is parsed structurally to decide what (if anything) to
//! do, but the write path is a single-line textual insert so every other
//! byte of the file survives untouched: comments, quoting, key order,
//! line endings. The patched text is re-parsed and compared against the
//! expected document before anything is written; a file that cannot be
//! patched verifiably is reported and left alone. Files where `img`
//! already matches are never rewritten.

use serde_yml::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::packs::scalar::format_scalar;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("patched document failed verification; file left untouched")]
    Verify,
}

/// What happened (or would happen) to one pack file
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOutcome {
    /// `img` was missing and has been set to the texture src
    Added(String),
    /// `img` exists but disagrees with the texture src; left untouched
    Mismatch { img: String, src: String },
    /// Nothing to do: no texture src, `img` already matches, or the file
    /// has no usable root key line to insert after
    Skipped,
}

/// `.yml`/`.yaml` selection for the directory walk
pub fn is_pack_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e == "yml" || e == "yaml")
}

/// Navigate the optional `prototypeToken` -> `texture` -> `src` chain.
fn texture_src(doc: &Value) -> Option<&str> {
    doc.get("prototypeToken")?
        .get("texture")?
        .get("src")?
        .as_str()
}

/// Decide what the patch would do to this document text.
pub fn evaluate(text: &str) -> Result<PatchOutcome, PatchError> {
    let doc: Value = serde_yml::from_str(text)?;
    let Some(src) = texture_src(&doc) else {
        return Ok(PatchOutcome::Skipped);
    };
    match doc.get("img") {
        None => {
            if find_insert_offset(text).is_some() && format_scalar(src).is_some() {
                Ok(PatchOutcome::Added(src.to_string()))
            } else {
                Ok(PatchOutcome::Skipped)
            }
        }
        Some(img) if img.as_str() == Some(src) => Ok(PatchOutcome::Skipped),
        Some(img) => Ok(PatchOutcome::Mismatch {
            img: display_value(img),
            src: src.to_string(),
        }),
    }
}

/// Byte offset of the end of the first root-level key line that a new
/// line can safely follow, if any.
///
/// A root key line starts in column zero with something other than
/// whitespace or `#` and contains a colon. Document markers (`---`) and
/// comments never match. A key that opens a block scalar is passed over:
/// the lines after it belong to the block, so the scan continues to the
/// next root key.
pub fn find_insert_offset(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        if is_root_key_line(content) && !opens_block_scalar(content) {
            return Some(offset + content.len());
        }
        offset += line.len();
    }
    None
}

fn is_root_key_line(line: &str) -> bool {
    match line.chars().next() {
        None => false,
        Some(c) if c.is_whitespace() || c == '#' => false,
        Some(_) => line.contains(':'),
    }
}

/// Detects `key: |`, `key: >` and their chomping/indentation variants
/// (`|-`, `>2`, ...), with or without a trailing comment.
fn opens_block_scalar(line: &str) -> bool {
    let Some((_, value)) = line.split_once(':') else {
        return false;
    };
    let value = match value.find(" #") {
        Some(i) => &value[..i],
        None => value,
    };
    let mut chars = value.trim().chars();
    matches!(chars.next(), Some('|' | '>')) && chars.all(|c| matches!(c, '+' | '-' | '0'..='9'))
}

/// Insert an `img:` line after the first usable root-level key line,
/// keeping the file's own line endings.
pub fn insert_img_line(text: &str, src: &str) -> Option<String> {
    let offset = find_insert_offset(text)?;
    let scalar = format_scalar(src)?;
    let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let mut out = String::with_capacity(text.len() + scalar.len() + 8);
    out.push_str(&text[..offset]);
    out.push_str(newline);
    out.push_str("img: ");
    out.push_str(&scalar);
    out.push_str(&text[offset..]);
    Some(out)
}

/// The patched text must parse back to the original document plus the
/// new `img` key, nothing else. Catches any root key line shape the
/// insert-point scan misjudges (e.g. a flow collection spanning lines).
fn verify_patch(original: &str, patched: &str, src: &str) -> bool {
    let Ok(Value::Mapping(mut expected)) = serde_yml::from_str::<Value>(original) else {
        return false;
    };
    expected.insert("img", Value::String(src.to_string()));
    matches!(
        serde_yml::from_str::<Value>(patched),
        Ok(Value::Mapping(actual)) if actual == expected
    )
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_yml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Evaluate one pack file and, unless `dry_run`, apply the insert.
pub fn patch_file(path: &Path, dry_run: bool) -> Result<PatchOutcome, PatchError> {
    let text = fs::read_to_string(path)?;
    let outcome = evaluate(&text)?;
    if !dry_run {
        if let PatchOutcome::Added(src) = &outcome {
            if let Some(patched) = insert_img_line(&text, src) {
                if !verify_patch(&text, &patched, src) {
                    return Err(PatchError::Verify);
                }
                fs::write(path, patched)?;
            }
        }
    }
    Ok(outcome)
}

//! Turns raw source files into [`SourceDocument`] trees.
//!
//! VS Code themes and canonical blueprints are JSON with comments and trailing commas, read with
//! `json5`. iTerm2 presets are property lists (XML or binary), read with `plist`.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{ThemeResult, ThemeverterError};
use crate::source::{SourceDocument, SourceFormat};

/// Parse in-memory source bytes into a generic tree.
pub fn parse_bytes(bytes: &[u8], format: SourceFormat) -> ThemeResult<serde_json::Value> {
    match format {
        SourceFormat::VsCode | SourceFormat::Canonical => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| ThemeverterError::serde(format!("{format} source is not UTF-8: {e}")))?;
            // json5 rejects a leading byte-order mark.
            let text = text.strip_prefix('\u{feff}').unwrap_or(text);
            json5::from_str(text).map_err(|e| ThemeverterError::serde(format!("{format}: {e}")))
        }
        SourceFormat::ITerm2 => {
            let raw: plist::Value = plist::from_bytes(bytes)
                .map_err(|e| ThemeverterError::serde(format!("{format}: {e}")))?;
            serde_json::to_value(raw).map_err(|e| ThemeverterError::serde(format!("{format}: {e}")))
        }
    }
}

/// Read and parse the file at `path`, recording it as the document origin.
#[tracing::instrument]
pub fn read_document(path: &Path, format: SourceFormat) -> ThemeResult<SourceDocument> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read source file {}", path.display()))?;
    let tree = parse_bytes(&bytes, format)?;
    Ok(SourceDocument::new(tree).with_origin(path))
}

#[cfg(test)]
#[path = "../tests/unit/reader.rs"]
mod tests;

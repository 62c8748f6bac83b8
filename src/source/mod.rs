//! Source adapters: one per input format, each turning a generic document tree into a
//! [`CanonicalScheme`].
//!
//! Adapters never read files. The tree is produced beforehand by
//! [`read_document`](crate::read_document) (or by the caller) and handed over as a
//! [`SourceDocument`].

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::color::codec::HexColor;
use crate::foundation::error::{ThemeResult, ThemeverterError};
use crate::scheme::model::{CanonicalScheme, SchemeTemplate};

pub(crate) mod canonical;
pub(crate) mod iterm2;
pub(crate) mod scope_index;
pub(crate) mod vscode;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// VS Code color theme (JSON with comments).
    VsCode,
    /// iTerm2 `.itermcolors` property list.
    ITerm2,
    /// The canonical scheme as JSON.
    Canonical,
}

impl SourceFormat {
    /// Every supported source format.
    pub const ALL: [SourceFormat; 3] = [Self::VsCode, Self::ITerm2, Self::Canonical];

    /// Stable identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::VsCode => "vscode",
            Self::ITerm2 => "iterm2",
            Self::Canonical => "canonical",
        }
    }

    /// Guess the format from a file name.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".canonical.json") {
            Some(Self::Canonical)
        } else if name.ends_with(".itermcolors") {
            Some(Self::ITerm2)
        } else if name.ends_with(".json") || name.ends_with(".jsonc") {
            Some(Self::VsCode)
        } else {
            None
        }
    }

    /// The adapter implementing this format.
    pub fn adapter(self) -> &'static dyn SourceAdapter {
        match self {
            Self::VsCode => &vscode::VsCodeAdapter,
            Self::ITerm2 => &iterm2::ITerm2Adapter,
            Self::Canonical => &canonical::CanonicalAdapter,
        }
    }
}

impl FromStr for SourceFormat {
    type Err = ThemeverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vscode" | "vs-code" | "code" => Ok(Self::VsCode),
            "iterm2" | "iterm" | "itermcolors" => Ok(Self::ITerm2),
            "canonical" => Ok(Self::Canonical),
            _ => Err(ThemeverterError::unsupported_source(s)),
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A parsed source document: a generic key/value tree plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// Document contents.
    pub tree: serde_json::Value,
    /// Path the document was read from, when known. Some formats derive the scheme name from it.
    pub origin: Option<PathBuf>,
}

impl SourceDocument {
    /// Document without a known origin.
    pub fn new(tree: serde_json::Value) -> Self {
        Self { tree, origin: None }
    }

    /// Attach the path the document was read from.
    pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

/// Supplies a scheme name when the source document has none.
pub trait NameResolver: Send + Sync {
    /// Return a name for the document at `origin`, or `None` to decline.
    fn resolve_name(&self, origin: Option<&Path>) -> Option<String>;
}

/// Resolver that never supplies a name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNameResolver;

impl NameResolver for NoNameResolver {
    fn resolve_name(&self, _origin: Option<&Path>) -> Option<String> {
        None
    }
}

impl<F> NameResolver for F
where
    F: Fn(Option<&Path>) -> Option<String> + Send + Sync,
{
    fn resolve_name(&self, origin: Option<&Path>) -> Option<String> {
        self(origin)
    }
}

/// Parses one source format into a [`CanonicalScheme`].
pub trait SourceAdapter: Send + Sync {
    /// Format handled by this adapter.
    fn format(&self) -> SourceFormat;

    /// Build a canonical scheme from `doc`, starting from `template`.
    ///
    /// `names` is consulted only when the document does not carry a name.
    fn parse(
        &self,
        doc: &SourceDocument,
        template: &SchemeTemplate,
        names: &dyn NameResolver,
    ) -> ThemeResult<CanonicalScheme>;
}

/// Resolve the scheme name: document, then resolver, then template.
///
/// Control characters become spaces, so a name always fits on one line.
pub(crate) fn resolve_name(
    from_document: Option<&str>,
    doc: &SourceDocument,
    template: &SchemeTemplate,
    names: &dyn NameResolver,
) -> ThemeResult<String> {
    fn non_empty(s: Option<String>) -> Option<String> {
        let cleaned: String = s?
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        let cleaned = cleaned.trim();
        (!cleaned.is_empty()).then(|| cleaned.to_owned())
    }

    non_empty(from_document.map(str::to_owned))
        .or_else(|| non_empty(names.resolve_name(doc.origin.as_deref())))
        .or_else(|| non_empty(template.name.clone()))
        .ok_or_else(|| ThemeverterError::missing_field("name"))
}

/// Parse a color that has no fallback; a malformed value fails the conversion.
pub(crate) fn strict_color(field: &str, raw: Option<&str>) -> ThemeResult<Option<HexColor>> {
    raw.map(|s| {
        HexColor::parse(s)
            .map_err(|_| ThemeverterError::invalid_color(format!("{field}: \"{s}\"")))
    })
    .transpose()
}

/// Parse a color that has a fallback; a malformed value is dropped so the fallback applies.
pub(crate) fn lenient_color(field: &str, raw: Option<&str>) -> Option<HexColor> {
    let s = raw?;
    match HexColor::parse(s) {
        Ok(c) => Some(c),
        Err(e) => {
            tracing::warn!(field, value = s, error = %e, "ignoring malformed color");
            None
        }
    }
}

/// Overwrite `slot` only when the source provided a value.
pub(crate) fn overlay(slot: &mut Option<HexColor>, value: Option<HexColor>) {
    if value.is_some() {
        *slot = value;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/formats.rs"]
mod tests;

use serde::Deserialize;

use crate::foundation::error::{ThemeResult, ThemeverterError};
use crate::scheme::model::{
    AnsiColors, AnsiSlot, BaseColors, BaseField, CanonicalScheme, SchemeTemplate, VimExtension,
};
use crate::source::{NameResolver, SourceAdapter, SourceDocument, SourceFormat, resolve_name};

/// The serialized canonical scheme with every key optional.
///
/// Colors are re-normalized on the way in since `HexColor` only deserializes through
/// [`HexColor::parse`](crate::color::codec::HexColor::parse).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CanonicalDef {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    is_dark: Option<bool>,
    #[serde(default)]
    base: BaseColors,
    #[serde(default)]
    ansi: AnsiColors,
    #[serde(default)]
    vim: Option<VimExtension>,
}

/// Reads back the JSON blueprint written by `--emit-canonical`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CanonicalAdapter;

impl SourceAdapter for CanonicalAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::Canonical
    }

    fn parse(
        &self,
        doc: &SourceDocument,
        template: &SchemeTemplate,
        names: &dyn NameResolver,
    ) -> ThemeResult<CanonicalScheme> {
        let def = CanonicalDef::deserialize(&doc.tree)
            .map_err(|e| ThemeverterError::serde(format!("canonical scheme: {e}")))?;

        let mut draft = template.clone();
        for field in BaseField::ALL {
            if let Some(c) = field.get(&def.base) {
                *field.slot_mut(&mut draft.base) = Some(c.clone());
            }
        }
        for slot in AnsiSlot::ALL {
            if let Some(c) = def.ansi.get(slot) {
                draft.ansi.set(slot, Some(c.clone()));
            }
        }
        if let Some(dark) = def.is_dark {
            draft.is_dark = dark;
        }
        if def.vim.is_some() {
            draft.vim = def.vim;
        }

        draft.name = Some(resolve_name(def.name.as_deref(), doc, template, names)?);
        draft.into_scheme()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/canonical.rs"]
mod tests;

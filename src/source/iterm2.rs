use serde::Deserialize;

use crate::color::codec::{HexColor, Rgb8, relative_luminance, unit_to_u8};
use crate::foundation::error::{ThemeResult, ThemeverterError};
use crate::scheme::model::{AnsiSlot, BaseField, CanonicalScheme, SchemeTemplate};
use crate::source::{
    NameResolver, SourceAdapter, SourceDocument, SourceFormat, overlay, resolve_name,
};

const EXTENSION: &str = ".itermcolors";

/// Preset entries that map onto base fields.
const ENTRIES: [(BaseField, &str); 6] = [
    (BaseField::Background, "Background Color"),
    (BaseField::Normal, "Foreground Color"),
    (BaseField::Cursor, "Cursor Color"),
    (BaseField::CursorText, "Cursor Text Color"),
    (BaseField::SelectionBackground, "Selection Color"),
    (BaseField::SelectionForeground, "Selected Text Color"),
];

/// One color dictionary of a preset.
#[derive(Debug, Deserialize)]
struct ColorEntryDef {
    #[serde(rename = "Red Component")]
    red: f64,
    #[serde(rename = "Green Component")]
    green: f64,
    #[serde(rename = "Blue Component")]
    blue: f64,
    #[serde(rename = "Alpha Component", default)]
    alpha: Option<f64>,
    #[serde(rename = "Color Space", default)]
    color_space: Option<String>,
}

impl ColorEntryDef {
    fn to_hex(&self, key: &str) -> ThemeResult<HexColor> {
        if let Some(space) = self.color_space.as_deref()
            && !space.eq_ignore_ascii_case("srgb")
        {
            tracing::warn!(entry = key, color_space = space, "treating components as sRGB");
        }
        if self.alpha.is_some_and(|a| a < 1.0) {
            tracing::debug!(entry = key, "dropping alpha component");
        }
        let channel = |x: f64| {
            unit_to_u8(x).map_err(|e| ThemeverterError::invalid_color(format!("{key}: {e}")))
        };
        let rgb = Rgb8::new(channel(self.red)?, channel(self.green)?, channel(self.blue)?);
        Ok(HexColor::from(rgb))
    }
}

/// iTerm2 color preset adapter.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ITerm2Adapter;

impl SourceAdapter for ITerm2Adapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::ITerm2
    }

    fn parse(
        &self,
        doc: &SourceDocument,
        template: &SchemeTemplate,
        names: &dyn NameResolver,
    ) -> ThemeResult<CanonicalScheme> {
        let Some(entries) = doc.tree.as_object() else {
            return Err(ThemeverterError::serde(
                "iterm2 preset must be a dictionary of color entries",
            ));
        };
        let read = |key: &str| -> ThemeResult<Option<HexColor>> {
            entries
                .get(key)
                .map(|raw| {
                    ColorEntryDef::deserialize(raw)
                        .map_err(|e| ThemeverterError::invalid_color(format!("{key}: {e}")))?
                        .to_hex(key)
                })
                .transpose()
        };

        let mut draft = template.clone();
        for (field, key) in ENTRIES {
            let value = if field == BaseField::SelectionForeground {
                read(key).unwrap_or_else(|e| {
                    tracing::warn!(entry = key, error = %e, "ignoring malformed color");
                    None
                })
            } else {
                read(key)?
            };
            overlay(field.slot_mut(&mut draft.base), value);
        }
        if draft.base.selection_foreground.is_none() {
            draft.base.selection_foreground = draft.base.cursor_text.clone();
        }

        for slot in AnsiSlot::ALL {
            let key = format!("Ansi {} Color", slot.number());
            if let Some(c) = read(&key)? {
                draft.ansi.set(slot, Some(c));
            }
        }

        if let Some(bg) = &draft.base.background {
            draft.is_dark = relative_luminance(bg.rgb8()) < 0.5;
        }

        let from_file = origin_name(doc);
        draft.name = Some(resolve_name(from_file.as_deref(), doc, template, names)?);
        draft.into_scheme()
    }
}

/// Scheme name implied by the preset's file name.
fn origin_name(doc: &SourceDocument) -> Option<String> {
    let path = doc.origin.as_deref()?;
    let file = path.file_name()?.to_str()?;
    let lower = file.to_ascii_lowercase();
    match lower.strip_suffix(EXTENSION) {
        Some(rest) => Some(file[..rest.len()].to_owned()),
        None => path.file_stem()?.to_str().map(str::to_owned),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/iterm2.rs"]
mod tests;

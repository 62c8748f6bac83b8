use serde_json::{Value, json};

use crate::foundation::error::ThemeResult;
use crate::scheme::model::{BaseField, CanonicalScheme, VimBackground};
use crate::target::{
    Absent, Conversion, FieldRule, Formatter, RecordBuilder, TargetFormat, TargetRecord, base,
};

/// Highlight groups in output order.
pub(crate) const GROUPS: [&str; 9] = [
    "Normal",
    "Comment",
    "String",
    "Number",
    "Boolean",
    "LineNr",
    "Cursor",
    "CursorLine",
    "Visual",
];

const fn gui(path: &'static str, field: BaseField) -> FieldRule {
    FieldRule::new(path, base(field), Conversion::Passthrough)
}

const fn cterm(path: &'static str, field: BaseField) -> FieldRule {
    FieldRule::new(path, base(field), Conversion::Ansi256)
}

// CursorLine only sets a background; its fg keys stay null.
const RULES: &[FieldRule] = &[
    gui("colors.Normal.guifg", BaseField::Normal).require(),
    gui("colors.Normal.guibg", BaseField::Background).require(),
    cterm("colors.Normal.ctermfg", BaseField::Normal).require(),
    cterm("colors.Normal.ctermbg", BaseField::Background).require(),
    gui("colors.Comment.guifg", BaseField::Comment),
    gui("colors.Comment.guibg", BaseField::Background),
    cterm("colors.Comment.ctermfg", BaseField::Comment),
    cterm("colors.Comment.ctermbg", BaseField::Background),
    gui("colors.String.guifg", BaseField::String),
    gui("colors.String.guibg", BaseField::Background),
    cterm("colors.String.ctermfg", BaseField::String),
    cterm("colors.String.ctermbg", BaseField::Background),
    gui("colors.Number.guifg", BaseField::Number),
    gui("colors.Number.guibg", BaseField::Background),
    cterm("colors.Number.ctermfg", BaseField::Number),
    cterm("colors.Number.ctermbg", BaseField::Background),
    gui("colors.Boolean.guifg", BaseField::Boolean),
    gui("colors.Boolean.guibg", BaseField::Background),
    cterm("colors.Boolean.ctermfg", BaseField::Boolean),
    cterm("colors.Boolean.ctermbg", BaseField::Background),
    gui("colors.LineNr.guifg", BaseField::LineNumber),
    gui("colors.LineNr.guibg", BaseField::Background),
    cterm("colors.LineNr.ctermfg", BaseField::LineNumber),
    cterm("colors.LineNr.ctermbg", BaseField::Background),
    gui("colors.Cursor.guifg", BaseField::Cursor),
    gui("colors.Cursor.guibg", BaseField::CursorText),
    cterm("colors.Cursor.ctermfg", BaseField::Cursor),
    cterm("colors.Cursor.ctermbg", BaseField::CursorText),
    gui("colors.CursorLine.guibg", BaseField::CursorLine),
    cterm("colors.CursorLine.ctermbg", BaseField::CursorLine),
    gui("colors.Visual.guifg", BaseField::SelectionForeground),
    gui("colors.Visual.guibg", BaseField::SelectionBackground),
    cterm("colors.Visual.ctermfg", BaseField::SelectionForeground),
    cterm("colors.Visual.ctermbg", BaseField::SelectionBackground),
];

/// Vim highlight groups with GUI and 256-color attributes.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct VimFormatter;

impl Formatter for VimFormatter {
    fn target(&self) -> TargetFormat {
        TargetFormat::Vim
    }

    fn rules(&self) -> &'static [FieldRule] {
        RULES
    }

    fn format(&self, scheme: &CanonicalScheme) -> ThemeResult<TargetRecord> {
        let background = scheme
            .vim
            .as_ref()
            .and_then(|v| v.background)
            .unwrap_or(if scheme.is_dark {
                VimBackground::Dark
            } else {
                VimBackground::Light
            });

        let mut builder = RecordBuilder::new(Absent::Null);
        builder.insert("name", Value::from(scheme.name.as_str()))?;
        builder.insert("background", Value::from(background.as_str()))?;
        for group in GROUPS {
            builder.insert(
                &format!("colors.{group}"),
                json!({"guifg": null, "guibg": null, "ctermfg": null, "ctermbg": null}),
            )?;
        }
        builder.apply(scheme, RULES)?;
        Ok(builder.finish(self.target()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/target/vim.rs"]
mod tests;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::foundation::error::{ThemeResult, ThemeverterError};
use crate::scheme::model::{
    AnsiSlot, BaseField, CanonicalScheme, SchemeTemplate, VimBackground, VimExtension,
};
use crate::source::scope_index::{ScopeIndex, TokenColorRule};
use crate::source::{
    NameResolver, SourceAdapter, SourceDocument, SourceFormat, lenient_color, overlay,
    resolve_name, strict_color,
};

/// Syntax colors taken from token-color rules.
const SCOPE_FIELDS: [(BaseField, &str); 4] = [
    (BaseField::Comment, "comment"),
    (BaseField::String, "string"),
    (BaseField::Number, "constant.numeric"),
    (BaseField::Boolean, "constant.language.boolean"),
];

/// UI colors taken verbatim from the `colors` map.
const UI_FIELDS: [(BaseField, &str); 6] = [
    (BaseField::Background, "editor.background"),
    (BaseField::LineNumber, "editorLineNumber.foreground"),
    (BaseField::Cursor, "editorCursor.foreground"),
    (BaseField::CursorLine, "editor.lineHighlightBackground"),
    (BaseField::SelectionBackground, "editor.selectionBackground"),
    (BaseField::SelectionForeground, "editor.selectionForeground"),
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VsCodeThemeDef {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    colors: BTreeMap<String, Option<String>>,
    #[serde(default)]
    token_colors: serde_json::Value,
}

impl VsCodeThemeDef {
    fn color(&self, key: &str) -> Option<&str> {
        self.colors.get(key).and_then(|v| v.as_deref())
    }
}

/// VS Code color theme adapter.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct VsCodeAdapter;

impl SourceAdapter for VsCodeAdapter {
    fn format(&self) -> SourceFormat {
        SourceFormat::VsCode
    }

    fn parse(
        &self,
        doc: &SourceDocument,
        template: &SchemeTemplate,
        names: &dyn NameResolver,
    ) -> ThemeResult<CanonicalScheme> {
        let def = VsCodeThemeDef::deserialize(&doc.tree)
            .map_err(|e| ThemeverterError::serde(format!("vscode theme: {e}")))?;
        let index = ScopeIndex::build(token_rules(&def.token_colors)?);
        tracing::debug!(scope_keys = index.len_keys(), "indexed token colors");

        let mut draft = template.clone();

        let global = index.global().map(|r| &r.settings);
        let normal = def
            .color("foreground")
            .or_else(|| def.color("editor.foreground"))
            .or_else(|| global.and_then(|s| s.foreground.as_deref()));
        overlay(&mut draft.base.normal, strict_color("foreground", normal)?);

        for (field, key) in UI_FIELDS {
            let value = if field == BaseField::SelectionForeground {
                lenient_color(key, def.color(key))
            } else {
                strict_color(key, def.color(key))?
            };
            overlay(field.slot_mut(&mut draft.base), value);
        }
        if draft.base.background.is_none() {
            let bg = global.and_then(|s| s.background.as_deref());
            draft.base.background = strict_color("editor.background", bg)?;
        }

        for (field, scope) in SCOPE_FIELDS {
            match index.foreground(scope) {
                Ok(fg) => {
                    overlay(field.slot_mut(&mut draft.base), strict_color(scope, Some(fg))?);
                }
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(field = field.name(), %e, "token color not set");
                }
                Err(e) => return Err(e),
            }
        }

        // Text under a block cursor: explicit cursor background, else the editor background.
        const CURSOR_BG: &str = "editorCursor.background";
        let cursor_text = lenient_color(CURSOR_BG, def.color(CURSOR_BG))
            .or_else(|| draft.base.background.clone());
        overlay(&mut draft.base.cursor_text, cursor_text);

        for slot in AnsiSlot::ALL {
            let key = terminal_key(slot);
            if let Some(c) = strict_color(&key, def.color(&key))? {
                draft.ansi.set(slot, Some(c));
            }
        }

        match def.kind.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("dark" | "hc" | "hc-black") => set_background(&mut draft, VimBackground::Dark),
            Some("light" | "hclight" | "hc-light") => {
                set_background(&mut draft, VimBackground::Light);
            }
            Some(other) => tracing::warn!(kind = other, "unknown theme type; keeping default"),
            None => {}
        }

        draft.name = Some(resolve_name(def.name.as_deref(), doc, template, names)?);
        draft.into_scheme()
    }
}

fn set_background(draft: &mut SchemeTemplate, bg: VimBackground) {
    draft.is_dark = bg == VimBackground::Dark;
    draft.vim = Some(VimExtension {
        background: Some(bg),
    });
}

fn token_rules(raw: &serde_json::Value) -> ThemeResult<Vec<TokenColorRule>> {
    match raw {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::Array(_) => Vec::<TokenColorRule>::deserialize(raw)
            .map_err(|e| ThemeverterError::serde(format!("tokenColors: {e}"))),
        serde_json::Value::String(include) => {
            tracing::warn!(
                include = include.as_str(),
                "tokenColors include file is not followed"
            );
            Ok(Vec::new())
        }
        _ => Err(ThemeverterError::serde("tokenColors must be an array")),
    }
}

/// `terminal.ansiBrightBlack` style key for a slot.
fn terminal_key(slot: AnsiSlot) -> String {
    let name = slot.name();
    let mut key = String::with_capacity(13 + name.len());
    key.push_str("terminal.ansi");
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        key.push(first.to_ascii_uppercase());
        key.extend(chars);
    }
    key
}

#[cfg(test)]
#[path = "../../tests/unit/source/vscode.rs"]
mod tests;

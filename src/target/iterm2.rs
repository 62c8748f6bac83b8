use serde_json::Value;

use crate::foundation::error::ThemeResult;
use crate::scheme::model::{AnsiSlot, BaseField, CanonicalScheme, ColorField};
use crate::target::{
    Absent, Conversion, FieldRule, Formatter, RecordBuilder, TargetFormat, TargetRecord, ansi,
    base,
};

const fn rule(path: &'static str, field: ColorField) -> FieldRule {
    FieldRule::new(path, field, Conversion::UnitRgb)
}

const RULES: &[FieldRule] = &[
    rule("colors.background", base(BaseField::Background)).require(),
    rule("colors.foreground", base(BaseField::Normal)).require(),
    rule("colors.bold", base(BaseField::Normal)),
    rule("colors.link", base(BaseField::Normal)),
    rule("colors.cursor", base(BaseField::Cursor)),
    rule("colors.cursorText", base(BaseField::CursorText)),
    rule("colors.selection", base(BaseField::SelectionBackground)),
    // iTerm2 rejects presets without a selected-text color.
    rule("colors.selectionText", base(BaseField::SelectionForeground))
        .or(base(BaseField::CursorText)),
    rule("colors.badge", ansi(AnsiSlot::Red)),
    rule("colors.tab", base(BaseField::Background)),
    rule("colors.cursorGuide", ansi(AnsiSlot::BrightWhite)),
    rule("colors.black", ansi(AnsiSlot::Black)),
    rule("colors.red", ansi(AnsiSlot::Red)),
    rule("colors.green", ansi(AnsiSlot::Green)),
    rule("colors.yellow", ansi(AnsiSlot::Yellow)),
    rule("colors.blue", ansi(AnsiSlot::Blue)),
    rule("colors.magenta", ansi(AnsiSlot::Magenta)),
    rule("colors.cyan", ansi(AnsiSlot::Cyan)),
    rule("colors.white", ansi(AnsiSlot::White)),
    rule("colors.brightBlack", ansi(AnsiSlot::BrightBlack)),
    rule("colors.brightRed", ansi(AnsiSlot::BrightRed)),
    rule("colors.brightGreen", ansi(AnsiSlot::BrightGreen)),
    rule("colors.brightYellow", ansi(AnsiSlot::BrightYellow)),
    rule("colors.brightBlue", ansi(AnsiSlot::BrightBlue)),
    rule("colors.brightMagenta", ansi(AnsiSlot::BrightMagenta)),
    rule("colors.brightCyan", ansi(AnsiSlot::BrightCyan)),
    rule("colors.brightWhite", ansi(AnsiSlot::BrightWhite)),
];

/// Preset dictionary key (without the trailing `" Color"`) for a record entry.
pub(crate) fn title(entry: &str) -> Option<String> {
    let fixed = match entry {
        "background" => "Background",
        "foreground" => "Foreground",
        "bold" => "Bold",
        "link" => "Link",
        "cursor" => "Cursor",
        "cursorText" => "Cursor Text",
        "selection" => "Selection",
        "selectionText" => "Selected Text",
        "badge" => "Badge",
        "tab" => "Tab",
        "cursorGuide" => "Cursor Guide",
        other => return AnsiSlot::from_name(other).map(|s| format!("Ansi {}", s.number())),
    };
    Some(fixed.to_owned())
}

/// iTerm2 preset entries as unit-float components.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ITerm2Formatter;

impl Formatter for ITerm2Formatter {
    fn target(&self) -> TargetFormat {
        TargetFormat::ITerm2
    }

    fn rules(&self) -> &'static [FieldRule] {
        RULES
    }

    fn format(&self, scheme: &CanonicalScheme) -> ThemeResult<TargetRecord> {
        let mut builder = RecordBuilder::new(Absent::Omit);
        builder.insert("name", Value::from(scheme.name.as_str()))?;
        builder.apply(scheme, RULES)?;
        for rule in RULES.iter().filter(|r| r.resolve(scheme).is_some()) {
            let entry = rule.path.strip_prefix("colors.").unwrap_or(rule.path);
            if let Some(t) = title(entry) {
                builder.insert(&format!("{}.title", rule.path), Value::from(t))?;
            }
        }
        Ok(builder.finish(self.target()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/target/iterm2.rs"]
mod tests;

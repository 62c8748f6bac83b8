use crate::foundation::error::ThemeResult;
use crate::scheme::model::{AnsiSlot, BaseField, CanonicalScheme, ColorField};
use crate::target::{
    Absent, Conversion, FieldRule, Formatter, TargetFormat, TargetRecord, ansi, base,
    format_with_rules,
};

const fn rule(path: &'static str, field: ColorField) -> FieldRule {
    FieldRule::new(path, field, Conversion::StripAlpha)
}

const RULES: &[FieldRule] = &[
    rule("colors.primary.background", base(BaseField::Background)).require(),
    rule("colors.primary.foreground", base(BaseField::Normal)).require(),
    rule("colors.cursor.cursor", base(BaseField::Cursor)),
    rule("colors.cursor.text", base(BaseField::CursorText)),
    rule("colors.selection.background", base(BaseField::SelectionBackground)),
    rule("colors.selection.text", base(BaseField::SelectionForeground)),
    rule("colors.normal.black", ansi(AnsiSlot::Black)),
    rule("colors.normal.red", ansi(AnsiSlot::Red)),
    rule("colors.normal.green", ansi(AnsiSlot::Green)),
    rule("colors.normal.yellow", ansi(AnsiSlot::Yellow)),
    rule("colors.normal.blue", ansi(AnsiSlot::Blue)),
    rule("colors.normal.magenta", ansi(AnsiSlot::Magenta)),
    rule("colors.normal.cyan", ansi(AnsiSlot::Cyan)),
    rule("colors.normal.white", ansi(AnsiSlot::White)),
    rule("colors.bright.black", ansi(AnsiSlot::BrightBlack)),
    rule("colors.bright.red", ansi(AnsiSlot::BrightRed)),
    rule("colors.bright.green", ansi(AnsiSlot::BrightGreen)),
    rule("colors.bright.yellow", ansi(AnsiSlot::BrightYellow)),
    rule("colors.bright.blue", ansi(AnsiSlot::BrightBlue)),
    rule("colors.bright.magenta", ansi(AnsiSlot::BrightMagenta)),
    rule("colors.bright.cyan", ansi(AnsiSlot::BrightCyan)),
    rule("colors.bright.white", ansi(AnsiSlot::BrightWhite)),
];

/// Alacritty `[colors]` tables.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AlacrittyFormatter;

impl Formatter for AlacrittyFormatter {
    fn target(&self) -> TargetFormat {
        TargetFormat::Alacritty
    }

    fn rules(&self) -> &'static [FieldRule] {
        RULES
    }

    fn format(&self, scheme: &CanonicalScheme) -> ThemeResult<TargetRecord> {
        format_with_rules(self.target(), scheme, RULES, Absent::Null)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/target/alacritty.rs"]
mod tests;

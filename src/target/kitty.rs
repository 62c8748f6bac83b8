use crate::foundation::error::ThemeResult;
use crate::scheme::model::{AnsiSlot, BaseField, CanonicalScheme, ColorField};
use crate::target::{
    Absent, Conversion, FieldRule, Formatter, TargetFormat, TargetRecord, ansi, base,
    format_with_rules,
};

const fn rule(path: &'static str, field: ColorField) -> FieldRule {
    FieldRule::new(path, field, Conversion::Passthrough)
}

const RULES: &[FieldRule] = &[
    rule("colors.foreground", base(BaseField::Normal)).require(),
    rule("colors.background", base(BaseField::Background)).require(),
    rule("colors.selection_foreground", base(BaseField::SelectionForeground)),
    rule("colors.selection_background", base(BaseField::SelectionBackground)),
    rule("colors.cursor", base(BaseField::Cursor)),
    rule("colors.cursor_text_color", base(BaseField::CursorText)),
    rule("colors.color0", ansi(AnsiSlot::Black)),
    rule("colors.color1", ansi(AnsiSlot::Red)),
    rule("colors.color2", ansi(AnsiSlot::Green)),
    rule("colors.color3", ansi(AnsiSlot::Yellow)),
    rule("colors.color4", ansi(AnsiSlot::Blue)),
    rule("colors.color5", ansi(AnsiSlot::Magenta)),
    rule("colors.color6", ansi(AnsiSlot::Cyan)),
    rule("colors.color7", ansi(AnsiSlot::White)),
    rule("colors.color8", ansi(AnsiSlot::BrightBlack)),
    rule("colors.color9", ansi(AnsiSlot::BrightRed)),
    rule("colors.color10", ansi(AnsiSlot::BrightGreen)),
    rule("colors.color11", ansi(AnsiSlot::BrightYellow)),
    rule("colors.color12", ansi(AnsiSlot::BrightBlue)),
    rule("colors.color13", ansi(AnsiSlot::BrightMagenta)),
    rule("colors.color14", ansi(AnsiSlot::BrightCyan)),
    rule("colors.color15", ansi(AnsiSlot::BrightWhite)),
];

/// kitty `color*` settings.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct KittyFormatter;

impl Formatter for KittyFormatter {
    fn target(&self) -> TargetFormat {
        TargetFormat::Kitty
    }

    fn rules(&self) -> &'static [FieldRule] {
        RULES
    }

    fn format(&self, scheme: &CanonicalScheme) -> ThemeResult<TargetRecord> {
        format_with_rules(self.target(), scheme, RULES, Absent::Null)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/target/kitty.rs"]
mod tests;

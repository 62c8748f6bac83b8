use serde_json::Value;

use crate::foundation::error::ThemeResult;
use crate::scheme::model::{AnsiSlot, CanonicalScheme};
use crate::target::{
    Absent, Conversion, FieldRule, Formatter, RecordBuilder, TargetFormat, TargetRecord, ansi,
};

const fn rule(path: &'static str, slot: AnsiSlot) -> FieldRule {
    FieldRule::new(path, ansi(slot), Conversion::Rgb255)
}

const RULES: &[FieldRule] = &[
    rule("theme.black", AnsiSlot::Black),
    rule("theme.red", AnsiSlot::Red),
    rule("theme.green", AnsiSlot::Green),
    rule("theme.yellow", AnsiSlot::Yellow),
    rule("theme.blue", AnsiSlot::Blue),
    rule("theme.magenta", AnsiSlot::Magenta),
    rule("theme.cyan", AnsiSlot::Cyan),
    rule("theme.white", AnsiSlot::White),
    rule("theme.brightBlack", AnsiSlot::BrightBlack),
    rule("theme.brightRed", AnsiSlot::BrightRed),
    rule("theme.brightGreen", AnsiSlot::BrightGreen),
    rule("theme.brightYellow", AnsiSlot::BrightYellow),
    rule("theme.brightBlue", AnsiSlot::BrightBlue),
    rule("theme.brightMagenta", AnsiSlot::BrightMagenta),
    rule("theme.brightCyan", AnsiSlot::BrightCyan),
    rule("theme.brightWhite", AnsiSlot::BrightWhite),
];

/// spotify-tui theme: the terminal palette as integer triples.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SpotifyTuiFormatter;

impl Formatter for SpotifyTuiFormatter {
    fn target(&self) -> TargetFormat {
        TargetFormat::SpotifyTui
    }

    fn rules(&self) -> &'static [FieldRule] {
        RULES
    }

    fn format(&self, scheme: &CanonicalScheme) -> ThemeResult<TargetRecord> {
        let mut builder = RecordBuilder::new(Absent::Null);
        builder.insert("name", Value::from(scheme.name.as_str()))?;
        builder.insert("isDark", Value::from(scheme.is_dark))?;
        builder.apply(scheme, RULES)?;
        Ok(builder.finish(self.target()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/target/spotify_tui.rs"]
mod tests;

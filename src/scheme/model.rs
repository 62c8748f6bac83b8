use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::codec::HexColor;
use crate::foundation::error::{ThemeResult, ThemeverterError};

/// One of the 16 named terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiSlot {
    /// ANSI 0.
    Black,
    /// ANSI 1.
    Red,
    /// ANSI 2.
    Green,
    /// ANSI 3.
    Yellow,
    /// ANSI 4.
    Blue,
    /// ANSI 5.
    Magenta,
    /// ANSI 6.
    Cyan,
    /// ANSI 7.
    White,
    /// ANSI 8.
    BrightBlack,
    /// ANSI 9.
    BrightRed,
    /// ANSI 10.
    BrightGreen,
    /// ANSI 11.
    BrightYellow,
    /// ANSI 12.
    BrightBlue,
    /// ANSI 13.
    BrightMagenta,
    /// ANSI 14.
    BrightCyan,
    /// ANSI 15.
    BrightWhite,
}

impl AnsiSlot {
    /// All slots in ANSI number order.
    pub const ALL: [AnsiSlot; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// ANSI color number, `0..16`.
    pub fn number(self) -> usize {
        self as usize
    }

    /// Slot for an ANSI color number.
    pub fn from_number(n: usize) -> Option<Self> {
        Self::ALL.get(n).copied()
    }

    /// Canonical camelCase name (`"black"`, `"brightBlack"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "brightBlack",
            Self::BrightRed => "brightRed",
            Self::BrightGreen => "brightGreen",
            Self::BrightYellow => "brightYellow",
            Self::BrightBlue => "brightBlue",
            Self::BrightMagenta => "brightMagenta",
            Self::BrightCyan => "brightCyan",
            Self::BrightWhite => "brightWhite",
        }
    }

    /// Slot for a canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// The 16 ANSI colors, addressed by [`AnsiSlot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnsiColors {
    slots: [Option<HexColor>; 16],
}

impl AnsiColors {
    /// Color stored in `slot`, if any.
    pub fn get(&self, slot: AnsiSlot) -> Option<&HexColor> {
        self.slots[slot.number()].as_ref()
    }

    /// Replace the color stored in `slot`.
    pub fn set(&mut self, slot: AnsiSlot, color: Option<HexColor>) {
        self.slots[slot.number()] = color;
    }

    /// Slots in ANSI order with their colors.
    pub fn iter(&self) -> impl Iterator<Item = (AnsiSlot, Option<&HexColor>)> + '_ {
        AnsiSlot::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Number of slots holding a color.
    pub fn len_present(&self) -> usize {
        self.slots.iter().filter(|c| c.is_some()).count()
    }
}

impl Serialize for AnsiColors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap as _;
        let mut map = serializer.serialize_map(Some(16))?;
        for (slot, color) in self.iter() {
            map.serialize_entry(slot.name(), &color)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AnsiColors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<HexColor>>::deserialize(deserializer)?;
        let mut out = Self::default();
        for (name, color) in raw {
            let slot = AnsiSlot::from_name(&name)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown ansi slot \"{name}\"")))?;
            out.set(slot, color);
        }
        Ok(out)
    }
}

/// Base UI and syntax colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseColors {
    /// Editor / terminal background.
    pub background: Option<HexColor>,
    /// Default foreground text.
    pub normal: Option<HexColor>,
    /// Comments.
    pub comment: Option<HexColor>,
    /// String literals.
    pub string: Option<HexColor>,
    /// Numeric literals.
    pub number: Option<HexColor>,
    /// Boolean literals.
    pub boolean: Option<HexColor>,
    /// Line-number gutter foreground.
    pub line_number: Option<HexColor>,
    /// Cursor block.
    pub cursor: Option<HexColor>,
    /// Text under a block cursor.
    pub cursor_text: Option<HexColor>,
    /// Current-line highlight background.
    pub cursor_line: Option<HexColor>,
    /// Selection background.
    pub selection_background: Option<HexColor>,
    /// Selected text.
    pub selection_foreground: Option<HexColor>,
}

/// Named field of [`BaseColors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseField {
    /// [`BaseColors::background`].
    Background,
    /// [`BaseColors::normal`].
    Normal,
    /// [`BaseColors::comment`].
    Comment,
    /// [`BaseColors::string`].
    String,
    /// [`BaseColors::number`].
    Number,
    /// [`BaseColors::boolean`].
    Boolean,
    /// [`BaseColors::line_number`].
    LineNumber,
    /// [`BaseColors::cursor`].
    Cursor,
    /// [`BaseColors::cursor_text`].
    CursorText,
    /// [`BaseColors::cursor_line`].
    CursorLine,
    /// [`BaseColors::selection_background`].
    SelectionBackground,
    /// [`BaseColors::selection_foreground`].
    SelectionForeground,
}

impl BaseField {
    /// All fields in declaration order.
    pub const ALL: [BaseField; 12] = [
        Self::Background,
        Self::Normal,
        Self::Comment,
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::LineNumber,
        Self::Cursor,
        Self::CursorText,
        Self::CursorLine,
        Self::SelectionBackground,
        Self::SelectionForeground,
    ];

    /// Canonical camelCase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Normal => "normal",
            Self::Comment => "comment",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::LineNumber => "lineNumber",
            Self::Cursor => "cursor",
            Self::CursorText => "cursorText",
            Self::CursorLine => "cursorLine",
            Self::SelectionBackground => "selectionBackground",
            Self::SelectionForeground => "selectionForeground",
        }
    }

    /// Read this field from `base`.
    pub fn get(self, base: &BaseColors) -> Option<&HexColor> {
        match self {
            Self::Background => base.background.as_ref(),
            Self::Normal => base.normal.as_ref(),
            Self::Comment => base.comment.as_ref(),
            Self::String => base.string.as_ref(),
            Self::Number => base.number.as_ref(),
            Self::Boolean => base.boolean.as_ref(),
            Self::LineNumber => base.line_number.as_ref(),
            Self::Cursor => base.cursor.as_ref(),
            Self::CursorText => base.cursor_text.as_ref(),
            Self::CursorLine => base.cursor_line.as_ref(),
            Self::SelectionBackground => base.selection_background.as_ref(),
            Self::SelectionForeground => base.selection_foreground.as_ref(),
        }
    }

    pub(crate) fn slot_mut(self, base: &mut BaseColors) -> &mut Option<HexColor> {
        match self {
            Self::Background => &mut base.background,
            Self::Normal => &mut base.normal,
            Self::Comment => &mut base.comment,
            Self::String => &mut base.string,
            Self::Number => &mut base.number,
            Self::Boolean => &mut base.boolean,
            Self::LineNumber => &mut base.line_number,
            Self::Cursor => &mut base.cursor,
            Self::CursorText => &mut base.cursor_text,
            Self::CursorLine => &mut base.cursor_line,
            Self::SelectionBackground => &mut base.selection_background,
            Self::SelectionForeground => &mut base.selection_foreground,
        }
    }
}

/// Any color-valued field of a [`CanonicalScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    /// A base UI/syntax color.
    Base(BaseField),
    /// An ANSI slot.
    Ansi(AnsiSlot),
}

impl ColorField {
    /// Dotted canonical path, e.g. `base.cursorText` or `ansi.brightRed`.
    pub fn path(self) -> String {
        match self {
            Self::Base(f) => format!("base.{}", f.name()),
            Self::Ansi(s) => format!("ansi.{}", s.name()),
        }
    }
}

/// `set background=` value for Vim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VimBackground {
    /// Light background.
    Light,
    /// Dark background.
    Dark,
}

impl VimBackground {
    /// Vim option value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Vim-only extension namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VimExtension {
    /// Explicit light/dark flag from the source, when it has one.
    pub background: Option<VimBackground>,
}

/// The application-agnostic color scheme every conversion passes through.
///
/// Built once by a source adapter and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalScheme {
    /// Scheme name, never empty.
    pub name: String,
    /// Whether the scheme has a dark background.
    #[serde(default)]
    pub is_dark: bool,
    /// Base UI and syntax colors.
    #[serde(default)]
    pub base: BaseColors,
    /// Terminal palette.
    #[serde(default)]
    pub ansi: AnsiColors,
    /// Vim namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vim: Option<VimExtension>,
}

impl CanonicalScheme {
    /// Read any color field.
    pub fn color(&self, field: ColorField) -> Option<&HexColor> {
        match field {
            ColorField::Base(f) => f.get(&self.base),
            ColorField::Ansi(s) => self.ansi.get(s),
        }
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> ThemeResult<()> {
        if self.name.trim().is_empty() {
            return Err(ThemeverterError::missing_field("name"));
        }
        Ok(())
    }
}

/// Starting point handed to a source adapter.
///
/// Adapters overwrite every field their source provides; anything the source is silent about
/// keeps the template's value. `SchemeTemplate::default()` is the empty template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeTemplate {
    /// Name used when neither the document nor the name resolver supplies one.
    pub name: Option<String>,
    /// Default dark flag.
    pub is_dark: bool,
    /// Default base colors.
    pub base: BaseColors,
    /// Default palette.
    pub ansi: AnsiColors,
    /// Default Vim namespace.
    pub vim: Option<VimExtension>,
}

impl SchemeTemplate {
    /// Template with only a fallback name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Freeze into a [`CanonicalScheme`]; fails when no non-empty name was resolved.
    pub fn into_scheme(self) -> ThemeResult<CanonicalScheme> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ThemeverterError::missing_field("name"))?;
        Ok(CanonicalScheme {
            name,
            is_dark: self.is_dark,
            base: self.base,
            ansi: self.ansi,
            vim: self.vim,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheme/model.rs"]
mod tests;

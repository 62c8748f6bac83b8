//! Target formatters: project a [`CanonicalScheme`] onto one application's field layout.
//!
//! Every formatter is a stateless unit struct driven by a static [`FieldRule`] table, so the
//! whole conversion policy of a target (which field, which representation, required or not) can
//! be read in one place. The output is a [`TargetRecord`], an ordered generic tree handed to a
//! [`TemplateRenderer`](crate::TemplateRenderer).

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::color::codec::{HexColor, strip_alpha};
use crate::foundation::error::{ThemeResult, ThemeverterError};
use crate::scheme::model::{AnsiSlot, BaseField, CanonicalScheme, ColorField};

pub(crate) mod alacritty;
pub(crate) mod iterm2;
pub(crate) mod kitty;
pub(crate) mod spotify_tui;
pub(crate) mod vim;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    /// Alacritty `colors` table.
    Alacritty,
    /// iTerm2 `.itermcolors` preset.
    ITerm2,
    /// Vim colorscheme script.
    Vim,
    /// kitty color config.
    Kitty,
    /// spotify-tui theme block.
    SpotifyTui,
}

impl TargetFormat {
    /// Every supported target format.
    pub const ALL: [TargetFormat; 5] = [
        Self::Alacritty,
        Self::ITerm2,
        Self::Vim,
        Self::Kitty,
        Self::SpotifyTui,
    ];

    /// Stable identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::Alacritty => "alacritty",
            Self::ITerm2 => "iterm2",
            Self::Vim => "vim",
            Self::Kitty => "kitty",
            Self::SpotifyTui => "spotify-tui",
        }
    }

    /// File extension of rendered output, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Alacritty => "toml",
            Self::ITerm2 => "itermcolors",
            Self::Vim => "vim",
            Self::Kitty => "conf",
            Self::SpotifyTui => "yml",
        }
    }

    /// The formatter implementing this format.
    pub fn formatter(self) -> &'static dyn Formatter {
        match self {
            Self::Alacritty => &alacritty::AlacrittyFormatter,
            Self::ITerm2 => &iterm2::ITerm2Formatter,
            Self::Vim => &vim::VimFormatter,
            Self::Kitty => &kitty::KittyFormatter,
            Self::SpotifyTui => &spotify_tui::SpotifyTuiFormatter,
        }
    }
}

impl FromStr for TargetFormat {
    type Err = ThemeverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alacritty" => Ok(Self::Alacritty),
            "iterm2" | "iterm" | "itermcolors" => Ok(Self::ITerm2),
            "vim" | "neovim" | "nvim" => Ok(Self::Vim),
            "kitty" => Ok(Self::Kitty),
            "spotify-tui" | "spotifytui" | "spotify_tui" | "spt" => Ok(Self::SpotifyTui),
            _ => Err(ThemeverterError::unsupported_target(s)),
        }
    }
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// How a canonical color is represented in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `#rrggbb` as stored.
    Passthrough,
    /// `#rrggbb` after [`strip_alpha`].
    StripAlpha,
    /// `{red, green, blue}` unit floats.
    UnitRgb,
    /// `[r, g, b]` integers.
    Rgb255,
    /// Nearest xterm 256-color index.
    Ansi256,
}

impl Conversion {
    /// Convert one color.
    pub fn apply(self, color: &HexColor) -> ThemeResult<Value> {
        Ok(match self {
            Self::Passthrough => Value::from(color.as_str()),
            Self::StripAlpha => Value::from(strip_alpha(color.as_str())?),
            Self::UnitRgb => {
                let u = color.unit();
                let mut m = Map::new();
                m.insert("red".to_owned(), Value::from(u.r));
                m.insert("green".to_owned(), Value::from(u.g));
                m.insert("blue".to_owned(), Value::from(u.b));
                Value::Object(m)
            }
            Self::Rgb255 => Value::from(color.rgb8().to_array().to_vec()),
            Self::Ansi256 => Value::from(color.ansi256()),
        })
    }
}

/// One row of a formatter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Dotted output path, e.g. `colors.primary.background`.
    pub path: &'static str,
    /// Canonical field read.
    pub field: ColorField,
    /// Field read when `field` is absent.
    pub fallback: Option<ColorField>,
    /// Output representation.
    pub conversion: Conversion,
    /// Fail the conversion when neither `field` nor `fallback` is present.
    pub required: bool,
}

impl FieldRule {
    /// Optional rule without fallback.
    pub const fn new(path: &'static str, field: ColorField, conversion: Conversion) -> Self {
        Self {
            path,
            field,
            fallback: None,
            conversion,
            required: false,
        }
    }

    /// Mark the rule required.
    pub const fn require(mut self) -> Self {
        self.required = true;
        self
    }

    /// Read `fallback` when the primary field is absent.
    pub const fn or(mut self, fallback: ColorField) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// The value this rule selects from `scheme`, after fallback.
    pub fn resolve<'a>(&self, scheme: &'a CanonicalScheme) -> Option<&'a HexColor> {
        scheme
            .color(self.field)
            .or_else(|| self.fallback.and_then(|f| scheme.color(f)))
    }
}

/// Shorthand for a base field in rule tables.
pub(crate) const fn base(f: BaseField) -> ColorField {
    ColorField::Base(f)
}

/// Shorthand for an ANSI slot in rule tables.
pub(crate) const fn ansi(s: AnsiSlot) -> ColorField {
    ColorField::Ansi(s)
}

/// What a formatter emits for an absent optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Absent {
    /// Keep the key with a `null` value.
    Null,
    /// Leave the key out.
    Omit,
}

/// Output of a formatter: an ordered tree in the target's field layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetRecord {
    target: TargetFormat,
    tree: Value,
}

impl TargetRecord {
    /// Wrap a tree produced for `target`.
    pub fn new(target: TargetFormat, tree: Value) -> Self {
        Self { target, tree }
    }

    /// Format this record was built for.
    pub fn target(&self) -> TargetFormat {
        self.target
    }

    /// The record tree.
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    /// Consume the record, returning its tree.
    pub fn into_tree(self) -> Value {
        self.tree
    }

    /// Value at a dotted path, e.g. `colors.Comment.guifg`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.tree, |node, key| node.get(key))
    }
}

/// Maps a [`CanonicalScheme`] into one target's layout.
///
/// Implementations are pure: the same scheme always yields the same record.
pub trait Formatter: Send + Sync {
    /// Format produced.
    fn target(&self) -> TargetFormat;

    /// The static rule table driving this formatter.
    fn rules(&self) -> &'static [FieldRule];

    /// Build the record for `scheme`.
    fn format(&self, scheme: &CanonicalScheme) -> ThemeResult<TargetRecord>;
}

/// Incrementally assembles a record tree from rule tables.
#[derive(Debug)]
pub(crate) struct RecordBuilder {
    root: Map<String, Value>,
    absent: Absent,
}

impl RecordBuilder {
    pub(crate) fn new(absent: Absent) -> Self {
        Self {
            root: Map::new(),
            absent,
        }
    }

    /// Set the value at a dotted path, creating intermediate objects.
    pub(crate) fn insert(&mut self, path: &str, value: Value) -> ThemeResult<()> {
        let (parents, leaf) = match path.rsplit_once('.') {
            Some((p, l)) => (Some(p), l),
            None => (None, path),
        };
        let mut node = &mut self.root;
        for key in parents.into_iter().flat_map(|p| p.split('.')) {
            node = node
                .entry(key)
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .ok_or_else(|| {
                    ThemeverterError::from(anyhow::anyhow!(
                        "record path {path} crosses a non-object value"
                    ))
                })?;
        }
        node.insert(leaf.to_owned(), value);
        Ok(())
    }

    /// Apply every rule of `rules` to `scheme`.
    pub(crate) fn apply(
        &mut self,
        scheme: &CanonicalScheme,
        rules: &[FieldRule],
    ) -> ThemeResult<()> {
        for rule in rules {
            match rule.resolve(scheme) {
                Some(color) => self.insert(rule.path, rule.conversion.apply(color)?)?,
                None if rule.required => {
                    return Err(ThemeverterError::missing_field(format!(
                        "{} ({})",
                        rule.path,
                        rule.field.path()
                    )));
                }
                None => match self.absent {
                    Absent::Null => self.insert(rule.path, Value::Null)?,
                    Absent::Omit => {}
                },
            }
        }
        Ok(())
    }

    pub(crate) fn finish(self, target: TargetFormat) -> TargetRecord {
        TargetRecord::new(target, Value::Object(self.root))
    }
}

/// Format with the rule table alone, after seeding the top-level `name`.
pub(crate) fn format_with_rules(
    target: TargetFormat,
    scheme: &CanonicalScheme,
    rules: &[FieldRule],
    absent: Absent,
) -> ThemeResult<TargetRecord> {
    let mut builder = RecordBuilder::new(absent);
    builder.insert("name", Value::from(scheme.name.as_str()))?;
    builder.apply(scheme, rules)?;
    Ok(builder.finish(target))
}

#[cfg(test)]
#[path = "../../tests/unit/target/rules.rs"]
mod tests;

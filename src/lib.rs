//! themeverter converts terminal and editor color schemes between application formats.
//!
//! Every conversion goes through one canonical representation:
//!
//! - Read a source file into a [`SourceDocument`] ([`read_document`])
//! - Parse it with the [`SourceAdapter`] for its [`SourceFormat`] into a [`CanonicalScheme`]
//! - Project the scheme through a [`Formatter`] into a [`TargetRecord`] for each [`TargetFormat`]
//! - Render the record to file text with a [`TemplateRenderer`] such as [`BuiltinTemplates`]
//!
//! [`Pipeline`] wires the middle two steps together and fans out to several targets at once.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod color;
pub(crate) mod pipeline;
pub(crate) mod reader;
pub(crate) mod scheme;
pub(crate) mod source;
pub(crate) mod target;
/// Rendering of target records into config file text.
pub mod template;

pub use crate::color::codec::{
    HexColor, Rgb8, RgbUnit, hex_to_rgb255, normalize_hex, relative_luminance, rgb_normalized,
    rgb255_to_hex, strip_alpha, to_ansi256, unit_to_u8,
};
pub use crate::foundation::error::{ThemeResult, ThemeverterError};
pub use crate::pipeline::{ConvertThreading, Pipeline, convert, format_all};
pub use crate::reader::{parse_bytes, read_document};
pub use crate::scheme::model::{
    AnsiColors, AnsiSlot, BaseColors, BaseField, CanonicalScheme, ColorField, SchemeTemplate,
    VimBackground, VimExtension,
};
pub use crate::source::{NameResolver, NoNameResolver, SourceAdapter, SourceDocument, SourceFormat};
pub use crate::target::{Conversion, FieldRule, Formatter, TargetFormat, TargetRecord};
pub use crate::template::{BuiltinTemplates, TemplateRenderer};

//! Rendering of [`TargetRecord`]s into the text of an application config file.
//!
//! The conversion core stops at the record; a [`TemplateRenderer`] is the only piece that knows
//! a target's file syntax. [`BuiltinTemplates`] covers every [`TargetFormat`].

use crate::foundation::error::ThemeResult;
use crate::target::{TargetFormat, TargetRecord};

pub(crate) mod builtin;

pub use builtin::BuiltinTemplates;

/// Renders a formatted record as the target application's file contents.
pub trait TemplateRenderer: Send + Sync {
    /// Render `record` as `target` text.
    fn render(&self, target: TargetFormat, record: &TargetRecord) -> ThemeResult<String>;
}

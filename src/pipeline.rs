use rayon::prelude::*;

use crate::foundation::error::{ThemeResult, ThemeverterError};
use crate::scheme::model::{CanonicalScheme, SchemeTemplate};
use crate::source::{NameResolver, NoNameResolver, SourceDocument, SourceFormat};
use crate::target::{TargetFormat, TargetRecord};

/// Threading options for [`Pipeline::convert_many`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertThreading {
    /// Format targets on a dedicated rayon pool instead of sequentially.
    pub parallel: bool,
    /// Pool size; `None` lets rayon decide. Must be `>= 1` when set.
    pub threads: Option<usize>,
}

/// One conversion setup: template defaults, name resolver and threading.
///
/// Source and target formats are arguments of each call; the pipeline itself holds no per-call
/// state and can be shared across threads.
pub struct Pipeline {
    template: SchemeTemplate,
    names: Box<dyn NameResolver>,
    threading: ConvertThreading,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(SchemeTemplate::default())
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("template", &self.template)
            .field("threading", &self.threading)
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Pipeline starting every scheme from `template`, with no name resolver.
    pub fn new(template: SchemeTemplate) -> Self {
        Self {
            template,
            names: Box::new(NoNameResolver),
            threading: ConvertThreading::default(),
        }
    }

    /// Consult `names` when a document carries no scheme name.
    pub fn with_name_resolver(mut self, names: impl NameResolver + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    /// Replace the threading options.
    pub fn with_threading(mut self, threading: ConvertThreading) -> Self {
        self.threading = threading;
        self
    }

    /// Template defaults handed to every adapter.
    pub fn template(&self) -> &SchemeTemplate {
        &self.template
    }

    /// Parse `doc` as `from` into a canonical scheme.
    #[tracing::instrument(skip(self, doc), fields(origin = ?doc.origin))]
    pub fn parse(&self, doc: &SourceDocument, from: SourceFormat) -> ThemeResult<CanonicalScheme> {
        let scheme = from
            .adapter()
            .parse(doc, &self.template, self.names.as_ref())?;
        tracing::debug!(
            name = %scheme.name,
            ansi = scheme.ansi.len_present(),
            "parsed canonical scheme"
        );
        Ok(scheme)
    }

    /// Convert `doc` from one format identifier to another.
    ///
    /// Both identifiers are resolved before the document is touched.
    pub fn convert(&self, doc: &SourceDocument, from: &str, to: &str) -> ThemeResult<TargetRecord> {
        let from: SourceFormat = from.parse()?;
        let to: TargetFormat = to.parse()?;
        self.convert_formats(doc, from, to)
    }

    /// Typed variant of [`Pipeline::convert`].
    #[tracing::instrument(skip(self, doc))]
    pub fn convert_formats(
        &self,
        doc: &SourceDocument,
        from: SourceFormat,
        to: TargetFormat,
    ) -> ThemeResult<TargetRecord> {
        let scheme = self.parse(doc, from)?;
        to.formatter().format(&scheme)
    }

    /// Parse once and format for every target in `to`, returning records in request order.
    #[tracing::instrument(skip(self, doc), fields(parallel = self.threading.parallel))]
    pub fn convert_many(
        &self,
        doc: &SourceDocument,
        from: SourceFormat,
        to: &[TargetFormat],
    ) -> ThemeResult<(CanonicalScheme, Vec<TargetRecord>)> {
        let scheme = self.parse(doc, from)?;
        let records = format_all(&scheme, to, &self.threading)?;
        Ok((scheme, records))
    }
}

/// Format `scheme` for each of `targets`, optionally on a dedicated pool.
pub fn format_all(
    scheme: &CanonicalScheme,
    targets: &[TargetFormat],
    threading: &ConvertThreading,
) -> ThemeResult<Vec<TargetRecord>> {
    check_threads(threading.threads)?;
    if !threading.parallel || targets.len() < 2 {
        return targets
            .iter()
            .map(|t| t.formatter().format(scheme))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        targets
            .par_iter()
            .map(|t| t.formatter().format(scheme))
            .collect()
    })
}

/// Convert with the default pipeline: empty template, no name resolver.
pub fn convert(doc: &SourceDocument, from: &str, to: &str) -> ThemeResult<TargetRecord> {
    Pipeline::default().convert(doc, from, to)
}

fn check_threads(threads: Option<usize>) -> ThemeResult<()> {
    if threads == Some(0) {
        return Err(ThemeverterError::from(anyhow::anyhow!(
            "convert threading 'threads' must be >= 1 when set"
        )));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> ThemeResult<rayon::ThreadPool> {
    check_threads(threads)?;
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        ThemeverterError::from(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/pipeline.rs"]
mod tests;

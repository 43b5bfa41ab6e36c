//! One conversion, from source document to archive
//!
//! A session is built per call and consumed by [`ConversionSession::run`];
//! nothing carries over between conversions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::builders::MhtAssembler;
use crate::core::{ConversionOptions, MhtError, MhtResult};
use crate::parsers::html::{collect, html_to_dom, ResourceKind};
use crate::resources::{ResourceResolver, ResourceTable};
use crate::utils::path::{base_directory_of, resolve_output_path};

/// Outcome of a finished conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Where the archive was written
    pub output_path: PathBuf,
    pub scripts: ResourceTable,
    pub links: ResourceTable,
    /// Number of MIME parts in the archive, the source document included
    pub parts: usize,
}

impl ConversionReport {
    /// References left out of the archive because no file matched them,
    /// scripts first
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.scripts.unresolved().chain(self.links.unresolved())
    }
}

pub struct ConversionSession {
    source_path: PathBuf,
    base_directory: PathBuf,
    output_path: PathBuf,
    options: ConversionOptions,
}

impl ConversionSession {
    pub fn new(source: &Path, target: Option<&Path>, options: ConversionOptions) -> Self {
        Self {
            source_path: source.to_path_buf(),
            base_directory: base_directory_of(source),
            output_path: resolve_output_path(source, target),
            options,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Directory references are resolved against
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Raw bytes of the source document
    pub fn read_source(&self) -> MhtResult<Vec<u8>> {
        fs::read(&self.source_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => MhtError::SourceNotFound(self.source_path.clone()),
            _ => MhtError::SourceRead {
                path: self.source_path.clone(),
                source: e,
            },
        })
    }

    /// Parses `source` and collects its script and link tables
    pub fn collect(
        &self,
        source: &[u8],
        resolver: &dyn ResourceResolver,
    ) -> MhtResult<(ResourceTable, ResourceTable)> {
        self.options.validate()?;

        let dom = html_to_dom(source, &self.options.encoding)?;

        let scripts = collect(&dom.document, ResourceKind::Script, resolver, &self.base_directory);
        let links = collect(&dom.document, ResourceKind::Link, resolver, &self.base_directory);

        Ok((scripts, links))
    }

    /// Reads, collects and writes the archive
    pub fn run(self, resolver: &dyn ResourceResolver) -> MhtResult<ConversionReport> {
        let source = self.read_source()?;
        let (scripts, links) = self.collect(&source, resolver)?;

        let assembler = MhtAssembler::new(self.output_path.clone());
        let parts = assembler.assemble(&source, &scripts, &links)?;

        tracing::info!(
            source = %self.source_path.display(),
            output = %self.output_path.display(),
            parts,
            "conversion finished"
        );

        Ok(ConversionReport {
            output_path: self.output_path,
            scripts,
            links,
            parts,
        })
    }
}

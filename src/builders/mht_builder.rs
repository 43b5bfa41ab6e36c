//! MHT 构建器模块
//!
//! Writes a `multipart/related` archive: the untouched source document as
//! the first part, then every resolved script, then every resolved linked
//! page.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use crate::core::{MhtError, MhtResult};
use crate::parsers::html::ResourceKind;
use crate::resources::ResourceTable;
use crate::utils::path::{base_directory_of, file_name_of};

pub const BOUNDARY: &str = "boundary";
const CRLF: &str = "\r\n";

pub struct MhtAssembler {
    output_path: PathBuf,
}

impl MhtAssembler {
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the archive and returns the number of parts it holds
    ///
    /// The archive is staged in a temporary file next to the output and
    /// moved into place once complete; on failure nothing is left behind.
    /// The archive gets the mode of the file it replaces, or the umask
    /// default for a new file.
    pub fn assemble(
        &self,
        source: &[u8],
        scripts: &ResourceTable,
        links: &ResourceTable,
    ) -> MhtResult<usize> {
        let mut staged = self.stage().map_err(|e| self.write_error(e))?;

        let parts = {
            let mut writer = BufWriter::new(&mut staged);
            let parts = self.write_to(&mut writer, source, scripts, links)?;
            writer.flush().map_err(|e| self.write_error(e))?;
            parts
        };

        staged
            .persist(&self.output_path)
            .map_err(|e| self.write_error(e.error))?;

        tracing::debug!(
            output = %self.output_path.display(),
            parts,
            "archive written"
        );

        Ok(parts)
    }

    /// Creates the temporary file the archive is written to before `persist`
    fn stage(&self) -> io::Result<NamedTempFile> {
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Reduced by the process umask on open, like `File::create`
            builder.permissions(fs::Permissions::from_mode(0o666));
        }

        let staged = builder.tempfile_in(base_directory_of(&self.output_path))?;

        if let Ok(existing) = fs::metadata(&self.output_path) {
            staged.as_file().set_permissions(existing.permissions())?;
        }

        Ok(staged)
    }

    /// Serializes the archive into `writer`
    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        source: &[u8],
        scripts: &ResourceTable,
        links: &ResourceTable,
    ) -> MhtResult<usize> {
        self.write_primary(writer, source)
            .map_err(|e| self.write_error(e))?;

        let mut parts = 1;

        for (kind, table) in [(ResourceKind::Script, scripts), (ResourceKind::Link, links)] {
            for (reference, path) in table.resolved() {
                let content = fs::read(path).map_err(|e| MhtError::ResourceRead {
                    path: path.to_path_buf(),
                    source: e,
                })?;

                tracing::debug!(
                    reference,
                    path = %path.display(),
                    bytes = content.len(),
                    "packing resource"
                );

                self.write_resource(writer, kind, path, &content)
                    .map_err(|e| self.write_error(e))?;

                parts += 1;
            }
        }

        write!(writer, "{CRLF}--{BOUNDARY}--{CRLF}").map_err(|e| self.write_error(e))?;

        Ok(parts)
    }

    /// Message headers followed by the source document, byte for byte
    ///
    /// Like every resource part, the primary part has an empty line between
    /// its headers and its body.
    fn write_primary<W: Write>(&self, writer: &mut W, source: &[u8]) -> io::Result<()> {
        write!(writer, "MIME-Version: 1.0{CRLF}")?;
        write!(
            writer,
            "Content-Type: Multipart/related; boundary=\"{BOUNDARY}\"; type=Text/HTML{CRLF}"
        )?;
        write!(writer, "{CRLF}")?;

        self.write_part_header(writer, "text/html", &file_name_of(&self.output_path))?;
        write_body(writer, source)
    }

    fn write_resource<W: Write>(
        &self,
        writer: &mut W,
        kind: ResourceKind,
        path: &Path,
        content: &[u8],
    ) -> io::Result<()> {
        write!(writer, "{CRLF}")?;
        self.write_part_header(writer, kind.content_type(), &file_name_of(path))?;
        write_body(writer, content)
    }

    fn write_part_header<W: Write>(
        &self,
        writer: &mut W,
        content_type: &str,
        location: &str,
    ) -> io::Result<()> {
        write!(writer, "--{BOUNDARY}{CRLF}")?;
        write!(writer, "Content-Type: {content_type};{CRLF}")?;
        write!(writer, "Content-Location: {location}{CRLF}")?;
        write!(writer, "{CRLF}")
    }

    fn write_error(&self, source: io::Error) -> MhtError {
        MhtError::Write {
            path: self.output_path.clone(),
            source,
        }
    }
}

fn write_body<W: Write>(writer: &mut W, content: &[u8]) -> io::Result<()> {
    writer.write_all(content)?;
    writer.write_all(CRLF.as_bytes())
}

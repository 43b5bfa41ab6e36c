use std::io;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use thiserror::Error;

use crate::env::EnvConfig;
use crate::resources::DirectoryResolver;
use crate::session::{ConversionReport, ConversionSession};

/// Represents errors that can occur while packing a document
///
/// Only fatal conditions are represented here. A document without any
/// scripts or links, or a reference that matches no file on disk, is a
/// normal outcome and never produces an `MhtError`.
#[derive(Error, Debug)]
pub enum MhtError {
    /// The source HTML file does not exist
    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The source HTML file exists but could not be read
    #[error("Failed to read file {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A resolved resource could not be read while assembling the archive
    #[error("Failed to read resource {}: {source}", .path.display())]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the archive failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The HTML parser could not produce a document tree
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// Unknown character encoding label
    #[error("unknown encoding \"{0}\"")]
    UnknownEncoding(String),
}

pub type MhtResult<T> = Result<T, MhtError>;

/// Configuration options for a conversion
#[derive(Clone, Debug)]
pub struct ConversionOptions {
    /// Encoding label used to decode the document for parsing only; the
    /// archived bytes are never transcoded
    pub encoding: String,
    /// Match references against file names without regard to case
    pub case_insensitive: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            case_insensitive: false,
        }
    }
}

impl ConversionOptions {
    /// Builds options from `MHTPACK_*` environment variables, falling back
    /// to defaults for anything unset or invalid
    ///
    /// Invalid values are reported as warnings.
    pub fn from_env() -> Self {
        let env = EnvConfig::from_env();
        env.report_invalid();
        Self::from(&env)
    }

    pub fn validate(&self) -> MhtResult<()> {
        if Encoding::for_label_no_replacement(self.encoding.as_bytes()).is_none() {
            return Err(MhtError::UnknownEncoding(self.encoding.clone()));
        }
        Ok(())
    }
}

impl From<&EnvConfig> for ConversionOptions {
    fn from(env: &EnvConfig) -> Self {
        Self {
            encoding: env.encoding.clone(),
            case_insensitive: env.case_insensitive,
        }
    }
}

/// Packs `source` and its local scripts and linked pages into an MHT file
///
/// References are resolved against the files in the source's directory.
/// The archive is written to `target` when given, otherwise next to the
/// source with an `.mht` extension.
///
/// # Examples
///
/// ```no_run
/// use mhtpack::{convert, ConversionOptions};
///
/// let report = convert("docs/page.html", None, &ConversionOptions::default()).unwrap();
/// println!("written to {}", report.output_path.display());
/// ```
pub fn convert<P: AsRef<Path>>(
    source: P,
    target: Option<&Path>,
    options: &ConversionOptions,
) -> MhtResult<ConversionReport> {
    let resolver = DirectoryResolver::new().case_insensitive(options.case_insensitive);
    let session = ConversionSession::new(source.as_ref(), target, options.clone());
    session.run(&resolver)
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Prints an error message to stderr, in red when `colored` is set
pub fn print_error_message(msg: &str, colored: bool) {
    if colored {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}

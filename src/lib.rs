//! # mhtpack
//!
//! Packs a local HTML page, together with the scripts and HTML pages it
//! references from its own directory, into a single MHT
//! (`multipart/related`) archive.
//!
//! ## Module organisation
//!
//! - `core` - errors, options, the top-level `convert` entry point
//! - `session` - one conversion from source file to archive
//! - `parsers` - HTML parsing and reference collection
//! - `resources` - resource tables and reference resolution
//! - `builders` - MHT archive writer
//! - `utils` - path helpers
//! - `env` - typed environment variables

pub mod builders;
pub mod core;
pub mod env;
pub mod parsers;
pub mod resources;
pub mod session;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::{convert, ConversionOptions, MhtError, MhtResult};
pub use builders::MhtAssembler;
pub use resources::{DirectoryResolver, ResourceResolver, ResourceTable, StaticResolver};
pub use session::{ConversionReport, ConversionSession};

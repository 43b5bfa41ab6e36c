//! # 资源模块
//!
//! Local resources referenced by a document:
//!
//! - `table` - insertion-ordered reference → path mapping
//! - `resolver` - turning a reference into a file on disk

pub mod resolver;
pub mod table;

// Re-export commonly used items for convenience
pub use resolver::{DirectoryResolver, ResourceResolver, StaticResolver};
pub use table::ResourceTable;

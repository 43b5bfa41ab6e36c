//! # 工具模块
//!
//! - `path` - output and staging path computation

pub mod path;

// Re-export commonly used items for convenience
pub use path::{base_directory_of, file_name_of, mht_output_path, resolve_output_path, temp_html_path};

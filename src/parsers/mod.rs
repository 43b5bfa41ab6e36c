//! # 解析器模块
//!
//! - `html` - HTML解析、DOM查询、本地资源引用收集

pub mod html;

// Re-export commonly used items for convenience
pub use html::{collect, find_nodes, get_node_attr, html_to_dom, ResourceKind};

//! HTML解析和处理模块
//!
//! - `dom`: 基础DOM操作
//! - `collector`: 脚本与链接引用收集

pub mod collector;
pub mod dom;

// 重新导出主要的公共 API
pub use collector::{collect, ResourceKind};
pub use dom::{find_nodes, get_node_attr, get_node_name, html_to_dom};

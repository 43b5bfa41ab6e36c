//! 输出构建器模块

pub mod mht_builder;

pub use mht_builder::{MhtAssembler, BOUNDARY};

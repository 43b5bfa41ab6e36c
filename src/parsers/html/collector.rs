//! 脚本与链接引用收集
//!
//! Walks a parsed document and turns every local script or page reference
//! into an entry of a [`ResourceTable`].

use std::path::Path;

use markup5ever_rcdom::Handle;

use super::dom::{find_nodes, get_node_attr};
use crate::resources::{ResourceResolver, ResourceTable};

/// Kind of reference being collected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    /// `<script src="...">`
    Script,
    /// `<a href="...">` pointing at a local HTML page
    Link,
}

impl ResourceKind {
    pub fn element_name(self) -> &'static str {
        match self {
            ResourceKind::Script => "script",
            ResourceKind::Link => "a",
        }
    }

    pub fn attribute_name(self) -> &'static str {
        match self {
            ResourceKind::Script => "src",
            ResourceKind::Link => "href",
        }
    }

    /// Media type announced for parts of this kind
    pub fn content_type(self) -> &'static str {
        match self {
            ResourceKind::Script => "application/javascript",
            ResourceKind::Link => "text/html",
        }
    }

    /// Whether a non-empty attribute value is collected at all
    ///
    /// Links only qualify when they mention `.htm` (so `.html` too); plain
    /// fragments and external URLs to other kinds of content are skipped.
    pub fn accepts(self, reference: &str) -> bool {
        match self {
            ResourceKind::Script => true,
            ResourceKind::Link => reference.contains(".htm"),
        }
    }
}

/// Collects the references of one kind, in document order
///
/// Empty attributes are skipped and only the first occurrence of a reference
/// is resolved; repeats are ignored even if they would now resolve
/// differently.
pub fn collect(
    document: &Handle,
    kind: ResourceKind,
    resolver: &dyn ResourceResolver,
    base_directory: &Path,
) -> ResourceTable {
    let mut table = ResourceTable::new();

    for node in find_nodes(document, &[kind.element_name()]) {
        let Some(reference) = get_node_attr(&node, kind.attribute_name()) else {
            continue;
        };

        if reference.is_empty() || !kind.accepts(&reference) || table.contains(&reference) {
            continue;
        }

        let path = resolver.resolve(&reference, base_directory);
        if path.is_none() {
            tracing::warn!(
                kind = ?kind,
                reference = reference.as_str(),
                directory = %base_directory.display(),
                "no file matches reference, it will not be packed"
            );
        }
        table.insert(&reference, path);
    }

    tracing::debug!(
        kind = ?kind,
        collected = table.len(),
        resolved = table.resolved_count(),
        "collected references"
    );

    table
}

//! Top-level normalization of a menu document.

use serde_json::Value;

use crate::config::MenuDocument;
use crate::options::{OptionSet, OptionSetExt, CHILDREN};
use crate::resolver::{OptionResolver, ResolveError};

impl OptionResolver<'_> {
    /// Resolve every tree root of `document`.
    ///
    /// Items are stripped of empty values first. Each root is merged with
    /// the items as named entries and its own item is then consumed
    /// (set to `None`). Returns the resolved document or the first error.
    pub fn normalize(&mut self, mut document: MenuDocument) -> Result<MenuDocument, ResolveError> {
        self.fragments.clear();

        for item in document.items.values_mut().flatten() {
            item.strip_empty();
        }

        let mut tree = std::mem::take(&mut document.tree);
        for (name, root) in tree.iter_mut() {
            self.merge(root, &mut document.items, name)?;
            document.items.insert(name.clone(), None);
        }
        document.tree = tree;

        tracing::info!(
            roots = document.tree.len(),
            nodes = document.tree.values().map(count_nodes).sum::<usize>(),
            handlers = self.fragments.len(),
            "Menu resolved"
        );
        Ok(document)
    }
}

/// Number of nodes in the subtree rooted at `node`, including itself.
pub fn count_nodes(node: &OptionSet) -> usize {
    let children = match node.get(CHILDREN) {
        Some(Value::Object(children)) => children
            .values()
            .map(|child| match child {
                Value::Object(child) => count_nodes(child),
                _ => 1,
            })
            .sum(),
        _ => 0,
    };
    1 + children
}

//! Tree reconstruction from flat, key-carrying item collections.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::TreeArena;
use crate::domain::item::Item;
use crate::domain::keypath::KeyPath;

/// Reconstructs a subtree from a flat item collection.
///
/// Parents resolve by exact path match first; when an intermediate level
/// has no item (a gap in the hierarchy), the deepest registered ancestor
/// takes the child instead. Raises no errors: an item that resolves to no
/// ancestor at all is silently dropped so the tree stays renderable even
/// with incomplete hierarchies. Callers needing strict validation must
/// pre-validate paths.
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    /// Registered nodes by key path. Duplicate paths overwrite the entry;
    /// the earlier node stays in the tree, later lookups resolve to the
    /// latest arrival.
    registry: HashMap<KeyPath, Index>,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }

    /// Build the subtree rooted at `root` from `all_items`.
    ///
    /// The input collection is read only; the returned tree wraps clones
    /// of the matched items. Deterministic: rebuilding from the same
    /// collection yields the same tree regardless of prior builds.
    #[instrument(level = "debug", skip(self, root, all_items))]
    pub fn build(&mut self, root: &Item, all_items: &[Item]) -> TreeArena {
        self.registry.clear();

        let mut tree = TreeArena::new();
        let root_idx = tree.insert_node(root.clone(), None);
        self.registry.insert(root.path.clone(), root_idx);

        // Shallower items attach first so deeper items can find them.
        // The sort is stable: equal-depth items keep their arrival order.
        let mut descendants: Vec<&Item> = all_items
            .iter()
            .filter(|item| root.path.is_proper_prefix_of(&item.path))
            .collect();
        descendants.sort_by_key(|item| item.path.len());

        for item in descendants {
            let parent_idx = self
                .resolve_exact_parent(item)
                .or_else(|| self.resolve_best_ancestor(item, &root.path));

            match parent_idx {
                Some(parent_idx) => {
                    let idx = tree.insert_node(item.clone(), Some(parent_idx));
                    self.registry.insert(item.path.clone(), idx);
                }
                None => {
                    // unreachable for items below root; kept as the
                    // graceful-degradation policy
                    debug!("no ancestor for {}, dropping from subtree", item.path);
                }
            }
        }

        tree.sort_children_by_key();
        tree
    }

    /// Node whose path equals the item's path with its last segment
    /// removed.
    fn resolve_exact_parent(&self, item: &Item) -> Option<Index> {
        let parent_path = item.path.parent()?;
        self.registry.get(&parent_path).copied()
    }

    /// Deepest registered node whose path is a strict prefix of the
    /// item's path. Walks the item's own ancestor chain from deepest to
    /// shallowest, so resolution is O(depth) rather than a scan over all
    /// registered nodes.
    fn resolve_best_ancestor(&self, item: &Item, root_path: &KeyPath) -> Option<Index> {
        let segments = item.path.segments();
        for len in (root_path.len()..item.path.len()).rev() {
            let candidate = KeyPath::from_segments(segments[..len].to_vec());
            if let Some(&idx) = self.registry.get(&candidate) {
                return Some(idx);
            }
        }
        None
    }
}

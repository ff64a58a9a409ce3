//! Arena-based tree for reconstructed hierarchies.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::item::Item;

/// Tree node wrapping one item plus its ordered children.
#[derive(Debug)]
pub struct TreeNode {
    /// The item attached at this position
    pub item: Item,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, kept sorted by key path
    pub children: Vec<Index>,
}

/// Arena-based tree structure.
///
/// Uses generational arena for memory-safe node references and O(1)
/// lookups. A derived, ephemeral structure: rebuilt on demand from the
/// flat item collection, never itself the source of truth.
#[derive(Debug, Default)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self, item))]
    pub fn insert_node(&mut self, item: Item, parent: Option<Index>) -> Index {
        let node = TreeNode {
            item,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Pre-order iterator, children in their stored (sorted) order.
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Re-sort every children list by the child's key path.
    ///
    /// Unconditional: ordering must never depend on attachment order or
    /// prior tree state, so repeated rebuilds yield identical sibling
    /// order. The sort is stable, so duplicate key paths keep their
    /// relative arrival order.
    #[instrument(level = "debug", skip(self))]
    pub fn sort_children_by_key(&mut self) {
        let indices: Vec<Index> = self.arena.iter().map(|(idx, _)| idx).collect();
        for idx in indices {
            let mut children = self.arena[idx].children.clone();
            children.sort_by(|&a, &b| self.arena[a].item.path.cmp(&self.arena[b].item.path));
            self.arena[idx].children = children;
        }
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

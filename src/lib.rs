//! zkseq: order-preserving hierarchical note keys.
//!
//! Two tightly coupled pieces make up the core:
//!
//! - [`KeySequencer`]: derive a key segment that sorts strictly between
//!   two neighbor segments (fractional indexing with a 5-digit base and
//!   an open-ended alphabetic suffix), so items can be inserted at any
//!   position without ever renumbering existing siblings.
//! - [`HierarchyBuilder`]: rebuild a nested tree from a flat collection
//!   of key-carrying items, tolerating missing intermediate levels via
//!   best-ancestor attachment.
//!
//! Everything else (index files, config, CLI) is caller plumbing around
//! those two.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod util;

pub use application::{AppResult, ApplicationError, IndexService};
pub use config::{NodeText, Settings};
pub use domain::{HierarchyBuilder, Item, KeyPath, KeySequencer, Segment, TreeArena, TreeNode};

/// Generate a key segment sorting strictly between `prev` and `next`
/// (either may be absent), as a plain string.
///
/// Inputs are parsed defensively: full paths are truncated to their final
/// segment, grammar violations degrade to the floor segment with a logged
/// warning.
pub fn generate_key(prev: Option<&str>, next: Option<&str>) -> String {
    let sequencer = KeySequencer::new();
    let prev = prev.map(Segment::parse);
    let next = next.map(Segment::parse);
    sequencer
        .generate(prev.as_ref(), next.as_ref())
        .as_str()
        .to_string()
}

/// Rebuild the subtree rooted at `root` from a flat item collection.
pub fn build_tree(root: &Item, all_items: &[Item]) -> TreeArena {
    HierarchyBuilder::new().build(root, all_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_neighbors_when_generating_then_first_born_key() {
        assert_eq!(generate_key(None, None), "00100");
    }

    #[test]
    fn given_flat_items_when_building_then_subtree_is_returned() {
        let items = vec![Item::new("00100", "root"), Item::new("00100/00100", "child")];
        let tree = build_tree(&items[0], &items);
        assert_eq!(tree.node_count(), 2);
    }
}

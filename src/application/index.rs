//! Index service: loads flat index files and answers tree and
//! key-insertion queries against them.
//!
//! Index file format: one item per line, `<key>` optionally followed by
//! whitespace and a title. Blank lines and `#` comments are skipped.

use std::fs;
use std::path::PathBuf;

use generational_arena::Index;
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::application::error::{AppResult, ApplicationError};
use crate::domain::{HierarchyBuilder, Item, KeyPath, KeySequencer, Segment, TreeArena};

#[derive(Debug, Default)]
pub struct IndexService {
    sequencer: KeySequencer,
}

impl IndexService {
    pub fn new() -> Self {
        Self {
            sequencer: KeySequencer::new(),
        }
    }

    /// Load items from an index file. `~` and `$VAR` in the path are
    /// expanded.
    #[instrument(level = "debug", skip(self))]
    pub fn load_items(&self, file_path: &str) -> AppResult<Vec<Item>> {
        let expanded = shellexpand::full(file_path)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| file_path.to_string());
        let path = PathBuf::from(expanded);
        if !path.is_file() {
            return Err(ApplicationError::IndexNotFound(path));
        }

        let content = fs::read_to_string(&path)?;
        let mut items = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, title) = match line.split_once(char::is_whitespace) {
                Some((key, title)) => (key, title.trim()),
                None => (line, ""),
            };
            let item = Item::new(key, title);
            if item.path.is_empty() {
                warn!("skipping line with empty key: {:?}", line);
                continue;
            }
            items.push(item);
        }
        debug!("loaded {} items from {}", items.len(), path.display());
        Ok(items)
    }

    /// Items that have no ancestor item in the collection, sorted by key
    /// path. Each one starts its own tree.
    pub fn find_roots<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items
            .iter()
            .filter(|item| {
                !items
                    .iter()
                    .any(|other| other.path.is_proper_prefix_of(&item.path))
            })
            .sorted_by(|a, b| a.path.cmp(&b.path))
            .collect()
    }

    /// One reconstructed tree per root.
    #[instrument(level = "debug", skip(self, items))]
    pub fn build_forest(&self, items: &[Item]) -> Vec<TreeArena> {
        let mut builder = HierarchyBuilder::new();
        self.find_roots(items)
            .into_iter()
            .map(|root| builder.build(root, items))
            .collect()
    }

    /// Subtree rooted at the item with the given key.
    pub fn build_tree(&self, key: &str, items: &[Item]) -> AppResult<TreeArena> {
        let root = self.find_item(key, items)?;
        let mut builder = HierarchyBuilder::new();
        Ok(builder.build(root, items))
    }

    /// New full key sorting directly before the item with the given key,
    /// among its siblings in the reconstructed tree.
    pub fn insert_before(&self, key: &str, items: &[Item]) -> AppResult<String> {
        let (tree, idx) = self.locate_node(key, items)?;
        let node = tree.get_node(idx).expect("located node exists");

        let curr_seg = Segment::parse(node.item.path.last().unwrap_or_default());
        let prev_seg = self
            .adjacent_sibling(&tree, idx, Adjacent::Before)
            .map(|p| Segment::parse(p.last().unwrap_or_default()));

        let new_seg = self.sequencer.generate(prev_seg.as_ref(), Some(&curr_seg));
        Ok(self.assemble(&node.item.path, &new_seg))
    }

    /// New full key sorting directly after the item with the given key,
    /// among its siblings in the reconstructed tree.
    pub fn insert_after(&self, key: &str, items: &[Item]) -> AppResult<String> {
        let (tree, idx) = self.locate_node(key, items)?;
        let node = tree.get_node(idx).expect("located node exists");

        let curr_seg = Segment::parse(node.item.path.last().unwrap_or_default());
        let next_seg = self
            .adjacent_sibling(&tree, idx, Adjacent::After)
            .map(|p| Segment::parse(p.last().unwrap_or_default()));

        let new_seg = self.sequencer.generate(Some(&curr_seg), next_seg.as_ref());
        Ok(self.assemble(&node.item.path, &new_seg))
    }

    /// New full key for a child of the item with the given key: after the
    /// last existing child, or the first-born key for a childless item.
    pub fn insert_child(&self, key: &str, items: &[Item]) -> AppResult<String> {
        let (tree, idx) = self.locate_node(key, items)?;
        let node = tree.get_node(idx).expect("located node exists");

        // children are already in key order
        let last_child_seg = node.children.last().map(|&child| {
            let path = &tree.get_node(child).expect("child exists").item.path;
            Segment::parse(path.last().unwrap_or_default())
        });

        let new_seg = self.sequencer.generate(last_child_seg.as_ref(), None);
        Ok(node.item.path.child(new_seg.as_str()).to_string())
    }

    fn find_item<'a>(&self, key: &str, items: &'a [Item]) -> AppResult<&'a Item> {
        let query = KeyPath::parse(key);
        items
            .iter()
            .find(|item| item.path == query)
            .ok_or_else(|| ApplicationError::ItemNotFound(key.to_string()))
    }

    /// Build the forest and find the node carrying the given key,
    /// returning the tree that owns it.
    fn locate_node(&self, key: &str, items: &[Item]) -> AppResult<(TreeArena, Index)> {
        let query = KeyPath::parse(key);
        for tree in self.build_forest(items) {
            let found = tree
                .iter()
                .find(|(_, node)| node.item.path == query)
                .map(|(idx, _)| idx);
            if let Some(idx) = found {
                return Ok((tree, idx));
            }
        }
        Err(ApplicationError::ItemNotFound(key.to_string()))
    }

    /// Sibling path directly before/after the node among its tree
    /// parent's sorted children. A tree root has no siblings.
    fn adjacent_sibling<'t>(
        &self,
        tree: &'t TreeArena,
        idx: Index,
        side: Adjacent,
    ) -> Option<&'t KeyPath> {
        let parent_idx = tree.get_node(idx)?.parent?;
        let siblings = &tree.get_node(parent_idx)?.children;
        let pos = siblings.iter().position(|&c| c == idx)?;
        let neighbor = match side {
            Adjacent::Before => pos.checked_sub(1).map(|p| siblings[p]),
            Adjacent::After => siblings.get(pos + 1).copied(),
        }?;
        Some(&tree.get_node(neighbor)?.item.path)
    }

    /// Join the target's parent path with the new segment. Gap-attached
    /// nodes keep their own textual parent path, not their tree parent's.
    fn assemble(&self, target_path: &KeyPath, seg: &Segment) -> String {
        match target_path.parent() {
            Some(parent) if !parent.is_empty() => parent.child(seg.as_str()).to_string(),
            _ => seg.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Adjacent {
    Before,
    After,
}

//! Items: opaque payloads carrying a hierarchical key path.

use crate::domain::keypath::KeyPath;

/// One entry of a flat index: a key path plus its display payload.
///
/// Items form a multiset; duplicate key paths are tolerated and become
/// siblings when the tree is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Normalized key string, e.g. `00100/00200m`
    pub id: String,
    /// Display title; may be empty
    pub title: String,
    /// Parsed key path, kept consistent with `id`
    pub path: KeyPath,
}

impl Item {
    /// Build an item from a raw key and title, normalizing the key.
    pub fn new(raw_id: &str, title: &str) -> Self {
        let path = KeyPath::parse(raw_id);
        Self {
            id: path.to_string(),
            title: title.to_string(),
            path,
        }
    }

    /// Label for tree display: the title when present, the key otherwise.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_raw_key_when_creating_item_then_id_and_path_agree() {
        let item = Item::new("100/2m", "Some note");
        assert_eq!(item.id, "00100/00002m");
        assert_eq!(item.path, KeyPath::parse("00100/00002m"));
        assert_eq!(item.display_title(), "Some note");
    }

    #[test]
    fn given_untitled_item_when_displaying_then_falls_back_to_id() {
        let item = Item::new("00100", "");
        assert_eq!(item.display_title(), "00100");
    }
}

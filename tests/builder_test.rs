//! Tests for hierarchy reconstruction

use zkseq::domain::{HierarchyBuilder, Item, TreeArena};
use zkseq::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn item(id: &str) -> Item {
    Item::new(id, "")
}

fn preorder_ids(tree: &TreeArena) -> Vec<String> {
    tree.iter().map(|(_, node)| node.item.id.clone()).collect()
}

fn child_ids_of_root(tree: &TreeArena) -> Vec<String> {
    let root = tree.root().unwrap();
    tree.get_node(root)
        .unwrap()
        .children
        .iter()
        .map(|&c| tree.get_node(c).unwrap().item.id.clone())
        .collect()
}

#[test]
fn given_exact_chain_when_building_then_three_levels() {
    // Arrange
    let items = vec![
        item("00100"),
        item("00100/00200"),
        item("00100/00200/00300"),
    ];

    // Act
    let tree = HierarchyBuilder::new().build(&items[0], &items);

    // Assert
    assert_eq!(tree.depth(), 3);
    assert_eq!(
        preorder_ids(&tree),
        vec!["00100", "00100/00200", "00100/00200/00300"]
    );
}

#[test]
fn given_missing_intermediate_level_when_building_then_attaches_to_best_ancestor() {
    // no item at 00100/00500
    let items = vec![item("00100"), item("00100/00500/00100")];

    let tree = HierarchyBuilder::new().build(&items[0], &items);

    assert_eq!(tree.depth(), 2);
    assert_eq!(child_ids_of_root(&tree), vec!["00100/00500/00100"]);
}

#[test]
fn given_deep_gap_when_building_then_deepest_ancestor_wins() {
    let items = vec![
        item("00100"),
        item("00100/00200"),
        // neither 00100/00200/00300 nor .../00400 exist
        item("00100/00200/00300/00400/00500"),
    ];

    let tree = HierarchyBuilder::new().build(&items[0], &items);

    let root = tree.root().unwrap();
    let mid = tree.get_node(root).unwrap().children[0];
    let mid_node = tree.get_node(mid).unwrap();
    assert_eq!(mid_node.item.id, "00100/00200");
    // the gapped item hangs off 00100/00200, not off the root
    let leaf = tree.get_node(mid_node.children[0]).unwrap();
    assert_eq!(leaf.item.id, "00100/00200/00300/00400/00500");
}

#[test]
fn given_shuffled_input_when_building_then_sibling_order_is_by_key() {
    let forward = vec![
        item("00100"),
        item("00100/00100"),
        item("00100/00200"),
        item("00100/00300"),
    ];
    let mut shuffled = forward.clone();
    shuffled.swap(1, 3);
    shuffled.swap(2, 3);

    let tree_a = HierarchyBuilder::new().build(&forward[0], &forward);
    let tree_b = HierarchyBuilder::new().build(&shuffled[0], &shuffled);

    assert_eq!(child_ids_of_root(&tree_a), child_ids_of_root(&tree_b));
    assert_eq!(
        child_ids_of_root(&tree_a),
        vec!["00100/00100", "00100/00200", "00100/00300"]
    );
}

#[test]
fn given_same_input_when_rebuilding_then_trees_are_identical() {
    let items = vec![
        item("00100"),
        item("00100/00300"),
        item("00100/00100"),
        item("00100/00100/00100"),
    ];

    let mut builder = HierarchyBuilder::new();
    let first = builder.build(&items[0], &items);
    let second = builder.build(&items[0], &items);

    assert_eq!(preorder_ids(&first), preorder_ids(&second));
}

#[test]
fn given_duplicate_paths_when_building_then_both_become_siblings() {
    let items = vec![
        item("00100"),
        Item::new("00100/00200", "first arrival"),
        Item::new("00100/00200", "second arrival"),
    ];

    let tree = HierarchyBuilder::new().build(&items[0], &items);

    let root = tree.root().unwrap();
    let children = &tree.get_node(root).unwrap().children;
    assert_eq!(children.len(), 2);
    // stable sort keeps arrival order between equal keys
    let titles: Vec<&str> = children
        .iter()
        .map(|&c| tree.get_node(c).unwrap().item.title.as_str())
        .collect();
    assert_eq!(titles, vec!["first arrival", "second arrival"]);
}

#[test]
fn given_unrelated_item_when_building_then_it_is_absent() {
    let items = vec![item("00100"), item("00200"), item("00200/00100")];

    let tree = HierarchyBuilder::new().build(&items[0], &items);

    assert_eq!(tree.node_count(), 1);
    assert_eq!(preorder_ids(&tree), vec!["00100"]);
}

#[test]
fn given_root_without_descendants_when_building_then_single_node() {
    let items = vec![item("00100")];
    let tree = HierarchyBuilder::new().build(&items[0], &items);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.depth(), 1);
}

#[test]
fn given_similar_key_text_when_building_then_prefix_is_segment_wise() {
    // 00100m starts with the text "00100" but is not a descendant
    let items = vec![item("00100"), item("00100m"), item("00100/00100")];

    let tree = HierarchyBuilder::new().build(&items[0], &items);

    assert_eq!(preorder_ids(&tree), vec!["00100", "00100/00100"]);
}

#[test]
fn given_topic_root_when_building_then_mixed_segments_work() {
    let items = vec![
        item("english"),
        item("english/00200"),
        item("english/00100"),
    ];

    let tree = HierarchyBuilder::new().build(&items[0], &items);

    assert_eq!(
        child_ids_of_root(&tree),
        vec!["english/00100", "english/00200"]
    );
}

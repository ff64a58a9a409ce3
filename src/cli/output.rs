//! Terminal output formatting with colors and tree rendering
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use generational_arena::Index;
use termtree::Tree;

use crate::config::NodeText;
use crate::domain::TreeArena;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Convert a reconstructed tree into a displayable termtree.
pub fn render_tree(tree: &TreeArena, node_text: NodeText) -> Tree<String> {
    match tree.root() {
        Some(root) => render_node(tree, root, node_text),
        None => Tree::new("(empty tree)".to_string()),
    }
}

fn render_node(tree: &TreeArena, idx: Index, node_text: NodeText) -> Tree<String> {
    let node = match tree.get_node(idx) {
        Some(node) => node,
        None => return Tree::new("(missing node)".to_string()),
    };

    let label = match node_text {
        NodeText::Id => node.item.id.clone(),
        NodeText::Title => node.item.display_title().to_string(),
        NodeText::Both => {
            if node.item.title.is_empty() {
                node.item.id.clone()
            } else {
                format!("{}: {}", node.item.id, node.item.title)
            }
        }
    };

    let leaves: Vec<Tree<String>> = node
        .children
        .iter()
        .map(|&child| render_node(tree, child, node_text))
        .collect();

    Tree::new(label).with_leaves(leaves)
}

//! Domain layer: key generation and tree reconstruction.
//!
//! Pure, synchronous, in-memory computations. No I/O, no errors raised:
//! malformed segments degrade with a logged warning, unresolvable items
//! are dropped so trees stay renderable with incomplete hierarchies.

pub mod arena;
pub mod builder;
pub mod item;
pub mod keypath;
pub mod segment;
pub mod sequencer;

pub use arena::{TreeArena, TreeNode};
pub use builder::HierarchyBuilder;
pub use item::Item;
pub use keypath::{KeyPath, SEPARATOR};
pub use segment::Segment;
pub use sequencer::{KeySequencer, FIRST_BASE};

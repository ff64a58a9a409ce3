//! Tests for settings loading

use zkseq::config::{NodeText, Settings};
use zkseq::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// One test: env mutation must not race a parallel defaults check.
#[test]
fn given_env_override_when_loading_then_env_wins_over_defaults() {
    std::env::remove_var("ZKSEQ_NODE_TEXT");
    let settings = Settings::load().unwrap();
    assert_eq!(settings.node_text, NodeText::Both);

    std::env::set_var("ZKSEQ_NODE_TEXT", "id");
    let settings = Settings::load().unwrap();
    assert_eq!(settings.node_text, NodeText::Id);
    std::env::remove_var("ZKSEQ_NODE_TEXT");
}

use slamui::ui::components::{Container, Label, Panel};
use slamui::ui::core::{Interaction, ViewTree, WidgetKind};
use slamui::TaskRegistry;

#[test]
fn test_add_child_keeps_insertion_order() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    let a = tree.add_child(root, Label::new("a")).unwrap();
    let b = tree.add_child(root, Label::new("b")).unwrap();

    assert_eq!(tree.children(root), &[a, b]);
    assert_eq!(tree.parent(a), Some(root));
    assert_eq!(tree.parent(root), None);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_add_child_to_missing_parent() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    tree.remove(root);

    assert!(tree.add_child(root, Label::new("orphan")).is_none());
    assert!(tree.is_empty());
}

#[test]
fn test_remove_drops_subtree() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    let group = tree.add_child(root, Panel::new("group")).unwrap();
    let leaf = tree.add_child(group, Label::new("leaf")).unwrap();
    let sibling = tree.add_child(root, Label::new("sibling")).unwrap();

    tree.remove(group);

    assert!(!tree.contains(group));
    assert!(!tree.contains(leaf));
    assert!(tree.contains(sibling));
    assert_eq!(tree.children(root), &[sibling]);
}

#[test]
fn test_removed_nodes_resolve_as_absence() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    let label = tree.add_child(root, Label::new("gone").with_text("x")).unwrap();
    tree.remove(label);

    tree.update_ui(label);
    tree.reset_ui(label);
    assert!(tree.get(label).is_none());
    assert!(tree.find_root_view(label).is_none());
    assert!(tree.find_element(label, "gone").is_none());
    assert!(!tree.interact(label, Interaction::Tap, &TaskRegistry::new()));
    assert!(tree.snapshot(label).is_empty());
}

#[test]
fn test_attach_rejects_cycles() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    let child = tree.add_child(root, Panel::new("child")).unwrap();

    assert!(!tree.attach(child, root));
    assert!(!tree.attach(root, root));
    assert_eq!(tree.parent(child), Some(root));
}

#[test]
fn test_attach_moves_between_parents() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    let left = tree.add_child(root, Panel::new("left")).unwrap();
    let right = tree.add_child(root, Panel::new("right")).unwrap();
    let leaf = tree.add_child(left, Label::new("leaf")).unwrap();

    assert!(tree.attach(right, leaf));
    assert!(tree.children(left).is_empty());
    assert_eq!(tree.children(right), &[leaf]);
    assert_eq!(tree.parent(leaf), Some(right));
}

#[test]
fn test_find_root_view_stops_below_window() {
    let (mut tree, window) = ViewTree::with_window();
    let screen = tree.add_child(window, Panel::new("screen")).unwrap();
    let group = tree.add_child(screen, Container::new()).unwrap();
    let leaf = tree.add_child(group, Label::new("leaf")).unwrap();

    assert_eq!(tree.window(), Some(window));
    assert_eq!(tree.find_root_view(leaf), Some(screen));
    assert_eq!(tree.find_root_view(screen), Some(screen));
    assert_eq!(tree.kind(window), Some(WidgetKind::Window));
}

#[test]
fn test_find_root_view_without_window() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    let leaf = tree.add_child(root, Label::new("leaf")).unwrap();

    assert_eq!(tree.find_root_view(leaf), Some(root));
    assert_eq!(tree.find_root_view(root), Some(root));
}

#[test]
fn test_iter_dfs_is_preorder() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    let a = tree.add_child(root, Panel::new("a")).unwrap();
    let a1 = tree.add_child(a, Label::new("a1")).unwrap();
    let b = tree.add_child(root, Label::new("b")).unwrap();

    assert_eq!(tree.iter_dfs(root), vec![root, a, a1, b]);
    assert_eq!(tree.depth_below(root, a1), Some(2));
    assert_eq!(tree.depth_below(a, b), None);
}

#[test]
fn test_snapshot_json_lists_subtree() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    tree.add_child(root, Label::new("greeting").with_text("hi"));

    let snapshot = tree.snapshot(root);
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[1].depth, 1);
    assert_eq!(snapshot[1].value, "hi");
    assert_eq!(snapshot[1].enabled, None);

    let json = tree.snapshot_json(root).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[1]["kind"], "label");
    assert_eq!(parsed[1]["referral"], "greeting");
    assert!(parsed[1].get("enabled").is_none());
}

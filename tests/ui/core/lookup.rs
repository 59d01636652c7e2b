use slamui::ui::components::{Button, Container, Label, Panel};
use slamui::ui::core::{NodeId, ViewTree};

/// root -> [A("x"), B -> [C("x")]]
fn duplicate_referrals() -> (ViewTree, NodeId, NodeId, NodeId) {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    let a = tree.add_child(root, Label::new("x").with_text("first")).unwrap();
    let b = tree.add_child(root, Panel::new("b")).unwrap();
    let c = tree.add_child(b, Label::new("x").with_text("second")).unwrap();
    (tree, root, a, c)
}

#[test]
fn test_find_element_returns_first_preorder_match() {
    let (tree, root, a, c) = duplicate_referrals();

    assert_eq!(tree.find_element(root, "x"), Some(a));
    assert_ne!(tree.find_element(root, "x"), Some(c));
}

#[test]
fn test_find_element_searches_below_start() {
    let (tree, root, _, c) = duplicate_referrals();
    let b = tree.find_element(root, "b").unwrap();

    assert_eq!(tree.find_element(b, "x"), Some(c));
    assert_eq!(tree.find_element(root, "missing"), None);
}

#[test]
fn test_find_element_includes_start_node() {
    let (tree, root, _, _) = duplicate_referrals();

    assert_eq!(tree.find_element(root, "root"), Some(root));
}

#[test]
fn test_containers_are_not_matched_but_searched() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Container::new());
    let inner = tree.add_child(root, Container::new()).unwrap();
    let label = tree.add_child(inner, Label::new("")).unwrap();

    assert_eq!(tree.find_element(root, ""), Some(label));
}

#[test]
fn test_find_as_checks_type_of_first_match() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    tree.add_child(root, Label::new("go"));
    tree.add_child(root, Button::new("go"));

    assert!(tree.find_as::<Label>(root, "go").is_some());
    assert!(tree.find_as::<Button>(root, "go").is_none());
}

#[test]
fn test_with_element_configures_in_place() {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    let label = tree.add_child(root, Label::new("title")).unwrap();

    let found = tree.with_element::<Label>(root, "title", |label| {
        label.set_text_data_source(|| "Configured".to_string());
    });
    assert!(found);
    assert!(!tree.with_element::<Button>(root, "title", |_| {}));

    tree.update_ui(root);
    assert_eq!(tree.element::<Label>(label).unwrap().text(), "Configured");
}

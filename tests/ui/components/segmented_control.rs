use slamui::ui::components::{clamp_selection, SegmentedControl};
use slamui::ui::core::{Interaction, NodeId, ViewTree};
use slamui::TaskRegistry;
use std::cell::RefCell;
use std::rc::Rc;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn bound_control(source: &Rc<RefCell<Vec<String>>>) -> (ViewTree, NodeId) {
    let mut tree = ViewTree::new();
    let mut control = SegmentedControl::new("seg");
    let s = Rc::clone(source);
    control.set_label_array_data_source(move || s.borrow().clone());
    let id = tree.insert(control);
    tree.update_ui(id);
    (tree, id)
}

fn control(tree: &ViewTree, id: NodeId) -> &SegmentedControl {
    tree.element::<SegmentedControl>(id).unwrap()
}

#[test]
fn test_shrinking_clamps_selection_to_last_segment() {
    let source = Rc::new(RefCell::new(labels(&["a", "b", "c", "d", "e"])));
    let (mut tree, id) = bound_control(&source);
    tree.element_mut::<SegmentedControl>(id).unwrap().set_current_segment(Some(4));

    *source.borrow_mut() = labels(&["x", "y", "z"]);
    tree.update_ui(id);

    assert_eq!(control(&tree, id).number_of_segments(), 3);
    assert_eq!(control(&tree, id).current_segment(), Some(2));
}

#[test]
fn test_shrinking_keeps_valid_selection() {
    let source = Rc::new(RefCell::new(labels(&["a", "b", "c", "d", "e"])));
    let (mut tree, id) = bound_control(&source);
    tree.element_mut::<SegmentedControl>(id).unwrap().set_current_segment(Some(1));

    *source.borrow_mut() = labels(&["x", "y", "z"]);
    tree.update_ui(id);

    assert_eq!(control(&tree, id).current_segment(), Some(1));
}

#[test]
fn test_same_count_retitles_in_place() {
    let source = Rc::new(RefCell::new(labels(&["a", "b", "c"])));
    let (mut tree, id) = bound_control(&source);
    tree.element_mut::<SegmentedControl>(id).unwrap().set_current_segment(Some(2));

    *source.borrow_mut() = labels(&["one", "two", "three"]);
    tree.update_ui(id);

    assert_eq!(control(&tree, id).segments(), labels(&["one", "two", "three"]).as_slice());
    assert_eq!(control(&tree, id).current_segment(), Some(2));
}

#[test]
fn test_unchanged_labels_write_nothing() {
    let source = Rc::new(RefCell::new(labels(&["a", "b"])));
    let (mut tree, id) = bound_control(&source);
    let writes = tree.native_writes(id);

    tree.update_ui(id);
    assert_eq!(tree.native_writes(id), writes);
}

#[test]
fn test_empty_labels_clear_selection() {
    let source = Rc::new(RefCell::new(labels(&["a", "b"])));
    let (mut tree, id) = bound_control(&source);
    tree.element_mut::<SegmentedControl>(id).unwrap().set_current_segment(Some(0));

    source.borrow_mut().clear();
    tree.update_ui(id);

    assert_eq!(control(&tree, id).number_of_segments(), 0);
    assert_eq!(control(&tree, id).current_segment(), None);
}

#[test]
fn test_no_selection_survives_rebuild() {
    let source = Rc::new(RefCell::new(labels(&["a", "b", "c"])));
    let (mut tree, id) = bound_control(&source);

    *source.borrow_mut() = labels(&["a"]);
    tree.update_ui(id);

    assert_eq!(control(&tree, id).current_segment(), None);
}

#[test]
fn test_out_of_range_segment_source_is_ignored() {
    let mut tree = ViewTree::new();
    let mut seg = SegmentedControl::new("seg").with_segments(["a", "b"]);
    seg.set_current_segment_data_source(|| Some(7));
    let id = tree.insert(seg);
    tree.update_ui(id);

    assert_eq!(control(&tree, id).current_segment(), None);
}

#[test]
fn test_gestures_move_selection() {
    let mut tree = ViewTree::new();
    let id = tree.insert(SegmentedControl::new("seg").with_segments(["a", "b", "c"]));
    let registry = TaskRegistry::new();

    assert!(tree.interact(id, Interaction::Increment, &registry));
    assert_eq!(control(&tree, id).current_segment(), Some(0));
    assert!(tree.interact(id, Interaction::Select(Some(2)), &registry));
    assert!(!tree.interact(id, Interaction::Increment, &registry));
    assert!(!tree.interact(id, Interaction::Select(Some(3)), &registry));
    assert!(tree.interact(id, Interaction::Select(None), &registry));
    assert_eq!(control(&tree, id).current_segment(), None);
}

#[test]
fn test_clamp_selection() {
    assert_eq!(clamp_selection(Some(4), 3), Some(2));
    assert_eq!(clamp_selection(Some(0), 3), Some(0));
    assert_eq!(clamp_selection(None, 0), None);
    assert_eq!(clamp_selection(Some(2), 0), None);
}

use slamui::ui::components::SingleItemTable;
use slamui::ui::core::{Interaction, ViewTree};
use slamui::TaskRegistry;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn loaded(table: SingleItemTable) -> (ViewTree, slamui::NodeId) {
    let mut tree = ViewTree::new();
    let id = tree.insert(table);
    tree.update_ui(id);
    (tree, id)
}

#[test]
fn test_static_list_wins_over_item_closures() {
    let mut table = SingleItemTable::new("table");
    table.set_static_list(["A", "B"]);
    table.set_items_data_source(|| 5, |row| format!("row {row}"));
    let (tree, id) = loaded(table);

    let table = tree.element::<SingleItemTable>(id).unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.fetch_label(0), "A");
    assert_eq!(table.fetch_label(1), "B");
}

#[test]
fn test_labels_closure_wins_over_item_closures() {
    let mut table = SingleItemTable::new("table");
    table.set_items_data_source(|| 5, |row| format!("row {row}"));
    table.set_labels_data_source(|| vec!["only".to_string()]);
    let (tree, id) = loaded(table);

    assert_eq!(tree.element::<SingleItemTable>(id).unwrap().rows(), ["only".to_string()]);
}

#[test]
fn test_item_closures_build_rows() {
    let mut table = SingleItemTable::new("table");
    table.set_items_data_source(|| 3, |row| format!("row {row}"));
    let (tree, id) = loaded(table);

    let table = tree.element::<SingleItemTable>(id).unwrap();
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.fetch_label(2), "row 2");
    assert_eq!(table.fetch_label(3), "");
}

#[test]
fn test_no_source_means_no_rows() {
    let (tree, id) = loaded(SingleItemTable::new("table"));
    assert_eq!(tree.element::<SingleItemTable>(id).unwrap().row_count(), 0);
}

#[test]
fn test_reload_drops_selection_past_end() {
    let count = Rc::new(Cell::new(4));
    let mut table = SingleItemTable::new("table");
    let c = Rc::clone(&count);
    table.set_items_data_source(move || c.get(), |row| row.to_string());
    let (mut tree, id) = loaded(table);

    assert!(tree.element_mut::<SingleItemTable>(id).unwrap().set_current_selection(Some(3)));
    count.set(2);
    tree.reset_ui(id);

    assert_eq!(tree.element::<SingleItemTable>(id).unwrap().current_selection(), None);
}

#[test]
fn test_selection_from_data_source() {
    let selected = Rc::new(Cell::new(Some(1)));
    let mut table = SingleItemTable::new("table");
    table.set_static_list(["a", "b", "c"]);
    let s = Rc::clone(&selected);
    table.set_selected_data_source(move || s.get());
    let (mut tree, id) = loaded(table);
    assert_eq!(tree.element::<SingleItemTable>(id).unwrap().current_selection(), Some(1));

    selected.set(None);
    tree.update_ui(id);
    assert_eq!(tree.element::<SingleItemTable>(id).unwrap().current_selection(), None);
}

#[test]
fn test_selecting_fires_handler() {
    let picked = Rc::new(RefCell::new(Vec::new()));
    let mut table = SingleItemTable::new("table");
    table.set_static_list(["a", "b"]);
    let p = Rc::clone(&picked);
    table.on_select(move |value| p.borrow_mut().push(value.as_index()));
    let (mut tree, id) = loaded(table);
    let registry = TaskRegistry::new();

    assert!(tree.interact(id, Interaction::Select(Some(1)), &registry));
    assert!(!tree.interact(id, Interaction::Select(Some(1)), &registry));
    assert!(tree.interact(id, Interaction::Decrement, &registry));
    assert!(tree.interact(id, Interaction::Select(None), &registry));

    assert_eq!(*picked.borrow(), vec![Some(1), Some(0), None]);
}

#[test]
fn test_deselect_all() {
    let mut table = SingleItemTable::new("table");
    table.set_static_list(["a"]);
    let (mut tree, id) = loaded(table);
    let table = tree.element_mut::<SingleItemTable>(id).unwrap();

    assert!(table.set_current_selection(Some(0)));
    assert!(!table.set_current_selection(Some(5)));
    assert!(table.deselect_all());
    assert_eq!(table.current_selection(), None);
}

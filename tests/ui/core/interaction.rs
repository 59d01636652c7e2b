use super::support::{entries, journal};
use slamui::ui::components::{Button, Label, Panel, Switch};
use slamui::ui::core::{Control, ControlValue, Interaction, Interactive, View, ViewTree};
use slamui::TaskRegistry;
use std::rc::Rc;

#[test]
fn test_handler_fires_callback_then_task_then_cascade() {
    let log = journal();
    let mut registry = TaskRegistry::new();
    let l = Rc::clone(&log);
    registry.add_task("save", move |param| l.borrow_mut().push(format!("task {param}")));

    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));

    let mut status = Label::new("status");
    let l = Rc::clone(&log);
    status.set_text_data_source(move || {
        l.borrow_mut().push("render".to_string());
        String::new()
    });
    tree.add_child(root, status);

    let mut button = Button::new("save").with_title("Save");
    let l = Rc::clone(&log);
    button.handler_mut().on_press(move |value| {
        l.borrow_mut().push(format!("press {}", value.as_text().unwrap_or_default()));
    });
    button.handler_mut().set_task("save", "draft");
    button.handler_mut().set_auto_ui(true);
    let button = tree.add_child(root, button).unwrap();

    tree.update_ui(root);
    log.borrow_mut().clear();

    assert!(tree.interact(button, Interaction::Tap, &registry));
    assert_eq!(entries(&log), vec!["press Save", "task draft", "render"]);
}

#[test]
fn test_no_cascade_without_auto_ui() {
    let log = journal();
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));

    let mut status = Label::new("status");
    let l = Rc::clone(&log);
    status.set_text_data_source(move || {
        l.borrow_mut().push("render".to_string());
        String::new()
    });
    tree.add_child(root, status);
    let button = tree.add_child(root, Button::new("plain")).unwrap();

    assert!(tree.interact(button, Interaction::Tap, &TaskRegistry::new()));
    assert!(entries(&log).is_empty());
}

#[test]
fn test_missing_task_is_silent() {
    let registry = TaskRegistry::new();
    assert!(!registry.run_task("missing", "x"));

    let mut tree = ViewTree::new();
    let mut button = Button::new("go");
    button.handler_mut().set_task("missing", "x");
    let button = tree.insert(button);

    assert!(tree.interact(button, Interaction::Tap, &registry));
}

#[test]
fn test_hidden_widgets_ignore_gestures() {
    let log = journal();
    let mut tree = ViewTree::new();
    let mut switch = Switch::new("switch");
    let l = Rc::clone(&log);
    switch.handler_mut().on_press(move |_| l.borrow_mut().push("press".to_string()));
    switch.set_hidden(true);
    let switch = tree.insert(switch);

    assert!(!tree.interact(switch, Interaction::Tap, &TaskRegistry::new()));
    assert!(entries(&log).is_empty());
    assert!(!tree.element::<Switch>(switch).unwrap().is_on());
}

#[test]
fn test_disabled_controls_ignore_gestures() {
    let mut tree = ViewTree::new();
    let mut switch = Switch::new("switch");
    switch.control_mut().set_enable_data_source(|| false);
    let switch = tree.insert(switch);
    tree.update_ui(switch);

    assert!(!tree.interact(switch, Interaction::Tap, &TaskRegistry::new()));
    assert!(!tree.element::<Switch>(switch).unwrap().is_on());
}

#[test]
fn test_switch_reports_new_value() {
    let seen = Rc::new(std::cell::Cell::new(None));
    let mut tree = ViewTree::new();
    let mut switch = Switch::new("switch");
    let s = Rc::clone(&seen);
    switch.handler_mut().on_press(move |value| s.set(value.as_flag()));
    let switch = tree.insert(switch);

    assert!(tree.interact(switch, Interaction::Tap, &TaskRegistry::new()));
    assert_eq!(seen.get(), Some(true));

    // Setting the value it already has is not an event
    assert!(!tree.interact(switch, Interaction::SetOn(true), &TaskRegistry::new()));
    assert!(tree.interact(switch, Interaction::SetOn(false), &TaskRegistry::new()));
    assert_eq!(seen.get(), Some(false));
}

#[test]
fn test_unsupported_gesture_does_not_fire() {
    let mut tree = ViewTree::new();
    let button = tree.insert(Button::new("go"));
    let label = tree.insert(Label::new("text"));

    assert!(!tree.interact(button, Interaction::Increment, &TaskRegistry::new()));
    assert!(!tree.interact(label, Interaction::Tap, &TaskRegistry::new()));
}

#[test]
fn test_control_value_accessors() {
    assert_eq!(ControlValue::Flag(true).as_flag(), Some(true));
    assert_eq!(ControlValue::Index(Some(2)).as_index(), Some(2));
    assert_eq!(ControlValue::Index(None).as_index(), None);
    assert_eq!(ControlValue::Number(1.5).as_flag(), None);
    assert_eq!(ControlValue::Text("a".into()).as_text(), Some("a"));
}

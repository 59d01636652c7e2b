use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use slamui::config::UiConfig;
use slamui::logger::Logger;
use slamui::ui::components::{Button, Label, Panel, Switch, TextField};
use slamui::ui::core::{Control, Interaction, Interactive, View, ViewTree, WidgetKind};
use slamui::ui::events::{handle_key, map_key, KeyAction};
use slamui::ui::App;
use slamui::TaskRegistry;
use std::cell::Cell;
use std::rc::Rc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with(build: impl FnOnce(&mut ViewTree, slamui::NodeId)) -> App {
    let mut tree = ViewTree::new();
    let root = tree.insert(Panel::new("root"));
    build(&mut tree, root);
    App::new(tree, root, TaskRegistry::new(), Logger::new(), UiConfig::default())
}

#[test]
fn test_focus_skips_hidden_and_disabled_widgets() {
    let app = app_with(|tree, root| {
        tree.add_child(root, Label::new("title"));
        tree.add_child(root, Button::new("first"));
        let mut hidden = Button::new("hidden");
        hidden.base_mut().set_visible_data_source(|| false);
        tree.add_child(root, hidden);
        let mut disabled = Switch::new("disabled");
        disabled.control_mut().set_enable_data_source(|| false);
        tree.add_child(root, disabled);
        tree.add_child(root, Switch::new("last"));
    });

    let names: Vec<String> = app
        .focusable()
        .into_iter()
        .map(|id| app.tree.get(id).unwrap().base().referral().to_string())
        .collect();
    assert_eq!(names, vec!["first", "last"]);
}

#[test]
fn test_focus_wraps_around() {
    let mut app = app_with(|tree, root| {
        tree.add_child(root, Button::new("a"));
        tree.add_child(root, Button::new("b"));
    });
    let focusable = app.focusable();

    assert_eq!(app.focused(), Some(focusable[0]));
    app.focus_next();
    assert_eq!(app.focused(), Some(focusable[1]));
    app.focus_next();
    assert_eq!(app.focused(), Some(focusable[0]));
    app.focus_prev();
    assert_eq!(app.focused(), Some(focusable[1]));
}

#[test]
fn test_dispatch_runs_hooks_after_events() {
    let hooks = Rc::new(Cell::new(0));
    let mut app = app_with(|tree, root| {
        tree.add_child(root, Switch::new("switch"));
    });
    let h = Rc::clone(&hooks);
    app.after_interaction(move |_, _| h.set(h.get() + 1));

    assert!(app.dispatch(Interaction::Tap));
    assert!(!app.dispatch(Interaction::Increment));
    assert_eq!(hooks.get(), 1);
}

#[test]
fn test_enter_presses_focused_button() {
    let pressed = Rc::new(Cell::new(false));
    let p = Rc::clone(&pressed);
    let mut app = app_with(move |tree, root| {
        let mut button = Button::new("go");
        button.handler_mut().on_press(move |_| p.set(true));
        tree.add_child(root, button);
    });

    assert!(handle_key(key(KeyCode::Enter), &mut app));
    assert!(pressed.get());
}

#[test]
fn test_quit_keys() {
    let mut app = app_with(|_, _| {});
    assert!(handle_key(key(KeyCode::Char('q')), &mut app));
    assert!(app.should_quit);

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(ctrl_c, Some(WidgetKind::TextField)), KeyAction::Quit);
}

#[test]
fn test_text_fields_capture_characters() {
    assert_eq!(
        map_key(key(KeyCode::Char('q')), Some(WidgetKind::TextField)),
        KeyAction::Gesture(Interaction::TypeChar('q'))
    );
    assert_eq!(
        map_key(key(KeyCode::Backspace), Some(WidgetKind::TextField)),
        KeyAction::Gesture(Interaction::DeleteBackward)
    );
    assert_eq!(map_key(key(KeyCode::Tab), Some(WidgetKind::TextField)), KeyAction::FocusNext);
    assert_eq!(
        map_key(key(KeyCode::Right), Some(WidgetKind::Stepper)),
        KeyAction::Gesture(Interaction::Increment)
    );
}

#[test]
fn test_typing_into_focused_field() {
    let mut app = app_with(|tree, root| {
        tree.add_child(root, TextField::new("name"));
    });

    handle_key(key(KeyCode::Char('o')), &mut app);
    handle_key(key(KeyCode::Char('k')), &mut app);

    let field = app.focused().unwrap();
    assert_eq!(app.tree.element::<TextField>(field).unwrap().text_value(), "ok");
    assert!(!app.should_quit);
}

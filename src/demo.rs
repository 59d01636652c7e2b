//! Demo screen shown by the `slamui` binary.
//!
//! Every widget kind is bound to a small piece of shared state. Callbacks
//! and tasks only touch that state; the cascade render and the host hook
//! bring the tree back in line with it.

use crate::config::Config;
use crate::logger::Logger;
use crate::resources::ResourceBundle;
use crate::tasks::TaskRegistry;
use crate::ui::app::App;
use crate::ui::components::{
    ActivityIndicator, Button, DatePicker, Label, PageControl, Panel, PickerView, ProgressView, SegmentedControl,
    SingleItemTable, Stepper, Switch, TextField, TextView, WebView,
};
use crate::ui::core::{Control, Interactive, NodeId, View, ViewTree};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Sites offered by the "sites" table: title and address
pub const SITES: [(&str, &str); 3] = [
    ("Rust", "https://www.rust-lang.org"),
    ("Crates", "https://crates.io"),
    ("Docs", "https://docs.rs"),
];

/// Extra rows after [`SITES`]: a bundled page and an inline fragment
const EXTRA_ROWS: [&str; 2] = ["Bundled page", "Fragment"];

const BUNDLED_PAGE: &str = "welcome";

const SAMPLE_FRAGMENT: &str = "<html><head><title>Local fragment</title></head><body>Hello</body></html>";

#[derive(Debug, Default)]
struct DemoState {
    light: bool,
    lever: bool,
    counter: f64,
    section: Option<usize>,
    page: usize,
    flavor: Option<usize>,
    name: String,
    site: Option<usize>,
    shown_site: Option<usize>,
    web_url: String,
    web_title: String,
}

impl DemoState {
    fn limit(&self) -> f64 {
        if self.light {
            10.0
        } else {
            5.0
        }
    }
}

/// Build the demo tree, its task registry and the host app around them
pub fn build_app(config: &Config, logger: Logger) -> App {
    let state = Rc::new(RefCell::new(DemoState::default()));
    let bundle = ResourceBundle::from_config(&config.resources);

    let (mut tree, window) = ViewTree::with_window();
    let root = tree.insert(Panel::new("controls").with_title("slamui demo"));
    tree.attach(window, root);

    add_switches(&mut tree, root, &state);
    add_counters(&mut tree, root, &state);
    add_choices(&mut tree, root, &state);
    add_text(&mut tree, root, &state, bundle.clone());
    add_web(&mut tree, root, &state, bundle);

    let mut app = App::new(tree, root, build_registry(&state), logger, config.ui.clone());
    let hook_state = Rc::clone(&state);
    let web_suffix = config.resources.web_suffix.clone();
    app.after_interaction(move |tree, root| navigate_if_needed(tree, root, &hook_state, &web_suffix));
    app
}

fn build_registry(state: &Rc<RefCell<DemoState>>) -> TaskRegistry {
    let mut registry = TaskRegistry::new();

    let flip_state = Rc::clone(state);
    registry.add_task("flip", move |_| {
        let mut state = flip_state.borrow_mut();
        state.light = !state.light;
        let limit = state.limit();
        state.counter = state.counter.min(limit);
        info!("Light is now {}", if state.light { "on" } else { "off" });
    });

    let reset_state = Rc::clone(state);
    registry.add_task("reset", move |what| {
        let mut state = reset_state.borrow_mut();
        match what {
            "counter" => state.counter = 0.0,
            "name" => state.name.clear(),
            _ => info!("Nothing to reset for '{what}'"),
        }
    });

    registry
}

fn add_switches(tree: &mut ViewTree, root: NodeId, state: &Rc<RefCell<DemoState>>) {
    let mut light = Label::new("light");
    let s = Rc::clone(state);
    light.set_text_data_source(move || {
        let text = if s.borrow().light { "Light On" } else { "Light Off" };
        text.to_string()
    });
    tree.add_child(root, light);

    let mut flip = Button::new("flip").with_title("Flip");
    flip.handler_mut().set_task("flip", "");
    flip.handler_mut().set_auto_ui(true);
    tree.add_child(root, flip);

    let mut knob = Switch::new("knob");
    let s = Rc::clone(state);
    knob.control_mut().set_enable_data_source(move || s.borrow().light);
    let s = Rc::clone(state);
    knob.set_switch_data_source(move || s.borrow().lever);
    let s = Rc::clone(state);
    knob.handler_mut().on_press(move |value| {
        s.borrow_mut().lever = value.as_flag().unwrap_or_default();
    });
    knob.handler_mut().set_auto_ui(true);
    tree.add_child(root, knob);

    let mut lever = Label::new("lever");
    let s = Rc::clone(state);
    lever.set_text_data_source(move || {
        let state = s.borrow();
        let text = match (state.light, state.lever) {
            (false, _) => "Lever disabled",
            (true, true) => "Lever Open",
            (true, false) => "Lever Closed",
        };
        text.to_string()
    });
    tree.add_child(root, lever);

    let mut act = ActivityIndicator::new("act");
    let s = Rc::clone(state);
    act.base_mut().set_visible_data_source(move || s.borrow().light);
    let s = Rc::clone(state);
    act.set_animating_data_source(move || {
        let state = s.borrow();
        state.light && state.lever
    });
    tree.add_child(root, act);
}

fn add_counters(tree: &mut ViewTree, root: NodeId, state: &Rc<RefCell<DemoState>>) {
    let mut count = Label::new("count");
    let s = Rc::clone(state);
    count.set_text_data_source(move || {
        let state = s.borrow();
        format!("Count: {} of {}", state.counter, state.limit())
    });
    tree.add_child(root, count);

    let mut step = Stepper::new("step");
    let s = Rc::clone(state);
    step.set_max_value_data_source(move || s.borrow().limit());
    let s = Rc::clone(state);
    step.set_value_data_source(move || s.borrow().counter);
    let s = Rc::clone(state);
    step.handler_mut().on_press(move |value| {
        s.borrow_mut().counter = value.as_number().unwrap_or_default();
    });
    step.handler_mut().set_auto_ui(true);
    tree.add_child(root, step);

    let mut prog = ProgressView::new("prog");
    let s = Rc::clone(state);
    prog.set_progress_data_source(move || {
        let state = s.borrow();
        state.counter / state.limit()
    });
    tree.add_child(root, prog);

    let mut zero = Button::new("zero").with_title("Zero");
    let s = Rc::clone(state);
    zero.control_mut().set_enable_data_source(move || s.borrow().counter > 0.0);
    zero.handler_mut().set_task("reset", "counter");
    zero.handler_mut().set_auto_ui(true);
    tree.add_child(root, zero);
}

fn add_choices(tree: &mut ViewTree, root: NodeId, state: &Rc<RefCell<DemoState>>) {
    let mut seg = SegmentedControl::new("seg");
    let s = Rc::clone(state);
    seg.set_label_array_data_source(move || {
        let labels: &[&str] = if s.borrow().light {
            &["One", "Two", "Three", "Four"]
        } else {
            &["Alpha", "Beta", "Charlie"]
        };
        labels.iter().map(|label| label.to_string()).collect()
    });
    let s = Rc::clone(state);
    seg.set_current_segment_data_source(move || s.borrow().section);
    let s = Rc::clone(state);
    seg.handler_mut().on_press(move |value| {
        s.borrow_mut().section = value.as_index();
    });
    seg.handler_mut().set_auto_ui(true);
    tree.add_child(root, seg);

    let mut segcount = Label::new("segcount");
    let s = Rc::clone(state);
    segcount.set_text_data_source(move || match s.borrow().section {
        Some(section) => format!("Section {}", section + 1),
        None => "No section".to_string(),
    });
    tree.add_child(root, segcount);

    let mut pages = PageControl::new("pages");
    let s = Rc::clone(state);
    pages.set_max_page_data_source(move || if s.borrow().light { 4 } else { 3 });
    let s = Rc::clone(state);
    pages.set_current_page_data_source(move || s.borrow().page);
    let s = Rc::clone(state);
    pages.handler_mut().on_press(move |value| {
        s.borrow_mut().page = value.as_index().unwrap_or_default();
    });
    pages.handler_mut().set_auto_ui(true);
    tree.add_child(root, pages);

    let mut flavors = PickerView::new("flavor");
    flavors.set_labels_data_source(|| ["Vanilla", "Chocolate", "Strawberry"].map(String::from).to_vec());
    let s = Rc::clone(state);
    flavors.set_selected_row_data_source(move || s.borrow().flavor);
    let s = Rc::clone(state);
    flavors.handler_mut().on_press(move |value| {
        s.borrow_mut().flavor = value.as_index();
    });
    tree.add_child(root, flavors);

    tree.add_child(root, DatePicker::new("date"));
}

fn add_text(tree: &mut ViewTree, root: NodeId, state: &Rc<RefCell<DemoState>>, bundle: ResourceBundle) {
    let mut name = TextField::new("name").with_placeholder("your name");
    let s = Rc::clone(state);
    name.set_text_data_source(move || s.borrow().name.clone());
    let s = Rc::clone(state);
    name.handler_mut().on_press(move |value| {
        s.borrow_mut().name = value.as_text().unwrap_or_default().to_string();
    });
    name.handler_mut().set_auto_ui(true);
    tree.add_child(root, name);

    let mut greeting = Label::new("greeting");
    let s = Rc::clone(state);
    greeting.set_text_data_source(move || match s.borrow().name.as_str() {
        "" => "Hello, stranger".to_string(),
        name => format!("Hello, {name}"),
    });
    tree.add_child(root, greeting);

    let mut clear = Button::new("clear").with_title("Clear name");
    let s = Rc::clone(state);
    clear.control_mut().set_enable_data_source(move || !s.borrow().name.is_empty());
    clear.handler_mut().set_task("reset", "name");
    clear.handler_mut().set_auto_ui(true);
    tree.add_child(root, clear);

    let mut about = TextView::new("about").with_bundle(bundle);
    about.set_text_file_data_source(|| "about".to_string());
    tree.add_child(root, about);
}

fn add_web(tree: &mut ViewTree, root: NodeId, state: &Rc<RefCell<DemoState>>, bundle: ResourceBundle) {
    let mut sites = SingleItemTable::new("sites");
    sites.set_items_data_source(
        || SITES.len() + EXTRA_ROWS.len(),
        |row| match SITES.get(row) {
            Some((title, _)) => title.to_string(),
            None => EXTRA_ROWS.get(row - SITES.len()).copied().unwrap_or_default().to_string(),
        },
    );
    let s = Rc::clone(state);
    sites.set_selected_data_source(move || s.borrow().site);
    let s = Rc::clone(state);
    sites.on_select(move |value| {
        s.borrow_mut().site = value.as_index();
    });
    sites.set_select_ui(true);
    tree.add_child(root, sites);

    let mut title = Label::new("webtitle");
    let s = Rc::clone(state);
    title.set_text_data_source(move || match s.borrow().web_title.as_str() {
        "" => String::new(),
        title => format!("Title: {title}"),
    });
    tree.add_child(root, title);

    let mut url = Label::new("weburl");
    let s = Rc::clone(state);
    url.set_text_data_source(move || match s.borrow().web_url.as_str() {
        "" => String::new(),
        url => format!("URL: {url}"),
    });
    tree.add_child(root, url);

    let mut web = WebView::new("web").with_bundle(bundle);
    web.on_url_change(|| info!("Web address changed"));
    web.on_title_change(|| info!("Web title changed"));
    tree.add_child(root, web);
}

/// Load the site picked in the table once the tree is free again
fn navigate_if_needed(tree: &mut ViewTree, root: NodeId, state: &Rc<RefCell<DemoState>>, web_suffix: &str) {
    let site = state.borrow().site;
    if site == state.borrow().shown_site {
        return;
    }
    state.borrow_mut().shown_site = site;

    let mut observed = (String::new(), String::new());
    tree.with_element::<WebView>(root, "web", |web| {
        match site {
            Some(row) if row < SITES.len() => web.show_site(SITES[row].1),
            Some(row) if row == SITES.len() => web.show_file(BUNDLED_PAGE, web_suffix),
            Some(_) => web.show_fragment(SAMPLE_FRAGMENT),
            None => web.clear_site(),
        }
        observed = (web.web_url(), web.web_title());
    });

    {
        let mut state = state.borrow_mut();
        state.web_url = observed.0;
        state.web_title = observed.1;
    }
    tree.update_ui(root);
}

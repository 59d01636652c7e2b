//! Web content view.
//!
//! Rendering and navigation belong to a [`WebEngine`]. The view only loads
//! content into the engine and, after every navigation lifecycle event,
//! compares the engine's URL and title with what it last observed. The
//! `url_event` and `title_event` callbacks fire only when those change.

use crate::constants::{BLANK_PAGE, DEFAULT_WEB_SUFFIX};
use crate::resources::ResourceBundle;
use crate::ui::core::view::EventClosure;
use crate::ui::core::{Bindable, View, ViewBase, WidgetKind};
use crate::view_capabilities;
use log::{debug, warn};
use std::path::Path;

/// Navigation lifecycle reported by a [`WebEngine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    StartProvisional,
    Commit,
    Finish,
    Fail(String),
    FailProvisional(String),
}

/// Browser backing a [`WebView`]
pub trait WebEngine {
    /// Navigate to an absolute address
    fn load_request(&mut self, address: &str);

    /// Navigate to a local file
    fn load_file(&mut self, path: &Path);

    /// Display an inline markup fragment
    fn load_html(&mut self, html: &str);

    /// Address of the current page, if any
    fn url(&self) -> Option<String>;

    /// Title of the current page, if any
    fn title(&self) -> Option<String>;

    /// Lifecycle events produced since the last call
    fn take_events(&mut self) -> Vec<NavigationEvent>;
}

/// Engine that completes every navigation immediately without fetching.
///
/// Remote pages have no title. Files and fragments take their title from
/// the first `<title>` element. A file that cannot be read fails the
/// provisional navigation and leaves the current page in place.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    url: Option<String>,
    title: Option<String>,
    events: Vec<NavigationEvent>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn navigate(&mut self, url: String, title: Option<String>) {
        self.events.push(NavigationEvent::StartProvisional);
        self.url = Some(url);
        self.title = title;
        self.events.push(NavigationEvent::Commit);
        self.events.push(NavigationEvent::Finish);
    }
}

/// Text of the first `<title>` element, trimmed
pub fn extract_title(html: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let open = lower.find("<title")?;
    let start = open + lower[open..].find('>')? + 1;
    let end = start + lower[start..].find("</title")?;
    let title = html[start..end].trim();
    (!title.is_empty()).then(|| title.to_string())
}

impl WebEngine for HeadlessEngine {
    fn load_request(&mut self, address: &str) {
        self.navigate(address.to_string(), None);
    }

    fn load_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(html) => self.navigate(format!("file://{}", path.display()), extract_title(&html)),
            Err(e) => {
                self.events.push(NavigationEvent::StartProvisional);
                self.events.push(NavigationEvent::FailProvisional(e.to_string()));
            }
        }
    }

    fn load_html(&mut self, html: &str) {
        self.navigate(BLANK_PAGE.to_string(), extract_title(html));
    }

    fn url(&self) -> Option<String> {
        self.url.clone()
    }

    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn take_events(&mut self) -> Vec<NavigationEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Whether `address` looks like an absolute URL: a scheme, a colon and a
/// non-empty remainder without whitespace
fn is_absolute_address(address: &str) -> bool {
    let Some((scheme, rest)) = address.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let scheme_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    scheme_ok && !rest.is_empty() && !address.chars().any(char::is_whitespace)
}

pub struct WebView {
    base: ViewBase,
    engine: Box<dyn WebEngine>,
    bundle: ResourceBundle,
    current_url: String,
    current_title: String,
    url_event: Option<EventClosure>,
    title_event: Option<EventClosure>,
}

impl WebView {
    /// Web view backed by a [`HeadlessEngine`]
    pub fn new(referral: impl Into<String>) -> Self {
        Self::with_engine(referral, Box::new(HeadlessEngine::new()))
    }

    pub fn with_engine(referral: impl Into<String>, engine: Box<dyn WebEngine>) -> Self {
        Self {
            base: ViewBase::new(referral),
            engine,
            bundle: ResourceBundle::default(),
            current_url: String::new(),
            current_title: String::new(),
            url_event: None,
            title_event: None,
        }
    }

    pub fn with_bundle(mut self, bundle: ResourceBundle) -> Self {
        self.bundle = bundle;
        self
    }

    /// URL as last observed, empty for the blank page
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Title as last observed
    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Engine URL right now, with the blank page reported as empty
    pub fn web_url(&self) -> String {
        match self.engine.url() {
            Some(url) if url != BLANK_PAGE => url,
            _ => String::new(),
        }
    }

    /// Engine title right now, empty when there is none
    pub fn web_title(&self) -> String {
        self.engine.title().unwrap_or_default()
    }

    pub fn on_url_change(&mut self, event: impl Fn() + 'static) {
        self.url_event = Some(Box::new(event));
    }

    pub fn on_title_change(&mut self, event: impl Fn() + 'static) {
        self.title_event = Some(Box::new(event));
    }

    /// Navigate to an absolute address. Unparsable addresses are ignored.
    pub fn show_site(&mut self, address: &str) {
        if !is_absolute_address(address) {
            debug!("Ignoring invalid address '{address}' for '{}'", self.base.referral());
            return;
        }

        self.engine.load_request(address);
        self.pump_events();
    }

    /// Load the bundled file `<name>.<suffix>`; missing files are ignored
    pub fn show_file(&mut self, name: &str, suffix: &str) {
        let suffix = if suffix.is_empty() { DEFAULT_WEB_SUFFIX } else { suffix };
        let Some(path) = self.bundle.path_for(name, suffix) else {
            warn!("Resource '{name}.{suffix}' not found in bundle");
            return;
        };

        self.engine.load_file(&path);
        self.pump_events();
    }

    pub fn show_fragment(&mut self, html: &str) {
        self.engine.load_html(html);
        self.pump_events();
    }

    /// Forget the tracked URL and title and show the blank page
    pub fn clear_site(&mut self) {
        self.current_url.clear();
        self.current_title.clear();
        self.show_site(BLANK_PAGE);
    }

    /// React to a lifecycle event from the engine
    pub fn navigation_event(&mut self, event: &NavigationEvent) {
        if let NavigationEvent::Fail(reason) | NavigationEvent::FailProvisional(reason) = event {
            debug!("Navigation failed in '{}': {reason}", self.base.referral());
        }
        self.check_web_status();
    }

    fn pump_events(&mut self) {
        for event in self.engine.take_events() {
            self.navigation_event(&event);
        }
    }

    fn check_web_status(&mut self) {
        let url = self.web_url();
        if self.current_url != url {
            self.current_url = url;
            if let Some(event) = &self.url_event {
                event();
            }
        }

        let title = self.web_title();
        if self.current_title != title {
            self.current_title = title;
            if let Some(event) = &self.title_event {
                event();
            }
        }
    }
}

impl View for WebView {
    fn kind(&self) -> WidgetKind {
        WidgetKind::WebView
    }

    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn native_writes(&self) -> u64 {
        self.base.writes()
    }

    fn summary(&self) -> String {
        match (self.current_title.is_empty(), self.current_url.is_empty()) {
            (false, _) => format!("{} <{}>", self.current_title, self.current_url),
            (true, false) => format!("<{}>", self.current_url),
            (true, true) => BLANK_PAGE.to_string(),
        }
    }

    view_capabilities!(bindable);
}

impl Bindable for WebView {
    fn fill_ui(&mut self) {}
}

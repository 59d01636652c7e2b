use slamui::resources::ResourceBundle;
use slamui::ui::components::{NavigationEvent, WebEngine, WebView};
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

fn counting(web: &mut WebView) -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let urls = Rc::new(Cell::new(0));
    let titles = Rc::new(Cell::new(0));
    let u = Rc::clone(&urls);
    web.on_url_change(move || u.set(u.get() + 1));
    let t = Rc::clone(&titles);
    web.on_title_change(move || t.set(t.get() + 1));
    (urls, titles)
}

#[test]
fn test_same_address_twice_fires_once() {
    let mut web = WebView::new("web");
    let (urls, _) = counting(&mut web);

    web.show_site("https://example.com");
    web.show_site("https://example.com");

    assert_eq!(urls.get(), 1);
    assert_eq!(web.current_url(), "https://example.com");
    assert_eq!(web.web_url(), "https://example.com");
}

#[test]
fn test_new_address_fires_again() {
    let mut web = WebView::new("web");
    let (urls, _) = counting(&mut web);

    web.show_site("https://example.com");
    web.show_site("https://example.org");

    assert_eq!(urls.get(), 2);
}

#[test]
fn test_invalid_address_is_ignored() {
    let mut web = WebView::new("web");
    let (urls, _) = counting(&mut web);

    web.show_site("not a url");
    web.show_site("");

    assert_eq!(urls.get(), 0);
    assert_eq!(web.web_url(), "");
}

#[test]
fn test_fragment_sets_title_and_blank_url() {
    let mut web = WebView::new("web");
    let (urls, titles) = counting(&mut web);

    web.show_fragment("<html><head><title>Inline</title></head></html>");

    assert_eq!(web.web_title(), "Inline");
    assert_eq!(web.current_title(), "Inline");
    assert_eq!(web.web_url(), "");
    assert_eq!(urls.get(), 0);
    assert_eq!(titles.get(), 1);
}

#[test]
fn test_clear_site_resets_tracking() {
    let mut web = WebView::new("web");
    web.show_fragment("<title>Page</title>");
    web.show_site("https://example.com");
    let (urls, _) = counting(&mut web);

    web.clear_site();

    assert_eq!(web.current_url(), "");
    assert_eq!(web.current_title(), "");
    assert_eq!(web.web_url(), "");
    // Tracking was reset to the blank values before navigating
    assert_eq!(urls.get(), 0);
}

#[test]
fn test_show_file_from_bundle() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("help.html"), "<title>Help</title>").unwrap();
    let mut web = WebView::new("web").with_bundle(ResourceBundle::new(dir.path()));
    let (urls, titles) = counting(&mut web);

    web.show_file("help", "html");

    assert!(web.web_url().starts_with("file://"));
    assert!(web.web_url().ends_with("help.html"));
    assert_eq!(web.web_title(), "Help");
    assert_eq!((urls.get(), titles.get()), (1, 1));
}

#[test]
fn test_missing_file_is_ignored() {
    let dir = TempDir::new().unwrap();
    let mut web = WebView::new("web").with_bundle(ResourceBundle::new(dir.path()));
    let (urls, _) = counting(&mut web);

    web.show_file("absent", "html");

    assert_eq!(urls.get(), 0);
    assert_eq!(web.web_url(), "");
}

/// Engine whose address and title are set by the test
#[derive(Default)]
struct ScriptedEngine {
    url: Rc<std::cell::RefCell<Option<String>>>,
}

impl WebEngine for ScriptedEngine {
    fn load_request(&mut self, _address: &str) {}

    fn load_file(&mut self, _path: &Path) {}

    fn load_html(&mut self, _html: &str) {}

    fn url(&self) -> Option<String> {
        self.url.borrow().clone()
    }

    fn title(&self) -> Option<String> {
        None
    }

    fn take_events(&mut self) -> Vec<NavigationEvent> {
        Vec::new()
    }
}

#[test]
fn test_every_lifecycle_event_rechecks_status() {
    let url = Rc::new(std::cell::RefCell::new(None));
    let engine = ScriptedEngine { url: Rc::clone(&url) };
    let mut web = WebView::with_engine("web", Box::new(engine));
    let (urls, _) = counting(&mut web);

    *url.borrow_mut() = Some("https://a.example".to_string());
    web.navigation_event(&NavigationEvent::StartProvisional);
    web.navigation_event(&NavigationEvent::Commit);
    assert_eq!(urls.get(), 1);

    *url.borrow_mut() = Some("https://b.example".to_string());
    web.navigation_event(&NavigationEvent::Fail("timeout".to_string()));
    assert_eq!(urls.get(), 2);

    *url.borrow_mut() = Some("about:blank".to_string());
    web.navigation_event(&NavigationEvent::FailProvisional("offline".to_string()));
    assert_eq!(urls.get(), 3);
    assert_eq!(web.current_url(), "");
}

//! End-to-end behavior of the composed app against a demo portfolio page.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use folio_core::platform::{OfflineCache, Platform, PrintDialog, ShareOutcome, SharePlatform, Unsupported};
use folio_core::settings::MemorySettings;
use folio_core::{AppConfig, ScrollConfig};
use folio_ui::event::{Key, PageEvent};
use folio_ui::page::{Element, Page, Viewport};
use folio_ui::App;

struct RecordingOffline {
    registered: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl OfflineCache for RecordingOffline {
    fn register(&mut self, script: &str) -> Result<(), String> {
        self.registered.lock().unwrap().push(script.to_string());
        Ok(())
    }
}

struct CountingPrinter(std::sync::Arc<std::sync::Mutex<usize>>);

impl PrintDialog for CountingPrinter {
    fn open(&mut self) {
        *self.0.lock().unwrap() += 1;
    }
}

struct AlwaysShares;

impl SharePlatform for AlwaysShares {
    fn share(&mut self, _title: &str, _url: &Url) -> ShareOutcome {
        ShareOutcome::Shared
    }
}

fn demo_page(scroll: ScrollConfig) -> Page {
    let mut page = Page::new(
        "Folio",
        Url::parse("http://localhost:8080/").unwrap(),
        Viewport {
            width: 1280.0,
            height: 800.0,
        },
    )
    .with_content_height(3600.0)
    .with_scroll_config(scroll);

    page.append(
        Element::new("nav")
            .with_id("nav")
            .with_class("nav")
            .with_geometry(0.0, 64.0),
    );
    page.append(Element::new("div").with_id("menuToggle"));
    page.append(Element::new("div").with_class("nav-links"));
    page.append(
        Element::new("a")
            .with_class("nav-link")
            .with_attr("href", "#hero"),
    );
    page.append(
        Element::new("a")
            .with_class("nav-link")
            .with_attr("href", "#resume"),
    );
    page.append(
        Element::new("a")
            .with_class("nav-link")
            .with_attr("href", "#contact"),
    );

    page.append(Element::new("section").with_id("hero").with_geometry(0.0, 800.0));
    page.append(
        Element::new("section")
            .with_id("resume")
            .with_geometry(800.0, 1000.0),
    );
    page.append(
        Element::new("section")
            .with_id("contact")
            .with_geometry(1800.0, 800.0),
    );

    page.append(Element::new("div").with_id("toast"));
    page.append(
        Element::new("button")
            .with_id("printBtn")
            .with_class("action-btn"),
    );
    page.append(
        Element::new("button")
            .with_id("shareBtn")
            .with_class("action-btn"),
    );
    page.append(Element::new("a").with_class("download-btn"));
    page.append(Element::new("div").with_class("hero-background").with_geometry(0.0, 800.0));
    page.append(Element::new("div").with_class("scroll-indicator").with_geometry(700.0, 40.0));
    page.append(
        Element::new("h2")
            .with_class("section-header")
            .with_geometry(820.0, 60.0),
    );
    page.append(
        Element::new("div")
            .with_class("resume-viewer")
            .with_geometry(900.0, 700.0),
    );
    page.append(
        Element::new("div")
            .with_class("contact-card")
            .with_geometry(1850.0, 300.0),
    );
    page
}

fn instant_scroll() -> ScrollConfig {
    ScrollConfig {
        smooth_enabled: false,
        ..Default::default()
    }
}

fn build_app(scroll: ScrollConfig) -> (App, std::sync::Arc<std::sync::Mutex<Vec<String>>>) {
    let registered = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let platform = Platform {
        share: Box::new(AlwaysShares),
        clipboard: Box::new(Unsupported),
        printer: Box::new(CountingPrinter(Default::default())),
        offline: Box::new(RecordingOffline {
            registered: registered.clone(),
        }),
    };
    let app = App::new(
        demo_page(scroll),
        Arc::new(AppConfig::default()),
        platform,
        Box::new(MemorySettings::new()),
    );
    (app, registered)
}

fn toast_text(app: &App) -> String {
    let el = app.page().element_by_id("toast").unwrap();
    app.page().text(el).to_string()
}

#[test]
fn test_init_applies_theme_and_load_registers_offline_cache() {
    let (mut app, registered) = build_app(instant_scroll());
    app.init();

    assert_eq!(app.page().document_attr("data-theme"), Some("dark"));

    app.dispatch(&PageEvent::Loaded);
    assert_eq!(registered.lock().unwrap().as_slice(), ["/sw.js"]);
}

#[test]
fn test_scroll_direction_drives_nav_visibility() {
    let (mut app, _) = build_app(instant_scroll());
    app.init();
    let nav = app.page().element_by_id("nav").unwrap();

    app.user_scroll(400.0);
    assert!(app.page().has_class(nav, "hide"));

    app.user_scroll(300.0);
    assert!(!app.page().has_class(nav, "hide"));
}

#[test]
fn test_active_link_follows_visible_section() {
    let (mut app, _) = build_app(instant_scroll());
    app.init();

    app.user_scroll(900.0);
    let links = app.page().select_class("nav-link");
    let active: Vec<_> = links
        .iter()
        .filter(|l| app.page().has_class(**l, "active"))
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(app.page().attr(*active[0], "href"), Some("#resume"));
}

#[test]
fn test_anchor_click_scrolls_offset_while_indicator_does_not() {
    let (mut app, _) = build_app(instant_scroll());
    app.init();

    let anchor = app.page().select_class("nav-link")[1];
    app.dispatch(&PageEvent::Click { target: anchor });
    assert_eq!(app.page().scroll_y(), 800.0 - 64.0);

    let indicator = app.page().select_class("scroll-indicator")[0];
    app.dispatch(&PageEvent::Click { target: indicator });
    assert_eq!(app.page().scroll_y(), 800.0);
}

#[test]
fn test_smooth_anchor_scroll_animates_and_hides_nav() {
    let scroll = ScrollConfig {
        animation_duration_ms: 40,
        ..Default::default()
    };
    let (mut app, _) = build_app(scroll);
    app.init();

    let anchor = app.page().select_class("nav-link")[1];
    app.dispatch(&PageEvent::Click { target: anchor });
    assert!(app.page().is_scroll_animating());
    assert_eq!(app.page().scroll_y(), 0.0);

    for _ in 0..30 {
        app.tick();
        if !app.page().is_scroll_animating() {
            break;
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(app.page().scroll_y(), 736.0);
    // The animated movement was seen as ordinary downward scrolling
    let nav = app.page().element_by_id("nav").unwrap();
    assert!(app.page().has_class(nav, "hide"));
}

#[test]
fn test_menu_roundtrip_and_escape() {
    let (mut app, _) = build_app(instant_scroll());
    app.init();
    let toggle = app.page().element_by_id("menuToggle").unwrap();
    let container = app.page().select_class("nav-links")[0];

    app.dispatch(&PageEvent::Click { target: toggle });
    assert!(app.page().has_class(toggle, "active"));
    assert!(app.page().has_class(container, "active"));

    app.dispatch(&PageEvent::KeyDown { key: Key::Escape });
    assert!(!app.page().has_class(toggle, "active"));
    assert!(!app.page().has_class(container, "active"));
}

#[test]
fn test_keyboard_activates_focused_print_button() {
    let (mut app, _) = build_app(instant_scroll());
    app.init();
    let print_btn = app.page().element_by_id("printBtn").unwrap();
    app.page_mut().focus(Some(print_btn));

    app.dispatch(&PageEvent::KeyDown { key: Key::Enter });
    assert_eq!(toast_text(&app), "Opening print dialog...");
}

#[test]
fn test_share_click_reports_success() {
    let (mut app, _) = build_app(instant_scroll());
    app.init();
    let share_btn = app.page().element_by_id("shareBtn").unwrap();

    app.dispatch(&PageEvent::Click { target: share_btn });
    assert_eq!(toast_text(&app), "Shared successfully!");
}

#[test]
fn test_parallax_applies_on_frame() {
    let (mut app, _) = build_app(instant_scroll());
    app.init();
    let hero = app.page().select_class("hero-background")[0];

    app.user_scroll(200.0);
    assert_eq!(app.page().translate_y(hero), 0.0);
    app.tick();
    assert_eq!(app.page().translate_y(hero), 100.0);
}

#[test]
fn test_reveal_marks_blocks_as_they_enter() {
    let (mut app, _) = build_app(instant_scroll());
    app.init();
    let card = app.page().select_class("contact-card")[0];
    assert!(!app.page().has_class(card, "fade-in"));

    app.user_scroll(1400.0);
    assert!(app.page().has_class(card, "fade-in"));
}

#[test]
fn test_cursor_follower_present_on_desktop_page() {
    let (mut app, _) = build_app(instant_scroll());
    app.init();

    let followers = app.page().select_class("custom-cursor");
    assert_eq!(followers.len(), 1);
    let follower = followers[0];
    assert!(!app.page().is_visible(follower));

    app.dispatch(&PageEvent::PointerMove { x: 10.0, y: 20.0 });
    assert!(app.page().is_visible(follower));
    assert_eq!(app.page().position(follower), (10.0, 20.0));
}

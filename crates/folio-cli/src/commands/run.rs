use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use folio_core::settings::JsonFileSettings;
use folio_core::AppConfig;
use folio_ui::event::{Key, PageEvent};
use folio_ui::page::ElementId;
use folio_ui::scroll::ScrollConfigExt;
use folio_ui::App;

use crate::demo;
use crate::platform;
use crate::scenario::{Scenario, Step};

pub async fn run(config: Arc<AppConfig>, scenario: Scenario) -> Result<()> {
    let page = demo::build_page(&config)?;
    let settings = JsonFileSettings::open(AppConfig::settings_path());
    let mut app = App::new(page, config.clone(), platform::desktop(), Box::new(settings));
    app.init();

    info!("Replaying scenario: {}", scenario.title);
    let tick = config.scroll.animation_tick_duration();

    for step in &scenario.steps {
        if let Step::Wait { ms } = step {
            wait_ticking(&mut app, Duration::from_millis(*ms), tick).await;
            continue;
        }

        apply(&mut app, step);

        // Let any scroll animation the step started play out
        while app.page().is_scroll_animating() {
            tokio::time::sleep(tick).await;
            app.tick();
        }
        app.tick();
    }

    summarize(&app);
    Ok(())
}

async fn wait_ticking(app: &mut App, total: Duration, tick: Duration) {
    let deadline = tokio::time::Instant::now() + total;
    while tokio::time::Instant::now() < deadline {
        tokio::time::sleep(tick).await;
        app.tick();
    }
}

fn apply(app: &mut App, step: &Step) {
    match step {
        Step::Load => app.dispatch(&PageEvent::Loaded),
        Step::Scroll { y } => app.user_scroll(*y),
        Step::Click { id, class } => match resolve(app, id.as_deref(), class.as_deref()) {
            Some(target) => app.dispatch(&PageEvent::Click { target }),
            None => warn!("Click target not found: id={:?} class={:?}", id, class),
        },
        Step::Key { key } => app.dispatch(&PageEvent::KeyDown {
            key: parse_key(key),
        }),
        Step::Pointer { x, y } => app.dispatch(&PageEvent::PointerMove { x: *x, y: *y }),
        Step::PointerGone => app.dispatch(&PageEvent::PointerGone),
        Step::Wait { .. } => {}
    }
}

fn resolve(app: &App, id: Option<&str>, class: Option<&str>) -> Option<ElementId> {
    if let Some(id) = id {
        return app.page().element_by_id(id);
    }
    class.and_then(|c| app.page().select_class(c).first().copied())
}

fn parse_key(key: &str) -> Key {
    match key {
        "escape" => Key::Escape,
        "enter" => Key::Enter,
        "space" => Key::Space,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => {
                    warn!("Unrecognized key name: {}", key);
                    Key::Other
                }
            }
        }
    }
}

fn summarize(app: &App) {
    let page = app.page();
    println!("scroll offset: {:.0}", page.scroll_y());
    if let Some(nav) = page.element_by_id("nav") {
        println!("nav hidden: {}", page.has_class(nav, "hide"));
    }
    let active = page
        .select_class("nav-link")
        .into_iter()
        .find(|l| page.has_class(*l, "active"));
    println!(
        "active link: {}",
        active
            .and_then(|l| page.attr(l, "href"))
            .unwrap_or("none")
    );
    println!("menu: {:?}", app.navigation().menu_state());
    if let Some(toast) = page.element_by_id("toast") {
        println!(
            "toast: {:?} (visible: {})",
            page.text(toast),
            page.has_class(toast, "show")
        );
    }
    println!(
        "theme: {}",
        page.document_attr("data-theme").unwrap_or("unset")
    );
}

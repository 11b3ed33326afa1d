//! The demo portfolio page the harness drives.

use anyhow::Result;
use url::Url;

use folio_core::AppConfig;
use folio_ui::page::{Element, Page, Viewport};

pub fn build_page(config: &AppConfig) -> Result<Page> {
    let url = Url::parse("http://localhost:8080/")?;
    let mut page = Page::new(
        "Folio — Portfolio",
        url,
        Viewport {
            width: 1280.0,
            height: 800.0,
        },
    )
    .with_content_height(3600.0)
    .with_scroll_config(config.scroll);

    // Fixed top bar
    page.append(
        Element::new("nav")
            .with_id("nav")
            .with_class("nav")
            .with_geometry(0.0, 64.0),
    );
    page.append(Element::new("div").with_id("menuToggle"));
    page.append(Element::new("div").with_class("nav-links"));
    for (href, label) in [
        ("#hero", "Home"),
        ("#resume", "Resume"),
        ("#contact", "Contact"),
    ] {
        page.append(
            Element::new("a")
                .with_class("nav-link")
                .with_attr("href", href)
                .with_text(label),
        );
    }

    // Page sections
    page.append(Element::new("section").with_id("hero").with_geometry(0.0, 800.0));
    page.append(
        Element::new("section")
            .with_id("resume")
            .with_geometry(800.0, 1600.0),
    );
    page.append(
        Element::new("section")
            .with_id("contact")
            .with_geometry(2400.0, 1200.0),
    );

    // Hero extras
    page.append(
        Element::new("div")
            .with_class("hero-background")
            .with_geometry(0.0, 800.0),
    );
    page.append(
        Element::new("div")
            .with_class("scroll-indicator")
            .with_geometry(720.0, 40.0),
    );

    // Resume viewer and its actions
    page.append(
        Element::new("h2")
            .with_class("section-header")
            .with_geometry(820.0, 60.0)
            .with_text("Resume"),
    );
    page.append(
        Element::new("div")
            .with_class("resume-viewer")
            .with_geometry(900.0, 1200.0),
    );
    page.append(
        Element::new("button")
            .with_id("printBtn")
            .with_class("action-btn")
            .with_text("Print"),
    );
    page.append(
        Element::new("button")
            .with_id("shareBtn")
            .with_class("action-btn")
            .with_text("Share"),
    );
    page.append(
        Element::new("a")
            .with_class("download-btn")
            .with_attr("href", "/resume.pdf")
            .with_text("Download"),
    );

    // Contact section
    page.append(
        Element::new("h2")
            .with_class("section-header")
            .with_geometry(2420.0, 60.0)
            .with_text("Contact"),
    );
    page.append(
        Element::new("div")
            .with_class("contact-card")
            .with_geometry(2500.0, 300.0),
    );

    // Toast display
    page.append(Element::new("div").with_id("toast"));

    Ok(page)
}

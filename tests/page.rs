// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! Drives a complete page load through the public API.

use std::sync::Once;

use ecard::{
    BusinessProfile, ControlId, DeferredTask, Effect, Event, MemorySurface, Navigator, Page,
    PageConfig, Tier, surface::OPEN_CLASS,
};
use url::Url;

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

#[derive(Debug, Default)]
struct Browser {
    popups_blocked: bool,
    location: Vec<String>,
    popups: Vec<String>,
    downloads: Vec<String>,
}

impl Navigator for Browser {
    fn navigate(&mut self, href: &str) {
        self.location.push(href.to_owned());
    }

    fn open_new_context(&mut self, href: &str) -> bool {
        if self.popups_blocked {
            return false;
        }
        self.popups.push(href.to_owned());
        true
    }

    fn download(&mut self, href: &str, file_name: &str) {
        self.downloads.push(format!("{file_name} <- {href}"));
    }
}

const PROFILE: &str = r#"{
    "fullName": "Jane Doe",
    "company": "Doe & Co",
    "phoneTel": "555-123-4567",
    "textPrefill": "Hi Jane, I found your card",
    "email": "jane@example.com",
    "website": "example.com",
    "bookingLink": "cal.example.com/jane",
    "eliteCtaLabel": "Free estimate",
    "eliteCtaUrl": "example.com/estimate"
}"#;

const CONFIG: &str = r#"{
    "navigationMode": "forced",
    "userAgent": "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X)"
}"#;

#[test]
fn in_app_browser_session() -> anyhow::Result<()> {
    init_tracing();

    let profile = BusinessProfile::from_json_str(PROFILE)?;
    let config = PageConfig::from_json_str(CONFIG)?;
    let mut page = Page::from_href(
        MemorySurface::with_all_controls(),
        profile,
        config,
        "https://card.example.com/jane#?tier=pro",
    )?;
    let mut browser = Browser {
        popups_blocked: true,
        ..Default::default()
    };

    page.handle(Event::DocumentReady, &mut browser);
    assert_eq!(Tier::Pro, page.tier());
    let text_btn = page.surface().get(ControlId::TextBtn).unwrap();
    assert_eq!(
        Some("sms:5551234567&body=Hi%20Jane%2C%20I%20found%20your%20card"),
        text_btn.href()
    );

    // Blocked popups fall back to navigating in place.
    let effects = page.handle(Event::Click(ControlId::BookBtn), &mut browser);
    assert_eq!(vec![Effect::PreventDefault], effects);
    assert_eq!(vec!["https://cal.example.com/jane"], browser.location);
    assert!(browser.popups.is_empty());

    // Upgrade via the hash and use the elite call-to-action.
    page.handle(
        Event::HashChanged(Url::parse("https://card.example.com/jane#elite")?),
        &mut browser,
    );
    assert_eq!(Tier::Elite, page.tier());
    browser.popups_blocked = false;
    page.handle(Event::Click(ControlId::EliteCtaBtn), &mut browser);
    assert_eq!(vec!["https://example.com/estimate"], browser.popups);

    // Download the QR code of the card.
    let effects = page.handle(Event::Click(ControlId::QrDownloadBtn), &mut browser);
    let [Effect::Schedule { task, .. }] = effects.as_slice() else {
        panic!("unexpected effects: {effects:?}");
    };
    assert_eq!(DeferredTask::ActivateDownload, *task);
    assert!(page.surface().get(ControlId::Overlay).unwrap().has_class(OPEN_CLASS));
    page.handle(Event::Timer(*task), &mut browser);
    assert_eq!(
        vec![
            "qr-code.png <- https://api.qrserver.com/v1/create-qr-code/?size=320x320&data=https%3A%2F%2Fcard.example.com%2Fjane"
        ],
        browser.downloads
    );

    page.handle(Event::Click(ControlId::Overlay), &mut browser);
    let surface = page.into_surface();
    assert_eq!("", surface.get(ControlId::SheetBody).unwrap().inner_html());
    assert!(!surface.get(ControlId::Sheet).unwrap().has_class(OPEN_CLASS));
    Ok(())
}

#[test]
fn starter_card_from_entries() {
    init_tracing();

    let profile = BusinessProfile::from_entries([
        ("fullName", "Sam Smith"),
        ("phoneTel", "REPLACE_PHONE"),
        ("email", "sam@example.com"),
    ]);
    let mut page = Page::new(
        MemorySurface::with_all_controls(),
        profile,
        PageConfig::default(),
        Url::parse("https://card.example.com/sam?tier=unknown").unwrap(),
    );
    let mut browser = Browser::default();
    page.handle(Event::DocumentReady, &mut browser);
    assert_eq!(Tier::Starter, page.tier());

    let surface = page.surface();
    assert!(surface.get(ControlId::CallBtn).unwrap().is_disabled());
    assert!(surface.get(ControlId::PhoneTile).unwrap().is_disabled());
    assert!(surface.get(ControlId::UtilityRow).unwrap().is_hidden());
    assert_eq!("sam@example.com", surface.get(ControlId::EmailLink).unwrap().text());

    // Nothing to call, and native links are not intercepted.
    assert!(page.handle(Event::Click(ControlId::PhoneTile), &mut browser).is_empty());
    assert!(page.handle(Event::Click(ControlId::EmailBtn), &mut browser).is_empty());
    assert!(browser.location.is_empty());
}

#![cfg(target_arch = "wasm32")]

use folio_core::config::FolioConfig;
use folio_core::menu::MenuState;
use folio_core::motion::MotionPreference;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Event, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit,
    Window,
};

use folio_web::{a11y, anchors, dom, menu, nav, parallax, reveal, sections};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const ROOT_ID: &str = "folio-fixture";

/// Enough for observers and animation frames to catch up with a scroll.
const SETTLE_MS: u32 = 200;

const FIXTURE: &str = r##"
<header class="nav-header">
  <button class="nav-toggle" aria-expanded="false">menu</button>
  <ul class="nav-menu">
    <li><a class="nav-link" href="#about">About</a></li>
    <li><a class="nav-link" href="#projects">Projects</a></li>
    <li><a class="nav-link" href="#missing">Missing</a></li>
  </ul>
</header>
<div id="elsewhere">outside</div>
<section class="hero" id="hero" style="height: 600px">
  <div class="blob"></div><div class="blob"></div><div class="blob"></div>
</section>
<section id="about"><div class="timeline-item"></div><div class="timeline-item"></div></section>
<section id="projects">
  <div class="project-card"></div><div class="project-card"></div><div class="project-card"></div>
  <div class="skill-category"></div>
</section>
"##;

/// Mount `html` into a dedicated root so the test runner's own output stays intact.
fn mount(html: &str) -> Document {
    let doc = gloo::utils::document();
    let body = doc.body().expect("body");
    let root = doc.get_element_by_id(ROOT_ID).unwrap_or_else(|| {
        let root = doc.create_element("div").expect("root element");
        root.set_id(ROOT_ID);
        body.append_child(&root).expect("root attached");
        root
    });
    root.set_inner_html(html);
    let _ = body.style().remove_property("overflow");
    gloo::utils::window().scroll_to_with_x_and_y(0.0, 0.0);
    doc
}

fn fixture() -> Document {
    mount(FIXTURE)
}

fn el(doc: &Document, selector: &str) -> HtmlElement {
    dom::query_one(doc, selector).unwrap_or_else(|| panic!("{selector} exists"))
}

fn style_of(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).expect("style read")
}

fn press_escape(doc: &Document) {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    let _ = doc.dispatch_event(&event);
}

async fn scroll_and_settle(win: &Window, top: f64) {
    win.scroll_to_with_x_and_y(0.0, top);
    TimeoutFuture::new(SETTLE_MS).await;
}

async fn reveal_and_settle(el: &HtmlElement) {
    el.scroll_into_view();
    TimeoutFuture::new(SETTLE_MS).await;
}

#[wasm_bindgen_test]
fn toggle_parity_controls_panel_and_scroll_lock() {
    let doc = fixture();
    let cfg = FolioConfig::default();
    let controller = menu::install(&doc, &cfg).expect("menu wired");
    let toggle = el(&doc, ".nav-toggle");
    let panel = el(&doc, ".nav-menu");
    let body = doc.body().expect("body");

    for clicks in 1..=4 {
        toggle.click();
        let open = clicks % 2 == 1;
        assert_eq!(controller.borrow().state().is_open(), open);
        assert_eq!(dom::has_class(&panel, "active"), open);
        assert_eq!(
            toggle.get_attribute("aria-expanded").as_deref(),
            Some(if open { "true" } else { "false" })
        );
        assert_eq!(style_of(&body, "overflow"), if open { "hidden" } else { "" });
    }
}

#[wasm_bindgen_test]
fn nav_link_outside_click_and_escape_close_menu() {
    let doc = fixture();
    let cfg = FolioConfig::default();
    let controller = menu::install(&doc, &cfg).expect("menu wired");
    let toggle = el(&doc, ".nav-toggle");

    for link in dom::query_all(&doc, ".nav-link") {
        toggle.click();
        assert_eq!(controller.borrow().state(), MenuState::Open);
        link.click();
        assert_eq!(controller.borrow().state(), MenuState::Closed);
    }

    toggle.click();
    el(&doc, "#elsewhere").click();
    assert_eq!(controller.borrow().state(), MenuState::Closed);

    toggle.click();
    el(&doc, ".nav-menu").click();
    assert_eq!(controller.borrow().state(), MenuState::Open, "clicks inside the panel keep it open");

    press_escape(&doc);
    assert_eq!(controller.borrow().state(), MenuState::Closed);
    assert!(!dom::has_class(&el(&doc, ".nav-menu"), "active"));
}

#[wasm_bindgen_test]
fn menu_is_inert_without_toggle() {
    let doc = fixture();
    el(&doc, ".nav-toggle").remove();
    assert!(menu::install(&doc, &FolioConfig::default()).is_none());
}

#[wasm_bindgen_test]
fn header_marker_follows_offset() {
    let doc = fixture();
    let header = el(&doc, ".nav-header");
    nav::sync_header(&header, 51.0, 50.0);
    assert!(dom::has_class(&header, "scrolled"));
    nav::sync_header(&header, 50.0, 50.0);
    assert!(!dom::has_class(&header, "scrolled"));
}

#[wasm_bindgen_test]
async fn header_marker_tracks_real_scrolling() {
    let doc = mount(
        r#"<header class="nav-header">header</header><div style="height: 5000px"></div>"#,
    );
    let win = dom::window().expect("window");
    assert!(nav::install(&win, &doc, &FolioConfig::default()));
    let header = el(&doc, ".nav-header");

    scroll_and_settle(&win, 300.0).await;
    assert!(dom::has_class(&header, "scrolled"), "past the threshold");

    scroll_and_settle(&win, 0.0).await;
    assert!(!dom::has_class(&header, "scrolled"), "back at the top");
}

#[wasm_bindgen_test]
fn highlight_marks_only_matching_link() {
    let doc = fixture();
    let links = dom::query_all(&doc, ".nav-link");
    sections::highlight(&links, "about");
    sections::highlight(&links, "projects");
    let active: Vec<_> = links
        .iter()
        .filter(|link| dom::has_class(link, "active"))
        .filter_map(|link| link.get_attribute("href"))
        .collect();
    assert_eq!(active, vec!["#projects".to_string()]);
    sections::highlight(&links, "hero");
    assert!(links.iter().all(|link| !dom::has_class(link, "active")));
}

#[wasm_bindgen_test]
async fn section_observer_follows_the_viewport() {
    let doc = mount(
        r##"
<nav><a class="nav-link" href="#first">First</a><a class="nav-link" href="#second">Second</a></nav>
<section id="first" style="height: 3000px">first</section>
<section id="second" style="height: 3000px">second</section>
<div style="height: 3000px"></div>
"##,
    );
    let observer = sections::install(&doc, &FolioConfig::default()).expect("observer wired");
    let first_link = el(&doc, "a[href='#first']");
    let second_link = el(&doc, "a[href='#second']");

    reveal_and_settle(&el(&doc, "#second")).await;
    assert!(dom::has_class(&second_link, "active"));
    assert!(!dom::has_class(&first_link, "active"));

    reveal_and_settle(&el(&doc, "#first")).await;
    assert!(dom::has_class(&first_link, "active"));
    assert!(!dom::has_class(&second_link, "active"));
    observer.disconnect();
}

#[wasm_bindgen_test]
fn reduced_motion_shows_everything_without_delay() {
    let doc = fixture();
    let cfg = FolioConfig::default();
    let forced = a11y::force_visible(&doc, &cfg, MotionPreference::Reduced);
    assert_eq!(forced, 6);
    let _ = reveal::install(&doc, &cfg);
    for item in dom::query_all(&doc, &cfg.selectors.animatable()) {
        assert!(dom::has_class(&item, "visible"));
        assert_eq!(style_of(&item, "transition-delay"), "0s");
    }
}

#[wasm_bindgen_test]
fn stagger_delays_follow_group_steps() {
    let doc = fixture();
    let cfg = FolioConfig::default();
    assert_eq!(a11y::force_visible(&doc, &cfg, MotionPreference::Full), 0);
    let cards = dom::query_all(&doc, ".project-card");
    reveal::apply_stagger(&cards, cfg.stagger.project);
    assert_eq!(style_of(&cards[0], "transition-delay"), "0s");
    assert_eq!(style_of(&cards[1], "transition-delay"), "0.15s");
    assert_eq!(style_of(&cards[2], "transition-delay"), "0.3s");
}

#[wasm_bindgen_test]
async fn reveal_fires_once_per_element_on_scroll() {
    let doc = mount(
        r#"
<div class="project-card" id="near" style="height: 40px">near</div>
<div style="height: 4000px"></div>
<div class="project-card" id="far" style="height: 40px">far</div>
<div style="height: 4000px"></div>
"#,
    );
    let _observer = reveal::install(&doc, &FolioConfig::default()).expect("observer wired");
    let near = el(&doc, "#near");
    let far = el(&doc, "#far");
    assert!(!dom::has_class(&near, "visible"));
    assert_eq!(style_of(&far, "transition-delay"), "0.15s");

    reveal_and_settle(&near).await;
    assert!(dom::has_class(&near, "visible"));
    assert!(!dom::has_class(&far, "visible"), "far card is still below the fold");

    reveal_and_settle(&far).await;
    assert!(dom::has_class(&far, "visible"));

    reveal_and_settle(&near).await;
    assert!(dom::has_class(&near, "visible"), "never reverts");
    assert!(dom::has_class(&far, "visible"), "never reverts");
}

#[wasm_bindgen_test]
async fn anchor_without_target_cancels_navigation_without_scrolling() {
    let doc = fixture();
    let win = dom::window().expect("window");
    let cfg = FolioConfig::default();
    assert_eq!(anchors::scroll_to_anchor(&win, &doc, &cfg, "#missing"), None);
    assert_eq!(anchors::scroll_to_anchor(&win, &doc, &cfg, "#"), None);

    assert_eq!(anchors::install(&win, &doc, &cfg), 3);
    let before = dom::scroll_y(&win);

    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let click = MouseEvent::new_with_mouse_event_init_dict("click", &init).expect("click event");
    let not_cancelled = el(&doc, "a[href='#missing']")
        .dispatch_event(&click)
        .expect("dispatch");

    assert!(!not_cancelled);
    assert!(click.default_prevented());
    TimeoutFuture::new(SETTLE_MS).await;
    assert!((dom::scroll_y(&win) - before).abs() < f64::EPSILON);
}

#[wasm_bindgen_test]
fn anchor_destination_clears_header() {
    let doc = fixture();
    let win = dom::window().expect("window");
    let cfg = FolioConfig::default();
    let header = el(&doc, ".nav-header");
    let target = doc.get_element_by_id("projects").expect("projects section");
    let expected = target.get_bounding_client_rect().top() + dom::scroll_y(&win)
        - f64::from(header.offset_height());
    let top = anchors::scroll_to_anchor(&win, &doc, &cfg, "#projects").expect("target exists");
    assert!((top - expected).abs() < 1e-6);
}

#[wasm_bindgen_test]
fn parallax_translates_inside_hero_only() {
    let doc = fixture();
    let cfg = FolioConfig::default();
    let blobs = dom::query_all(&doc, ".blob");
    assert!(parallax::apply_frame(&blobs, &cfg.parallax, 100.0, 600.0));
    assert_eq!(style_of(&blobs[0], "transform"), "translateY(10px)");
    assert_eq!(style_of(&blobs[2], "transform"), "translateY(20px)");

    assert!(!parallax::apply_frame(&blobs, &cfg.parallax, 600.0, 600.0));
    assert_eq!(style_of(&blobs[0], "transform"), "translateY(10px)", "left untouched past hero");
}

#[wasm_bindgen_test]
async fn parallax_coalesces_scroll_bursts_into_one_frame() {
    let doc = mount(
        r#"
<section class="hero" style="height: 2000px"><div class="blob"></div><div class="blob"></div></section>
<div style="height: 3000px"></div>
"#,
    );
    let win = dom::window().expect("window");
    let driver = parallax::install(&win, &doc, &FolioConfig::default()).expect("driver wired");
    let blob = el(&doc, ".blob");

    scroll_and_settle(&win, 100.0).await;
    assert!(!driver.is_pending());
    assert_eq!(style_of(&blob, "transform"), "translateY(10px)");
    let settled = driver.frames_run();
    assert!(settled >= 1);

    for _ in 0..5 {
        let scroll = Event::new("scroll").expect("scroll event");
        let _ = win.dispatch_event(&scroll);
    }
    assert!(driver.is_pending(), "first event of the burst schedules a frame");
    assert_eq!(driver.frames_run(), settled, "nothing renders synchronously");

    TimeoutFuture::new(SETTLE_MS).await;
    assert!(!driver.is_pending());
    assert_eq!(driver.frames_run(), settled + 1, "one frame for the whole burst");
}

#[wasm_bindgen_test]
fn parallax_is_skipped_without_decorations() {
    let doc = mount(r#"<section class="hero" style="height: 600px"></section>"#);
    let win = dom::window().expect("window");
    assert!(parallax::install(&win, &doc, &FolioConfig::default()).is_none());
}

#[wasm_bindgen_test]
fn init_wires_every_behaviour() {
    let doc = fixture();
    let win = dom::window().expect("window");
    let installed = folio_web::init_with(&win, &doc, &FolioConfig::default());
    assert!(installed.menu.is_some());
    assert!(installed.header_styling);
    assert!(installed.sections.is_some());
    assert!(installed.reveal.is_some());
    assert!(installed.parallax.is_some());
    assert_eq!(installed.anchors, 3);
}

#[wasm_bindgen_test]
fn init_runs_immediately_once_the_document_is_parsed() {
    let doc = fixture();
    assert_ne!(doc.ready_state(), "loading");
    folio_web::init_when_ready().expect("browser context");

    let toggle = el(&doc, ".nav-toggle");
    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

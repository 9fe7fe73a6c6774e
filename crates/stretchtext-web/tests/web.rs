//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/stretchtext-web

use stretchtext::{Config, DomHost, SchedulerMode, SchedulerPreference, ToggleController, ToggleState};
use stretchtext_web::{WebHost, WebScheduler, probe_frame_callback};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mount markup in a fresh container and return a host for the document
fn mount(id: &str, html: &str) -> (WebHost, Element) {
    let host = WebHost::current().expect("browser document");
    let container = host.document().create_element("div").unwrap();
    container.set_id(id);
    container.set_inner_html(html);
    host.document().body().unwrap().append_child(&container).unwrap();
    (host, container)
}

fn display(element: &Element) -> String {
    element.dyn_ref::<HtmlElement>().unwrap().style().get_property_value("display").unwrap()
}

#[wasm_bindgen_test]
fn test_version() {
    assert!(!stretchtext_web::get_version().is_empty());
}

#[wasm_bindgen_test]
fn test_browser_has_animation_frames() {
    let window = web_sys::window().unwrap();
    assert!(probe_frame_callback(&window).is_some());

    let scheduler = WebScheduler::new(window, &Config::default());
    assert_eq!(scheduler.mode(), SchedulerMode::AnimationFrame);
}

#[wasm_bindgen_test]
fn test_host_queries() {
    let (host, _container) = mount(
        "queries",
        r##"<span epub-type="stretchsummary" id="q-attr">a</span><em id="q-next">b</em>
            <a class="stretchsummary" href="#q-next" id="q-link">c</a>"##,
    );

    let attr = host.element_by_id("q-attr").unwrap();
    assert!(host.elements_with_attribute("epub-type", "stretchsummary").contains(&attr));
    assert_eq!(host.next_element_sibling(&attr).map(|e| e.id()), Some("q-next".to_string()));

    let link = host.element_by_id("q-link").unwrap();
    assert!(host.elements_with_class("stretchsummary").contains(&link));
    assert!(host.tag_name(&link).eq_ignore_ascii_case("a"));
    assert_eq!(host.describe(&link), r##"<a id="q-link" class="stretchsummary" href="#q-next">"##);
}

#[wasm_bindgen_test]
fn test_toggle_cycle_against_live_dom() {
    let (mut host, _container) = mount(
        "cycle",
        r#"<span id="c-summary">fox</span><span id="c-detail">, quick and brown,</span>"#,
    );
    let summary = host.element_by_id("c-summary").unwrap();
    let detail = host.element_by_id("c-detail").unwrap();
    let controller = ToggleController::<WebHost>::new(Config::default());
    let mut frames = Vec::new();

    assert_eq!(controller.activate(&mut host, &mut frames, &summary), Ok(ToggleState::Closed));
    assert_eq!(display(&detail), "inline");
    assert!(!detail.class_list().contains("stretchtext-open"));

    assert_eq!(controller.complete(&mut host, &frames.remove(0)), ToggleState::Open);
    assert!(summary.class_list().contains("stretchtext-open"));
    assert!(detail.class_list().contains("stretchtext-open"));

    controller.activate(&mut host, &mut frames, &summary).unwrap();
    assert_eq!(display(&detail), "none");
    assert_eq!(controller.complete(&mut host, &frames.remove(0)), ToggleState::Closed);
}

#[wasm_bindgen_test]
fn test_hyperlink_detail_is_block() {
    let (mut host, _container) = mount(
        "link",
        r##"<a href="#l-target" id="l-summary">why</a><p>between</p><div id="l-target">because</div>"##,
    );
    let summary = host.element_by_id("l-summary").unwrap();
    let target = host.element_by_id("l-target").unwrap();
    let controller = ToggleController::<WebHost>::new(Config::default());
    let mut frames = Vec::new();

    controller.activate(&mut host, &mut frames, &summary).unwrap();

    assert_eq!(display(&target), "block");
    assert_eq!(frames[0].detail, target);
}

#[wasm_bindgen_test]
fn test_missing_target_is_reported() {
    let (mut host, _container) = mount("missing", r##"<a href="#m-nowhere" id="m-summary">x</a>"##);
    let summary = host.element_by_id("m-summary").unwrap();
    let controller = ToggleController::<WebHost>::new(Config::default());
    let mut frames = Vec::new();

    assert!(controller.activate(&mut host, &mut frames, &summary).is_err());
    assert!(frames.is_empty());
}

#[wasm_bindgen_test]
fn test_status_is_serializable() {
    assert!(stretchtext_web::status().unwrap().is_object());
}

fn status_field(name: &str) -> JsValue {
    js_sys::Reflect::get(&stretchtext_web::status().unwrap(), &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn test_second_install_is_ignored() {
    mount("install", r#"<span class="stretchsummary">a</span><span>b</span>"#);

    stretchtext_web::init_stretch_text(JsValue::UNDEFINED).unwrap();
    // The test document has finished parsing, so initialization already ran
    assert_eq!(status_field("installed").as_bool(), Some(true));
    assert_eq!(status_field("initialized").as_bool(), Some(true));
    let summaries = status_field("summaries").as_f64();
    assert!(summaries.is_some());

    mount("install-late", r#"<span class="stretchsummary">c</span><span>d</span>"#);
    let timer = Config {
        scheduler: SchedulerPreference::Timer,
        ..Config::default()
    };
    let config = serde_wasm_bindgen::to_value(&timer).unwrap();
    stretchtext_web::init_stretch_text(config).unwrap();

    assert_eq!(status_field("summaries").as_f64(), summaries);
    assert_ne!(status_field("scheduler").as_string().as_deref(), Some("timer"));
}

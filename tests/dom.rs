//! Browser tests - run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit};

use landing_kit::animator::{PollingWatcher, VisibilityWatcher};
use landing_kit::boot::smooth_scroll_to;
use landing_kit::config::{AnimatorConfig, BootConfig, ModalConfig};
use landing_kit::{Bootstrapper, ModalController, Presence, VisibilityAnimator};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Append a fresh element with the given markup to the body
fn mount(html: &str) -> HtmlElement {
    let doc = document();
    let host = doc.create_element("div").unwrap();
    host.set_inner_html(html);
    doc.body().unwrap().append_child(&host).unwrap();
    host.dyn_into::<HtmlElement>().unwrap()
}

fn find(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn body_overflow() -> String {
    document()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&event).unwrap();
}

/// Dispatch a cancelable click; returns false when a handler prevented the default
fn click(target: &Element) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

// -- ModalController --

#[wasm_bindgen_test]
async fn open_copies_template_and_locks_scroll() {
    let page = mount(r#"<div id="tpl-open" style="display:none"><p class="copied">Hi</p></div>"#);
    let modal = ModalController::initialize(&document(), ModalConfig::default()).unwrap();
    let overlay = modal.overlay();

    modal.open("tpl-open");
    assert!(modal.is_open());
    assert!(has_class(&overlay.root, "active"));
    assert_eq!(overlay.root.get_attribute("aria-hidden").as_deref(), Some("false"));
    assert_eq!(overlay.content.inner_html(), r#"<p class="copied">Hi</p>"#);
    assert_eq!(body_overflow(), "hidden");

    // Copy, not a reference
    assert!(page.query_selector(".copied").unwrap().is_some());

    TimeoutFuture::new(150).await;
    let active = document().active_element().unwrap();
    assert_eq!(active, overlay.close_button.clone().into());

    modal.close();
    page.remove();
}

#[wasm_bindgen_test]
async fn close_unlocks_now_and_clears_later() {
    let page = mount(r#"<div id="tpl-close" style="display:none">Bye</div>"#);
    let modal = ModalController::initialize(&document(), ModalConfig::default()).unwrap();

    modal.open("tpl-close");
    modal.close();
    let overlay = modal.overlay();
    assert!(!modal.is_open());
    assert!(!has_class(&overlay.root, "active"));
    assert_eq!(overlay.root.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert_eq!(body_overflow(), "");
    assert_eq!(overlay.content.inner_html(), "Bye");

    TimeoutFuture::new(400).await;
    assert_eq!(overlay.content.inner_html(), "");
    page.remove();
}

#[wasm_bindgen_test]
async fn reopen_before_clear_keeps_new_content() {
    let page = mount(
        r#"<div id="tpl-a" style="display:none">A</div>
            <div id="tpl-b" style="display:none">B</div>"#,
    );
    let modal = ModalController::initialize(&document(), ModalConfig::default()).unwrap();

    modal.open("tpl-a");
    modal.close();
    modal.open("tpl-b");
    TimeoutFuture::new(400).await;
    assert!(modal.is_open());
    assert_eq!(modal.overlay().content.inner_html(), "B");

    modal.close();
    page.remove();
}

#[wasm_bindgen_test]
fn missing_template_stays_closed() {
    let modal = ModalController::initialize(&document(), ModalConfig::default()).unwrap();
    let before = modal.overlay().content.inner_html();

    modal.open("no-such-template");
    assert!(!modal.is_open());
    assert_eq!(modal.overlay().content.inner_html(), before);
    assert!(matches!(
        modal.try_open("no-such-template"),
        Err(landing_kit::Error::TemplateNotFound(_))
    ));
}

#[wasm_bindgen_test]
fn overlay_is_reused() {
    let first = ModalController::initialize(&document(), ModalConfig::default()).unwrap();
    let second = ModalController::initialize(&document(), ModalConfig::default()).unwrap();
    assert_eq!(first.overlay().root, second.overlay().root);
    assert_eq!(document().query_selector_all(".modal-overlay").unwrap().length(), 1);
    assert_eq!(first.overlay().root.get_attribute("role").as_deref(), Some("dialog"));
    assert_eq!(first.overlay().root.get_attribute("aria-modal").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
fn second_controller_keeps_open_overlay() {
    let page = mount(r#"<div id="tpl-keep" style="display:none">Keep</div>"#);
    let first = ModalController::initialize(&document(), ModalConfig::default()).unwrap();
    first.open("tpl-keep");

    let second = ModalController::initialize(&document(), ModalConfig::default()).unwrap();
    assert!(first.is_open());
    assert!(!second.is_open());
    assert!(has_class(&second.overlay().root, "active"));
    assert_eq!(second.overlay().root.get_attribute("aria-hidden").as_deref(), Some("false"));

    first.close();
    assert!(!has_class(&first.overlay().root, "active"));
    page.remove();
}

#[wasm_bindgen_test]
fn escape_only_closes_when_open() {
    let page = mount(r#"<div id="tpl-esc" style="display:none">Esc</div>"#);
    let modal = ModalController::initialize(&document(), ModalConfig::default()).unwrap();

    press("Escape");
    assert!(!modal.is_open());

    modal.open("tpl-esc");
    press("Enter");
    assert!(modal.is_open());
    press("Escape");
    assert!(!modal.is_open());
    page.remove();
}

#[wasm_bindgen_test]
fn background_click_closes_but_content_click_does_not() {
    let page = mount(r#"<div id="tpl-bg" style="display:none"><span class="inner">x</span></div>"#);
    let modal = ModalController::initialize(&document(), ModalConfig::default()).unwrap();
    modal.open("tpl-bg");

    let inner = find(&modal.overlay().content, ".inner");
    click(&inner);
    assert!(modal.is_open());

    click(&modal.overlay().root);
    assert!(!modal.is_open());
    page.remove();
}

#[wasm_bindgen_test]
fn close_button_closes() {
    let page = mount(r#"<div id="tpl-btn" style="display:none">x</div>"#);
    let modal = ModalController::initialize(&document(), ModalConfig::default()).unwrap();
    modal.open("tpl-btn");
    modal.overlay().close_button.click();
    assert!(!modal.is_open());
    page.remove();
}

#[wasm_bindgen_test]
fn delegated_trigger_opens_and_prevents_navigation() {
    let page = mount(
        r##"<a href="#nowhere" data-modal="tpl-trig"><span class="label">Open</span></a>
            <div id="tpl-trig" style="display:none">Triggered</div>"##,
    );
    let modal = ModalController::initialize(&document(), ModalConfig::default()).unwrap();

    let label = find(&page, ".label");
    assert!(!click(&label));
    assert!(modal.is_open());
    assert_eq!(modal.content_id().as_deref(), Some("tpl-trig"));
    assert_eq!(modal.overlay().content.inner_html(), "Triggered");

    modal.close();
    page.remove();
}

// -- VisibilityAnimator --

#[wasm_bindgen_test]
async fn visible_element_reveals_once() {
    let page = mount(r#"<div class="card" data-animation style="height:200px">card</div>"#);
    let card = find(&page, ".card");
    // Keep it in view regardless of what earlier tests left on the page
    page.parent_element()
        .unwrap()
        .insert_before(&page, document().body().unwrap().first_child().as_ref())
        .unwrap();

    let animator = VisibilityAnimator::initialize(&document(), AnimatorConfig::default()).unwrap();
    assert!(animator.is_watching(&card));

    TimeoutFuture::new(300).await;
    assert!(has_class(&card, "animated"));
    assert!(!animator.is_watching(&card));
    page.remove();
}

#[wasm_bindgen_test]
async fn repeatable_element_hides_and_reveals_again() {
    let page = mount(
        r#"<div class="cycle" data-animation data-animation-repeat
                style="position:fixed; top:0; left:0; width:100px; height:100px">c</div>"#,
    );
    let cycle = find(&page, ".cycle");
    let animator = VisibilityAnimator::initialize(&document(), AnimatorConfig::default()).unwrap();

    TimeoutFuture::new(300).await;
    assert!(has_class(&cycle, "animated"));

    cycle.style().set_property("top", "-10000px").unwrap();
    TimeoutFuture::new(300).await;
    assert!(!has_class(&cycle, "animated"));
    assert!(animator.is_watching(&cycle));

    cycle.style().set_property("top", "0px").unwrap();
    TimeoutFuture::new(300).await;
    assert!(has_class(&cycle, "animated"));
    page.remove();
}

#[wasm_bindgen_test]
async fn trigger_respects_delay_and_reset_clears() {
    let page = mount(r#"<div class="late" data-animation data-animation-delay="250">late</div>"#);
    let late = find(&page, ".late");
    let animator = VisibilityAnimator::initialize(&document(), AnimatorConfig::default()).unwrap();

    animator.trigger(&late);
    TimeoutFuture::new(50).await;
    assert!(!has_class(&late, "animated"));
    TimeoutFuture::new(350).await;
    assert!(has_class(&late, "animated"));

    animator.reset(&late);
    assert!(!has_class(&late, "animated"));
    page.remove();
}

#[wasm_bindgen_test]
async fn trigger_ignores_unmarked_elements() {
    let page = mount(r#"<div class="plain">plain</div>"#);
    let plain = find(&page, ".plain");
    let animator = VisibilityAnimator::initialize(&document(), AnimatorConfig::default()).unwrap();

    animator.trigger(&plain);
    TimeoutFuture::new(100).await;
    assert!(!has_class(&plain, "animated"));
    assert!(!animator.is_watching(&plain));
    page.remove();
}

#[wasm_bindgen_test]
async fn reset_cancels_pending_reveal() {
    // Far above the viewport, so the watcher never reports it as intersecting
    let page = mount(
        r#"<div class="rep" data-animation data-animation-repeat data-animation-delay="200"
                style="position:absolute; top:-10000px; height:50px">r</div>"#,
    );
    let rep = find(&page, ".rep");
    let animator = VisibilityAnimator::initialize(&document(), AnimatorConfig::default()).unwrap();

    animator.trigger(&rep);
    animator.reset(&rep);
    TimeoutFuture::new(400).await;
    assert!(!has_class(&rep, "animated"));
    assert!(animator.is_watching(&rep));
    page.remove();
}

#[wasm_bindgen_test]
async fn inserted_elements_are_watched() {
    let animator = VisibilityAnimator::initialize(&document(), AnimatorConfig::default()).unwrap();

    let page = mount(
        r#"<section class="wrap">
            <div class="nested" data-animation data-animation-repeat>n</div>
        </section>"#,
    );
    let nested = find(&page, ".nested");
    let direct = document().create_element("div").unwrap();
    direct.set_attribute("data-animation", "").unwrap();
    direct.set_attribute("data-animation-repeat", "").unwrap();
    document().body().unwrap().append_child(&direct).unwrap();
    let unmarked = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&unmarked).unwrap();

    // Mutation records are delivered as a microtask
    TimeoutFuture::new(50).await;
    assert!(animator.is_watching(&nested));
    assert!(animator.is_watching(&direct));
    assert!(!animator.is_watching(&unmarked));

    page.remove();
    TimeoutFuture::new(50).await;
    assert!(!animator.is_watching(&nested));

    direct.remove();
    unmarked.remove();
}

/// Polling watcher on a short interval that records each batch's states
fn polling(batches: &Rc<RefCell<Vec<Vec<bool>>>>) -> PollingWatcher {
    let sink = batches.clone();
    let config = AnimatorConfig {
        poll_interval_ms: 50,
        ..AnimatorConfig::default()
    };
    PollingWatcher::new(
        &config,
        Box::new(move |changes| {
            sink.borrow_mut().push(changes.iter().map(|c| c.intersecting).collect());
        }),
    )
}

#[wasm_bindgen_test]
async fn polling_watcher_reports_crossings_only() {
    let page = mount(
        r#"<div class="polled"
                style="position:fixed; top:0; left:0; width:100px; height:100px">p</div>"#,
    );
    let polled = find(&page, ".polled");
    let batches = Rc::new(RefCell::new(Vec::new()));
    let watcher = polling(&batches);

    watcher.observe(&polled);
    watcher.observe(&polled);
    TimeoutFuture::new(200).await;
    assert_eq!(*batches.borrow(), vec![vec![true]]);

    polled.style().set_property("top", "-10000px").unwrap();
    TimeoutFuture::new(200).await;
    assert_eq!(*batches.borrow(), vec![vec![true], vec![false]]);

    watcher.unobserve(&polled);
    polled.style().set_property("top", "0px").unwrap();
    TimeoutFuture::new(200).await;
    assert_eq!(batches.borrow().len(), 2);
    page.remove();
}

#[wasm_bindgen_test]
async fn polling_watcher_never_reveals_hidden_elements() {
    // display:none reports a 0x0 rect at the viewport origin
    let page = mount(r#"<div class="tucked" data-animation style="display:none">t</div>"#);
    let tucked = find(&page, ".tucked");
    let batches = Rc::new(RefCell::new(Vec::new()));
    let watcher = polling(&batches);

    watcher.observe(&tucked);
    TimeoutFuture::new(200).await;
    assert_eq!(*batches.borrow(), vec![vec![false]]);

    tucked.style().set_property("display", "block").unwrap();
    tucked.style().set_property("position", "fixed").unwrap();
    tucked.style().set_property("top", "0px").unwrap();
    tucked.style().set_property("height", "50px").unwrap();
    TimeoutFuture::new(200).await;
    assert_eq!(*batches.borrow(), vec![vec![false], vec![true]]);
    page.remove();
}

// -- Bootstrapper --

fn boot() -> Bootstrapper {
    Bootstrapper::initialize(
        &document(),
        &BootConfig::default(),
        "Test Site",
        Presence { animator: true, modal: false },
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn bare_hash_link_never_navigates() {
    let page = mount(r##"<a class="top" href="#">Top</a>"##);
    let _boot = boot();
    assert!(!click(&find(&page, ".top")));
    page.remove();
}

#[wasm_bindgen_test]
fn fragment_link_follows_native_support() {
    let page =
        mount(r##"<a class="jump" href="#jump-target">Go</a><div id="jump-target">T</div>"##);
    let boot = boot();
    let not_prevented = click(&find(&page, ".jump"));
    // Intercepted only when the browser can't scroll smoothly on its own
    assert_eq!(not_prevented, boot.native_smooth_scroll());
    page.remove();
}

#[wasm_bindgen_test]
fn skip_link_focuses_main_and_heading_is_focusable() {
    let page = mount(
        r##"<a class="skip-link" href="#content">Skip</a><h1>Title</h1><main>Main</main>"##,
    );
    let _boot = boot();

    let heading = find(&page, "h1");
    assert_eq!(heading.get_attribute("tabindex").as_deref(), Some("-1"));

    assert!(!click(&find(&page, ".skip-link")));
    let main = find(&page, "main");
    assert_eq!(main.get_attribute("tabindex").as_deref(), Some("-1"));
    assert_eq!(document().active_element(), Some(main.into()));
    page.remove();
}

#[wasm_bindgen_test]
async fn manual_smooth_scroll_lands_on_target() {
    let page = mount(
        r#"<div style="height:3000px"></div>
            <div class="far" style="height:50px">far</div>
            <div style="height:3000px"></div>"#,
    );
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let far = find(&page, ".far");
    let expected = window.scroll_y().unwrap() + far.get_bounding_client_rect().top();

    smooth_scroll_to(&far, 100.0).unwrap();
    TimeoutFuture::new(400).await;
    assert!((window.scroll_y().unwrap() - expected).abs() < 1.0);

    window.scroll_to_with_x_and_y(0.0, 0.0);
    page.remove();
}

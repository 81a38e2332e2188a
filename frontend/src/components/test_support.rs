//! Mount helpers for component tests that run in a browser.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlElement};

/// Creates a fresh `<div>` attached to `<body>`.
pub fn create_mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Detaches the mount point so the next test starts clean.
pub fn cleanup(mount: &Element) {
    mount.remove();
}

/// Lets the Yew scheduler flush pending renders.
pub async fn settle() {
    TimeoutFuture::new(0).await;
}

pub fn click(mount: &Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .unchecked_into::<HtmlElement>()
        .click();
}

pub fn fire_change(element: &Element) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("change", &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

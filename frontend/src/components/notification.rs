//! Floating notifications, used where there is no form to host a banner.
//!
//! At most one notification is on screen: showing a new one removes the previous.
//! It fades after [`NOTIFICATION_TIMEOUT`] and is removed [`NOTIFICATION_FADE`] later.

use common::banner::{BannerKind, NOTIFICATION_FADE, NOTIFICATION_TIMEOUT};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::browser::after;

pub fn show_notification(message: &str, kind: BannerKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Ok(Some(existing)) = document.query_selector(".notification") {
        existing.remove();
    }

    if let (Ok(notification), Some(body)) = (document.create_element("div"), document.body()) {
        notification.set_class_name(&format!("notification notification-{}", kind.class()));
        notification.set_text_content(Some(message));

        let element: HtmlElement = notification.unchecked_into();
        let style = element.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", background(kind)).ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();
        style.set_property("transition", "opacity 0.3s ease-out").ok();

        if body.append_child(&element).is_ok() {
            after(NOTIFICATION_TIMEOUT, move || {
                element.class_list().add_1("notification-fade").ok();
                element.style().set_property("opacity", "0").ok();
                after(NOTIFICATION_FADE, move || element.remove());
            });
        }
    }
}

fn background(kind: BannerKind) -> &'static str {
    match kind {
        BannerKind::Success => "rgba(16, 185, 129, 0.95)",
        BannerKind::Error => "rgba(211, 47, 47, 0.95)",
        BannerKind::Info => "rgba(0, 0, 0, 0.8)",
    }
}

//! Thin wrappers over `window`: location, navigation, popups and delayed callbacks.

use std::time::Duration;

use common::navigation::FollowUp;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::UrlSearchParams;

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Value of `name` in the current query string.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

pub fn navigate(target: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(target) {
            log::error!("navigation to {target} failed: {err:?}");
        }
    }
}

/// Navigates to `follow_up.target` once its delay has elapsed.
pub fn follow(follow_up: FollowUp) {
    if follow_up.delay.is_zero() {
        navigate(&follow_up.target);
    } else {
        after(follow_up.delay, move || navigate(&follow_up.target));
    }
}

/// Opens `url` in a new browsing context. Returns `false` when the browser blocked it.
pub fn open_window(url: &str, target: &str, features: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.open_with_url_and_target_and_features(url, target, features) {
        Ok(Some(_)) => true,
        Ok(None) => false,
        Err(err) => {
            log::error!("window.open({url}) failed: {err:?}");
            false
        }
    }
}

/// Runs `callback` on the event loop after `delay`.
pub fn after<F>(delay: Duration, callback: F)
where
    F: FnOnce() + 'static,
{
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    spawn_local(async move {
        TimeoutFuture::new(millis).await;
        callback();
    });
}

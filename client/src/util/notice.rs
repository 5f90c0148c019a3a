//! Modal notices for submission outcomes.
//!
//! Confirmation notices are deferred by their `delay_ms` through a
//! `gloo-timers` timeout that is never cancelled; failure notices are shown
//! immediately. Requires a browser environment, no-op elsewhere.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use inquiry::Notice;

/// Show `notice` with `window.alert`, honoring its delay.
pub fn show(notice: &Notice) {
    #[cfg(feature = "hydrate")]
    {
        let text = notice.text.clone();
        if notice.delay_ms == 0 {
            alert(&text);
        } else {
            gloo_timers::callback::Timeout::new(notice.delay_ms, move || alert(&text)).forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notice;
    }
}

#[cfg(feature = "hydrate")]
fn alert(text: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window for notice: {text}");
        return;
    };
    if let Err(e) = window.alert_with_message(text) {
        log::warn!("alert failed: {e:?}");
    }
}

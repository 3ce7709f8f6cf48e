use dominator::{Dom, events, html};
use futures_signals::signal::{Mutable, Signal, SignalExt};
use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;

use crate::constants::{MESSAGE_TIMEOUT_MS, PROP_ROLE, PROP_TITLE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::state::MESSAGE;

thread_local! {
    static HIDE_TIMER: Lazy<Mutable<Option<Timeout>>> = Lazy::new(||Mutable::new(None));
}

fn css_class(label: &str) -> String {
    format!("app-message__{label}")
}

/// Shows `text` in the banner; it hides itself after a while.
pub fn message_show(text: String) {
    MESSAGE.set(Some(text));
    let timeout = Timeout::new(MESSAGE_TIMEOUT_MS, message_expire);
    HIDE_TIMER.with(|timer| {
        // the replaced timeout is cancelled on drop
        timer.set(Some(timeout));
    });
}

// Runs inside the timer callback, so the timer itself is left in place.
fn message_expire() {
    MESSAGE.set_neq(None);
}

pub fn message_close() {
    HIDE_TIMER.with(|timer| {
        if let Some(timeout) = timer.lock_mut().take() {
            timeout.cancel();
        }
    });
    MESSAGE.set_neq(None);
}

pub fn app_message() -> impl Signal<Item=Option<Dom>> {
    MESSAGE.signal_cloned().map(|message| message.map(|text| message_view(&text)))
}

fn message_view(text: &str) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .attr(PROP_ROLE, "alert")
        .children([
            html!(TAG_SPAN, {
                .class(css_class("text"))
                .text(text)
            }),
            html!(TAG_BUTTON, {
                .class(css_class("close"))
                .attr(PROP_TITLE, "Dismiss")
                .text("×")
                .event(|_: events::Click| message_close())
            }),
        ])
    })
}

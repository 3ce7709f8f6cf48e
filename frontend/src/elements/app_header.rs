use dominator::{Dom, events, html};

use crate::constants::{PROP_TITLE, TAG_BUTTON, TAG_DIV};
use crate::loader::{actions_reload, notes_reload};
use crate::utils::set_title;

static APP_TITLE: &'static str = "Notes & action items";

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header() -> Dom {
    set_title(APP_TITLE);
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!("h1", {
                .class(css_class("title"))
                .text(APP_TITLE)
            }),
            button("reload", "Fetch both lists again", reload_all),
        ])
    })
}

fn reload_all() {
    notes_reload();
    actions_reload();
}

fn button(label: &str, title: &str, click: fn()) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("button"))
        .class(css_class("text"))
        .attr(PROP_TITLE, title)
        .text(label)
        .event(move|_: events::Click|click())
    })
}

use dominator::{Dom, events, html};
use futures_signals::signal::{Signal, SignalExt};

use crate::constants::{PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::loader::{actions_create, extract_close};
use crate::state::EXTRACT;
use crate::types::ExtractView;

fn css_class(label: &str) -> String {
    format!("notes-extract__{label}")
}

pub fn extract_content() -> impl Signal<Item=Option<Dom>> {
    EXTRACT.signal_cloned().map(|view| view.map(extract_view))
}

fn extract_view(view: ExtractView) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .class(css_class("header"))
            .children([
                html!("h3", {
                    .text(&format!("Extracted from \"{}\"", view.title))
                }),
                html!(TAG_BUTTON, {
                    .class(css_class("close"))
                    .attr(PROP_TYPE, "button")
                    .text("Close")
                    .event(|_: events::Click| extract_close())
                }),
            ])
        }))
        .apply(|dom| {
            if view.is_empty() {
                dom.child(html!("p", {
                    .class(css_class("empty"))
                    .text("Nothing to extract.")
                }))
            } else {
                dom.children([tags_view(&view.tags), suggestions_view(&view.action_items)])
            }
        })
    })
}

fn tags_view(tags: &[String]) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("tags"))
        .children(tags.iter().map(|tag| {
            html!(TAG_SPAN, {
                .class(css_class("tag"))
                .text(&format!("#{tag}"))
            })
        }))
    })
}

fn suggestions_view(items: &[String]) -> Dom {
    html!("ul", {
        .class(css_class("list"))
        .children(items.iter().map(|text| {
            let description = text.clone();
            html!("li", {
                .class(css_class("item"))
                .text(text)
                .child(html!(TAG_BUTTON, {
                    .class(css_class("button"))
                    .attr(PROP_TYPE, "button")
                    .text("Add")
                    .event(move|_: events::Click| actions_create(description.clone(), None))
                }))
            })
        }))
    })
}

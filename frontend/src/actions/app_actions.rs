use dominator::{Dom, EventOptions, events, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;

use shared::types::ActionItem;
use shared::utils::view_action;

use crate::constants::{ID_ACTIONS, ID_ACTION_DESC, ID_ACTION_FORM, PROP_NAME, PROP_PLACEHOLDER, PROP_REQUIRED, PROP_TITLE, PROP_TYPE, TAG_BUTTON, TAG_FORM, TAG_INPUT, TAG_SPAN};
use crate::loader::{actions_complete, actions_create};
use crate::state::ACTIONS;
use crate::utils::{attr_data, get_value_by_id, Submit};

fn css_class(label: &str) -> String {
    format!("app-actions__{label}")
}

/// Heading text, e.g. `Action items (1 open / 3)`.
fn view_counts(items: &[ActionItem]) -> String {
    let open = items.iter().filter(|item| !item.completed).count();
    format!("Action items ({open} open / {})", items.len())
}

pub fn app_actions() -> Dom {
    html!("section", {
        .class(css_class("container"))
        .children([
            html!("h2", {
                .class(css_class("title"))
                .text_signal(ACTIONS.signal_vec_cloned().to_signal_cloned().map(|items| view_counts(&items)))
            }),
            action_form(),
            actions_list(),
        ])
        .child_signal(ACTIONS.signal_vec_cloned().len().map(|len| {
            if len == 0 {
                Some(html!("p", {
                    .class(css_class("empty"))
                    .text("No action items.")
                }))
            } else {
                None
            }
        }))
    })
}

fn action_form() -> Dom {
    html!(TAG_FORM, {
        .attr("id", ID_ACTION_FORM)
        .class(css_class("form"))
        .children([
            html!(TAG_INPUT, {
                .attr("id", ID_ACTION_DESC)
                .attr(PROP_NAME, "description")
                .attr(PROP_TITLE, "Description")
                .attr(PROP_PLACEHOLDER, "Description")
                .attr(PROP_REQUIRED, "")
            }),
            html!(TAG_BUTTON, {
                .attr(PROP_TYPE, "submit")
                .text("Add action item")
            }),
        ])
        .event_with_options(&EventOptions::preventable(), handle_submit)
    })
}

fn handle_submit(e: Submit) {
    e.prevent_default();
    actions_create(get_value_by_id(ID_ACTION_DESC), e.form());
}

fn actions_list() -> Dom {
    html!("ul", {
        .attr("id", ID_ACTIONS)
        .class(css_class("list"))
        .children_signal_vec(ACTIONS.signal_vec_cloned().map(action_item))
    })
}

fn action_item(item: ActionItem) -> Dom {
    html!("li", {
        .class(css_class("item"))
        .apply_if(item.completed, |dom| dom.class(css_class("item-done")))
        .attr(&attr_data("id"), &item.id.to_string())
        .child(html!(TAG_SPAN, {
            .class(css_class("text"))
            .text(&view_action(&item))
        }))
        .apply_if(!item.completed, |dom| {
            let item = item.clone();
            dom.child(html!(TAG_BUTTON, {
                .class(css_class("button"))
                .attr(PROP_TYPE, "button")
                .text("Complete")
                .event(move|_: events::Click| actions_complete(item.clone()))
            }))
        })
    })
}

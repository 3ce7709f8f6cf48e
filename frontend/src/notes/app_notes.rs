use dominator::{Dom, EventOptions, events, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;

use shared::types::Note;
use shared::utils::view_note;

use crate::constants::{ID_NOTES, ID_NOTE_CONTENT, ID_NOTE_FORM, ID_NOTE_SEARCH, ID_NOTE_TITLE, PROP_NAME, PROP_PLACEHOLDER, PROP_REQUIRED, PROP_TITLE, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_FORM, TAG_INPUT, TAG_SPAN};
use crate::loader::{notes_create, notes_delete, notes_edit, notes_extract, notes_search};
use crate::state::{NOTES, SEARCH_TEXT};
use crate::utils::{attr_data, get_value_by_id, Submit};

const ATTR_ID: &'static str = "id";

fn css_class(label: &str) -> String {
    format!("app-notes__{label}")
}

pub fn app_notes() -> Dom {
    html!("section", {
        .class(css_class("container"))
        .children([
            html!("h2", {
                .class(css_class("title"))
                .text_signal(NOTES.signal_vec_cloned().len().map(|len| format!("Notes ({len})")))
            }),
            note_form(),
            search_input(),
            notes_list(),
        ])
        .child_signal(NOTES.signal_vec_cloned().len().map(|len| {
            if len == 0 {
                Some(html!("p", {
                    .class(css_class("empty"))
                    .text("No notes.")
                }))
            } else {
                None
            }
        }))
    })
}

// ===

fn note_form() -> Dom {
    html!(TAG_FORM, {
        .attr("id", ID_NOTE_FORM)
        .class(css_class("form"))
        .children([
            html!(TAG_INPUT, {
                .attr("id", ID_NOTE_TITLE)
                .attr(PROP_NAME, "title")
                .attr(PROP_TITLE, "Title")
                .attr(PROP_PLACEHOLDER, "Title")
                .attr(PROP_REQUIRED, "")
            }),
            html!("textarea", {
                .attr("id", ID_NOTE_CONTENT)
                .attr(PROP_NAME, "content")
                .attr(PROP_TITLE, "Content")
                .attr(PROP_PLACEHOLDER, "Content")
                .attr(PROP_REQUIRED, "")
            }),
            html!(TAG_BUTTON, {
                .attr(PROP_TYPE, "submit")
                .text("Add note")
            }),
        ])
        .event_with_options(&EventOptions::preventable(), handle_submit)
    })
}

fn handle_submit(e: Submit) {
    e.prevent_default();
    let title = get_value_by_id(ID_NOTE_TITLE);
    let content = get_value_by_id(ID_NOTE_CONTENT);
    notes_create(title, content, e.form());
}

fn search_input() -> Dom {
    html!(TAG_INPUT, {
        .attr("id", ID_NOTE_SEARCH)
        .class(css_class("search"))
        .attr(PROP_TYPE, "search")
        .attr(PROP_PLACEHOLDER, "Search notes")
        .prop_signal(PROP_VALUE, SEARCH_TEXT.signal_cloned())
        .event(|_: events::Input| {
            notes_search(get_value_by_id(ID_NOTE_SEARCH));
        })
    })
}

// ===

fn notes_list() -> Dom {
    html!("ul", {
        .attr("id", ID_NOTES)
        .class(css_class("list"))
        .children_signal_vec(NOTES.signal_vec_cloned().map(note_item))
    })
}

fn note_item(note: Note) -> Dom {
    let id = note.id;
    let note_edit = note.clone();
    html!("li", {
        .class(css_class("item"))
        .attr(&attr_data(ATTR_ID), &id.to_string())
        .child(html!(TAG_SPAN, {
            .class(css_class("text"))
            .text(&view_note(&note))
        }))
        .children([
            button("Edit", move || notes_edit(note_edit.clone())),
            button("Delete", move || notes_delete(id)),
            button("Extract", move || notes_extract(note.clone())),
        ])
    })
}

fn button<F>(label: &str, mut click: F) -> Dom
    where F: FnMut() + 'static
{
    html!(TAG_BUTTON, {
        .class(css_class("button"))
        .attr(PROP_TYPE, "button")
        .text(label)
        .event(move|_: events::Click| click())
    })
}

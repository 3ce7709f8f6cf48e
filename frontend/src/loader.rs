use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

use shared::error::ApiError;
use shared::types::{ActionItem, ActionItemCreate, Note, NoteCreate};

use crate::actions::actions_load::{complete_action, create_action, load_actions};
use crate::api::HttpApi;
use crate::constants::{TEXT_DELETE_CONFIRM, TEXT_EDIT_PROMPT};
use crate::elements::app_message::message_show;
use crate::notes::notes_load::{create_note, delete_note, edit_note, extract_note, load_notes, search_notes};
use crate::state::{active_query, ACTIONS, EXTRACT, NOTES, SEARCH_TEXT};
use crate::types::ExtractView;
use crate::utils::{confirm, prompt};

pub fn report(err: ApiError) {
    match err.status {
        Some(status) => log::error!("request failed ({status}): {err}"),
        None => log::error!("request failed: {err}"),
    }
    message_show(err.to_string());
}

fn spawn<F>(future: F)
    where F: Future<Output=Result<(), ApiError>> + 'static
{
    spawn_local(async move {
        if let Err(err) = future.await {
            report(err);
        }
    });
}

// ===

pub fn notes_reload() {
    let query = active_query();
    spawn(async move {
        load_notes(&HttpApi, &NOTES, query.as_deref()).await
    });
}

pub fn notes_search(raw: String) {
    SEARCH_TEXT.set_neq(raw.clone());
    spawn(async move {
        search_notes(&HttpApi, &NOTES, &raw).await
    });
}

pub fn notes_create(title: String, content: String, form: Option<HtmlFormElement>) {
    spawn(async move {
        let note = create_note(&HttpApi, &NOTES, NoteCreate { title, content }, || {
            if let Some(form) = form {
                form.reset();
            }
            SEARCH_TEXT.set_neq("".to_string());
        }).await?;
        log::info!("note {} created", note.id);
        Ok(())
    });
}

pub fn notes_edit(note: Note) {
    let reply = prompt(TEXT_EDIT_PROMPT, &note.content);
    let query = active_query();
    spawn(async move {
        edit_note(&HttpApi, &NOTES, note.id, reply, query.as_deref()).await?;
        Ok(())
    });
}

pub fn notes_delete(id: i64) {
    let confirmed = confirm(TEXT_DELETE_CONFIRM);
    let query = active_query();
    spawn(async move {
        if delete_note(&HttpApi, &NOTES, id, confirmed, query.as_deref()).await? {
            extract_forget(id);
        }
        Ok(())
    });
}

pub fn notes_extract(note: Note) {
    spawn(async move {
        let extract = extract_note(&HttpApi, note.id).await?;
        EXTRACT.set(Some(ExtractView::new(&note, extract)));
        Ok(())
    });
}

pub fn extract_close() {
    EXTRACT.set(None);
}

fn extract_forget(id: i64) {
    let stale = match &*EXTRACT.lock_ref() {
        Some(view) => view.note_id == id,
        None => false,
    };
    if stale {
        extract_close();
    }
}

// ===

pub fn actions_reload() {
    spawn(async move {
        load_actions(&HttpApi, &ACTIONS).await
    });
}

pub fn actions_create(description: String, form: Option<HtmlFormElement>) {
    spawn(async move {
        let item = create_action(&HttpApi, &ACTIONS, ActionItemCreate { description }, || {
            if let Some(form) = form {
                form.reset();
            }
        }).await?;
        log::info!("action item {} created", item.id);
        Ok(())
    });
}

pub fn actions_complete(item: ActionItem) {
    spawn(async move {
        complete_action(&HttpApi, &ACTIONS, &item).await?;
        Ok(())
    });
}

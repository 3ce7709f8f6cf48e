use futures_signals::signal_vec::MutableVec;

use shared::error::ApiError;
use shared::types::{ActionItem, ActionItemCreate};

use crate::api::NotesApi;

pub async fn load_actions<A: NotesApi>(api: &A, actions: &MutableVec<ActionItem>) -> Result<(), ApiError> {
    actions.lock_mut().clear();
    let list = api.actions_list().await?;
    actions.lock_mut().replace_cloned(list);
    Ok(())
}

pub async fn create_action<A, F>(api: &A, actions: &MutableVec<ActionItem>, data: ActionItemCreate, reset: F) -> Result<ActionItem, ApiError>
    where
        A: NotesApi,
        F: FnOnce()
{
    let item = api.action_create(&data).await?;
    reset();
    load_actions(api, actions).await?;
    Ok(item)
}

/// Completion is one way: an item that is already done sends nothing.
pub async fn complete_action<A: NotesApi>(api: &A, actions: &MutableVec<ActionItem>, item: &ActionItem) -> Result<bool, ApiError> {
    if item.completed {
        return Ok(false);
    }
    api.action_complete(item.id).await?;
    load_actions(api, actions).await?;
    Ok(true)
}

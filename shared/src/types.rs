use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct NoteCreate {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NoteUpdate {
    pub fn content(content: impl Into<String>) -> Self {
        Self { title: None, content: Some(content.into()) }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ActionItem {
    pub id: i64,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ActionItemCreate {
    pub description: String,
}

/// Answer of `POST /notes/{id}/extract`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct NoteExtract {
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    Failure,
    NoContent,
    Json,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn note_update_sends_content_only() {
        let body = serde_json::to_value(NoteUpdate::content("new text")).unwrap();
        assert_eq!(body, json!({"content": "new text"}));
    }

    #[test]
    fn note_create_body() {
        let body = serde_json::to_value(NoteCreate {
            title: "Shopping".to_string(),
            content: "milk, eggs".to_string(),
        }).unwrap();
        assert_eq!(body, json!({"title": "Shopping", "content": "milk, eggs"}));
    }

    #[test]
    fn action_item_from_server() {
        let item: ActionItem = serde_json::from_value(json!({
            "id": 7,
            "description": "Call bank",
            "completed": false
        })).unwrap();
        assert_eq!(item, ActionItem { id: 7, description: "Call bank".to_string(), completed: false });
    }

    #[test]
    fn extract_tolerates_missing_lists() {
        let extract: NoteExtract = serde_json::from_value(json!({"tags": ["work"]})).unwrap();
        assert!(extract.action_items.is_empty());
        assert_eq!(extract.tags, vec!["work".to_string()]);
    }
}

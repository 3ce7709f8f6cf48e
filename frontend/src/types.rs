use shared::types::{Note, NoteExtract};

/// What the extraction panel shows for one note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractView {
    pub note_id: i64,
    pub title: String,
    pub tags: Vec<String>,
    pub action_items: Vec<String>,
}

impl ExtractView {
    pub fn new(note: &Note, extract: NoteExtract) -> Self {
        let mut tags = extract.tags;
        tags.sort();
        tags.dedup();
        Self {
            note_id: note.id,
            title: note.title.clone(),
            tags,
            action_items: extract.action_items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.action_items.is_empty()
    }
}

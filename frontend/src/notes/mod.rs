pub mod app_notes;
pub mod notes_extract;
pub mod notes_load;

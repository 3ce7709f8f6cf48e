pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_ROLE: &'static str = "role";
pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_REQUIRED: &'static str = "required";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_FORM: &'static str = "form";

pub static ID_NOTES: &'static str = "notes";
pub static ID_NOTE_FORM: &'static str = "note-form";
pub static ID_NOTE_TITLE: &'static str = "note-title";
pub static ID_NOTE_CONTENT: &'static str = "note-content";
pub static ID_NOTE_SEARCH: &'static str = "note-search";
pub static ID_ACTIONS: &'static str = "actions";
pub static ID_ACTION_FORM: &'static str = "action-form";
pub static ID_ACTION_DESC: &'static str = "action-desc";

pub static TEXT_EDIT_PROMPT: &'static str = "Enter new content:";
pub static TEXT_DELETE_CONFIRM: &'static str = "Delete this note?";

pub const MESSAGE_TIMEOUT_MS: u32 = 8000;

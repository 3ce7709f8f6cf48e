use futures_signals::signal::Mutable;
use futures_signals::signal_vec::MutableVec;
use once_cell::sync::Lazy;

use shared::types::{ActionItem, Note};
use shared::utils::search_query;

use crate::types::ExtractView;

// Last server answer for each list. Nothing else is kept between renders.
pub static NOTES: Lazy<MutableVec<Note>> = Lazy::new(|| {
    MutableVec::new()
});

pub static ACTIONS: Lazy<MutableVec<ActionItem>> = Lazy::new(|| {
    MutableVec::new()
});

/// Raw text of the search box.
pub static SEARCH_TEXT: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

pub static EXTRACT: Lazy<Mutable<Option<ExtractView>>> = Lazy::new(|| Mutable::new(None));

pub static MESSAGE: Lazy<Mutable<Option<String>>> = Lazy::new(|| Mutable::new(None));

pub fn active_query() -> Option<String> {
    search_query(&SEARCH_TEXT.lock_ref())
}

use dominator::traits::StaticEvent;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    get_document().and_then(|d| d.get_element_by_id(id))
}

pub fn get_value_by_id(id: &str) -> String {
    get_element_by_id(id)
        .map(|element| get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

/// `window.prompt`; `None` when the user cancels.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    get_window()
        .and_then(|w| w.prompt_with_message_and_default(message, default).ok())
        .flatten()
}

/// `window.confirm`; anything but an explicit "OK" counts as declined.
pub fn confirm(message: &str) -> bool {
    get_window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or_default()
}

pub fn attr_data(key: &str) -> String {
    format!("data-{key}")
}

pub fn obj_to_string<T>(data: &T) -> Option<String>
    where T: serde::Serialize
{
    serde_wasm_bindgen::to_value(data).ok()
        .and_then(|val| js_sys::JSON::stringify(&val).ok())
        .map(String::from)
}

pub fn js_error_text(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else if let Some(text) = value.as_string() {
        text
    } else {
        format!("{:?}", value)
    }
}

/// `submit` event of a `<form>`.
pub struct Submit {
    event: Event,
}

impl StaticEvent for Submit {
    const EVENT_TYPE: &'static str = "submit";

    fn unchecked_from_event(event: Event) -> Self {
        Self { event }
    }
}

impl Submit {
    pub fn prevent_default(&self) {
        self.event.prevent_default();
    }

    pub fn form(&self) -> Option<HtmlFormElement> {
        self.event.target().and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    }
}

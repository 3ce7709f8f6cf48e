use dominator::{Dom, html};

use crate::constants::TAG_DIV;
use crate::elements::app_body::app_body;
use crate::elements::app_header::app_header;
use crate::elements::app_message::app_message;

pub fn app_root() -> Dom {
    html!(TAG_DIV, {
        .class("app-root")
        .child_signal(app_message())
        .children([app_header(), app_body()])
    })
}

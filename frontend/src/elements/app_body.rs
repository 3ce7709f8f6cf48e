use dominator::{Dom, html};

use crate::actions::app_actions::app_actions;
use crate::constants::TAG_DIV;
use crate::notes::app_notes::app_notes;
use crate::notes::notes_extract::extract_content;

fn css_class(label: &str) -> String {
    format!("app-body__{label}")
}

pub fn app_body() -> Dom {
    html!(TAG_DIV,{
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .attr("id","col-1")
                .class(css_class("column-1"))
                .child(app_notes())
                .child_signal(extract_content())
            }),
            html!(TAG_DIV, {
                .attr("id","col-2")
                .class(css_class("column-2"))
                .child(app_actions())
            })
        ])
    })
}

use dioxus::prelude::*;

pub fn NotFound(cx: Scope) -> Element {
    cx.render(rsx! (
        div {
            h1 {
                "Page not found"
            }
        }
    ))
}

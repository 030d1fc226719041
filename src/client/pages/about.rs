use dioxus::prelude::*;

pub fn AboutUs(cx: Scope) -> Element {
    cx.render(rsx! (
        div {
            h1 {
                "About us"
            }
            p {
                "We are a small team building fast, reliable software for the web."
            }
        }
    ))
}

use dioxus::prelude::*;

#[inline_props]
fn ExternalLink<'a>(cx: Scope<'a>, href: &'a str, children: Element<'a>) -> Element {
    cx.render(rsx!(a {
        href: "{href}",
        children
    }))
}

pub fn ContactPage(cx: Scope) -> Element {
    cx.render(rsx! (
        div {
            h1 {
                "Contact"
            }
            p {
                "Write to us at "
                ExternalLink {
                    href: "mailto:hello@example.com",
                    "hello@example.com"
                }
                "."
            }
        }
    ))
}

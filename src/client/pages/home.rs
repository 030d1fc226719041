use dioxus::prelude::*;

#[inline_props]
fn Paragraph<'a>(cx: Scope<'a>, children: Element<'a>) -> Element {
    cx.render(rsx!(p { children }))
}

pub fn HomePage(cx: Scope) -> Element {
    cx.render(rsx! (
        div {
            h1 {
                "Welcome"
            }
            Paragraph {
                "This site is a single-page application: moving between pages swaps the view "
                "in place and keeps the browser history in sync."
            }
            Paragraph {
                "Use the links above to learn about us or to get in touch."
            }
        }
    ))
}

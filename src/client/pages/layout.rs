use dioxus::prelude::*;

use crate::navigation::NavigationManager;

#[inline_props]
pub fn Layout<'a>(
    cx: Scope<'a>,
    manager: &'a NavigationManager,
    children: Element<'a>,
) -> Element {
    cx.render(rsx! (
        header {
            class: "mx-auto text-center",
            nav {
                manager.routes().iter().map(|route| {
                    let href = route.href.as_str();
                    let title = route.entry.view.title();
                    rsx!(
                        Link {
                            key: "{href}",
                            to: href,
                            span {
                                class: "px-4",
                                "{title}"
                            }
                        }
                    )
                })
            }
        }
        main {
            class: "text-center",
            children
        }
    ))
}

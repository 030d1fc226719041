#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::{navigation::NavigationManager, routes::Page};

mod about;
mod contact;
mod home;
mod layout;
mod not_found;

pub struct AppProps {
    pub manager: NavigationManager,
}

#[inline_props]
fn PageView(cx: Scope, page: Page) -> Element {
    match page {
        Page::Home => cx.render(rsx!(home::HomePage {})),
        Page::About => cx.render(rsx!(about::AboutUs {})),
        Page::Contact => cx.render(rsx!(contact::ContactPage {})),
    }
}

pub fn app(cx: Scope<AppProps>) -> Element {
    let manager = &cx.props.manager;
    cx.render(rsx! {
        Router {
            layout::Layout {
                manager: manager,
                manager.routes().iter().map(|route| {
                    let href = route.href.as_str();
                    rsx!(
                        Route {
                            key: "{href}",
                            to: href,
                            PageView {
                                page: route.entry.view,
                            }
                        }
                    )
                })
                Route {
                    to: "",
                    not_found::NotFound {}
                }
            }
        }
    })
}

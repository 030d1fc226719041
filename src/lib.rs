use wasm_bindgen::prelude::*;

mod client;
pub mod config;
pub mod error;
pub mod navigation;
pub mod routes;

pub use error::ConfigError;
pub use navigation::{create_navigation_manager, NavigationManager};
pub use routes::{build_routes, Page, RouteEntry, RouteTable};

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    client::launch().map_err(|err| JsValue::from_str(&err.to_string()))
}

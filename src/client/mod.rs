use crate::{
    client::pages::{app, AppProps},
    config,
    error::ConfigError,
    navigation::create_navigation_manager,
};

mod pages;

pub fn launch() -> Result<(), ConfigError> {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    let manager = create_navigation_manager(config::base_path()).map_err(|err| {
        log::error!("Refusing to start: {err}");
        err
    })?;
    dioxus::web::launch_with_props(app, AppProps { manager }, |cfg| cfg);
    Ok(())
}

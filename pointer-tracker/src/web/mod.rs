mod app;
pub mod fragment;
mod logging;
mod target;

pub use self::app::App;
pub use self::target::WebTarget;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Node as WsNode;

use crate::{config::DemoConfig, error::Error};
use self::fragment::Location;

thread_local! {
    /// The currently mounted app, kept alive so that its listeners stay bound.
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Configure the panic hook to log to console.error
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    mount(None)
}

/// Mount the demo page, replacing any existing instance. `config_json` is an optional JSON encoded
/// [`DemoConfig`].
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
    let config = DemoConfig::from_json(config_json.as_deref())?;
    logging::init(config.level()?);

    unmount()?;

    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    let root: WsNode = match &config.root_id {
        Some(id) => document
            .get_element_by_id(id)
            .ok_or_else(|| Error::MissingRoot(id.clone()))?
            .into(),
        None => document.body().ok_or(Error::NoBody)?.into(),
    };

    let mut app = App::new(&document, config.view_events())?;
    app.mount(&Location::parent(&root))?;

    APP.with(|cell| *cell.borrow_mut() = Some(app));

    Ok(())
}

/// Unmount the demo page, if mounted. No further events will alter its state.
#[wasm_bindgen]
pub fn unmount() -> Result<(), JsValue> {
    let app = APP.with(|cell| cell.borrow_mut().take());

    if let Some(mut app) = app {
        app.unmount()?;
    }

    Ok(())
}

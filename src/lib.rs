#![deny(unused_crate_dependencies)]
// Fix for html! macro doing unit value assignments. (yew 0.19.3)
#![allow(clippy::let_unit_value)]

mod app;
mod components;
mod consts;
mod content;
pub mod dom;
mod logger;
pub mod scrollspy;
mod sections;
mod statics;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use yew::start_app_with_props_in_element;

pub use statics::Config;

use app::{App, Props};
use consts::SECTIONS;
use scrollspy::SectionRegistry;

/// Mounts the app using the config passed by the host page.
#[wasm_bindgen]
pub fn run(config: JsValue) {
    let config = match serde_wasm_bindgen::from_value(config) {
        Ok(config) => config,
        Err(err) => {
            // The logger is not installed yet.
            gloo_console::error!(format!("Failed to parse config: {}", err));
            return;
        }
    };

    run_with_config(config);
}

pub fn run_with_config(config: Config) {
    logger::init(config.log_level);

    let registry = match SectionRegistry::from_table(SECTIONS) {
        Ok(registry) => registry,
        Err(err) => {
            log::error!("Invalid section table: {}", err);
            log::error!("Fatal error: Failed to mount app");

            return;
        }
    };

    let element = match gloo_utils::document().get_element_by_id(config.mountpoint()) {
        Some(element) => element,
        None => {
            log::error!("Cannot find element with id {}", config.mountpoint());
            log::error!("Fatal error: Failed to mount app");

            return;
        }
    };

    gloo_utils::document().set_title(config.title());

    if !statics::set_config(config) {
        log::warn!("App was already started, ignoring new config");
        return;
    }

    let config = statics::config();
    let props = Props {
        registry: Rc::new(registry),
        header_offset: config.header_offset(),
        title: config.title().to_owned(),
    };

    log::info!(
        "Mounting at #{} with {} sections",
        config.mountpoint(),
        props.registry.len()
    );

    start_app_with_props_in_element::<App>(element, props);
}

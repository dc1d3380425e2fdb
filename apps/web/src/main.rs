mod certificates;
mod contact;
mod dom;
mod effects;
mod filter;
mod logger;
mod modal;
mod nav;

use std::rc::Rc;

use gloo::events::EventListener;
use portfolio_site::{Catalog, SiteConfig};
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();

    let document = match dom::document() {
        Ok(document) => document,
        Err(error) => {
            log::error!("no document to attach to: {error:?}");
            return;
        }
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| start()).forget();
    } else {
        start();
    }
}

fn start() {
    let config = Rc::new(SiteConfig::default());

    wire("navbar highlight", nav::setup());
    wire("certificates", certificates::setup());
    wire("scroll effects", effects::setup(config.clone()));
    wire("project filter", filter::setup(config.clone()));

    match Catalog::builtin() {
        Ok(catalog) => wire("project details", modal::setup(Rc::new(catalog))),
        Err(error) => log::error!("project catalog unavailable: {error}"),
    }

    wire("contact page", contact::setup(config));
}

/// Logs a component that failed to attach; the rest of the page keeps working.
fn wire(component: &str, outcome: Result<(), JsValue>) {
    match outcome {
        Ok(()) => log::debug!("{component} ready"),
        Err(error) => log::error!("{component} failed to attach: {error:?}"),
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use portfolio_site::certificates::CertificateFeed;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;

pub fn setup() -> Result<(), JsValue> {
    let document = dom::document()?;

    // Certificate buttons are placeholders until real links exist.
    for button in dom::query_all(&document, ".certificate-card button")? {
        EventListener::new(&button, "click", |event| event.prevent_default()).forget();
    }

    let Some(load_more) = document.get_element_by_id("loadMoreCerts") else {
        return Ok(());
    };
    let Some(grid) = document.query_selector("#certificates-grid .row")? else {
        return Ok(());
    };

    let feed = Rc::new(RefCell::new(CertificateFeed::default()));
    let control = load_more.clone();
    EventListener::new(&load_more, "click", move |_event| {
        if let Err(error) = load_batch(&feed, &grid, &control) {
            log::error!("loading certificates failed: {error:?}");
        }
    })
    .forget();

    Ok(())
}

fn load_batch(
    feed: &RefCell<CertificateFeed>,
    grid: &Element,
    control: &Element,
) -> Result<(), JsValue> {
    let mut feed = feed.borrow_mut();
    let batch = feed.next_batch();
    grid.insert_adjacent_html("beforeend", &batch.to_html())?;
    log::debug!("{} certificates shown", feed.loaded());

    if feed.is_exhausted() {
        dom::set_styles(control, &[("display", "none")])?;
    }
    Ok(())
}

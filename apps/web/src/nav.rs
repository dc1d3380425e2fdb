use portfolio_site::nav::{current_page, is_active};
use wasm_bindgen::JsValue;

use crate::dom;

const NAV_LINKS: &str = ".navbar-nav .nav-link";

/// Marks the navbar link for the current page as active.
pub fn setup() -> Result<(), JsValue> {
    let pathname = dom::window()?.location().pathname()?;
    let page = current_page(&pathname);
    let document = dom::document()?;

    for link in dom::query_all(&document, NAV_LINKS)? {
        let href = link.get_attribute("href").unwrap_or_default();
        if is_active(page, &href) {
            link.class_list().add_1("active")?;
        } else {
            link.class_list().remove_1("active")?;
        }
    }

    log::debug!("navbar highlighted for `{page}`");
    Ok(())
}

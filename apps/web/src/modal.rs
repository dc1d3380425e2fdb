use std::rc::Rc;

use gloo::events::EventListener;
use portfolio_site::{Catalog, ProjectDetail, ProjectDetailRenderer};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlDialogElement};

use crate::dom;

#[wasm_bindgen]
extern "C" {
    /// Bootstrap's modal component, used when the dialog is not a `<dialog>`.
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &Modal);
}

pub fn setup(catalog: Rc<Catalog>) -> Result<(), JsValue> {
    let document = dom::document()?;

    for button in dom::query_all(&document, ".read-more-btn")? {
        let catalog = catalog.clone();
        let trigger = button.clone();
        EventListener::new(&button, "click", move |_event| {
            let Some(id) = trigger.get_attribute("data-project") else {
                return;
            };
            let Some(detail) = ProjectDetailRenderer::new(&catalog).render(&id) else {
                return;
            };
            if let Err(error) = show(&detail) {
                log::error!("could not open details for `{id}`: {error:?}");
            }
        })
        .forget();
    }

    Ok(())
}

fn show(detail: &ProjectDetail) -> Result<(), JsValue> {
    let document = dom::document()?;
    let title = dom::by_id(&document, "projectModalLabel")?;
    let body = dom::by_id(&document, "projectModalBody")?;
    let dialog = dom::by_id(&document, "projectModal")?;

    title.set_text_content(Some(&detail.title));
    body.set_inner_html(&detail.body_html());
    open(&dialog)
}

fn open(dialog: &Element) -> Result<(), JsValue> {
    if let Some(native) = dialog.dyn_ref::<HtmlDialogElement>() {
        if !native.open() {
            native.show_modal()?;
        }
        return Ok(());
    }
    Modal::new(dialog)?.show();
    Ok(())
}

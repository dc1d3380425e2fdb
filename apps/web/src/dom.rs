use portfolio_site::markup::Fragment;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub fn by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
}

/// Sets inline style declarations; an empty value removes the property.
pub fn set_styles<'a, I>(element: &Element, declarations: I) -> Result<(), JsValue>
where
    I: IntoIterator<Item = &'a (&'a str, &'a str)>,
{
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = element.style();
    for (property, value) in declarations {
        style.set_property(property, value)?;
    }
    Ok(())
}

/// A detached `<div>` holding `content`.
pub fn div(document: &Document, class_name: &str, content: &Fragment) -> Result<Element, JsValue> {
    let element = document.create_element("div")?;
    element.set_class_name(class_name);
    element.set_inner_html(&content.to_html());
    Ok(element)
}

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::Array;
use portfolio_site::scroll::{
    anchor_target, scroll_destination, NavbarStyle, RevealTarget, SkillBarReveal, CARDS,
    SKILL_BARS, VISIBLE_CLASS,
};
use portfolio_site::SiteConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::dom;

pub fn setup(config: Rc<SiteConfig>) -> Result<(), JsValue> {
    let document = dom::document()?;

    setup_navbar(&document, &config)?;
    setup_skill_bars(&document, &config)?;
    observe(&document, CARDS, |card| {
        if let Err(error) = card.class_list().add_1(VISIBLE_CLASS) {
            log::warn!("card reveal failed: {error:?}");
        }
    })?;
    setup_anchor_scrolling(&document, &config)?;

    Ok(())
}

fn setup_navbar(document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(navbar) = document.query_selector(".navbar")? else {
        return Ok(());
    };
    let window = dom::window()?;
    let threshold = config.navbar_threshold_px;

    let scrolled = window.clone();
    EventListener::new(&window, "scroll", move |_event| {
        let offset = scrolled.scroll_y().unwrap_or_default();
        let style = NavbarStyle::for_offset(offset, threshold);
        if let Err(error) = dom::set_styles(&navbar, &style.declarations()) {
            log::warn!("navbar restyle failed: {error:?}");
        }
    })
    .forget();

    Ok(())
}

fn setup_skill_bars(document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let delay_ms = config.skill_bar_delay_ms;
    observe(document, SKILL_BARS, move |bar| {
        if let Err(error) = animate_skill_bar(bar, delay_ms) {
            log::warn!("skill bar animation failed: {error:?}");
        }
    })
}

fn animate_skill_bar(bar: &Element, delay_ms: u32) -> Result<(), JsValue> {
    let Some(html) = bar.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let reveal = SkillBarReveal::new(html.style().get_property_value("width")?);
    dom::set_styles(bar, &[SkillBarReveal::collapse()])?;

    let bar = bar.clone();
    Timeout::new(delay_ms, move || {
        if let Err(error) = dom::set_styles(&bar, &reveal.expand()) {
            log::warn!("skill bar expand failed: {error:?}");
        }
    })
    .forget();
    Ok(())
}

/// Calls `on_visible` for each matching element as it scrolls into view.
fn observe<F>(document: &Document, target: RevealTarget, on_visible: F) -> Result<(), JsValue>
where
    F: Fn(&Element) + 'static,
{
    let elements = dom::query_all(document, target.selector)?;
    if elements.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let element = entry.target();
                on_visible(&element);
                if target.policy.unobserve_after_trigger() {
                    observer.unobserve(&element);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(target.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }
    log::debug!("observing {} `{}` elements", elements.len(), target.selector);
    Ok(())
}

fn setup_anchor_scrolling(document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let offset = config.scroll_offset_px;

    for anchor in dom::query_all(document, r##"a[href^="#"]"##)? {
        let clicked = anchor.clone();
        EventListener::new(&anchor, "click", move |event| {
            let href = clicked.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();
            if let Err(error) = scroll_to(selector, offset) {
                log::debug!("no scroll target for `{selector}`: {error:?}");
            }
        })
        .forget();
    }

    Ok(())
}

fn scroll_to(selector: &str, offset: f64) -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(target) = document.query_selector(selector)? else {
        return Ok(());
    };
    let top = target
        .dyn_ref::<HtmlElement>()
        .map_or(0, HtmlElement::offset_top);

    let options = ScrollToOptions::new();
    options.set_top(scroll_destination(f64::from(top), offset));
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

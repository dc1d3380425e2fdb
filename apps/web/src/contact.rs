use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use portfolio_site::contact::{
    confirmation_class, confirmation_content, keeps_native_behavior, mailto_link,
    social_platform, BannerSlot, Notification, TOPIC_HIGHLIGHT,
};
use portfolio_site::{CopyTarget, SiteConfig, Topic};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, Event, MouseEvent};

use crate::dom;

type Banners = Rc<RefCell<BannerSlot<Element>>>;

const CLEARED_HIGHLIGHT: [(&str, &str); 2] = [("background-color", ""), ("border-color", "")];

/// Wires the contact page; other pages have no `.contact-info-card` and are skipped.
pub fn setup(config: Rc<SiteConfig>) -> Result<(), JsValue> {
    let document = dom::document()?;
    if document.query_selector(".contact-info-card")?.is_none() {
        return Ok(());
    }

    let confirmations = Banners::default();
    let notifications = Banners::default();
    setup_topics(&document, &config, &confirmations)?;
    setup_copy(&document, ".email-link", CopyTarget::Email, &config, &notifications)?;
    setup_copy(&document, ".phone-link", CopyTarget::Phone, &config, &notifications)?;
    setup_social(&document)?;

    log::debug!("contact page wired");
    Ok(())
}

fn setup_topics(
    document: &Document,
    config: &Rc<SiteConfig>,
    confirmations: &Banners,
) -> Result<(), JsValue> {
    let items = Rc::new(dom::query_all(document, ".topic-item")?);

    for item in items.iter() {
        let items = items.clone();
        let config = config.clone();
        let confirmations = confirmations.clone();
        let picked = item.clone();
        EventListener::new(item, "click", move |_event| {
            if let Err(error) = pick_topic(&picked, &items, &config, &confirmations) {
                log::error!("topic selection failed: {error:?}");
            }
        })
        .forget();
    }

    Ok(())
}

fn pick_topic(
    picked: &Element,
    items: &[Element],
    config: &SiteConfig,
    confirmations: &Banners,
) -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(email_button) = document.query_selector(".email-btn")? else {
        return Ok(());
    };

    let token = picked.get_attribute("data-topic").unwrap_or_default();
    email_button.set_attribute("href", &mailto_link(&config.contact_email, &token))?;

    dom::set_styles(picked, &TOPIC_HIGHLIGHT)?;
    for item in items.iter().filter(|item| !item.is_same_node(Some(picked.as_ref()))) {
        dom::set_styles(item, &CLEARED_HIGHLIGHT)?;
    }

    let label = picked
        .query_selector("span")?
        .and_then(|span| span.text_content())
        .unwrap_or_else(|| Topic::parse(&token).label().to_string());
    show_confirmation(
        &document,
        &email_button,
        &label,
        config.banner_ttl_ms,
        confirmations,
    )
}

fn show_confirmation(
    document: &Document,
    anchor: &Element,
    label: &str,
    ttl_ms: u32,
    confirmations: &Banners,
) -> Result<(), JsValue> {
    let banner = dom::div(document, &confirmation_class(), &confirmation_content(label))?;
    place_banner(confirmations, banner, ttl_ms, |banner| {
        anchor.insert_adjacent_element("afterend", banner).map(drop)
    })
}

/// Swaps `banner` in as the live one, inserts it, and removes it after `ttl_ms`.
fn place_banner<F>(slot: &Banners, banner: Element, ttl_ms: u32, insert: F) -> Result<(), JsValue>
where
    F: FnOnce(&Element) -> Result<(), JsValue>,
{
    if let Some(replaced) = slot.borrow_mut().show(banner.clone()) {
        replaced.remove();
    }
    insert(&banner)?;

    let slot = slot.clone();
    Timeout::new(ttl_ms, move || {
        slot.borrow_mut()
            .expire(|live| live.is_same_node(Some(banner.as_ref())));
        banner.remove();
    })
    .forget();
    Ok(())
}

fn setup_copy(
    document: &Document,
    selector: &str,
    target: CopyTarget,
    config: &SiteConfig,
    notifications: &Banners,
) -> Result<(), JsValue> {
    let payload = match target {
        CopyTarget::Email => config.contact_email.clone(),
        CopyTarget::Phone => config.contact_phone.clone(),
    };
    let ttl_ms = config.banner_ttl_ms;

    for link in dom::query_all(document, selector)? {
        let payload = payload.clone();
        let notifications = notifications.clone();
        EventListener::new(&link, "click", move |event| {
            if modifier_held(event) {
                return;
            }
            event.prevent_default();
            spawn_local(copy_and_notify(
                target,
                payload.clone(),
                ttl_ms,
                notifications.clone(),
            ));
        })
        .forget();
    }

    Ok(())
}

fn modifier_held(event: &Event) -> bool {
    event
        .dyn_ref::<MouseEvent>()
        .is_some_and(|click| keeps_native_behavior(click.ctrl_key(), click.meta_key()))
}

async fn copy_and_notify(
    target: CopyTarget,
    payload: String,
    ttl_ms: u32,
    notifications: Banners,
) {
    let outcome = write_clipboard(&payload).await;
    if let Err(error) = &outcome {
        log::error!("Failed to copy {}: {error:?}", target.as_str());
    }

    let notification = Notification::for_copy(target, &outcome);
    if let Err(error) = show_notification(&notification, ttl_ms, &notifications) {
        log::error!("could not show notification: {error:?}");
    }
}

async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let clipboard = dom::window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

fn show_notification(
    notification: &Notification,
    ttl_ms: u32,
    notifications: &Banners,
) -> Result<(), JsValue> {
    let document = dom::document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let banner = dom::div(&document, &notification.class_name(), &notification.content())?;
    banner.set_attribute("style", notification.style())?;
    place_banner(notifications, banner, ttl_ms, |banner| {
        body.append_child(banner).map(drop)
    })
}

fn setup_social(document: &Document) -> Result<(), JsValue> {
    for link in dom::query_all(document, ".social-btn, .social-icon")? {
        let clicked = link.clone();
        EventListener::new(&link, "click", move |_event| {
            let classes = clicked
                .query_selector("i")
                .ok()
                .flatten()
                .map(|icon| icon.class_name())
                .unwrap_or_default();
            if let Some(platform) = social_platform(&classes) {
                log::info!("Social media clicked: {platform}");
            }
        })
        .forget();
    }
    Ok(())
}

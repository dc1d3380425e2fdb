use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use portfolio_site::filter::{self, FilterState, PendingSlots};
use portfolio_site::SiteConfig;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;

struct ProjectFilter {
    buttons: Vec<Element>,
    cards: Vec<Element>,
    state: RefCell<FilterState>,
    pending: RefCell<PendingSlots<Timeout>>,
    config: Rc<SiteConfig>,
}

pub fn setup(config: Rc<SiteConfig>) -> Result<(), JsValue> {
    let document = dom::document()?;
    let buttons = dom::query_all(&document, ".filter-btn")?;
    let cards = dom::query_all(&document, ".project-card")?;
    if buttons.is_empty() || cards.is_empty() {
        return Ok(());
    }

    let pending = PendingSlots::new(cards.len());
    let filter = Rc::new(ProjectFilter {
        buttons,
        cards,
        state: RefCell::new(FilterState::default()),
        pending: RefCell::new(pending),
        config,
    });

    for button in &filter.buttons {
        let filter = filter.clone();
        let clicked = button.clone();
        EventListener::new(button, "click", move |_event| {
            if let Err(error) = filter.select(&clicked) {
                log::error!("filter click failed: {error:?}");
            }
        })
        .forget();
    }

    log::debug!(
        "filter wired for {} buttons and {} cards",
        filter.buttons.len(),
        filter.cards.len()
    );
    Ok(())
}

impl ProjectFilter {
    fn select(&self, clicked: &Element) -> Result<(), JsValue> {
        for button in &self.buttons {
            button.class_list().remove_1("active")?;
        }
        clicked.class_list().add_1("active")?;

        let token = clicked
            .get_attribute("data-filter")
            .unwrap_or_else(|| filter::ALL.to_string());
        let categories: Vec<String> = self
            .cards
            .iter()
            .map(|card| card.get_attribute("data-category").unwrap_or_default())
            .collect();
        let transitions = self
            .state
            .borrow_mut()
            .select(&token, categories.iter().map(String::as_str));

        let mut pending = self.pending.borrow_mut();
        let failures = filter::apply_each(
            self.cards.iter().zip(transitions),
            |index, (card, transition)| {
                // The deferred half is armed even if the immediate half failed.
                let immediate = dom::set_styles(card, transition.immediate());

                let card = card.clone();
                let timeout = Timeout::new(transition.delay_ms(&self.config), move || {
                    if let Err(error) = dom::set_styles(&card, transition.deferred()) {
                        log::warn!("deferred card style failed: {error:?}");
                    }
                });
                // Dropping the superseded timer cancels it.
                drop(pending.arm(index, timeout));
                immediate
            },
        );
        for (index, error) in failures {
            log::warn!("card {index} style failed: {error:?}");
        }

        log::debug!("filter `{token}` applied");
        Ok(())
    }
}

//! Project card filtering by category token.

use crate::config::SiteConfig;

pub const ALL: &str = "all";

/// A single CSS declaration, `(property, value)`.
pub type StyleDecl = (&'static str, &'static str);

/// The active filter token; `"all"` until the user picks another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active: ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Makes `token` active and plans a transition for every card.
    pub fn select<'c, I>(&mut self, token: &str, cards: I) -> Vec<CardTransition>
    where
        I: IntoIterator<Item = &'c str>,
    {
        token.clone_into(&mut self.active);
        plan(token, cards)
    }
}

/// `data_category` is the card's raw `data-category` attribute.
pub fn matches(token: &str, data_category: &str) -> bool {
    token == ALL || data_category.contains(token)
}

pub fn plan<'c, I>(token: &str, cards: I) -> Vec<CardTransition>
where
    I: IntoIterator<Item = &'c str>,
{
    cards
        .into_iter()
        .map(|categories| {
            if matches(token, categories) {
                CardTransition::Reveal
            } else {
                CardTransition::Conceal
            }
        })
        .collect()
}

/// Runs `apply` on every card even when some fail; returns the failures by index.
pub fn apply_each<C, E, I, F>(cards: I, mut apply: F) -> Vec<(usize, E)>
where
    I: IntoIterator<Item = C>,
    F: FnMut(usize, C) -> Result<(), E>,
{
    cards
        .into_iter()
        .enumerate()
        .filter_map(|(index, card)| apply(index, card).err().map(|error| (index, error)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTransition {
    Reveal,
    Conceal,
}

impl CardTransition {
    /// Styles applied as soon as the filter is clicked.
    pub const fn immediate(self) -> &'static [StyleDecl] {
        match self {
            Self::Reveal => &[("display", "block")],
            Self::Conceal => &[("opacity", "0"), ("transform", "scale(0.8)")],
        }
    }

    /// Styles applied once [`CardTransition::delay_ms`] has elapsed.
    pub const fn deferred(self) -> &'static [StyleDecl] {
        match self {
            Self::Reveal => &[("opacity", "1"), ("transform", "scale(1)")],
            Self::Conceal => &[("display", "none")],
        }
    }

    pub const fn delay_ms(self, config: &SiteConfig) -> u32 {
        match self {
            Self::Reveal => config.reveal_delay_ms,
            Self::Conceal => config.conceal_delay_ms,
        }
    }
}

/// One pending timer handle per card.
///
/// Arming a card hands back the handle it replaces so the caller can cancel
/// it; a later filter click therefore always wins over an earlier one.
#[derive(Debug)]
pub struct PendingSlots<H> {
    slots: Vec<Option<H>>,
}

impl<H> PendingSlots<H> {
    pub fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn arm(&mut self, card: usize, handle: H) -> Option<H> {
        if card >= self.slots.len() {
            self.slots.resize_with(card + 1, || None);
        }
        self.slots[card].replace(handle)
    }

    pub fn is_armed(&self, card: usize) -> bool {
        self.slots.get(card).is_some_and(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_each, matches, plan, CardTransition, FilterState, PendingSlots};
    use crate::config::SiteConfig;

    const CARDS: [&str; 4] = ["AI + IoT", "Computer Vision", "IoT Solution", "AI Full Stack"];

    #[test]
    fn all_reveals_every_card() {
        assert!(plan("all", CARDS)
            .iter()
            .all(|transition| *transition == CardTransition::Reveal));
    }

    #[test]
    fn specific_token_reveals_only_cards_containing_it() {
        let transitions = plan("AI + IoT", CARDS);
        assert_eq!(
            transitions,
            vec![
                CardTransition::Reveal,
                CardTransition::Conceal,
                CardTransition::Conceal,
                CardTransition::Conceal,
            ]
        );

        let iot = plan("IoT", CARDS);
        assert_eq!(iot[0], CardTransition::Reveal);
        assert_eq!(iot[2], CardTransition::Reveal);
        assert_eq!(iot[1], CardTransition::Conceal);
    }

    #[test]
    fn matching_is_case_sensitive_substring() {
        assert!(matches("iot", "ai iot web"));
        assert!(!matches("IoT", "ai iot web"));
        assert!(matches("all", ""));
    }

    #[test]
    fn select_tracks_the_active_token() {
        let mut state = FilterState::default();
        assert_eq!(state.active(), "all");
        let transitions = state.select("Computer Vision", CARDS);
        assert_eq!(state.active(), "Computer Vision");
        assert_eq!(transitions.iter().filter(|t| **t == CardTransition::Reveal).count(), 1);
    }

    #[test]
    fn conceal_hides_after_the_configured_delay() {
        let config = SiteConfig::default();
        assert_eq!(CardTransition::Conceal.delay_ms(&config), 300);
        assert_eq!(CardTransition::Conceal.deferred(), &[("display", "none")]);
        assert_eq!(CardTransition::Reveal.delay_ms(&config), 100);
        assert_eq!(CardTransition::Reveal.immediate(), &[("display", "block")]);
    }

    #[test]
    fn a_failing_card_does_not_stop_the_rest() {
        let mut styled = Vec::new();
        let failures = apply_each(plan("IoT", CARDS), |index, transition| {
            if index == 1 {
                return Err("detached");
            }
            styled.push((index, transition));
            Ok(())
        });

        assert_eq!(failures, vec![(1, "detached")]);
        assert_eq!(
            styled,
            vec![
                (0, CardTransition::Reveal),
                (2, CardTransition::Reveal),
                (3, CardTransition::Conceal),
            ]
        );
    }

    #[test]
    fn arming_a_card_returns_the_superseded_handle() {
        let mut slots = PendingSlots::new(2);
        assert_eq!(slots.arm(0, "first hide"), None);
        assert!(slots.is_armed(0));
        assert_eq!(slots.arm(0, "second show"), Some("first hide"));
        assert!(!slots.is_armed(1));
        assert!(!slots.is_armed(7));

        assert_eq!(slots.arm(4, "grown"), None);
        assert_eq!(slots.len(), 5);
    }
}

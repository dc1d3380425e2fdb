//! Scroll-driven effects: navbar style, reveal-on-intersect, skill bars and
//! in-page anchor scrolling.

use crate::filter::StyleDecl;

pub const SKILL_BAR_THRESHOLD: f64 = 0.5;
pub const CARD_THRESHOLD: f64 = 0.1;
pub const SKILL_BAR_TRANSITION: &str = "width 1.5s ease-in-out";
/// Class added to cards once they enter the viewport.
pub const VISIBLE_CLASS: &str = "animate-in";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Expanded,
    Compact,
}

impl NavbarStyle {
    /// Compact strictly past the threshold, expanded otherwise.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Compact
        } else {
            Self::Expanded
        }
    }

    pub const fn declarations(self) -> [StyleDecl; 2] {
        match self {
            Self::Expanded => [
                ("padding", "15px 0"),
                ("box-shadow", "0 2px 10px rgba(0, 0, 0, 0.1)"),
            ],
            Self::Compact => [
                ("padding", "10px 0"),
                ("box-shadow", "0 5px 20px rgba(0, 0, 0, 0.1)"),
            ],
        }
    }
}

/// Whether an observed element keeps being observed after it first shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPolicy {
    Once,
    EveryIntersection,
}

impl RevealPolicy {
    pub const fn unobserve_after_trigger(self) -> bool {
        matches!(self, Self::Once)
    }
}

/// Which elements get observed, and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTarget {
    pub selector: &'static str,
    pub threshold: f64,
    pub policy: RevealPolicy,
}

pub const SKILL_BARS: RevealTarget = RevealTarget {
    selector: ".progress-bar",
    threshold: SKILL_BAR_THRESHOLD,
    policy: RevealPolicy::Once,
};

pub const CARDS: RevealTarget = RevealTarget {
    selector: ".project-card, .certificate-card, .skill-card",
    threshold: CARD_THRESHOLD,
    policy: RevealPolicy::EveryIntersection,
};

/// Width animation for a skill bar whose final width is `target_width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBarReveal {
    pub target_width: String,
}

impl SkillBarReveal {
    pub fn new(target_width: impl Into<String>) -> Self {
        Self {
            target_width: target_width.into(),
        }
    }

    pub const fn collapse() -> StyleDecl {
        ("width", "0")
    }

    pub fn expand(&self) -> [(&'static str, &str); 2] {
        [
            ("transition", SKILL_BAR_TRANSITION),
            ("width", self.target_width.as_str()),
        ]
    }
}

/// Fragment id of an in-page link, if it names one (`"#about"` -> `"#about"`).
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Scroll position that puts `offset_top` just below the fixed navbar.
pub fn scroll_destination(offset_top: f64, navbar_offset: f64) -> f64 {
    offset_top - navbar_offset
}

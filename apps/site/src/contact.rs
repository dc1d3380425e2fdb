//! Contact page helpers: mailto templates, clipboard notifications and the
//! confirmation banner shown when a topic is picked.

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::domain::{CopyTarget, NotificationKind, Topic};
use crate::markup::{icon, Element, Fragment};

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[allow(clippy::expect_used)]
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Inline styles applied to the picked topic item; cleared on its siblings.
pub const TOPIC_HIGHLIGHT: [(&str, &str); 2] = [
    ("background-color", "rgba(108, 99, 255, 0.1)"),
    ("border-color", "var(--primary-color)"),
];

pub const NOTIFICATION_CLASS: &str = "global-notification";
pub const CONFIRMATION_CLASS: &str = "topic-confirmation";

const NOTIFICATION_STYLE: &str = "margin-top: 80px; margin-left: auto; margin-right: auto; \
     max-width: 500px; z-index: 9999; text-align: center; box-shadow: 0 5px 20px rgba(0,0,0,0.2);";

impl Topic {
    pub const fn subject(self) -> &'static str {
        match self {
            Self::Internship => "Internship Opportunity Inquiry",
            Self::Project => "Project Collaboration Proposal",
            Self::Freelance => "Freelance Work Inquiry",
            Self::Question => "Technical Question from Portfolio",
            Self::General => "Portfolio Inquiry",
        }
    }

    pub const fn body(self) -> &'static str {
        match self {
            Self::Internship => INTERNSHIP_BODY,
            Self::Project => PROJECT_BODY,
            Self::Freelance => FREELANCE_BODY,
            Self::Question => QUESTION_BODY,
            Self::General => GENERAL_BODY,
        }
    }
}

const INTERNSHIP_BODY: &str = "Hello Yashwanth,

I came across your portfolio and I'm impressed with your work. I'm reaching out regarding potential internship opportunities.

About the opportunity:
- Company/Organization:\x20
- Position/Role:\x20
- Duration:\x20
- Requirements:\x20

I believe your skills in Full-Stack Development and IoT would be a great fit. Could we schedule a time to discuss this further?

Best regards,";

const PROJECT_BODY: &str = "Hello Yashwanth,

I visited your portfolio and was impressed by your projects. I have a project idea that aligns with your skills and I'd like to discuss potential collaboration.

Project Overview:
- Type:\x20
- Technologies:\x20
- Timeline:\x20
- Goals:\x20

Your expertise in [specific area] would be valuable for this project. Are you available for a discussion about this?

Best regards,";

const FREELANCE_BODY: &str = "Hello Yashwanth,

I found your portfolio and I'm interested in discussing potential freelance work with you.

Project Details:
- Scope:\x20
- Technologies needed:\x20
- Budget range:\x20
- Timeline:\x20

Your work on [mention specific project] caught my attention. Would you be available for freelance collaboration?

Best regards,";

const QUESTION_BODY: &str = "Hello Yashwanth,

I came across your portfolio and I have a technical question related to your work.

My Question:
[Your question here]

I'm particularly interested in your experience with [specific technology/project]. Could you provide some insights?

Thank you,
";

const GENERAL_BODY: &str = "Hello Yashwanth,

I came across your portfolio and wanted to connect regarding [your reason here].

[Your message here]

Best regards,";

pub fn email_subject(topic: &str) -> &'static str {
    Topic::parse(topic).subject()
}

pub fn email_body(topic: &str) -> &'static str {
    Topic::parse(topic).body()
}

/// Percent-encodes a URI component exactly like `encodeURIComponent`.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// `mailto:` link pre-filled with the subject and body for `topic`.
pub fn mailto_link(recipient: &str, topic: &str) -> String {
    let topic = Topic::parse(topic);
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_component(topic.subject()),
        encode_component(topic.body())
    )
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Ctrl/Cmd clicks keep the browser's own link handling.
pub const fn keeps_native_behavior(ctrl_key: bool, meta_key: bool) -> bool {
    ctrl_key || meta_key
}

/// Platform name from a social icon's class list (`"fab fa-github"` -> `"fa-github"`).
pub fn social_platform(icon_classes: &str) -> Option<&str> {
    icon_classes.split_whitespace().nth(1)
}

/// Transient page-level banner; at most one is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: message.into(),
        }
    }

    /// Notification for a finished clipboard write of `target`.
    pub fn for_copy<E>(target: CopyTarget, outcome: &Result<(), E>) -> Self {
        match outcome {
            Ok(()) => Self::success(target.success_message()),
            Err(_) => Self::failure(target.failure_message()),
        }
    }

    pub fn class_name(&self) -> String {
        format!(
            "{NOTIFICATION_CLASS} alert {} fixed-top",
            self.kind.alert_class()
        )
    }

    pub const fn style(&self) -> &'static str {
        NOTIFICATION_STYLE
    }

    /// Inner content of the banner element.
    pub fn content(&self) -> Fragment {
        let mut fragment = Fragment::new();
        fragment.push(icon(&format!("fas {} me-2", self.kind.icon())));
        fragment.push(crate::markup::Node::text(self.message.clone()));
        fragment
    }

    pub fn to_fragment(&self) -> Fragment {
        Fragment::from(
            Element::new("div")
                .class(&self.class_name())
                .attr("style", self.style())
                .children(self.content().0),
        )
    }
}

/// The one live banner of a kind.
///
/// Showing a new banner hands back the one it replaces, which the caller
/// removes from the page before inserting the new one.
#[derive(Debug)]
pub struct BannerSlot<B> {
    live: Option<B>,
}

impl<B> Default for BannerSlot<B> {
    fn default() -> Self {
        Self { live: None }
    }
}

impl<B> BannerSlot<B> {
    #[must_use]
    pub fn show(&mut self, banner: B) -> Option<B> {
        self.live.replace(banner)
    }

    /// Clears the slot when its timer fires, unless a newer banner took over.
    pub fn expire<F>(&mut self, is_same: F) -> Option<B>
    where
        F: FnOnce(&B) -> bool,
    {
        if self.live.as_ref().is_some_and(is_same) {
            self.live.take()
        } else {
            None
        }
    }

    pub const fn live(&self) -> Option<&B> {
        self.live.as_ref()
    }
}

pub fn confirmation_message(topic_label: &str) -> String {
    format!("Email template updated for \"{topic_label}\"")
}

/// Class list of the banner confirming a topic pick.
pub fn confirmation_class() -> String {
    format!("{CONFIRMATION_CLASS} alert alert-success mt-3")
}

pub fn confirmation_content(topic_label: &str) -> Fragment {
    let mut fragment = Fragment::new();
    fragment.push(icon("fas fa-check-circle me-2"));
    fragment.push(crate::markup::Node::text(confirmation_message(topic_label)));
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subjects_follow_topic_with_default_fallback() {
        assert_eq!(email_subject("internship"), "Internship Opportunity Inquiry");
        assert_eq!(email_subject("nonexistent"), "Portfolio Inquiry");
        assert!(email_body("nonexistent").contains("[your reason here]"));
        assert!(email_body("question").ends_with("Thank you,\n"));
    }

    #[test]
    fn mailto_for_project_topic() {
        let link = mailto_link("yashwanthkumarv155@gmail.com", "project");
        assert!(link.starts_with(
            "mailto:yashwanthkumarv155@gmail.com?subject=Project%20Collaboration%20Proposal&body="
        ));
        assert!(link.contains("&body=Hello%20Yashwanth%2C%0A%0AI%20visited"));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }

    #[test]
    fn encoding_matches_encode_uri_component() {
        assert_eq!(
            encode_component("a-b_c.d!e~f*g'h(i)j k&l=m?n/o:p@q#r"),
            "a-b_c.d!e~f*g'h(i)j%20k%26l%3Dm%3Fn%2Fo%3Ap%40q%23r"
        );
        assert_eq!(encode_component("₹"), "%E2%82%B9");
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("someone@example.com"));
        assert!(!validate_email("someone@example"));
        assert!(!validate_email("some one@example.com"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn copy_outcome_selects_notification_kind() {
        let ok: Result<(), ()> = Ok(());
        let success = Notification::for_copy(CopyTarget::Email, &ok);
        assert_eq!(success.kind, NotificationKind::Success);
        assert!(success.message.contains("copied"));

        let rejected: Result<(), &str> = Err("permission denied");
        let failure = Notification::for_copy(CopyTarget::Phone, &rejected);
        assert_eq!(failure.kind, NotificationKind::Failure);
        assert_eq!(failure.message, "Failed to copy phone number");
        assert!(failure.class_name().contains("alert-danger"));
    }

    #[test]
    fn notification_markup_is_a_single_global_banner() {
        let fragment = Notification::success("Email address copied to clipboard!").to_fragment();
        assert_eq!(fragment.count_class(NOTIFICATION_CLASS), 1);
        assert_eq!(fragment.count_class("fa-check-circle"), 1);
        assert_eq!(fragment.text_content(), "Email address copied to clipboard!");
    }

    #[test]
    fn field_lines_keep_their_trailing_space() {
        let link = mailto_link("yashwanthkumarv155@gmail.com", "internship");
        assert!(link.contains("Company%2FOrganization%3A%20%0A-%20Position%2FRole%3A%20%0A"));
        assert!(mailto_link("a@b.co", "project").contains("Goals%3A%20%0A"));
        assert!(email_body("freelance").contains("- Budget range: \n"));
        assert!(!email_body("general").contains(" \n"));
    }

    #[test]
    fn a_second_banner_replaces_the_first() {
        let mut page: Vec<u32> = Vec::new();
        let mut slot = BannerSlot::default();
        for banner in [1, 2] {
            if let Some(old) = slot.show(banner) {
                page.retain(|shown| *shown != old);
            }
            page.push(banner);
            assert_eq!(page.len(), 1);
        }
        assert_eq!(page, vec![2]);
        assert_eq!(slot.live(), Some(&2));

        // The first banner's timer must not clear its replacement.
        assert_eq!(slot.expire(|live| *live == 1), None);
        assert_eq!(slot.live(), Some(&2));
        assert_eq!(slot.expire(|live| *live == 2), Some(2));
        assert_eq!(slot.live(), None);
    }

    #[test]
    fn confirmation_names_the_topic() {
        let content = confirmation_content("Internship");
        assert_eq!(content.text_content(), "Email template updated for \"Internship\"");
        assert!(content.to_html().contains("&quot;Internship&quot;"));
        assert!(confirmation_class().starts_with(CONFIRMATION_CLASS));
    }

    #[test]
    fn modifier_clicks_and_social_platforms() {
        assert!(keeps_native_behavior(true, false));
        assert!(keeps_native_behavior(false, true));
        assert!(!keeps_native_behavior(false, false));
        assert_eq!(social_platform("fab fa-github"), Some("fa-github"));
        assert_eq!(social_platform("fab"), None);
    }
}

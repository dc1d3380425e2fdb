use crate::markup::{icon, Element, Fragment};

pub const INITIAL_CERTIFICATES: u32 = 9;
pub const BATCH_SIZE: u32 = 3;
pub const MAX_CERTIFICATES: u32 = 15;

/// Counts certificates shown by the "load more" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateFeed {
    loaded: u32,
}

impl Default for CertificateFeed {
    fn default() -> Self {
        Self {
            loaded: INITIAL_CERTIFICATES,
        }
    }
}

impl CertificateFeed {
    pub const fn loaded(self) -> u32 {
        self.loaded
    }

    pub const fn is_exhausted(self) -> bool {
        self.loaded >= MAX_CERTIFICATES
    }

    /// Cards for the next batch; empty once the feed is exhausted.
    pub fn next_batch(&mut self) -> Fragment {
        let mut fragment = Fragment::new();
        if self.is_exhausted() {
            return fragment;
        }
        for _ in 0..BATCH_SIZE {
            self.loaded += 1;
            fragment.push(placeholder_card(self.loaded));
        }
        fragment
    }
}

fn placeholder_card(number: u32) -> Element {
    let content = Element::new("div")
        .class("certificate-content")
        .child(Element::new("div").class("certificate-badge").text("New"))
        .child(Element::new("h4").text(format!("Certificate {number}")))
        .child(Element::new("p").class("certificate-org").text("Issuing Organization"))
        .child(
            Element::new("p")
                .class("certificate-date")
                .child(icon("far fa-calendar me-2"))
                .text("2024"),
        )
        .child(
            Element::new("p")
                .class("certificate-desc")
                .text("Additional certificate details..."),
        )
        .child(
            Element::new("button")
                .class("btn btn-sm btn-outline-primary")
                .text("View Certificate"),
        );

    Element::new("div").class("col-lg-4 col-md-6").child(
        Element::new("div")
            .class("certificate-card")
            .child(
                Element::new("div").class("certificate-image").child(
                    Element::new("div")
                        .class("cert-placeholder bg-primary")
                        .child(icon("fas fa-certificate fa-4x text-white")),
                ),
            )
            .child(content),
    )
}

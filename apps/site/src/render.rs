//! Builds the project detail dialog from a catalog record.

use crate::catalog::{Catalog, ProjectRecord};
use crate::markup::{icon, Element, Fragment};

pub const FLOW_ARROW: &str = "↓";
pub const IMPACT_MARK: &str = "✓";

/// Title and body for the project dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub title: String,
    pub body: Fragment,
}

impl ProjectDetail {
    pub fn body_html(&self) -> String {
        self.body.to_html()
    }
}

pub struct ProjectDetailRenderer<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProjectDetailRenderer<'a> {
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// `None` when `id` is not in the catalog; callers leave the dialog alone.
    pub fn render(&self, id: &str) -> Option<ProjectDetail> {
        let Some(record) = self.catalog.get(id) else {
            log::debug!("no catalog entry for project `{id}`");
            return None;
        };
        Some(render_record(record))
    }
}

/// Sections are emitted in a fixed order; optional ones only when present.
pub fn render_record(record: &ProjectRecord) -> ProjectDetail {
    let mut body = Fragment::new();

    body.push(header(record));
    body.push(paragraph_section("fa-info-circle", "Project Overview", &record.overview));
    body.push(paragraph_section("fa-exclamation-triangle", "Problem Statement", &record.problem));
    body.push(paragraph_section("fa-lightbulb", "Solution", &record.solution));
    body.push(features(record));
    body.push(architecture(&record.architecture));
    body.push(technologies(&record.technologies));

    if let Some(ai_design) = &record.ai_design {
        body.push(paragraph_section("fa-robot", "AI/ML Design", ai_design));
    }
    if let Some(accuracy) = &record.accuracy {
        body.push(paragraph_section("fa-chart-line", "Performance Metrics", accuracy));
    }
    if let Some(differentiation) = &record.differentiation {
        body.push(
            section("fa-bullseye", "What Makes This Different").child(
                Element::new("ul")
                    .class("feature-list")
                    .children(differentiation.iter().map(|item| Element::new("li").text(item))),
            ),
        );
    }
    if let Some(impact) = &record.impact {
        body.push(
            section("fa-chart-line", "Impact & Results").child(
                Element::new("div")
                    .class("impact-stats")
                    .children(impact.iter().map(|item| {
                        Element::new("div")
                            .class("impact-stat")
                            .child(Element::new("h5").text(IMPACT_MARK))
                            .child(Element::new("p").text(item))
                    })),
            ),
        );
    }
    if let Some(applications) = &record.applications {
        body.push(paragraph_section("fa-rocket", "Applications", &applications.join(", ")));
    }

    ProjectDetail {
        title: record.title.clone(),
        body,
    }
}

fn header(record: &ProjectRecord) -> Element {
    let mut tags = Element::new("div")
        .class("modal-project-tags")
        .child(Element::new("span").class("modal-tag").text(&record.category))
        .child(Element::new("span").class("modal-tag").text(&record.date));

    if let Some(funding) = &record.funding {
        tags = tags.child(Element::new("span").class("modal-tag bg-warning").text(funding));
    }
    if let Some(achievement) = &record.achievement {
        tags = tags.child(Element::new("span").class("modal-tag bg-success").text(achievement));
    }

    Element::new("div").class("modal-project-header").child(tags)
}

fn section(icon_name: &str, heading: &str) -> Element {
    Element::new("div").class("modal-section").child(
        Element::new("h4")
            .child(icon(&format!("fas {icon_name} me-2")))
            .text(heading),
    )
}

fn paragraph_section(icon_name: &str, heading: &str, text: &str) -> Element {
    section(icon_name, heading).child(Element::new("p").text(text))
}

fn features(record: &ProjectRecord) -> Element {
    let groups = record.features.iter().map(|group| {
        Element::new("div")
            .class("feature-item")
            .child(Element::new("h6").text(&group.group))
            .child(
                Element::new("ul").children(group.items.iter().map(|item| Element::new("li").text(item))),
            )
    });

    section("fa-star", "Key Features").child(Element::new("div").class("feature-grid").children(groups))
}

fn architecture(stages: &[String]) -> Element {
    let mut flow = Element::new("div").class("architecture-flow");
    for (index, stage) in stages.iter().enumerate() {
        if index > 0 {
            flow = flow.child(Element::new("div").class("flow-arrow").text(FLOW_ARROW));
        }
        flow = flow.child(Element::new("div").class("flow-step").text(stage));
    }

    section("fa-layer-group", "System Architecture").child(flow)
}

fn technologies(technologies: &[String]) -> Element {
    section("fa-tools", "Technologies Used").child(
        Element::new("div")
            .class("modal-tech-stack")
            .children(
                technologies
                    .iter()
                    .map(|tech| Element::new("span").class("modal-tech-tag").text(tech)),
            ),
    )
}

use portfolio_site::contact::{email_subject, mailto_link};
use portfolio_site::filter::{self, CardTransition};
use portfolio_site::{Catalog, ProjectDetailRenderer, SiteConfig};

fn catalog() -> Catalog {
    Catalog::builtin().expect("built-in catalog parses")
}

#[test]
fn every_known_project_renders_title_and_overview() {
    let catalog = catalog();
    let renderer = ProjectDetailRenderer::new(&catalog);

    for id in catalog.ids() {
        let detail = renderer.render(id).expect("known id renders");
        assert!(!detail.title.is_empty(), "{id} has an empty title");
        assert!(
            detail.body_html().contains("Project Overview"),
            "{id} has no overview section"
        );
    }
}

#[test]
fn arrows_sit_between_architecture_stages() {
    let catalog = catalog();
    let renderer = ProjectDetailRenderer::new(&catalog);

    for record in catalog.iter() {
        let detail = renderer.render(&record.id).expect("known id renders");
        assert_eq!(
            detail.body.count_class("flow-arrow"),
            record.architecture.len() - 1,
            "{}",
            record.id
        );
    }
}

#[test]
fn feature_groups_render_in_catalog_order() {
    let catalog = catalog();
    let record = catalog.get("plant-care").expect("plant-care exists");
    let detail = ProjectDetailRenderer::new(&catalog)
        .render("plant-care")
        .expect("plant-care renders");

    let rendered: Vec<String> = detail
        .body
        .find_class("feature-item")
        .iter()
        .map(|item| item.text_content())
        .collect();
    let expected: Vec<String> = record
        .features
        .iter()
        .map(|group| format!("{}{}", group.group, group.items.concat()))
        .collect();
    assert_eq!(rendered, expected);
}

#[test]
fn badges_and_optional_sections_follow_the_record() {
    let catalog = catalog();
    let renderer = ProjectDetailRenderer::new(&catalog);

    let funded = renderer.render("blue-future").expect("blue-future renders");
    assert_eq!(funded.body.count_class("bg-warning"), 1);
    assert!(!funded.body_html().contains("AI/ML Design"));

    let plain = renderer.render("dinetech").expect("dinetech renders");
    assert_eq!(plain.body.count_class("bg-warning"), 0);
    assert_eq!(plain.body.count_class("bg-success"), 0);
    assert!(!plain.body_html().contains("Applications"));

    let awarded = renderer
        .render("language-learning")
        .expect("language-learning renders");
    assert!(awarded.body.find_class("bg-success")[0]
        .text_content()
        .contains("4th Prize"));

    let vision = renderer.render("sign-language").expect("sign-language renders");
    let html = vision.body_html();
    let metrics = html.find("Performance Metrics").expect("accuracy section");
    let impact = html.find("Impact &amp; Results").expect("impact section");
    let applications = html.find("Applications").expect("applications section");
    assert!(metrics < impact && impact < applications);
}

#[test]
fn unknown_ids_are_a_silent_no_op() {
    let catalog = catalog();
    assert!(ProjectDetailRenderer::new(&catalog).render("nonexistent").is_none());
}

#[test]
fn filtering_the_catalog_categories() {
    let catalog = catalog();
    let categories: Vec<&str> = catalog.iter().map(|record| record.category.as_str()).collect();

    let all = filter::plan("all", categories.iter().copied());
    assert_eq!(all.len(), catalog.len());
    assert!(all.iter().all(|t| *t == CardTransition::Reveal));

    let kept: Vec<&str> = catalog
        .iter()
        .zip(filter::plan("AI + IoT", categories.iter().copied()))
        .filter(|(_, transition)| *transition == CardTransition::Reveal)
        .map(|(record, _)| record.id.as_str())
        .collect();
    assert_eq!(kept, vec!["plant-care"]);
}

#[test]
fn contact_helpers_use_the_configured_recipient() {
    let config = SiteConfig::default();
    assert_eq!(email_subject("internship"), "Internship Opportunity Inquiry");
    assert_eq!(email_subject("nonexistent"), "Portfolio Inquiry");
    assert!(mailto_link(&config.contact_email, "project").starts_with(
        "mailto:yashwanthkumarv155@gmail.com?subject=Project%20Collaboration%20Proposal&body="
    ));
}

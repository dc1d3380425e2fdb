use color_eyre::Result;
use portfolio_site::contact::{email_subject, mailto_link};
use portfolio_site::filter;
use portfolio_site::render::render_record;
use portfolio_site::{Catalog, SiteConfig};
use serde::Serialize;

use crate::cli::Action;

#[derive(Debug, Serialize)]
struct CatalogSummary<'a> {
    total: usize,
    by_category: Vec<(&'a str, usize)>,
    projects: Vec<ProjectSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct ProjectSummary<'a> {
    id: &'a str,
    title: &'a str,
    category: &'a str,
    date: &'a str,
}

#[derive(Debug, Serialize)]
struct RenderedProject<'a> {
    id: &'a str,
    title: &'a str,
    html: String,
}

#[derive(Debug, Serialize)]
struct FilterResult<'a> {
    token: &'a str,
    matches: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct MailtoResult<'a> {
    topic: &'a str,
    subject: &'static str,
    mailto: String,
}

pub fn run(action: &Action, catalog: &Catalog, config: &SiteConfig, json: bool) -> Result<()> {
    match action {
        Action::Summary => summary(catalog, json),
        Action::Render(id) => render(catalog, id, json),
        Action::Filter(token) => filter_projects(catalog, token, json),
        Action::Mailto(topic) => mailto(config, topic, json),
    }
}

fn build_summary(catalog: &Catalog) -> CatalogSummary<'_> {
    let by_category = catalog
        .categories()
        .into_iter()
        .map(|category| {
            let count = catalog
                .iter()
                .filter(|record| record.category == category)
                .count();
            (category, count)
        })
        .collect();

    let projects = catalog
        .iter()
        .map(|record| ProjectSummary {
            id: &record.id,
            title: &record.title,
            category: &record.category,
            date: &record.date,
        })
        .collect();

    CatalogSummary {
        total: catalog.len(),
        by_category,
        projects,
    }
}

fn summary(catalog: &Catalog, json: bool) -> Result<()> {
    let summary = build_summary(catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("\nPortfolio Projects");
    println!("==================");
    println!("Total projects: {}", summary.total);

    println!("\nProjects by Category:");
    for (category, count) in &summary.by_category {
        println!("- {category}: {count}");
    }

    println!("\nProjects:");
    for project in &summary.projects {
        println!(
            "- {} | {} | {} | {}",
            project.id, project.title, project.category, project.date
        );
    }

    Ok(())
}

fn render(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let record = catalog.require(id)?;
    let detail = render_record(record);

    if json {
        let rendered = RenderedProject {
            id,
            title: &detail.title,
            html: detail.body_html(),
        };
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        println!("{}", detail.title);
        println!("{}", detail.body_html());
    }

    Ok(())
}

fn filter_projects(catalog: &Catalog, token: &str, json: bool) -> Result<()> {
    let matches: Vec<&str> = catalog
        .iter()
        .filter(|record| filter::matches(token, &record.category))
        .map(|record| record.id.as_str())
        .collect();

    if matches.is_empty() {
        log::warn!("filter `{token}` hides every project");
    }

    if json {
        let result = FilterResult { token, matches };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for id in matches {
            println!("{id}");
        }
    }

    Ok(())
}

fn mailto(config: &SiteConfig, topic: &str, json: bool) -> Result<()> {
    let link = mailto_link(&config.contact_email, topic);

    if json {
        let result = MailtoResult {
            topic,
            subject: email_subject(topic),
            mailto: link,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{link}");
    }

    Ok(())
}

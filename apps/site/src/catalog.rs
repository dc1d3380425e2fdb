use std::collections::HashMap;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

const BUILTIN_CATALOG: &str = include_str!("../data/projects.json");

/// A named list of bullet items describing one facet of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureGroup {
    pub group: String,
    pub items: Vec<String>,
}

/// Everything the detail dialog knows about one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub overview: String,
    pub problem: String,
    pub solution: String,
    /// Display order is file order, for groups and for items.
    pub features: Vec<FeatureGroup>,
    /// Pipeline stages, first to last.
    pub architecture: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_design: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub differentiation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<String>>,
}

impl ProjectRecord {
    fn validate(&self) -> Result<()> {
        let reason = if self.id.trim().is_empty() {
            "id is empty"
        } else if self.title.trim().is_empty() {
            "title is empty"
        } else if self.architecture.is_empty() {
            "architecture has no stages"
        } else {
            return Ok(());
        };

        Err(SiteError::InvalidRecord {
            id: self.id.clone(),
            reason,
        })
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct CatalogDocument {
    projects: Vec<ProjectRecord>,
}

/// Read-only mapping from project id to [`ProjectRecord`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The catalog shipped with the site.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_records(document.projects)
    }

    pub fn from_records(projects: Vec<ProjectRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(projects.len());
        for (position, record) in projects.iter().enumerate() {
            record.validate()?;
            if index.insert(record.id.clone(), position).is_some() {
                return Err(SiteError::DuplicateProject(record.id.clone()));
            }
        }

        log::debug!("loaded project catalog with {} entries", projects.len());
        Ok(Self { projects, index })
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.index.get(id).map(|&position| &self.projects[position])
    }

    /// Like [`Catalog::get`], but a miss becomes [`SiteError::UnknownProject`].
    pub fn require(&self, id: &str) -> Result<&ProjectRecord> {
        self.get(id).ok_or_else(|| SiteError::UnknownProject {
            id: id.to_string(),
            suggestion: self.suggest(id).map(ToString::to_string),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|record| record.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.projects {
            if !seen.contains(&record.category.as_str()) {
                seen.push(&record.category);
            }
        }
        seen
    }

    /// Closest known id to `id`, if any id matches it fuzzily.
    pub fn suggest(&self, id: &str) -> Option<&str> {
        let matcher = SkimMatcherV2::default();
        self.ids()
            .filter_map(|candidate| {
                matcher
                    .fuzzy_match(candidate, id)
                    .map(|score| (score, candidate))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, candidate)| candidate)
    }

    pub fn to_json(&self) -> Result<String> {
        let document = CatalogDocument {
            projects: self.projects.clone(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, FeatureGroup, ProjectRecord};
    use crate::error::SiteError;

    fn record(id: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: format!("Project {id}"),
            category: "Web".to_string(),
            date: "2024".to_string(),
            overview: "overview".to_string(),
            problem: "problem".to_string(),
            solution: "solution".to_string(),
            features: vec![FeatureGroup {
                group: "Core".to_string(),
                items: vec!["one".to_string()],
            }],
            architecture: vec!["Frontend".to_string(), "Backend".to_string()],
            technologies: vec!["Rust".to_string()],
            funding: None,
            achievement: None,
            ai_design: None,
            accuracy: None,
            differentiation: None,
            impact: None,
            applications: None,
        }
    }

    #[test]
    fn builtin_catalog_loads_every_project() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 11);
        assert!(catalog.get("plant-care").is_some());
        assert!(catalog.get("nonexistent").is_none());
        assert_eq!(catalog.ids().next(), Some("academic-planning"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let error = Catalog::from_records(vec![record("a"), record("a")]).unwrap_err();
        assert!(matches!(error, SiteError::DuplicateProject(id) if id == "a"));
    }

    #[test]
    fn records_without_architecture_are_rejected() {
        let mut broken = record("b");
        broken.architecture.clear();
        let error = Catalog::from_records(vec![broken]).unwrap_err();
        assert!(matches!(error, SiteError::InvalidRecord { reason, .. } if reason == "architecture has no stages"));
    }

    #[test]
    fn records_without_id_or_title_are_rejected() {
        let mut nameless = record("c");
        nameless.title = "   ".to_string();
        let error = Catalog::from_records(vec![record("a"), nameless]).unwrap_err();
        assert!(matches!(
            error,
            SiteError::InvalidRecord { ref id, reason } if id == "c" && reason == "title is empty"
        ));

        let error = Catalog::from_records(vec![record("")]).unwrap_err();
        assert!(matches!(error, SiteError::InvalidRecord { reason, .. } if reason == "id is empty"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = Catalog::from_json("{ \"projects\": [ { \"id\": 1 } ] }").unwrap_err();
        assert!(matches!(error, SiteError::CatalogParse(_)));
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let mut iot = record("c");
        iot.category = "IoT".to_string();
        let catalog = Catalog::from_records(vec![record("a"), iot, record("b")]).unwrap();
        assert_eq!(catalog.categories(), vec!["Web", "IoT"]);
    }

    #[test]
    fn suggest_finds_the_nearest_id() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.suggest("plantcare"), Some("plant-care"));
        assert_eq!(catalog.suggest("virtualmouse"), Some("virtual-mouse"));
        assert_eq!(catalog.suggest("qqqqqq"), None);
    }

    #[test]
    fn require_reports_unknown_ids_with_a_suggestion() {
        let catalog = Catalog::builtin().unwrap();
        let error = catalog.require("dinetec").unwrap_err();
        assert!(matches!(
            error,
            SiteError::UnknownProject { suggestion: Some(ref s), .. } if s == "dinetech"
        ));
    }

    #[test]
    fn json_round_trip_preserves_feature_order() {
        let catalog = Catalog::builtin().unwrap();
        let reloaded = Catalog::from_json(&catalog.to_json().unwrap()).unwrap();
        let before: Vec<_> = catalog.get("dinetech").unwrap().features.iter().map(|g| &g.group).collect();
        let after: Vec<_> = reloaded.get("dinetech").unwrap().features.iter().map(|g| &g.group).collect();
        assert_eq!(before, after);
        assert_eq!(
            before,
            vec!["Customer Interface", "Waiter System", "Communication", "Management"]
        );
    }
}

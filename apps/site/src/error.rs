use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to parse project catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("project id `{0}` appears more than once in the catalog")]
    DuplicateProject(String),

    #[error("project `{id}` is invalid: {reason}")]
    InvalidRecord { id: String, reason: &'static str },

    #[error("unknown project `{id}`{}", suggestion_hint(.suggestion.as_deref()))]
    UnknownProject {
        id: String,
        suggestion: Option<String>,
    },

    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn suggestion_hint(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |id| format!("; did you mean `{id}`?"))
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

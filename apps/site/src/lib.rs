// Export our modules for use in binaries, the web front end and tests
pub mod catalog;
pub mod certificates;
pub mod config;
pub mod contact;
pub mod domain;
pub mod error;
pub mod filter;
pub mod markup;
pub mod nav;
pub mod render;
pub mod scroll;

pub use catalog::{Catalog, FeatureGroup, ProjectRecord};
pub use config::SiteConfig;
pub use domain::{CopyTarget, NotificationKind, Topic};
pub use error::SiteError;
pub use render::{ProjectDetail, ProjectDetailRenderer};

//! Loading D.A.D collections from a snapshot directory or the backend

pub mod api_source;
pub mod file_source;

use async_trait::async_trait;
use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a002_entity::aggregate::Entity;
use contracts::domain::a003_functional_service::aggregate::FunctionalService;
use contracts::domain::a004_usage_indicator::aggregate::UsageIndicator;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::system::users::User;
use thiserror::Error;

use crate::shared::config::{resolve_path, SourceConfig, SourceKind};

pub use api_source::ApiSource;
pub use file_source::FileSource;

/// Errors raised while loading collections
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cannot read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid JSON in {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("API error: HTTP {status} on {url}")]
    Http { status: u16, url: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Read-only access to the collections consumed by the engine
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn projects(&self) -> Result<Vec<Project>, SourceError>;
    async fn entities(&self) -> Result<Vec<Entity>, SourceError>;
    async fn services(&self) -> Result<Vec<FunctionalService>, SourceError>;
    async fn users(&self) -> Result<Vec<User>, SourceError>;
    /// Indicators of the project's Docktor group
    async fn indicators(&self, project: &Project) -> Result<Vec<UsageIndicator>, SourceError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Build the source selected in `[source]`
pub fn from_config(config: &SourceConfig) -> Result<Box<dyn DataSource>, SourceError> {
    match config.kind {
        SourceKind::File => Ok(Box::new(FileSource::new(resolve_path(&config.dir)))),
        SourceKind::Api => Ok(Box::new(ApiSource::new(config)?)),
    }
}

/// Everything a command needs, loaded once
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub projects: Vec<Project>,
    pub entities: Vec<Entity>,
    pub services: Vec<FunctionalService>,
    pub users: Vec<User>,
}

impl Snapshot {
    pub async fn load(source: &dyn DataSource) -> Result<Self, SourceError> {
        let snapshot = Snapshot {
            projects: source.projects().await?,
            entities: source.entities().await?,
            services: source.services().await?,
            users: source.users().await?,
        };

        tracing::info!(
            "Loaded from {}: {} projects, {} entities, {} services, {} users",
            source.describe(),
            snapshot.projects.len(),
            snapshot.entities.len(),
            snapshot.services.len(),
            snapshot.users.len()
        );

        for project in &snapshot.projects {
            if let Err(e) = project.validate() {
                tracing::warn!(
                    "{} {} ({}): {}",
                    Project::element_name(),
                    project.name,
                    project.id.as_str(),
                    e
                );
            }
        }

        Ok(snapshot)
    }
}

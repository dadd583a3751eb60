use async_trait::async_trait;
use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a002_entity::aggregate::Entity;
use contracts::domain::a003_functional_service::aggregate::FunctionalService;
use contracts::domain::a004_usage_indicator::aggregate::{for_group, UsageIndicator};
use contracts::domain::common::AggregateRoot;
use contracts::system::users::User;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use super::{DataSource, SourceError};

/// Snapshot directory with one JSON array per collection
///
/// `projects.json`, `entities.json`, `services.json`, `users.json` and
/// `indicators.json`. A missing `indicators.json` means no indicators.
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    async fn read_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, SourceError> {
        read_json(&self.file(name)).await
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SourceError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(text).map_err(|e| SourceError::Parse {
        origin: path.display().to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl DataSource for FileSource {
    async fn projects(&self) -> Result<Vec<Project>, SourceError> {
        self.read_collection(Project::collection_name()).await
    }

    async fn entities(&self) -> Result<Vec<Entity>, SourceError> {
        self.read_collection(Entity::collection_name()).await
    }

    async fn services(&self) -> Result<Vec<FunctionalService>, SourceError> {
        self.read_collection(FunctionalService::collection_name()).await
    }

    async fn users(&self) -> Result<Vec<User>, SourceError> {
        self.read_collection(User::collection_name()).await
    }

    async fn indicators(&self, project: &Project) -> Result<Vec<UsageIndicator>, SourceError> {
        let path = self.file("indicators");
        if !path.exists() {
            tracing::debug!("No {}, assuming no indicators", path.display());
            return Ok(Vec::new());
        }

        let all: Vec<UsageIndicator> = read_json(&path).await?;
        Ok(for_group(&all, &project.docktor_group_name)
            .into_iter()
            .cloned()
            .collect())
    }

    fn describe(&self) -> String {
        format!("snapshot {}", self.dir.display())
    }
}

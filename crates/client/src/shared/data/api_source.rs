use async_trait::async_trait;
use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a002_entity::aggregate::Entity;
use contracts::domain::a003_functional_service::aggregate::FunctionalService;
use contracts::domain::a004_usage_indicator::aggregate::UsageIndicator;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::system::users::User;
use serde::de::DeserializeOwned;

use super::{DataSource, SourceError};
use crate::shared::config::SourceConfig;

/// Client of the D.A.D backend REST API
pub struct ApiSource {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(SourceError::Config(
                "source.base_url is required for kind = \"api\"".into(),
            ));
        }
        if config.token.trim().is_empty() {
            tracing::warn!("source.token is empty, requests are sent without Authorization");
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SourceError::Network(format!("Cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            token: config.token.trim().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if !self.token.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", self.token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("{}: {}", url, e)))?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(SourceError::Auth(format!(
                "HTTP {} on {}, the token is missing or expired",
                status.as_u16(),
                url
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("HTTP {} on {}: {}", status.as_u16(), url, body);
            return Err(SourceError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("{}: {}", url, e)))?;
        parse_body(&url, &body)
    }
}

/// The backend answers `null` for empty collections
fn parse_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, SourceError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| SourceError::Parse {
        origin: url.to_string(),
        message: e.to_string(),
    })?;
    let value = if value.is_null() {
        serde_json::Value::Array(Vec::new())
    } else {
        value
    };
    serde_json::from_value(value).map_err(|e| SourceError::Parse {
        origin: url.to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl DataSource for ApiSource {
    async fn projects(&self) -> Result<Vec<Project>, SourceError> {
        self.get(Project::collection_name()).await
    }

    async fn entities(&self) -> Result<Vec<Entity>, SourceError> {
        self.get(Entity::collection_name()).await
    }

    async fn services(&self) -> Result<Vec<FunctionalService>, SourceError> {
        self.get(FunctionalService::collection_name()).await
    }

    async fn users(&self) -> Result<Vec<User>, SourceError> {
        self.get(User::collection_name()).await
    }

    async fn indicators(&self, project: &Project) -> Result<Vec<UsageIndicator>, SourceError> {
        let path = format!(
            "{}/{}/indicators",
            Project::collection_name(),
            urlencoding::encode(project.id.as_str())
        );
        self.get(&path).await
    }

    fn describe(&self) -> String {
        format!("API {}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::SourceKind;

    fn config(base_url: &str) -> SourceConfig {
        SourceConfig {
            kind: SourceKind::Api,
            dir: String::new(),
            base_url: base_url.into(),
            token: "t0k3n".into(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_base_url_is_required() {
        assert!(matches!(ApiSource::new(&config("  ")), Err(SourceError::Config(_))));
    }

    #[test]
    fn test_url_building() {
        let source = ApiSource::new(&config("http://dad.local:8080/")).unwrap();
        assert_eq!(source.url("projects"), "http://dad.local:8080/api/projects");
        assert_eq!(source.describe(), "API http://dad.local:8080");
    }

    #[test]
    fn test_null_body_is_empty_collection() {
        let users: Vec<User> = parse_body("u", "null").unwrap();
        assert!(users.is_empty());
        let users: Vec<User> = parse_body("u", "").unwrap();
        assert!(users.is_empty());
        assert!(parse_body::<Vec<User>>("u", "{").is_err());
    }
}

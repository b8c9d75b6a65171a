//! HTTP transport
//!
//! reqwest implementation of [`Api`] against the service's base URL.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::config::ServerConfig;
use crate::types::{parse_permission_level, AgentId, PermissionLevel, QueryChunk};

use super::types::{FilterMessageResponse, IndexDocumentResponse, QueryRequest, QueryResponse};
use super::{status_check, Api, ClientError};

const PDF_MIME: &str = "application/pdf";

/// Client for the filtering/query service
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
    jar: Arc<Jar>,
}

impl HttpApi {
    /// Build a client for `config.base_url` sharing `jar` for session cookies
    pub fn new(config: &ServerConfig, jar: Arc<Jar>) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .cookie_provider(jar.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        debug!("HTTP client ready for {}", base_url);
        Ok(Self {
            client,
            base_url,
            jar,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Cookie jar holding the server session
    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.jar
    }

    /// Join percent-encoded path segments onto the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ClientError> {
        let url = self.endpoint(segments)?;
        debug!("{} {}", method, url);
        Ok(self.client.request(method, url))
    }

    /// Send and run the status check
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        status_check(response).await
    }

    async fn change_permission(&self, endpoint: &str) -> Result<PermissionLevel, ClientError> {
        let response = self.send(self.request(Method::POST, &[endpoint])?).await?;
        let body = response.text().await?;
        Ok(parse_permission_level(&body))
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn list_filter_words(&self) -> Result<Vec<String>, ClientError> {
        let response = self.send(self.request(Method::GET, &["filter"])?).await?;
        Ok(response.json().await?)
    }

    async fn add_filter_word(&self, word: &str) -> Result<(), ClientError> {
        self.send(self.request(Method::POST, &["filter", word])?).await?;
        Ok(())
    }

    async fn delete_filter_word(&self, word: &str) -> Result<(), ClientError> {
        self.send(self.request(Method::DELETE, &["filter", word])?).await?;
        Ok(())
    }

    async fn filter_message(&self, message: &str) -> Result<String, ClientError> {
        let request = self
            .request(Method::POST, &["filter_message", ""])?
            .query(&[("message", message)]);
        let response: FilterMessageResponse = self.send(request).await?.json().await?;
        Ok(response.filtered_message)
    }

    async fn index_document(&self, path: &Path) -> Result<Option<String>, ClientError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());
        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(PDF_MIME)?;
        let form = Form::new().part("file", part);

        let request = self.request(Method::POST, &["index_document"])?.multipart(form);
        let response: IndexDocumentResponse = self.send(request).await?.json().await?;
        Ok(response.message)
    }

    async fn query(&self, request: &QueryRequest) -> Result<Vec<QueryChunk>, ClientError> {
        let builder = self.request(Method::POST, &["query"])?.json(request);
        let response: QueryResponse = self.send(builder).await?.json().await?;
        Ok(response.into_chunks())
    }

    async fn login(&self, username: &str) -> Result<(), ClientError> {
        self.send(self.request(Method::POST, &["login", username])?).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.send(self.request(Method::POST, &["logout"])?).await?;
        Ok(())
    }

    async fn list_agents(&self) -> Result<Vec<AgentId>, ClientError> {
        let response = self.send(self.request(Method::POST, &["list_agents"])?).await?;
        Ok(response.json().await?)
    }

    async fn increase_permission(&self) -> Result<PermissionLevel, ClientError> {
        self.change_permission("increase_permission").await
    }

    async fn decrease_permission(&self) -> Result<PermissionLevel, ClientError> {
        self.change_permission("decrease_permission").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> HttpApi {
        let config = ServerConfig {
            base_url: base_url.to_string(),
            ..ServerConfig::default()
        };
        HttpApi::new(&config, Arc::new(Jar::default())).unwrap()
    }

    #[test]
    fn test_endpoint_joins_root_base() {
        let api = api("https://example.com");
        assert_eq!(api.endpoint(&["filter"]).unwrap().as_str(), "https://example.com/filter");
        assert_eq!(
            api.endpoint(&["filter_message", ""]).unwrap().as_str(),
            "https://example.com/filter_message/"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = api("http://localhost:8000/api/");
        assert_eq!(
            api.endpoint(&["list_agents"]).unwrap().as_str(),
            "http://localhost:8000/api/list_agents"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let api = api("https://example.com");
        assert_eq!(
            api.endpoint(&["filter", "a b/c?"]).unwrap().as_str(),
            "https://example.com/filter/a%20b%2Fc%3F"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ServerConfig {
            base_url: "mailto:someone@example.com".to_string(),
            ..ServerConfig::default()
        };
        let result = HttpApi::new(&config, Arc::new(Jar::default()));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};

use crate::domain::commit::CommitRecord;
use crate::error::FetchError;
use crate::services::CommitSource;
use crate::services::commit_source::PAGE_SIZE;

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const CLIENT_USER_AGENT: &str = concat!("changelog-gen/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    http: Client,
    api_url: String,
    repository: String,
    token: String,
    timeout: Duration,
}

impl GitHubClient {
    pub fn new(repository: String, token: String) -> Self {
        Self {
            http: Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
            repository,
            token,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[cfg(test)]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    #[cfg(test)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn commits_endpoint(&self) -> String {
        format!(
            "{}/repos/{}/commits",
            self.api_url.trim_end_matches('/'),
            self.repository
        )
    }

    fn auth_header(&self) -> String {
        format!("token {}", self.token)
    }
}

#[async_trait]
impl CommitSource for GitHubClient {
    fn repository(&self) -> &str {
        &self.repository
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<CommitRecord>, FetchError> {
        let response = self
            .http
            .get(self.commits_endpoint())
            .query(&[("per_page", PAGE_SIZE), ("page", page)])
            .header(AUTHORIZATION, self.auth_header())
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(FetchError::Api { status, body });
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        serde_json::from_str::<Vec<CommitRecord>>(&body)
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}

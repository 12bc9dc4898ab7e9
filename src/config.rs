use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub repository: String,
    pub auth_token: String,
    pub output_dir: PathBuf,
}

impl AppConfig {
    /// Builds the run configuration. Repository and token must be non-empty and
    /// are passed on verbatim; their format is left for the API to judge.
    pub fn load(
        workspace_hint: &Path,
        repository: Option<String>,
        auth_token: Option<String>,
    ) -> AppResult<Self> {
        let repository = repository.filter(|v| !v.is_empty());
        let auth_token = auth_token.filter(|v| !v.is_empty());

        match (repository, auth_token) {
            (Some(repository), Some(auth_token)) => Ok(Self {
                repository,
                auth_token,
                output_dir: workspace_hint.to_path_buf(),
            }),
            _ => Err(AppError::Configuration(
                "GITHUB_REPOSITORY or GITHUB_TOKEN is not set.".to_string(),
            )),
        }
    }
}

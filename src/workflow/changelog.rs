use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{Instrument, error, info, info_span};

use crate::context::AppContext;
use crate::domain::commit::CommitRecord;
use crate::error::FetchError;
use crate::infra::output;
use crate::render::{render_markdown, render_text};

pub const TEXT_FILE_NAME: &str = "change_logs.txt";
pub const MARKDOWN_FILE_NAME: &str = "changelog.md";

/// What one fetch-render-save cycle produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub commits: usize,
    pub text_saved: bool,
    pub markdown_saved: bool,
}

pub struct ChangeLogGenerator<'a> {
    ctx: &'a AppContext,
    generated_on: NaiveDate,
}

impl<'a> ChangeLogGenerator<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self {
            ctx,
            generated_on: Local::now().date_naive(),
        }
    }

    /// Pins the date printed in document headers.
    #[cfg(test)]
    pub fn with_generation_date(mut self, generated_on: NaiveDate) -> Self {
        self.generated_on = generated_on;
        self
    }

    /// Fetches every page until an empty page or the first failure. Failures
    /// are logged and whatever was collected so far is returned.
    pub async fn fetch_commits(&self) -> Vec<CommitRecord> {
        let source = &self.ctx.commit_source;
        let mut all_commits = Vec::new();
        let mut page = 1;

        loop {
            match source.fetch_page(page).await {
                Ok(commits) if commits.is_empty() => break,
                Ok(commits) => {
                    all_commits.extend(commits);
                    page += 1;
                }
                Err(FetchError::Api { status, body }) => {
                    error!(%status, page, "Error fetching commits: {status} - {body}");
                    break;
                }
                Err(err @ FetchError::Transport(_)) => {
                    error!(page, error = ?err, "Request error while fetching commits: {err}");
                    return all_commits;
                }
                Err(err @ FetchError::Decode(_)) => {
                    error!(page, "Unexpected response while fetching commits: {err}");
                    return all_commits;
                }
            }
        }

        info!(
            count = all_commits.len(),
            "Successfully fetched {} commits from {}",
            all_commits.len(),
            source.repository()
        );
        all_commits
    }

    pub fn generate_text(&self, commits: &[CommitRecord]) -> String {
        let document = render_text(commits, self.generated_on);
        info!("Generated change logs with {} commits", commits.len());
        document
    }

    pub fn generate_markdown(&self, commits: &[CommitRecord]) -> String {
        let document = render_markdown(commits, self.generated_on);
        info!("Generated markdown change logs with {} commits", commits.len());
        document
    }

    pub fn save(&self, path: &Path, document: &str) -> bool {
        output::save(path, document)
    }

    /// Runs fetch, both renderers and both saves. A failed save does not stop
    /// the other one.
    pub async fn run(&self) -> RunReport {
        let span = info_span!("changelog", repository = %self.ctx.commit_source.repository());
        async {
            let commits = self.fetch_commits().await;
            let text = self.generate_text(&commits);
            let markdown = self.generate_markdown(&commits);

            let output_dir = &self.ctx.config.output_dir;
            let text_saved = self.save(&output_dir.join(TEXT_FILE_NAME), &text);
            let markdown_saved = self.save(&output_dir.join(MARKDOWN_FILE_NAME), &markdown);

            RunReport {
                commits: commits.len(),
                text_saved,
                markdown_saved,
            }
        }
        .instrument(span)
        .await
    }
}

//! Commit retrieval from the public GitHub and GitLab REST APIs.
//!
//! One GET per request, a single page, no retries. Base URLs are injectable
//! so tests can stand up a local mock server.

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header;
use serde::Deserialize;

use crate::error::AppError;
use crate::platform::ResolvedTarget;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITLAB_API_BASE: &str = "https://gitlab.com";

// GitHub rejects requests without an identifying user agent.
const USER_AGENT: &str = concat!("gitviz-service/", env!("CARGO_PKG_VERSION"));

/// Uniform commit record from either platform, before classification.
#[derive(Debug, Clone)]
pub struct RawCommit {
    pub hash: String,
    pub author: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct GithubCommit {
    sha: String,
    commit: GithubCommitDetail,
}

#[derive(Debug, Deserialize)]
struct GithubCommitDetail {
    message: String,
    author: GithubAuthor,
}

#[derive(Debug, Deserialize)]
struct GithubAuthor {
    name: String,
    date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct GitlabCommit {
    id: String,
    message: String,
    author_name: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    http: reqwest::Client,
    github_base: String,
    gitlab_base: String,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_bases(GITHUB_API_BASE, GITLAB_API_BASE)
    }

    pub fn with_bases(github_base: impl Into<String>, gitlab_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            github_base: github_base.into(),
            gitlab_base: gitlab_base.into(),
        }
    }

    /// `limit` is already clamped to [1, 50] and becomes the page size.
    pub async fn fetch(
        &self,
        target: &ResolvedTarget,
        branch: &str,
        limit: u8,
    ) -> Result<Vec<RawCommit>, AppError> {
        match target {
            ResolvedTarget::GitHub { owner, repo } => {
                self.fetch_github(owner, repo, branch, limit).await
            }
            ResolvedTarget::GitLab { project_path } => {
                self.fetch_gitlab(project_path, branch, limit).await
            }
        }
    }

    async fn fetch_github(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        limit: u8,
    ) -> Result<Vec<RawCommit>, AppError> {
        let url = format!("{}/repos/{}/{}/commits", self.github_base, owner, repo);
        tracing::info!("Fetching commits from GitHub: {}/{}", owner, repo);

        let per_page = limit.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("sha", branch), ("per_page", per_page.as_str())])
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let commits: Vec<GithubCommit> = decode(response).await?;
        Ok(commits
            .into_iter()
            .map(|c| RawCommit {
                hash: c.sha,
                author: c.commit.author.name,
                message: c.commit.message,
                timestamp: c.commit.author.date,
            })
            .collect())
    }

    async fn fetch_gitlab(
        &self,
        project_path: &str,
        branch: &str,
        limit: u8,
    ) -> Result<Vec<RawCommit>, AppError> {
        // the project path rides in a single path segment, slashes included
        let encoded = utf8_percent_encode(project_path, NON_ALPHANUMERIC).to_string();
        let url = format!(
            "{}/api/v4/projects/{}/repository/commits",
            self.gitlab_base, encoded
        );
        tracing::info!("Fetching commits from GitLab: {}", project_path);

        let per_page = limit.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("ref_name", branch), ("per_page", per_page.as_str())])
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let commits: Vec<GitlabCommit> = decode(response).await?;
        Ok(commits
            .into_iter()
            .map(|c| RawCommit {
                hash: c.id,
                author: c.author_name,
                message: c.message,
                timestamp: c.created_at,
            })
            .collect())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Upstream {
            status: status.as_u16(),
        });
    }
    response.json::<T>().await.map_err(AppError::from)
}

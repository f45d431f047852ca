//! Repository URL resolution.
//!
//! Maps a user-supplied repository URL onto a hosting platform and the
//! identifiers its commit API needs. No network access happens here.

use url::Url;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    GitHub { owner: String, repo: String },
    GitLab { project_path: String },
}

/// Host matching is by substring, so `www.github.com` and similar mirrors
/// resolve too. GitHub takes the first two path segments and ignores the
/// rest; GitLab keeps the whole path to support namespaced groups.
pub fn resolve(repo_url: &str) -> Result<ResolvedTarget, AppError> {
    let parsed =
        Url::parse(repo_url).map_err(|_| AppError::validation("Invalid repository URL"))?;
    let host = parsed.host_str().unwrap_or_default();
    let segments: Vec<&str> = parsed
        .path()
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    if host.contains("github.com") {
        if segments.len() < 2 {
            return Err(AppError::validation("Invalid GitHub repository URL format"));
        }
        Ok(ResolvedTarget::GitHub {
            owner: segments[0].to_string(),
            repo: segments[1].to_string(),
        })
    } else if host.contains("gitlab.com") {
        if segments.is_empty() {
            return Err(AppError::validation("Invalid GitLab repository URL format"));
        }
        Ok(ResolvedTarget::GitLab {
            project_path: segments.join("/"),
        })
    } else {
        Err(AppError::validation(
            "Only GitHub and GitLab URLs are supported",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_url_takes_first_two_segments() {
        let target = resolve("https://github.com/octo/demo").unwrap();
        assert_eq!(
            target,
            ResolvedTarget::GitHub {
                owner: "octo".to_string(),
                repo: "demo".to_string(),
            }
        );

        // extra segments are silently ignored
        let target = resolve("https://github.com/octo/demo/tree/main/src").unwrap();
        assert_eq!(
            target,
            ResolvedTarget::GitHub {
                owner: "octo".to_string(),
                repo: "demo".to_string(),
            }
        );
    }

    #[test]
    fn github_subdomain_host_matches() {
        let target = resolve("https://www.github.com/octo/demo/").unwrap();
        assert!(matches!(target, ResolvedTarget::GitHub { .. }));
    }

    #[test]
    fn github_url_needs_owner_and_repo() {
        assert!(resolve("https://github.com/octo").is_err());
        assert!(resolve("https://github.com/").is_err());
    }

    #[test]
    fn gitlab_url_joins_namespaced_path() {
        let target = resolve("https://gitlab.com/group/subgroup/project").unwrap();
        assert_eq!(
            target,
            ResolvedTarget::GitLab {
                project_path: "group/subgroup/project".to_string(),
            }
        );
    }

    #[test]
    fn gitlab_url_needs_a_path() {
        assert!(resolve("https://gitlab.com/").is_err());
    }

    #[test]
    fn unsupported_hosts_are_rejected() {
        let err = resolve("https://bitbucket.org/octo/demo").unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors, vec!["Only GitHub and GitLab URLs are supported"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_urls_are_rejected() {
        assert!(resolve("").is_err());
        assert!(resolve("not a url").is_err());
        assert!(resolve("github.com/octo/demo").is_err()); // not absolute
    }
}

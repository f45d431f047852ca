//! Conventional-commit message classification.
//!
//! Pure and total: any string classifies, messages without a recognized
//! prefix fall back to `other` with the headline kept verbatim.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::CommitType;

static HEADLINE: OnceLock<Regex> = OnceLock::new();

fn headline_pattern() -> &'static Regex {
    HEADLINE.get_or_init(|| {
        Regex::new(
            r"^(feat|fix|docs|style|refactor|perf|test|chore|build|ci|revert)(\(([^)]+)\))?:\s*(.*)",
        )
        .expect("headline pattern is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub commit_type: CommitType,
    pub scope: String,
    pub title: String,
    pub body: String,
}

pub fn classify(message: &str) -> Classified {
    let (headline, rest) = match message.split_once('\n') {
        Some((headline, rest)) => (headline, rest),
        None => (message, ""),
    };
    let body = rest.trim().to_string();

    match headline_pattern().captures(headline) {
        Some(caps) => Classified {
            commit_type: CommitType::from_keyword(&caps[1]).unwrap_or(CommitType::Other),
            scope: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
            title: caps[4].to_string(),
            body,
        },
        None => Classified {
            commit_type: CommitType::Other,
            scope: String::new(),
            title: headline.to_string(),
            body,
        },
    }
}

use chrono::Local;

use crate::classify;
use crate::fetch::RawCommit;

/// Conventional-commit category of a commit message headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
    Build,
    Ci,
    Revert,
    Other,
}

impl CommitType {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "feat" => Some(Self::Feat),
            "fix" => Some(Self::Fix),
            "docs" => Some(Self::Docs),
            "style" => Some(Self::Style),
            "refactor" => Some(Self::Refactor),
            "perf" => Some(Self::Perf),
            "test" => Some(Self::Test),
            "chore" => Some(Self::Chore),
            "build" => Some(Self::Build),
            "ci" => Some(Self::Ci),
            "revert" => Some(Self::Revert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Revert => "revert",
            Self::Other => "other",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Feat => "✨",
            Self::Fix => "🔧",
            Self::Docs => "📝",
            Self::Style => "💄",
            Self::Refactor => "♻️",
            Self::Perf => "⚡️",
            Self::Test => "🧪",
            Self::Chore => "🔨",
            Self::Build => "📦",
            Self::Ci => "🎯",
            Self::Revert => "⏪",
            Self::Other => "💡",
        }
    }
}

/// A classified commit, ready for rendering. Ordering follows the upstream
/// API response (reverse-chronological).
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub hash: String,
    pub author: String,
    /// Pre-formatted `YYYY-MM-DD HH:MM:SS` in the server-local time zone.
    pub authored_at: String,
    pub commit_type: CommitType,
    pub scope: String,
    pub title: String,
    pub body: String,
}

impl CommitRecord {
    pub fn from_raw(raw: RawCommit) -> Self {
        let parts = classify::classify(&raw.message);
        Self {
            hash: raw.hash,
            author: raw.author,
            authored_at: raw
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            commit_type: parts.commit_type,
            scope: parts.scope,
            title: parts.title,
            body: parts.body,
        }
    }

    pub fn emoji(&self) -> &'static str {
        self.commit_type.emoji()
    }
}

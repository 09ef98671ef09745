use std::path::{Path, PathBuf};
use std::sync::Arc;

use lumen_types::{Issue, IssueKind, IssuePriority, IssueStatus};
use tokio::fs;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read issue dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse issue dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only issue dataset shared with server functions through context.
#[derive(Clone, Debug)]
pub struct IssueStore {
    issues: Arc<[Issue]>,
}

impl IssueStore {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues: issues.into(),
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Parses a JSON array of issues.
pub fn parse(path: &Path, contents: &str) -> Result<Vec<Issue>, DatasetError> {
    serde_json::from_str(contents).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn load(path: impl AsRef<Path>) -> Result<Vec<Issue>, DatasetError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .await
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse(path, &contents)
}

/// Loads the dataset at `path`, falling back to the built-in sample.
pub async fn collect(path: impl AsRef<Path>) -> IssueStore {
    let path = path.as_ref();
    match load(path).await {
        Ok(issues) => {
            info!("loaded {} issues from {}", issues.len(), path.display());
            IssueStore::new(issues)
        }
        Err(e) => {
            warn!("{e}, using sample issues");
            IssueStore::new(sample_issues())
        }
    }
}

pub fn sample_issues() -> Vec<Issue> {
    let rows: [(&str, IssueKind, IssuePriority, IssueStatus); 12] = [
        ("Login form rejects valid emails", IssueKind::Bug, IssuePriority::High, IssueStatus::Open),
        ("Export dashboard as PDF", IssueKind::Feature, IssuePriority::Medium, IssueStatus::InProgress),
        ("Crash when filter list is empty", IssueKind::Bug, IssuePriority::Critical, IssueStatus::InProgress),
        ("Cache avatar thumbnails", IssueKind::Improvement, IssuePriority::Low, IssueStatus::Open),
        ("Rotate staging credentials", IssueKind::Task, IssuePriority::High, IssueStatus::Closed),
        ("Dark mode for settings page", IssueKind::Feature, IssuePriority::Low, IssueStatus::Open),
        ("Timezone shown as UTC in reports", IssueKind::Bug, IssuePriority::Medium, IssueStatus::Closed),
        ("Speed up search indexing", IssueKind::Improvement, IssuePriority::High, IssueStatus::InProgress),
        ("Upgrade CI runners", IssueKind::Task, IssuePriority::Medium, IssueStatus::Open),
        ("Duplicate notifications on mobile", IssueKind::Bug, IssuePriority::High, IssueStatus::Open),
        ("Bulk assign issues", IssueKind::Feature, IssuePriority::High, IssueStatus::Closed),
        ("Archive stale projects", IssueKind::Task, IssuePriority::Low, IssueStatus::Closed),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(idx, (title, kind, priority, status))| Issue {
            id: idx as u64 + 1,
            title: title.to_string(),
            kind,
            priority,
            status,
        })
        .collect()
}

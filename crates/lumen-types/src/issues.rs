use serde::{Deserialize, Serialize};

use crate::filter::{FilterOption, SelectionSet};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Bug,
    Feature,
    Improvement,
    Task,
}

impl IssueKind {
    pub const ALL: [IssueKind; 4] = [
        IssueKind::Bug,
        IssueKind::Feature,
        IssueKind::Improvement,
        IssueKind::Task,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Bug => "bug",
            IssueKind::Feature => "feature",
            IssueKind::Improvement => "improvement",
            IssueKind::Task => "task",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IssueKind::Bug => "Bug",
            IssueKind::Feature => "Feature",
            IssueKind::Improvement => "Improvement",
            IssueKind::Task => "Task",
        }
    }

    pub fn filter_options() -> Vec<FilterOption> {
        Self::ALL
            .iter()
            .map(|kind| FilterOption::new(kind.as_str(), kind.label()))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
    Critical,
}

impl IssuePriority {
    pub const ALL: [IssuePriority; 4] = [
        IssuePriority::Low,
        IssuePriority::Medium,
        IssuePriority::High,
        IssuePriority::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssuePriority::Low => "low",
            IssuePriority::Medium => "medium",
            IssuePriority::High => "high",
            IssuePriority::Critical => "critical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IssuePriority::Low => "Low",
            IssuePriority::Medium => "Medium",
            IssuePriority::High => "High",
            IssuePriority::Critical => "Critical",
        }
    }

    pub fn filter_options() -> Vec<FilterOption> {
        Self::ALL
            .iter()
            .map(|priority| FilterOption::new(priority.as_str(), priority.label()))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    InProgress,
    Closed,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub id: u64,
    pub title: String,
    pub kind: IssueKind,
    pub priority: IssuePriority,
    pub status: IssueStatus,
}

/// Host-side filter state. An empty selection matches every issue.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct IssueFilter {
    #[serde(default)]
    pub kinds: SelectionSet,
    #[serde(default)]
    pub priorities: SelectionSet,
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        let kindMatches = self.kinds.is_empty() || self.kinds.contains(issue.kind.as_str());
        let priorityMatches =
            self.priorities.is_empty() || self.priorities.contains(issue.priority.as_str());
        kindMatches && priorityMatches
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueStats {
    pub total: u64,
    pub open: u64,
    pub in_progress: u64,
    pub closed: u64,
}

impl IssueStats {
    pub fn collect(issues: &[Issue], filter: &IssueFilter) -> Self {
        let mut stats = IssueStats::default();
        for issue in issues.iter().filter(|issue| filter.matches(issue)) {
            stats.total += 1;
            match issue.status {
                IssueStatus::Open => stats.open += 1,
                IssueStatus::InProgress => stats.in_progress += 1,
                IssueStatus::Closed => stats.closed += 1,
            }
        }
        stats
    }
}

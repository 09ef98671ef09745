use std::fmt;

use serde::{Deserialize, Serialize};

/// Value shown on a stat card.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatValue {
    Count(u64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(count) => write!(f, "{count}"),
            StatValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for StatValue {
    fn from(count: u64) -> Self {
        StatValue::Count(count)
    }
}

impl From<String> for StatValue {
    fn from(text: String) -> Self {
        StatValue::Text(text)
    }
}

impl From<&str> for StatValue {
    fn from(text: &str) -> Self {
        StatValue::Text(text.to_string())
    }
}

/// What a stat card is currently showing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatDisplay {
    #[default]
    Loading,
    Loaded(StatValue),
}

impl StatDisplay {
    pub fn loaded(value: impl Into<StatValue>) -> Self {
        StatDisplay::Loaded(value.into())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, StatDisplay::Loading)
    }
}

impl<T: Into<StatValue>> From<Option<T>> for StatDisplay {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => StatDisplay::Loaded(v.into()),
            None => StatDisplay::Loading,
        }
    }
}

/// Colour variant of a stat card's icon marker.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatTone {
    Primary,
    Success,
    Warning,
    Danger,
    #[default]
    Neutral,
}

impl StatTone {
    /// Foreground colour token for the icon.
    pub fn color(self) -> &'static str {
        match self {
            StatTone::Primary => "#3b82f6",
            StatTone::Success => "#76b900",
            StatTone::Warning => "#f59e0b",
            StatTone::Danger => "#ef4444",
            StatTone::Neutral => "#9ca3af",
        }
    }

    /// Background colour token behind the icon.
    pub fn background(self) -> &'static str {
        match self {
            StatTone::Primary => "rgba(59, 130, 246, 0.15)",
            StatTone::Success => "rgba(118, 185, 0, 0.15)",
            StatTone::Warning => "rgba(245, 158, 11, 0.15)",
            StatTone::Danger => "rgba(239, 68, 68, 0.15)",
            StatTone::Neutral => "rgba(156, 163, 175, 0.15)",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            StatTone::Primary => "tone-primary",
            StatTone::Success => "tone-success",
            StatTone::Warning => "tone-warning",
            StatTone::Danger => "tone-danger",
            StatTone::Neutral => "tone-neutral",
        }
    }
}

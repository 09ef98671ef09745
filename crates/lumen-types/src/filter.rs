use serde::{Deserialize, Serialize};

/// Trigger text shown when nothing is selected and the host gave no placeholder.
pub const DEFAULT_PLACEHOLDER: &str = "All";

/// A selectable `{value, label}` pair offered by a filter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Ordered set of selected option values, owned by the host.
///
/// Never mutated in place: `toggle` hands back a new set which the host
/// stores and feeds back on the next render. Identifiers are unique; building
/// a set from a sequence keeps the first occurrence of each.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SelectionSet(Vec<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the set with `value` removed if present, appended otherwise.
    pub fn toggle(&self, value: &str) -> SelectionSet {
        if self.contains(value) {
            SelectionSet(self.0.iter().filter(|v| *v != value).cloned().collect())
        } else {
            let mut next = self.0.clone();
            next.push(value.to_string());
            SelectionSet(next)
        }
    }

    /// Summary shown on a filter's trigger button.
    ///
    /// A single selected value that matches no option falls back to the
    /// generic "1 selected" instead of being rejected.
    pub fn trigger_text(&self, options: &[FilterOption], placeholder: Option<&str>) -> String {
        match self.0.as_slice() {
            [] => placeholder.unwrap_or(DEFAULT_PLACEHOLDER).to_string(),
            [only] => options
                .iter()
                .find(|option| option.value == *only)
                .map(|option| option.label.clone())
                .unwrap_or_else(|| "1 selected".to_string()),
            many => format!("{} selected", many.len()),
        }
    }
}

impl From<Vec<String>> for SelectionSet {
    fn from(values: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        SelectionSet(unique)
    }
}

impl From<SelectionSet> for Vec<String> {
    fn from(set: SelectionSet) -> Self {
        set.0
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SelectionSet::from(iter.into_iter().map(Into::into).collect::<Vec<String>>())
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

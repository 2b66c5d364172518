//! Standard filter selectors.

use velger_core::FilterSelector;

/// A selector that matches every filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAll;

impl FilterSelector for SelectAll {
    fn matches(&self, _filter_name: &str) -> bool {
        true
    }
}

/// A selector backed by an explicit list of filter names.
///
/// Filters that gate themselves on the selector run only if their name is
/// in the list.
#[derive(Debug, Clone, Default)]
pub struct NameSelector {
    names: Vec<String>,
}

impl NameSelector {
    /// Create a selector matching the given filter names.
    pub fn new<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The names this selector matches.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl FilterSelector for NameSelector {
    fn matches(&self, filter_name: &str) -> bool {
        self.names.iter().any(|name| name == filter_name)
    }
}

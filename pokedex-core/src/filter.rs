use crate::entry::{CatalogEntry, TypeName};
use crate::text::title_case;

/// The user's type selection for the list screen.
///
/// Transitions return a new state; nothing mutates in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected: Option<TypeName>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&TypeName> {
        self.selected.as_ref()
    }

    /// Select a type. The value is title-cased first so menu entries from
    /// sources that spell types in lower case ("water") still match.
    /// A blank value is treated as a reset.
    pub fn select(&self, raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return self.reset();
        }
        Self {
            selected: Some(TypeName::new(title_case(trimmed))),
        }
    }

    pub fn reset(&self) -> Self {
        Self { selected: None }
    }

    pub fn apply(&self, entries: &[CatalogEntry]) -> Vec<CatalogEntry> {
        apply(entries, self.selected())
    }
}

/// Visible subset of `entries` for `selected`, in the original order.
///
/// `None` returns every entry. Otherwise an entry is kept when any of its
/// types equals the title-cased selection exactly; entries with no types are
/// dropped.
pub fn apply(entries: &[CatalogEntry], selected: Option<&TypeName>) -> Vec<CatalogEntry> {
    let Some(selected) = selected else {
        return entries.to_vec();
    };
    let wanted = TypeName::new(title_case(selected.as_str()));
    entries
        .iter()
        .filter(|entry| entry.has_type(&wanted))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;

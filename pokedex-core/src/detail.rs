use serde::{Deserialize, Serialize};

use crate::entry::{CatalogEntry, TypeName, null_as_default};

/// Extended fields fetched by the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    #[serde(default)]
    pub number: Option<String>,
    pub name: String,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<TypeName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resistant: Vec<TypeName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weaknesses: Vec<TypeName>,
    /// `None` when the server returned `null`, which hides the tab.
    /// An empty list still shows it.
    #[serde(default)]
    pub evolutions: Option<Vec<CatalogEntry>>,
}

impl PokemonDetail {
    /// Tabs to show, in display order.
    pub fn tabs(&self) -> Vec<DetailTab> {
        let mut tabs = Vec::with_capacity(3);
        if self.evolutions.is_some() {
            tabs.push(DetailTab::Evolutions);
        }
        tabs.push(DetailTab::Resistant);
        tabs.push(DetailTab::Weaknesses);
        tabs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Evolutions,
    Resistant,
    Weaknesses,
}

impl DetailTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Evolutions => "evolutions",
            Self::Resistant => "resistant",
            Self::Weaknesses => "weaknesses",
        }
    }
}

impl std::fmt::Display for DetailTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress of the detail refetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStatus {
    Loading,
    Ready(PokemonDetail),
    Failed(String),
}

/// Detail screen state: the entry handed over by navigation is available
/// immediately, extended fields arrive later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pokemon: CatalogEntry,
    status: DetailStatus,
}

impl DetailState {
    pub fn mount(pokemon: CatalogEntry) -> Self {
        Self {
            pokemon,
            status: DetailStatus::Loading,
        }
    }

    pub fn pokemon(&self) -> &CatalogEntry {
        &self.pokemon
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    pub fn detail(&self) -> Option<&PokemonDetail> {
        match &self.status {
            DetailStatus::Ready(detail) => Some(detail),
            _ => None,
        }
    }

    /// Hidden until the refetch succeeds.
    pub fn classification(&self) -> Option<&str> {
        self.detail().and_then(|d| d.classification.as_deref())
    }

    /// Empty while loading and after a failure.
    pub fn tabs(&self) -> Vec<DetailTab> {
        self.detail().map(PokemonDetail::tabs).unwrap_or_default()
    }

    /// Number to show in the header, preferring what navigation passed.
    pub fn number(&self) -> Option<&str> {
        self.pokemon
            .number
            .as_deref()
            .or_else(|| self.detail().and_then(|d| d.number.as_deref()))
    }

    pub fn resolve(&self, result: Result<PokemonDetail, String>) -> Self {
        Self {
            pokemon: self.pokemon.clone(),
            status: match result {
                Ok(detail) => DetailStatus::Ready(detail),
                Err(message) => DetailStatus::Failed(message),
            },
        }
    }
}

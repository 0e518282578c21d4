use serde::{Deserialize, Deserializer, Serialize};

/// An elemental type tag as sent by the server (e.g. "Water", "Fire").
///
/// The set is open: values the client has never seen are kept verbatim and
/// only ever match a filter for the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn category(&self) -> TypeCategory {
        TypeCategory::from_type_name(self.as_str())
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display category for a type badge. Everything outside the five named
/// types falls into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Water,
    Grass,
    Fire,
    Poison,
    Normal,
    Other,
}

impl TypeCategory {
    /// Exact, case-sensitive match on the server's spelling.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "Water" => Self::Water,
            "Grass" => Self::Grass,
            "Fire" => Self::Fire,
            "Poison" => Self::Poison,
            "Normal" => Self::Normal,
            _ => Self::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Grass => "Grass",
            Self::Fire => "Fire",
            Self::Poison => "Poison",
            Self::Normal => "Normal",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of the catalog list. Identity is `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<TypeName>,
    #[serde(default)]
    pub number: Option<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, image: impl Into<String>, types: Vec<TypeName>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            types,
            number: None,
        }
    }

    /// An entry known only by name, for opening a detail screen without a
    /// list row to navigate from.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, String::new(), Vec::new())
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn primary_type(&self) -> Option<&TypeName> {
        self.types.first()
    }

    /// Category of the first listed type, or `Other` when there is none.
    pub fn category(&self) -> TypeCategory {
        self.primary_type()
            .map(TypeName::category)
            .unwrap_or(TypeCategory::Other)
    }

    pub fn has_type(&self, ty: &TypeName) -> bool {
        self.types.iter().any(|t| t == ty)
    }
}

/// GraphQL sends `null` for empty lists and missing strings; fold both into
/// the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;

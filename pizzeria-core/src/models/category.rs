//! Category Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Menu category
///
/// A small, closed set of partitions known at build time. Categories are
/// static; only their item lists mutate at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Classic,
    Vegan,
    Drinks,
}

impl Category {
    /// All categories in their stable display order
    pub const ALL: [Category; 3] = [Category::Classic, Category::Vegan, Category::Drinks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Classic => "classic",
            Category::Vegan => "vegan",
            Category::Drinks => "drinks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Category::Classic),
            "vegan" => Ok(Category::Vegan),
            "drinks" => Ok(Category::Drinks),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

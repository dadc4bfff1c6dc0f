//! Catalog item records.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// One entry of a filter listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SummaryItem {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,
}

impl SummaryItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: thumbnail.into(),
        }
    }
}

/// Full record returned by a lookup.
///
/// `DetailItem::default()` is what a lookup yields when the catalog has no
/// record for the requested id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DetailItem {
    #[serde(rename = "idDrink", default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "strDrink", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,
    #[serde(rename = "strInstructions", default, deserialize_with = "null_as_empty")]
    pub instructions: String,
}

impl DetailItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: thumbnail.into(),
            instructions: instructions.into(),
        }
    }

    /// True for the zero-value record (lookup matched nothing).
    pub fn is_empty(&self) -> bool {
        self == &DetailItem::default()
    }
}

impl fmt::Display for DetailItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Thumbnail: {}", self.thumbnail)?;
        writeln!(f, "Instructions: {}", self.instructions)
    }
}

// The catalog sends `null` for missing text fields.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

//! The `{"drinks": ...}` response wrapper.

use serde::{Deserialize, Deserializer};

/// Body of both `filter.php` and `lookup.php`.
///
/// The catalog answers "no results" in several ways: `null`, a missing member,
/// or a placeholder string such as `"no data found"`. All of them decode to an
/// empty list; only a real array carries records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinksEnvelope<T> {
    pub drinks: Vec<T>,
}

impl<T> DrinksEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        self.drinks
    }

    /// First record, if any.
    pub fn into_first(self) -> Option<T> {
        self.drinks.into_iter().next()
    }
}

impl<'de, T> Deserialize<'de> for DrinksEnvelope<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Drinks<T> {
            List(Vec<T>),
            // "no data found" and friends
            Placeholder(String),
        }

        #[derive(Deserialize)]
        struct Raw<T> {
            drinks: Option<Drinks<T>>,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        let drinks = match raw.drinks {
            Some(Drinks::List(items)) => items,
            Some(Drinks::Placeholder(_)) | None => Vec::new(),
        };
        Ok(DrinksEnvelope { drinks })
    }
}

//! API request types for continent and country operations.
//!
//! Partial updates use [`Field`] instead of bare `Option` so that "key absent"
//! and "key present" are distinguished explicitly. A present key always
//! deserializes to `Field::Set`; an absent key falls back to the
//! `#[serde(default)]` of `Field::Keep`. If a nullable column is ever added,
//! `Field<Option<T>>` expresses an explicit null-out without ambiguity.

use serde::{Deserialize, Deserializer};

use super::types::{Continent, Country};

/// Presence-aware field update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    /// The field was not present in the request; keep the current value.
    #[default]
    Keep,
    /// The field was present; replace the current value.
    Set(T),
}

impl<T> Field<T> {
    /// Returns true if the field carries a new value.
    pub fn is_set(&self) -> bool {
        matches!(self, Field::Set(_))
    }

    /// Writes the new value into `slot` when one was provided.
    pub fn apply_to(self, slot: &mut T) {
        if let Field::Set(value) = self {
            *slot = value;
        }
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Field::Set)
    }
}

/// Request payload for creating a new continent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContinentRequest {
    pub code: String,
    pub name: String,
}

impl CreateContinentRequest {
    /// Converts the create request into a Continent.
    pub fn into_continent(self) -> Continent {
        Continent::new(self.code, self.name)
    }
}

/// Sparse update payload for a continent. The code is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContinentPatch {
    #[serde(default)]
    pub name: Field<String>,
}

/// Request payload for creating a new country.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCountryRequest {
    pub code: String,
    pub name: String,
    pub full_name: String,
    pub iso3: String,
    pub number: i64,
    pub continent_code: String,
}

impl CreateCountryRequest {
    /// Converts the create request into a Country.
    pub fn into_country(self) -> Country {
        Country::new(
            self.code,
            self.name,
            self.full_name,
            self.iso3,
            self.number,
            self.continent_code,
        )
    }
}

/// Sparse update payload for a country. The code is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryPatch {
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub full_name: Field<String>,
    #[serde(default)]
    pub iso3: Field<String>,
    #[serde(default)]
    pub number: Field<i64>,
    #[serde(default)]
    pub continent_code: Field<String>,
}

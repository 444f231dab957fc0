use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A continent, identified by its two-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    /// Two-letter continent code (e.g. "EU").
    pub code: String,
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

impl Continent {
    /// Creates a new continent with `updated_at` set to now.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            updated_at: Utc::now(),
        }
    }

    /// Sets a specific timestamp (useful for testing).
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }
}

/// A country, identified by its ISO 3166-1 alpha-2 code.
///
/// Every country references an existing continent via `continent_code`;
/// the storage layer enforces this with a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Two-letter country code (ISO 3166-1 alpha-2).
    pub code: String,
    /// English short name.
    pub name: String,
    /// Full English name.
    pub full_name: String,
    /// Three-letter country code (ISO 3166-1 alpha-3).
    pub iso3: String,
    /// Numeric country code (ISO 3166-1 numeric).
    pub number: i64,
    /// Two-letter code of the owning continent.
    pub continent_code: String,
    pub updated_at: DateTime<Utc>,
}

impl Country {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        full_name: impl Into<String>,
        iso3: impl Into<String>,
        number: i64,
        continent_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            full_name: full_name.into(),
            iso3: iso3.into(),
            number,
            continent_code: continent_code.into(),
            updated_at: Utc::now(),
        }
    }

    /// Sets a specific timestamp (useful for testing).
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continent_serializes_with_rfc3339_timestamp() {
        let continent = Continent::new("AS", "Asia");
        let json = serde_json::to_value(&continent).unwrap();

        assert_eq!(json["code"], "AS");
        assert_eq!(json["name"], "Asia");
        assert!(json["updated_at"].is_string());
    }

    #[test]
    fn test_country_round_trips_through_json() {
        let country = Country::new("JP", "Japan", "Japan", "JPN", 392, "AS");
        let json = serde_json::to_string(&country).unwrap();
        let parsed: Country = serde_json::from_str(&json).unwrap();

        assert_eq!(country, parsed);
    }
}

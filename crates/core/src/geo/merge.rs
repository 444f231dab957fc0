//! Explicit merge functions for partial updates.
//!
//! Each entity has one merge function taking the current record and a sparse
//! patch with per-field presence flags. The merged record always carries a
//! fresh `updated_at`.

use chrono::Utc;

use super::requests::{ContinentPatch, CountryPatch};
use super::types::{Continent, Country};

/// Merges a patch into a continent, refreshing `updated_at`.
pub fn merge_continent(current: &Continent, patch: ContinentPatch) -> Continent {
    let mut next = current.clone();
    patch.name.apply_to(&mut next.name);
    next.updated_at = Utc::now();
    next
}

/// Merges a patch into a country, refreshing `updated_at`.
pub fn merge_country(current: &Country, patch: CountryPatch) -> Country {
    let mut next = current.clone();
    patch.name.apply_to(&mut next.name);
    patch.full_name.apply_to(&mut next.full_name);
    patch.iso3.apply_to(&mut next.iso3);
    patch.number.apply_to(&mut next.number);
    patch.continent_code.apply_to(&mut next.continent_code);
    next.updated_at = Utc::now();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Field;
    use chrono::{DateTime, Utc};

    fn old_timestamp() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2020-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_merge_continent_updates_only_set_fields() {
        let current = Continent::new("EU", "Europa").with_updated_at(old_timestamp());
        let patch = ContinentPatch {
            name: Field::Set("Europe".to_string()),
        };

        let merged = merge_continent(&current, patch);

        assert_eq!(merged.code, "EU");
        assert_eq!(merged.name, "Europe");
        assert!(merged.updated_at > current.updated_at);
    }

    #[test]
    fn test_merge_continent_empty_patch_refreshes_timestamp() {
        let current = Continent::new("EU", "Europe").with_updated_at(old_timestamp());

        let merged = merge_continent(&current, ContinentPatch::default());

        assert_eq!(merged.name, "Europe");
        assert!(merged.updated_at > current.updated_at);
    }

    #[test]
    fn test_merge_country_partial_update() {
        let current =
            Country::new("JP", "Japan", "Japan", "JPN", 392, "AS").with_updated_at(old_timestamp());
        let patch = CountryPatch {
            full_name: Field::Set("State of Japan".to_string()),
            number: Field::Set(392),
            ..Default::default()
        };

        let merged = merge_country(&current, patch);

        assert_eq!(merged.name, "Japan");
        assert_eq!(merged.full_name, "State of Japan");
        assert_eq!(merged.iso3, "JPN");
        assert_eq!(merged.continent_code, "AS");
        assert!(merged.updated_at > current.updated_at);
    }

    #[test]
    fn test_merge_country_code_is_immutable() {
        let current = Country::new("JP", "Japan", "Japan", "JPN", 392, "AS");
        let patch = CountryPatch {
            continent_code: Field::Set("EU".to_string()),
            ..Default::default()
        };

        let merged = merge_country(&current, patch);

        assert_eq!(merged.code, "JP");
        assert_eq!(merged.continent_code, "EU");
    }
}

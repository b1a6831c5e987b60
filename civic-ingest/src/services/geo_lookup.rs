//! Static geographic metadata for scraped ZIP codes
//!
//! The lookup page only names representatives; city, state and district come
//! from this table. Unknown ZIP codes get placeholder values.

use civic_common::db::NewGeography;

struct GeoDetails {
    city: &'static str,
    state_name: &'static str,
    state_abbr: &'static str,
    congressional_district: &'static str,
}

const KNOWN_ZIPS: &[(&str, GeoDetails)] = &[
    (
        "11354",
        GeoDetails {
            city: "Flushing",
            state_name: "New York",
            state_abbr: "NY",
            congressional_district: "NY-6",
        },
    ),
    (
        "13662",
        GeoDetails {
            city: "Massena",
            state_name: "New York",
            state_abbr: "NY",
            congressional_district: "NY-21",
        },
    ),
    (
        "90210",
        GeoDetails {
            city: "Beverly Hills",
            state_name: "California",
            state_abbr: "CA",
            congressional_district: "CA-30/32",
        },
    ),
];

const UNKNOWN: GeoDetails = GeoDetails {
    city: "Unknown",
    state_name: "Unknown",
    state_abbr: "UN",
    congressional_district: "UN-00",
};

/// Whether the static table has metadata for this ZIP code
pub fn is_known_zip(zip_code: &str) -> bool {
    KNOWN_ZIPS.iter().any(|(zip, _)| *zip == zip_code)
}

/// Geography row to insert for a scraped ZIP code
pub fn geography_for_zip(zip_code: &str) -> NewGeography {
    let details = KNOWN_ZIPS
        .iter()
        .find(|(zip, _)| *zip == zip_code)
        .map(|(_, details)| details)
        .unwrap_or(&UNKNOWN);

    NewGeography {
        zip_code: zip_code.to_string(),
        city: details.city.to_string(),
        state_name: details.state_name.to_string(),
        state_abbr: details.state_abbr.to_string(),
        congressional_district: details.congressional_district.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_zip() {
        let geo = geography_for_zip("90210");
        assert_eq!(geo.zip_code, "90210");
        assert_eq!(geo.city, "Beverly Hills");
        assert_eq!(geo.state_abbr, "CA");
        assert_eq!(geo.congressional_district, "CA-30/32");
        assert!(is_known_zip("13662"));
    }

    #[test]
    fn test_unknown_zip_gets_placeholders() {
        let geo = geography_for_zip("60601");
        assert_eq!(geo.zip_code, "60601");
        assert_eq!(geo.city, "Unknown");
        assert_eq!(geo.state_name, "Unknown");
        assert_eq!(geo.state_abbr, "UN");
        assert_eq!(geo.congressional_district, "UN-00");
        assert!(!is_known_zip("60601"));
    }
}

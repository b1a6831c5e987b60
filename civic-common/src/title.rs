//! Display titles for the lookup response
//!
//! Stored titles are generic ("U.S. Senator"); the lookup response qualifies
//! them with the geography they were matched through.

use crate::db::Geography;

pub const HOUSE_REP: &str = "U.S. House Rep";
pub const SENATOR: &str = "U.S. Senator";
pub const GOVERNOR: &str = "Governor";

/// Format a representative's title for the given geography row
///
/// - "U.S. House Rep" gets the congressional district
/// - "U.S. Senator" gets the state abbreviation
/// - "Governor" gets the state name
/// - anything else is returned unchanged
///
/// A qualifier that is missing from the geography row leaves the title
/// unchanged.
pub fn format_title(title: &str, geography: &Geography) -> String {
    let qualifier = match title {
        HOUSE_REP => geography.congressional_district.as_deref(),
        SENATOR => geography.state_abbr.as_deref(),
        GOVERNOR => geography.state_name.as_deref(),
        _ => None,
    };

    match qualifier {
        Some(q) => format!("{}, {}", title, q),
        None => title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flushing() -> Geography {
        Geography {
            id: 1,
            zip_code: "11354".to_string(),
            city: Some("Flushing".to_string()),
            state_name: Some("New York".to_string()),
            state_abbr: Some("NY".to_string()),
            congressional_district: Some("NY-6".to_string()),
        }
    }

    #[test]
    fn test_house_rep_gets_district() {
        assert_eq!(format_title(HOUSE_REP, &flushing()), "U.S. House Rep, NY-6");
    }

    #[test]
    fn test_senator_gets_state_abbr() {
        assert_eq!(format_title(SENATOR, &flushing()), "U.S. Senator, NY");
    }

    #[test]
    fn test_governor_gets_state_name() {
        assert_eq!(format_title(GOVERNOR, &flushing()), "Governor, New York");
    }

    #[test]
    fn test_other_titles_unchanged() {
        assert_eq!(format_title("Mayor", &flushing()), "Mayor");
        // Matching is exact
        assert_eq!(format_title("u.s. senator", &flushing()), "u.s. senator");
    }

    #[test]
    fn test_missing_qualifier_leaves_title() {
        let mut geo = flushing();
        geo.congressional_district = None;
        assert_eq!(format_title(HOUSE_REP, &geo), HOUSE_REP);
    }
}

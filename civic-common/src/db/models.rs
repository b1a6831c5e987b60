//! Database models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row of the `geography` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Geography {
    pub id: i64,
    pub zip_code: String,
    pub city: Option<String>,
    pub state_name: Option<String>,
    pub state_abbr: Option<String>,
    pub congressional_district: Option<String>,
}

/// Row of the `representatives` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Representative {
    pub id: i64,
    pub name: String,
    pub party: Option<String>,
    pub branch: Option<String>,
    pub title: Option<String>,
}

/// Row of the `rep_geography_map` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RepresentativeGeographyMap {
    pub representative_id: i64,
    pub geography_id: i64,
}

/// Government branch a representative belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    Federal,
    State,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Federal => "Federal",
            Branch::State => "State",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geography row to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGeography {
    pub zip_code: String,
    pub city: String,
    pub state_name: String,
    pub state_abbr: String,
    pub congressional_district: String,
}

/// Representative row to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepresentative {
    pub name: String,
    pub party: String,
    pub branch: Branch,
    pub title: String,
}

impl NewRepresentative {
    pub fn new(
        name: impl Into<String>,
        party: impl Into<String>,
        branch: Branch,
        title: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            party: party.into(),
            branch,
            title: title.into(),
        }
    }
}

/// A representative together with the geography row it was linked through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepresentativeMatch {
    pub representative: Representative,
    pub geography: Geography,
}

impl RepresentativeMatch {
    /// Title qualified with district, state abbreviation or state name
    pub fn display_title(&self) -> String {
        let title = self.representative.title.as_deref().unwrap_or_default();
        crate::title::format_title(title, &self.geography)
    }
}

/// Row counts of the three lookup tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub geography: i64,
    pub representatives: i64,
    pub links: i64,
}

impl TableCounts {
    pub fn is_empty(&self) -> bool {
        self.geography == 0 && self.representatives == 0 && self.links == 0
    }
}

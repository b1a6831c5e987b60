//! Lookup queries and row insertion

use crate::db::models::{
    Geography, NewGeography, NewRepresentative, Representative, RepresentativeMatch, TableCounts,
};
use crate::{Error, Result};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

/// Flat row produced by the three-table join
#[derive(sqlx::FromRow)]
struct MatchRow {
    representative_id: i64,
    name: String,
    party: Option<String>,
    branch: Option<String>,
    title: Option<String>,
    geography_id: i64,
    zip_code: String,
    city: Option<String>,
    state_name: Option<String>,
    state_abbr: Option<String>,
    congressional_district: Option<String>,
}

impl From<MatchRow> for RepresentativeMatch {
    fn from(row: MatchRow) -> Self {
        Self {
            representative: Representative {
                id: row.representative_id,
                name: row.name,
                party: row.party,
                branch: row.branch,
                title: row.title,
            },
            geography: Geography {
                id: row.geography_id,
                zip_code: row.zip_code,
                city: row.city,
                state_name: row.state_name,
                state_abbr: row.state_abbr,
                congressional_district: row.congressional_district,
            },
        }
    }
}

/// All representatives linked to any geography row with this ZIP code
///
/// Rows come back in insertion order. An unknown ZIP code yields an empty list.
pub async fn representatives_for_zip(
    pool: &SqlitePool,
    zip_code: &str,
) -> Result<Vec<RepresentativeMatch>> {
    let rows = sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT
            r.id AS representative_id,
            r.name,
            r.party,
            r.branch,
            r.title,
            g.id AS geography_id,
            g.zip_code,
            g.city,
            g.state_name,
            g.state_abbr,
            g.congressional_district
        FROM representatives r
        JOIN rep_geography_map rgm ON r.id = rgm.representative_id
        JOIN geography g ON g.id = rgm.geography_id
        WHERE g.zip_code = ?
        ORDER BY g.id ASC, r.id ASC
        "#,
    )
    .bind(zip_code)
    .fetch_all(pool)
    .await?;

    debug!(zip = %zip_code, matches = rows.len(), "Representative lookup");

    Ok(rows.into_iter().map(RepresentativeMatch::from).collect())
}

/// Insert a geography row, returning its id
pub async fn insert_geography(conn: &mut SqliteConnection, geo: &NewGeography) -> Result<i64> {
    if geo.zip_code.trim().is_empty() {
        return Err(Error::InvalidInput("zip_code must not be empty".to_string()));
    }

    let result = sqlx::query(
        "INSERT INTO geography (zip_code, city, state_name, state_abbr, congressional_district) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&geo.zip_code)
    .bind(&geo.city)
    .bind(&geo.state_name)
    .bind(&geo.state_abbr)
    .bind(&geo.congressional_district)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Insert a representative row, returning its id
pub async fn insert_representative(
    conn: &mut SqliteConnection,
    rep: &NewRepresentative,
) -> Result<i64> {
    if rep.name.trim().is_empty() {
        return Err(Error::InvalidInput(
            "representative name must not be empty".to_string(),
        ));
    }

    let result = sqlx::query(
        "INSERT INTO representatives (name, party, branch, title) VALUES (?, ?, ?, ?)",
    )
    .bind(&rep.name)
    .bind(&rep.party)
    .bind(rep.branch.as_str())
    .bind(&rep.title)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Link a representative to a geography row
pub async fn link_representative(
    conn: &mut SqliteConnection,
    representative_id: i64,
    geography_id: i64,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO rep_geography_map (representative_id, geography_id) VALUES (?, ?)",
    )
    .bind(representative_id)
    .bind(geography_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Ids written by [`insert_zip_representatives`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedZip {
    pub geography_id: i64,
    pub representative_ids: Vec<i64>,
}

/// Insert one geography row and one linked representative per entry
///
/// Runs in a single transaction: either all rows for the ZIP code are
/// written or none are.
pub async fn insert_zip_representatives(
    pool: &SqlitePool,
    geo: &NewGeography,
    reps: &[NewRepresentative],
) -> Result<InsertedZip> {
    let mut tx = pool.begin().await?;

    let geography_id = insert_geography(&mut tx, geo).await?;

    let mut representative_ids = Vec::with_capacity(reps.len());
    for rep in reps {
        let rep_id = insert_representative(&mut tx, rep).await?;
        link_representative(&mut tx, rep_id, geography_id).await?;
        representative_ids.push(rep_id);
    }

    tx.commit().await?;

    Ok(InsertedZip {
        geography_id,
        representative_ids,
    })
}

/// Delete every row from all three tables (links first)
pub async fn reset_all(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM rep_geography_map")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM representatives")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM geography")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Row counts of the three lookup tables
pub async fn table_counts(pool: &SqlitePool) -> Result<TableCounts> {
    let geography: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM geography")
        .fetch_one(pool)
        .await?;
    let representatives: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM representatives")
        .fetch_one(pool)
        .await?;
    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rep_geography_map")
        .fetch_one(pool)
        .await?;

    Ok(TableCounts {
        geography,
        representatives,
        links,
    })
}

//! Sample data for a fresh database
//!
//! Seeds ZIP code 11354 (Flushing, NY) with its House representative, one
//! senator and the governor, so the query service answers something useful
//! before the first scrape run.

use crate::db::models::{Branch, NewGeography, NewRepresentative};
use crate::db::queries::insert_zip_representatives;
use crate::Result;
use sqlx::SqlitePool;
use tracing::info;

pub const SAMPLE_ZIP_CODE: &str = "11354";

fn sample_geography() -> NewGeography {
    NewGeography {
        zip_code: SAMPLE_ZIP_CODE.to_string(),
        city: "Flushing".to_string(),
        state_name: "New York".to_string(),
        state_abbr: "NY".to_string(),
        congressional_district: "NY-6".to_string(),
    }
}

fn sample_representatives() -> Vec<NewRepresentative> {
    vec![
        NewRepresentative::new("Grace Meng", "Democratic", Branch::Federal, "U.S. House Rep"),
        NewRepresentative::new("Chuck Schumer", "Democratic", Branch::Federal, "U.S. Senator"),
        NewRepresentative::new("Kathy Hochul", "Democratic", Branch::State, "Governor"),
    ]
}

/// Insert the sample rows unless ZIP 11354 already has a geography row
///
/// Returns `true` when rows were inserted.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM geography WHERE zip_code = ?")
        .bind(SAMPLE_ZIP_CODE)
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        info!(zip = SAMPLE_ZIP_CODE, "Sample data already present, skipping");
        return Ok(false);
    }

    let inserted =
        insert_zip_representatives(pool, &sample_geography(), &sample_representatives()).await?;

    info!(
        zip = SAMPLE_ZIP_CODE,
        representatives = inserted.representative_ids.len(),
        "Inserted sample data"
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_memory_database, representatives_for_zip, table_counts};

    #[tokio::test]
    async fn test_seed_inserts_three_linked_representatives() {
        let pool = init_memory_database().await.unwrap();
        assert!(seed_sample_data(&pool).await.unwrap());

        let titles: Vec<String> = representatives_for_zip(&pool, SAMPLE_ZIP_CODE)
            .await
            .unwrap()
            .iter()
            .map(|m| m.display_title())
            .collect();
        assert_eq!(
            titles,
            vec!["U.S. House Rep, NY-6", "U.S. Senator, NY", "Governor, New York"]
        );
    }

    #[tokio::test]
    async fn test_seed_twice_is_noop() {
        let pool = init_memory_database().await.unwrap();
        assert!(seed_sample_data(&pool).await.unwrap());
        assert!(!seed_sample_data(&pool).await.unwrap());

        let counts = table_counts(&pool).await.unwrap();
        assert_eq!(counts.geography, 1);
        assert_eq!(counts.representatives, 3);
        assert_eq!(counts.links, 3);
    }
}

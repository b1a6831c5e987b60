//! Database initialization tests against real files on disk

use civic_common::db::{
    init_database, insert_zip_representatives, representatives_for_zip, seed_sample_data,
    table_counts, Branch, NewGeography, NewRepresentative,
};
use tempfile::tempdir;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("nested").join("civic_tracker.db");
    assert!(!db_path.exists());

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing_and_keeps_rows() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("civic_tracker.db");

    let pool = init_database(&db_path).await.unwrap();
    assert!(seed_sample_data(&pool).await.unwrap());
    pool.close().await;

    // Re-opening runs schema creation again; existing rows survive
    let pool = init_database(&db_path).await.unwrap();
    let counts = table_counts(&pool).await.unwrap();
    assert_eq!(counts.geography, 1);
    assert_eq!(counts.representatives, 3);
    assert_eq!(counts.links, 3);
}

#[tokio::test]
async fn test_same_zip_in_multiple_geography_rows() {
    let dir = tempdir().unwrap();
    let pool = init_database(&dir.path().join("civic_tracker.db"))
        .await
        .unwrap();

    let geo = NewGeography {
        zip_code: "90210".to_string(),
        city: "Beverly Hills".to_string(),
        state_name: "California".to_string(),
        state_abbr: "CA".to_string(),
        congressional_district: "CA-30/32".to_string(),
    };
    let senator = NewRepresentative::new("Alex Padilla", "Democratic", Branch::Federal, "U.S. Senator");
    let governor = NewRepresentative::new("Gavin Newsom", "Democratic", Branch::State, "Governor");

    insert_zip_representatives(&pool, &geo, &[senator]).await.unwrap();
    insert_zip_representatives(&pool, &geo, &[governor]).await.unwrap();

    let titles: Vec<String> = representatives_for_zip(&pool, "90210")
        .await
        .unwrap()
        .iter()
        .map(|m| m.display_title())
        .collect();
    assert_eq!(titles, vec!["U.S. Senator, CA", "Governor, California"]);
}

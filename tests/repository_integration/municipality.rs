use crate::common::fixtures::{ile_de_france, municipality, paris};
use crate::common::TestDb;
use communes_backend::application::proximity::find_nearby;
use communes_backend::error::AppError;
use communes_backend::infrastructure::repositories::{
    MunicipalityRepository, MunicipalityRepositoryImpl,
};

async fn seeded(db: &TestDb) -> MunicipalityRepositoryImpl {
    let repo = MunicipalityRepositoryImpl::new(db.pool().clone());
    for municipality in ile_de_france() {
        repo.create(&municipality).await.expect("seed insert");
    }
    repo
}

#[tokio::test]
async fn create_then_find_by_code() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repo = MunicipalityRepositoryImpl::new(db.pool().clone());

    let created = repo.create(&paris()).await.expect("insert should succeed");
    let found = repo
        .find_by_code("75056")
        .await
        .expect("lookup should succeed");

    assert_eq!(created, paris());
    assert_eq!(found, Some(paris()));
    assert_eq!(repo.find_by_code("00000").await.expect("lookup"), None);
}

#[tokio::test]
async fn duplicate_code_maps_to_conflict() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repo = MunicipalityRepositoryImpl::new(db.pool().clone());
    repo.create(&paris()).await.expect("first insert");

    let error = repo
        .create(&paris())
        .await
        .expect_err("second insert should fail");

    assert!(matches!(
        error,
        AppError::Conflict(message) if message == "a municipality with this code already exists"
    ));
}

#[tokio::test]
async fn out_of_range_latitude_hits_check_constraint() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repo = MunicipalityRepositoryImpl::new(db.pool().clone());

    let error = repo
        .create(&municipality("99001", "Nowhere", 95.0, 0.0))
        .await
        .expect_err("check constraint should fail");

    assert!(matches!(error, AppError::ValidationError { .. }));
}

#[tokio::test]
async fn range_query_is_inclusive_and_ordered_by_code() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repo = seeded(&db).await;

    // Boulogne-Billancourt sits exactly on the western edge.
    let rows = repo
        .find_by_latitude_and_longitude_range(48.80, 48.95, 2.2399, 2.45)
        .await
        .expect("range query should succeed");

    let codes: Vec<&str> = rows.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, vec!["75056", "92012", "93066", "94080"]);
}

#[tokio::test]
async fn proximity_search_against_postgres() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repo = seeded(&db).await;

    let nearby = find_nearby(&paris(), 10, &repo)
        .await
        .expect("search should succeed");

    let codes: Vec<&str> = nearby.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, vec!["94080", "92012", "93066"]);
}

#[tokio::test]
async fn update_count_and_delete() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repo = seeded(&db).await;
    assert_eq!(repo.count().await.expect("count"), 6);

    let mut moved = paris();
    moved.postal_code = "75004".to_string();
    let updated = repo.update(&moved).await.expect("update should succeed");
    assert_eq!(updated.postal_code, "75004");

    let missing = municipality("99999", "Nowhere", 0.0, 0.0);
    assert!(matches!(
        repo.update(&missing).await,
        Err(AppError::NotFound(_))
    ));

    repo.delete("69123").await.expect("delete should succeed");
    assert_eq!(repo.count().await.expect("count"), 5);
    assert!(matches!(
        repo.delete("69123").await,
        Err(AppError::NotFound(_))
    ));
}

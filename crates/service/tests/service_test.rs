//! End-to-end scenarios driving the service against the in-memory store.

use std::sync::Arc;

use blueprints_core::{Blueprint, FilterKind, Point};
use blueprints_service::{BlueprintService, BlueprintStore, MemoryStore, ServiceError};

fn seeded_service(filter: FilterKind) -> (BlueprintService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_starter_data());
    let service = BlueprintService::builder()
        .shared_store(store.clone())
        .filter(filter)
        .build()
        .expect("store is configured");
    (service, store)
}

#[tokio::test]
async fn seeded_store_serves_three_blueprints_unmodified() {
    let (service, store) = seeded_service(FilterKind::Identity);

    let all = service.get_all_blueprints().await.unwrap();

    assert_eq!(all.len(), 3);
    for blueprint in &all {
        let raw = store
            .get_one(blueprint.author(), blueprint.name())
            .await
            .unwrap();
        assert_eq!(blueprint.points(), raw.points());
    }
}

#[tokio::test]
async fn adding_a_blueprint_grows_the_set_to_four() {
    let (service, _) = seeded_service(FilterKind::Identity);

    let new_blueprint = Blueprint::new("testAuthor", "testBlueprint").unwrap();
    service.add_new_blueprint(new_blueprint).await.unwrap();

    let all = service.get_all_blueprints().await.unwrap();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn duplicate_save_propagates_the_conflict() {
    let (service, _) = seeded_service(FilterKind::Identity);

    let duplicate = Blueprint::new("john", "house").unwrap();
    let err = service.add_new_blueprint(duplicate).await.unwrap_err();

    assert!(err.is_conflict());
}

#[tokio::test]
async fn unknown_author_propagates_not_found() {
    let (service, _) = seeded_service(FilterKind::Identity);

    let err = service.get_blueprints_by_author("unknown").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn by_author_filters_every_result() {
    let (service, _) = seeded_service(FilterKind::Undersampling);

    let johns = service.get_blueprints_by_author("john").await.unwrap();

    assert_eq!(johns.len(), 2);
    // Both seeded sequences have 4 points; undersampling keeps indices 0 and 2.
    for blueprint in &johns {
        assert_eq!(blueprint.points().len(), 2);
    }
}

#[tokio::test]
async fn redundancy_filter_shapes_reads_but_not_storage() {
    let store = Arc::new(MemoryStore::new());
    let service = BlueprintService::builder()
        .shared_store(store.clone())
        .filter(FilterKind::Redundancy)
        .build()
        .unwrap();

    let blueprint = Blueprint::with_points(
        "mary",
        "kitchen",
        vec![
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(10, 10),
            Point::new(10, 10),
            Point::new(20, 20),
        ],
    )
    .unwrap();
    service.add_new_blueprint(blueprint).await.unwrap();

    let served = service.get_blueprint("mary", "kitchen").await.unwrap();
    assert_eq!(
        served.points(),
        &[Point::new(0, 0), Point::new(10, 10), Point::new(20, 20)]
    );

    // The canonical stored representation stays raw.
    let raw = store.get_one("mary", "kitchen").await.unwrap();
    assert_eq!(raw.points().len(), 5);
}

#[tokio::test]
async fn append_point_stores_raw_data_past_the_filter() {
    let (service, store) = seeded_service(FilterKind::Redundancy);

    let before = store.get_one("jane", "garden").await.unwrap().points().len();
    let last = *store
        .get_one("jane", "garden")
        .await
        .unwrap()
        .points()
        .last()
        .unwrap();

    // Appending a duplicate of the current tail: a write-path filter would
    // collapse it, the raw store must keep it.
    service
        .add_point("jane", "garden", last.x, last.y)
        .await
        .unwrap();

    let raw = store.get_one("jane", "garden").await.unwrap();
    assert_eq!(raw.points().len(), before + 1);
    assert_eq!(raw.points().last(), Some(&last));

    // The filtered view still collapses the duplicate on read.
    let served = service.get_blueprint("jane", "garden").await.unwrap();
    assert_eq!(served.points().len(), before);
}

#[tokio::test]
async fn append_point_to_an_unknown_blueprint_is_not_found() {
    let (service, _) = seeded_service(FilterKind::Identity);

    let err = service.add_point("nobody", "nothing", 1, 1).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn get_all_never_fails_on_an_empty_store() {
    let service = BlueprintService::builder()
        .store(MemoryStore::new())
        .build()
        .unwrap();

    let all = service.get_all_blueprints().await.unwrap();

    assert!(all.is_empty());
}

#[tokio::test]
async fn missing_store_is_a_build_error() {
    let err = BlueprintService::builder().build().unwrap_err();

    assert!(matches!(err, ServiceError::MissingStore));
}

#[tokio::test]
async fn concurrent_writes_to_distinct_identities_do_not_interfere() {
    let store = Arc::new(MemoryStore::with_starter_data());
    let service = Arc::new(
        BlueprintService::builder()
            .shared_store(store.clone() as Arc<dyn BlueprintStore>)
            .filter(FilterKind::Identity)
            .build()
            .unwrap(),
    );

    let mut tasks = Vec::new();
    for i in 0..8 {
        let service = service.clone();
        tasks.push(tokio::spawn(async move {
            let name = format!("plan-{i}");
            let blueprint = Blueprint::new("worker", name.clone()).unwrap();
            service.add_new_blueprint(blueprint).await.unwrap();
            for step in 0..10 {
                service.add_point("worker", &name, step, step).await.unwrap();
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let workers = service.get_blueprints_by_author("worker").await.unwrap();
    assert_eq!(workers.len(), 8);
    for blueprint in &workers {
        let raw = store
            .get_one(blueprint.author(), blueprint.name())
            .await
            .unwrap();
        assert_eq!(raw.points().len(), 10);
        // Per-identity append order is preserved under concurrency.
        assert_eq!(raw.points()[0], Point::new(0, 0));
        assert_eq!(raw.points()[9], Point::new(9, 9));
    }
}

use std::sync::Arc;

use api::{GatewayError, InMemoryGateway};
use scout_core::model::{Difficulty, University, UniversityId, UniversityType};
use scout_core::time::{fixed_clock, fixed_now};
use services::{DirectoryError, DirectoryService};

fn uni(id: u64, region: &str) -> University {
    University::new(
        UniversityId::new(id),
        format!("University {id}"),
        None,
        region,
        None,
        UniversityType::Public,
        2_000_000,
        Difficulty::Medium,
        None,
        None,
        Vec::new(),
        Vec::new(),
    )
    .unwrap()
}

#[tokio::test]
async fn load_snapshots_the_dataset_with_a_timestamp() {
    let gateway = InMemoryGateway::with_records(vec![uni(1, "Arusha"), uni(2, "Mbeya")]);
    let service = DirectoryService::new(fixed_clock(), Arc::new(gateway));

    let snapshot = service.load().await.unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.fetched_at(), fixed_now());
}

#[tokio::test]
async fn refresh_scrapes_before_refetching() {
    let gateway = InMemoryGateway::with_records(vec![uni(1, "Arusha")]);
    gateway.stage_refreshed_records(vec![uni(1, "Arusha"), uni(2, "Dodoma"), uni(3, "Tanga")]);
    let service = DirectoryService::new(fixed_clock(), Arc::new(gateway.clone()));

    let snapshot = service.refresh().await.unwrap();

    // The new generation is only visible because the re-fetch happened
    // strictly after the scrape acknowledgment.
    assert_eq!(snapshot.len(), 3);
    assert_eq!(gateway.calls(), vec!["trigger_refresh", "fetch_all"]);
}

#[tokio::test]
async fn refresh_stops_at_a_failed_scrape() {
    let gateway = InMemoryGateway::with_records(vec![uni(1, "Arusha")]);
    gateway.fail_next_call();
    let service = DirectoryService::new(fixed_clock(), Arc::new(gateway.clone()));

    let err = service.refresh().await.unwrap_err();
    assert!(matches!(err, DirectoryError::Gateway(GatewayError::Network(_))));

    // No re-fetch was attempted after the failed scrape.
    assert_eq!(gateway.calls(), vec!["trigger_refresh"]);
}

#[tokio::test]
async fn get_distinguishes_missing_records() {
    let gateway = InMemoryGateway::with_records(vec![uni(1, "Arusha")]);
    let service = DirectoryService::new(fixed_clock(), Arc::new(gateway));

    let found = service.get(UniversityId::new(1)).await.unwrap();
    assert_eq!(found.id(), UniversityId::new(1));

    let err = service.get(UniversityId::new(404)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn load_propagates_gateway_failures_without_retry() {
    let gateway = InMemoryGateway::with_records(vec![uni(1, "Arusha")]);
    gateway.fail_next_call();
    let service = DirectoryService::new(fixed_clock(), Arc::new(gateway.clone()));

    assert!(service.load().await.is_err());
    // Exactly one attempt was made.
    assert_eq!(gateway.calls(), vec!["fetch_all"]);
}

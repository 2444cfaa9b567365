use api::InMemoryGateway;
use scout_core::model::{Difficulty, Program, University, UniversityId, UniversityType};

use super::test_harness::{setup_view_harness, ViewKind};

fn sample_records() -> Vec<University> {
    vec![
        University::new(
            UniversityId::new(1),
            "University of Dar es Salaam",
            Some("UDSM".into()),
            "Dar es Salaam",
            Some("Ubungo".into()),
            UniversityType::Public,
            5_000_000,
            Difficulty::High,
            Some("The oldest public university in Tanzania.".into()),
            Some("Division I or II.".into()),
            vec![Program::new("Computer Science", 3, Difficulty::High, None).unwrap()],
            vec!["Library".into()],
        )
        .unwrap(),
        University::new(
            UniversityId::new(2),
            "Tumaini University",
            None,
            "Arusha",
            None,
            UniversityType::Private,
            3_000_000,
            Difficulty::Low,
            None,
            None,
            vec![Program::new("Nursing", 4, Difficulty::Medium, None).unwrap()],
            Vec::new(),
        )
        .unwrap(),
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_stats() {
    let gateway = InMemoryGateway::with_records(sample_records());
    let mut harness = setup_view_harness(ViewKind::Home, gateway);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Start exploring"), "missing hero action in {html}");
    assert!(html.contains("Universities"), "missing stats in {html}");
    assert!(html.contains("Update data"), "missing refresh action in {html}");
    // The dataset loads exactly once on mount.
    assert_eq!(harness.gateway.calls(), vec!["fetch_all"]);
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_network_error() {
    let gateway = InMemoryGateway::with_records(sample_records());
    gateway.fail_next_call();
    let mut harness = setup_view_harness(ViewKind::Home, gateway);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Could not reach the backend"),
        "missing error state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn explore_view_smoke_lists_seeded_records() {
    let gateway = InMemoryGateway::with_records(sample_records());
    let mut harness = setup_view_harness(ViewKind::Explore, gateway);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("University of Dar es Salaam"),
        "missing record in {html}"
    );
    assert!(html.contains("Tumaini University"), "missing record in {html}");
    assert!(html.contains("2 results"), "missing result count in {html}");
    assert!(html.contains("All Regions"), "missing region filter in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn detail_view_smoke_renders_record() {
    let gateway = InMemoryGateway::with_records(sample_records());
    let mut harness = setup_view_harness(ViewKind::Detail(1), gateway);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("UDSM"), "missing acronym in {html}");
    assert!(html.contains("Computer Science"), "missing program in {html}");
    assert!(html.contains("Library"), "missing facility in {html}");
    assert!(html.contains("5,000,000 TZS"), "missing fees in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn detail_view_smoke_distinguishes_not_found() {
    let gateway = InMemoryGateway::with_records(sample_records());
    let mut harness = setup_view_harness(ViewKind::Detail(404), gateway);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("does not exist"),
        "missing not-found state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn compare_view_smoke_shows_empty_state() {
    let gateway = InMemoryGateway::with_records(sample_records());
    let mut harness = setup_view_harness(ViewKind::Compare, gateway);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Nothing selected yet"),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn wizard_view_smoke_renders_first_step() {
    let gateway = InMemoryGateway::with_records(sample_records());
    let mut harness = setup_view_harness(ViewKind::Wizard, gateway);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Preferred region?"), "missing step title in {html}");
    assert!(html.contains("Step 1 of 5"), "missing step count in {html}");
    // Region options come from the dataset, plus the Any sentinel.
    assert!(html.contains("Any"), "missing Any option in {html}");
    assert!(html.contains("Arusha"), "missing region option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn insights_view_smoke_renders_breakdowns() {
    let gateway = InMemoryGateway::with_records(sample_records());
    let mut harness = setup_view_harness(ViewKind::Insights, gateway);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Universities by region"),
        "missing region panel in {html}"
    );
    assert!(html.contains("Public vs private"), "missing type panel in {html}");
    assert!(html.contains("Very High"), "missing difficulty level in {html}");
}

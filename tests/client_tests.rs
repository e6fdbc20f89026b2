mod test_utils;

use std::time::{Duration, Instant};

use portfolio_site::{
    client::{ApiError, DataMode, Latency, PortfolioApi},
    entities::{NewExperience, ProjectUpdate},
    pages::group_skills,
    settings::{AppConfig, AppEnvironment},
    snapshot::SNAPSHOT,
};
use test_utils::TestApp;
use uuid::Uuid;

fn instant_static_api() -> PortfolioApi {
    PortfolioApi::bundled_with(Latency::None)
}

#[tokio::test]
async fn static_mode_serves_the_snapshot() {
    let api = instant_static_api();
    assert_eq!(api.mode(), DataMode::Static);

    let info = api.personal_info().get().await.unwrap();
    assert_eq!(info, SNAPSHOT.personal_info);

    let projects = api.projects().get_all().await.unwrap();
    assert_eq!(projects, SNAPSHOT.all_projects());

    let experience = api.experience().get_all().await.unwrap();
    assert_eq!(experience, SNAPSHOT.experience);
}

#[tokio::test]
async fn static_featured_matches_the_filter() {
    let api = instant_static_api();

    let all = api.projects().get_all().await.unwrap();
    let featured = api.projects().get_featured().await.unwrap();

    let expected: Vec<_> = all.into_iter().filter(|p| p.is_featured).collect();
    assert_eq!(featured, expected);
    assert!(!featured.is_empty());
}

#[tokio::test]
async fn static_skills_regroup_losslessly() {
    let api = instant_static_api();

    let flat = api.skills().get_all().await.unwrap();
    let regrouped = group_skills(&flat);

    assert_eq!(regrouped, SNAPSHOT.skill_groups);
}

#[tokio::test]
async fn static_mutations_echo_without_persisting() {
    let api = instant_static_api();

    let before = api.experience().get_all().await.unwrap().len();

    let created = api
        .experience()
        .create(NewExperience {
            company: "Acme Corp".into(),
            role: "Engineer".into(),
            period: "2024".into(),
            location: "Remote".into(),
            employment_type: "Full-time".into(),
            description: String::new(),
            achievements: vec![],
            technologies: vec!["Rust".into()],
            is_current_job: true,
        })
        .await
        .unwrap();
    assert_eq!(created.company, "Acme Corp");

    // nothing was persisted
    let after = api.experience().get_all().await.unwrap().len();
    assert_eq!(before, after);

    api.experience().delete(created.id).await.unwrap();
}

#[tokio::test]
async fn static_update_of_unknown_id_is_no_data() {
    let api = instant_static_api();

    let err = api
        .projects()
        .update(Uuid::new_v4(), ProjectUpdate::default())
        .await
        .unwrap_err();

    assert!(err.is_no_data());
}

#[tokio::test]
async fn simulated_latency_delays_static_reads() {
    let api = PortfolioApi::bundled();

    let start = Instant::now();
    api.personal_info().get().await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn remote_mode_reads_the_backend() {
    let app = TestApp::spawn().await;
    let api = app.api();
    assert_eq!(api.mode(), DataMode::Remote);

    let info = api.personal_info().get().await.unwrap();
    assert_eq!(info.name, SNAPSHOT.personal_info.name);

    let featured = api.projects().get_featured().await.unwrap();
    assert!(featured.iter().all(|p| p.is_featured));

    let status = api.health().await.unwrap();
    assert_eq!(status.message, "Portfolio API is running!");
}

#[tokio::test]
async fn remote_mutations_round_trip() {
    let app = TestApp::spawn().await;
    let api = app.api();

    let created = api
        .experience()
        .create(NewExperience {
            company: "Acme Corp".into(),
            role: "Engineer".into(),
            period: "2024".into(),
            location: "Remote".into(),
            employment_type: "Contract".into(),
            description: String::new(),
            achievements: vec![],
            technologies: vec![],
            is_current_job: false,
        })
        .await
        .unwrap();

    let listed = api.experience().get_all().await.unwrap();
    assert!(listed.iter().any(|e| e.id == created.id));

    api.experience().delete(created.id).await.unwrap();

    let err = api.experience().delete(created.id).await.unwrap_err();
    match err {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("not found"));
        }
        other => panic!("expected a backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn from_config_picks_the_mode_once() {
    let mut config = AppConfig {
        env: AppEnvironment::Testing,
        name: "portfolio-test".into(),
        port: 0,
        host: "127.0.0.1".into(),
        worker_count: 1,
        backend_url: None,
        site_host: None,
        cors_allowed_origins: vec!["*".into()],
    };

    let api = PortfolioApi::from_config(&config).unwrap();
    assert_eq!(api.mode(), DataMode::Static);

    config.backend_url = Some("http://127.0.0.1:9".into());
    let api = PortfolioApi::from_config(&config).unwrap();
    assert_eq!(api.mode(), DataMode::Remote);

    // a static-hosting domain wins over a configured URL
    config.site_host = Some("portfolio.netlify.app".into());
    let api = PortfolioApi::from_config(&config).unwrap();
    assert_eq!(api.mode(), DataMode::Static);
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // nothing listens on port 1
    let api = PortfolioApi::remote("http://127.0.0.1:1").unwrap();

    let err = api.personal_info().get().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

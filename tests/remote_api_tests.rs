mod test_utils;

use reqwest::StatusCode;
use serde_json::{Value, json};
use test_utils::TestApp;
use uuid::Uuid;

#[tokio::test]
async fn home_banner_responds() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Ok");
}

#[tokio::test]
async fn api_root_reports_running() {
    let app = TestApp::spawn().await;

    let body: Value = app
        .client
        .get(app.url("/api"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["message"], "Portfolio API is running!");
}

#[tokio::test]
async fn health_reports_healthy_with_content_counts() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/api/health")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["content"]["projects"].as_u64().unwrap() > 0);
    assert!(body["content"]["skills"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn personal_info_get_and_merge_patch() {
    let app = TestApp::spawn().await;

    let before: Value = app
        .client
        .get(app.url("/api/personal-info"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(before["name"].as_str().unwrap().len() > 0);

    let response = app
        .client
        .put(app.url("/api/personal-info"))
        .json(&json!({"tagline": "Updated tagline"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let after: Value = response.json().await.unwrap();
    assert_eq!(after["tagline"], "Updated tagline");
    // untouched fields survive the patch
    assert_eq!(after["name"], before["name"]);
    assert_eq!(after["email"], before["email"]);
}

#[tokio::test]
async fn personal_info_rejects_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .put(app.url("/api/personal-info"))
        .json(&json!({"email": "not-an-email"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Validation failed");
}

#[tokio::test]
async fn experience_create_update_delete_round_trip() {
    let app = TestApp::spawn().await;

    let created: Value = {
        let response = app
            .client
            .post(app.url("/api/experience"))
            .json(&json!({
                "company": "Acme Corp",
                "role": "Backend Engineer",
                "period": "2024 - Present",
                "location": "Remote",
                "type": "Full-time",
                "description": "Built internal services.",
                "achievements": ["Shipped the billing pipeline"],
                "technologies": ["Rust", "Postgres"]
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        response.json().await.unwrap()
    };
    assert_eq!(created["company"], "Acme Corp");
    assert_eq!(created["type"], "Full-time");
    assert_eq!(created["isCurrentJob"], true);

    let id = created["id"].as_str().unwrap();

    let updated: Value = app
        .client
        .put(app.url(&format!("/api/experience/{}", id)))
        .json(&json!({"role": "Staff Engineer", "isCurrentJob": false}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["role"], "Staff Engineer");
    assert_eq!(updated["isCurrentJob"], false);
    assert_eq!(updated["company"], "Acme Corp");

    let response = app
        .client
        .delete(app.url(&format!("/api/experience/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Experience deleted successfully");

    // already gone
    let response = app
        .client
        .delete(app.url(&format!("/api/experience/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn experience_rejects_empty_company() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/experience"))
        .json(&json!({
            "company": "",
            "role": "Engineer",
            "period": "2024",
            "location": "Remote",
            "type": "Full-time",
            "description": ""
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn featured_projects_is_the_featured_subset() {
    let app = TestApp::spawn().await;

    let all: Vec<Value> = app
        .client
        .get(app.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let featured: Vec<Value> = app
        .client
        .get(app.url("/api/projects/featured"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!featured.is_empty());
    assert!(featured.iter().all(|p| p["isFeatured"] == true));
    let expected: Vec<&Value> = all.iter().filter(|p| p["isFeatured"] == true).collect();
    assert_eq!(featured.len(), expected.len());
}

#[tokio::test]
async fn unknown_project_update_returns_404_detail() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .put(app.url(&format!("/api/projects/{}", Uuid::new_v4())))
        .json(&json!({"title": "New title"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn skill_level_outside_range_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/skills"))
        .json(&json!({
            "category": "Databases",
            "name": "MySQL",
            "level": 250,
            "description": ""
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Validation failed");
}

#[tokio::test]
async fn education_and_achievements_are_seeded() {
    let app = TestApp::spawn().await;

    let education: Vec<Value> = app
        .client
        .get(app.url("/api/education"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!education.is_empty());

    let achievements: Vec<Value> = app
        .client
        .get(app.url("/api/achievements"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!achievements.is_empty());
    assert!(achievements.iter().all(|a| a["category"].is_string()));
}

use super::*;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use crate::db::DbClient;
use crate::seed;

const BODY_LIMIT: usize = 1_048_576;

async fn temp_db() -> DbClient {
    let tempdir = tempfile::tempdir().expect("tempdir");
    let db_path = tempdir.path().join("workforce.db");
    std::mem::forget(tempdir);
    DbClient::initialize(&db_path.to_string_lossy())
        .await
        .expect("db init")
}

async fn test_app() -> (Router, ServerState) {
    let state = ServerState {
        db: temp_db().await,
    };
    (router(state.clone()), state)
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json body")
}

async fn create_company(app: &Router, name: &str, email: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/companies",
            &serde_json::json!({ "name": name, "email": email }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    json["id"].as_str().expect("company id").to_string()
}

async fn create_department(app: &Router, company_id: &str, name: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/departments",
            &serde_json::json!({
                "company_id": company_id,
                "name": name,
                "budget": 100_000.0
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    json["id"].as_str().expect("department id").to_string()
}

async fn create_employee(app: &Router, department_id: &str, email: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/employees",
            &serde_json::json!({
                "department_id": department_id,
                "first_name": "Anna",
                "last_name": "Kowalski",
                "email": email,
                "salary": 50_000.0,
                "position": "Engineer"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    json["id"].as_str().expect("employee id").to_string()
}

#[tokio::test]
async fn service_info_lists_the_api_surface() {
    let (app, _state) = test_app().await;

    let response = app
        .oneshot(empty_request("GET", "/"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["message"], "Workforce API Server");
    assert_eq!(json["endpoints"].as_array().expect("endpoints").len(), 5);
}

#[tokio::test]
async fn company_crud_through_the_router() {
    let (app, _state) = test_app().await;

    let company_id = create_company(&app, "Tech Corp", "info@techcorp.com").await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/companies/{company_id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["name"], "Tech Corp");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/companies/{company_id}"),
            &serde_json::json!({
                "name": "Tech Corp International",
                "email": "info@techcorp.com"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["name"], "Tech Corp International");

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/companies/{company_id}"),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/companies/{company_id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_company_validates_the_payload() {
    let (app, _state) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/companies",
            &serde_json::json!({ "name": "", "email": "" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/companies",
            &serde_json::json!({ "name": "Tech Corp", "email": "not-an-email" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_company_email_conflicts() {
    let (app, _state) = test_app().await;

    let _first = create_company(&app, "Tech Corp", "info@techcorp.com").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/companies",
            &serde_json::json!({ "name": "Copy Corp", "email": "info@techcorp.com" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_department_requires_an_existing_company() {
    let (app, _state) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/departments",
            &serde_json::json!({ "company_id": "missing", "name": "Engineering" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn company_departments_nests_the_roster() {
    let (app, _state) = test_app().await;

    let company_id = create_company(&app, "Tech Corp", "info@techcorp.com").await;
    let _department_id = create_department(&app, &company_id, "Engineering").await;

    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            &format!("/api/companies/{company_id}/departments"),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["company"]["name"], "Tech Corp");
    assert_eq!(
        json["departments"].as_array().expect("departments").len(),
        1
    );
}

#[tokio::test]
async fn create_employee_hashes_the_password_and_never_returns_it() {
    let (app, state) = test_app().await;

    let company_id = create_company(&app, "Tech Corp", "info@techcorp.com").await;
    let department_id = create_department(&app, &company_id, "Engineering").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/employees",
            &serde_json::json!({
                "department_id": department_id,
                "first_name": "Anna",
                "last_name": "Kowalski",
                "email": "anna@techcorp.com",
                "salary": 50_000.0,
                "password": "short"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/employees",
            &serde_json::json!({
                "department_id": department_id,
                "first_name": "Anna",
                "last_name": "Kowalski",
                "email": "anna@techcorp.com",
                "salary": 50_000.0,
                "password": "correct horse battery staple"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let raw = String::from_utf8(body.to_vec()).expect("utf8 body");
    assert!(!raw.contains("password"));

    let employee_id = serde_json::from_str::<serde_json::Value>(&raw).expect("json")["id"]
        .as_str()
        .expect("employee id")
        .to_string();

    let stored_hash = sqlx::query_scalar::<_, Option<String>>(
        "SELECT password_hash FROM employees WHERE id = ?1",
    )
    .bind(&employee_id)
    .fetch_one(&state.db.pool())
    .await
    .expect("hash lookup")
    .expect("hash stored");
    assert!(stored_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn employee_search_filters_through_query_params() {
    let (app, _state) = test_app().await;

    let company_id = create_company(&app, "Tech Corp", "info@techcorp.com").await;
    let department_id = create_department(&app, &company_id, "Engineering").await;
    let _anna = create_employee(&app, &department_id, "anna@techcorp.com").await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/employees/search?name=Anna"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json.as_array().expect("rows").len(), 1);

    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            "/api/employees/search?min_salary=90000",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert!(json.as_array().expect("rows").is_empty());
}

#[tokio::test]
async fn deleting_an_assigned_employee_conflicts() {
    let (app, _state) = test_app().await;

    let company_id = create_company(&app, "Tech Corp", "info@techcorp.com").await;
    let department_id = create_department(&app, &company_id, "Engineering").await;
    let employee_id = create_employee(&app, &department_id, "anna@techcorp.com").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/projects",
            &serde_json::json!({
                "name": "Mobile App",
                "assigned_employee_id": employee_id
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/employees/{employee_id}"),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn project_validation_rejects_bad_input() {
    let (app, _state) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/projects",
            &serde_json::json!({
                "name": "Backwards",
                "start_date": "2024-06-15",
                "end_date": "2024-01-15"
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/projects",
            &serde_json::json!({ "name": "Odd", "status": "cancelled" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/projects",
            &serde_json::json!({ "name": "Orphan", "assigned_employee_id": "missing" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assign_project_swaps_the_assignee() {
    let (app, _state) = test_app().await;

    let company_id = create_company(&app, "Tech Corp", "info@techcorp.com").await;
    let department_id = create_department(&app, &company_id, "Engineering").await;
    let employee_id = create_employee(&app, &department_id, "anna@techcorp.com").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/projects",
            &serde_json::json!({ "name": "Mobile App" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let project_id = response_json(response).await["id"]
        .as_str()
        .expect("project id")
        .to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/projects/{project_id}/assign"),
            &serde_json::json!({ "employee_id": employee_id }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["message"], "Project assigned successfully");
    assert_eq!(json["project"]["assigned_employee_id"], employee_id.as_str());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/projects/{project_id}/assign"),
            &serde_json::json!({ "employee_id": "missing" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_summary_validates_the_status_segment() {
    let (app, _state) = test_app().await;

    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            "/api/projects/status/cancelled/summary",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            "/api/projects/status/completed/summary",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "completed");
    assert_eq!(json["project_count"], 0);
}

#[tokio::test]
async fn reports_cover_the_seeded_directory() {
    let (app, state) = test_app().await;
    seed::run(&state.db).await.expect("seed");

    for uri in [
        "/api/reports/company-overview",
        "/api/reports/employee-performance",
        "/api/reports/project-timeline",
        "/api/reports/financial-summary",
        "/api/reports/department-efficiency",
        "/api/reports/cross-company-analysis",
    ] {
        let response = app
            .clone()
            .oneshot(empty_request("GET", uri))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let json = response_json(response).await;
        assert!(!json.as_array().expect("rows").is_empty(), "{uri}");
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/reports/company-overview"))
        .await
        .expect("response");
    let json = response_json(response).await;
    let tech_corp = json
        .as_array()
        .expect("rows")
        .iter()
        .find(|row| row["company_name"] == "Tech Corp")
        .expect("Tech Corp present")
        .clone();
    assert_eq!(tech_corp["total_departments"], 2);
    assert_eq!(tech_corp["total_employees"], 3);
    assert_eq!(tech_corp["total_projects"], 3);
}

use anyhow::Result;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};

use crate::config::WorkforceConfig;
use crate::db::DbClient;
use crate::request_logging;

use self::api_types::ServiceInfoResponse;

mod api_types;
mod companies;
mod departments;
mod employees;
mod projects;
mod reports;
mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ServerState {
    pub db: DbClient,
}

/// Initializes the database and serves the API until interrupted.
///
/// # Errors
/// Returns an error if the database cannot be initialized or the listener
/// cannot bind.
pub async fn run(config: &WorkforceConfig) -> Result<()> {
    let database_path = config.database_path();
    let bind_address = config.bind_address();

    let db = DbClient::initialize(&database_path).await?;
    let state = ServerState { db };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    println!("Database initialized at: {database_path}");
    println!("Listening on: {bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[allow(clippy::too_many_lines)]
fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route(
            "/api/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/api/companies/:id",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
        .route(
            "/api/companies/:id/departments",
            get(companies::company_departments),
        )
        .route(
            "/api/departments",
            get(departments::list_departments).post(departments::create_department),
        )
        .route(
            "/api/departments/:id",
            get(departments::get_department)
                .put(departments::update_department)
                .delete(departments::delete_department),
        )
        .route(
            "/api/departments/:id/employees",
            get(departments::department_employees),
        )
        .route(
            "/api/departments/company/:company_id/budget-summary",
            get(departments::company_budget_summary),
        )
        .route(
            "/api/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route("/api/employees/search", get(employees::search_employees))
        .route(
            "/api/employees/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/api/employees/department/:department_id/salary-stats",
            get(employees::department_salary_stats),
        )
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/api/projects/overdue", get(projects::overdue_projects))
        .route(
            "/api/projects/budget-analysis",
            get(projects::budget_analysis),
        )
        .route(
            "/api/projects/:id",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/api/projects/:id/assign", post(projects::assign_project))
        .route(
            "/api/projects/status/:status/summary",
            get(projects::status_summary),
        )
        .route(
            "/api/reports/company-overview",
            get(reports::company_overview),
        )
        .route(
            "/api/reports/employee-performance",
            get(reports::employee_performance),
        )
        .route(
            "/api/reports/project-timeline",
            get(reports::project_timeline),
        )
        .route(
            "/api/reports/financial-summary",
            get(reports::financial_summary),
        )
        .route(
            "/api/reports/department-efficiency",
            get(reports::department_efficiency),
        )
        .route(
            "/api/reports/cross-company-analysis",
            get(reports::cross_company_analysis),
        )
        .layer(middleware::from_fn(request_logging::log_api_request))
        .with_state(state)
}

async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "Workforce API Server",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: &[
            "/api/companies",
            "/api/departments",
            "/api/employees",
            "/api/projects",
            "/api/reports",
        ],
    })
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

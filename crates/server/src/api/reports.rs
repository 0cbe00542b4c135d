use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::db::{
    CompanyOverviewRecord, CrossCompanyAnalysisRecord, DepartmentEfficiencyRecord,
    EmployeePerformanceRecord, FinancialSummaryRecord, ProjectTimelineRecord,
};

use super::ServerState;

pub(super) async fn company_overview(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CompanyOverviewRecord>>, StatusCode> {
    let rows = state
        .db
        .report_company_overview()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(rows))
}

pub(super) async fn employee_performance(
    State(state): State<ServerState>,
) -> Result<Json<Vec<EmployeePerformanceRecord>>, StatusCode> {
    let rows = state
        .db
        .report_employee_performance()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(rows))
}

pub(super) async fn project_timeline(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ProjectTimelineRecord>>, StatusCode> {
    let rows = state
        .db
        .report_project_timeline()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(rows))
}

pub(super) async fn financial_summary(
    State(state): State<ServerState>,
) -> Result<Json<Vec<FinancialSummaryRecord>>, StatusCode> {
    let rows = state
        .db
        .report_financial_summary()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(rows))
}

pub(super) async fn department_efficiency(
    State(state): State<ServerState>,
) -> Result<Json<Vec<DepartmentEfficiencyRecord>>, StatusCode> {
    let rows = state
        .db
        .report_department_efficiency()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(rows))
}

pub(super) async fn cross_company_analysis(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CrossCompanyAnalysisRecord>>, StatusCode> {
    let rows = state
        .db
        .report_cross_company_analysis()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(rows))
}

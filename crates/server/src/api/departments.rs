use axum::extract::Path as AxumPath;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::db::{
    DepartmentBudgetSummaryRecord, DepartmentRecord, DepartmentUpdate, NewDepartment,
};

use super::api_types::{
    CreateDepartmentRequest, DepartmentEmployeesResponse, UpdateDepartmentRequest,
};
use super::validate::non_negative;
use super::ServerState;

pub(super) async fn list_departments(
    State(state): State<ServerState>,
) -> Result<Json<Vec<DepartmentRecord>>, StatusCode> {
    let departments = state
        .db
        .list_departments()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(departments))
}

pub(super) async fn get_department(
    State(state): State<ServerState>,
    AxumPath(department_id): AxumPath<String>,
) -> Result<Json<DepartmentRecord>, StatusCode> {
    let department = state
        .db
        .get_department_by_id(&department_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(department))
}

pub(super) async fn create_department(
    State(state): State<ServerState>,
    Json(payload): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentRecord>), (StatusCode, String)> {
    if payload.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Department name is required".to_string(),
        ));
    }

    if !non_negative(payload.budget) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Department budget must not be negative".to_string(),
        ));
    }

    let company_exists = state
        .db
        .company_exists(&payload.company_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to validate company".to_string()))?;

    if !company_exists {
        return Err((StatusCode::NOT_FOUND, "Company not found".to_string()));
    }

    let department = NewDepartment {
        id: Uuid::new_v4().to_string(),
        company_id: payload.company_id,
        name: payload.name.trim().to_string(),
        budget: payload.budget,
        manager_name: payload.manager_name,
    };

    state.db.insert_department(&department).await.map_err(|error| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to persist department record: {error}"),
        )
    })?;

    let created = state
        .db
        .get_department_by_id(&department.id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load created department".to_string()))?
        .ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Created department disappeared".to_string(),
        ))?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub(super) async fn update_department(
    State(state): State<ServerState>,
    AxumPath(department_id): AxumPath<String>,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> Result<Json<DepartmentRecord>, (StatusCode, String)> {
    if payload.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Department name is required".to_string(),
        ));
    }

    if !non_negative(payload.budget) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Department budget must not be negative".to_string(),
        ));
    }

    let company_exists = state
        .db
        .company_exists(&payload.company_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to validate company".to_string()))?;

    if !company_exists {
        return Err((StatusCode::NOT_FOUND, "Company not found".to_string()));
    }

    let update = DepartmentUpdate {
        company_id: payload.company_id,
        name: payload.name.trim().to_string(),
        budget: payload.budget,
        manager_name: payload.manager_name,
    };

    let updated = state
        .db
        .update_department(&department_id, &update)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update department".to_string()))?;

    if !updated {
        return Err((StatusCode::NOT_FOUND, "Department not found".to_string()));
    }

    let department = state
        .db
        .get_department_by_id(&department_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load updated department".to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Department not found".to_string()))?;

    Ok(Json(department))
}

pub(super) async fn delete_department(
    State(state): State<ServerState>,
    AxumPath(department_id): AxumPath<String>,
) -> Result<StatusCode, StatusCode> {
    let deleted = state
        .db
        .delete_department_by_id(&department_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

pub(super) async fn department_employees(
    State(state): State<ServerState>,
    AxumPath(department_id): AxumPath<String>,
) -> Result<Json<DepartmentEmployeesResponse>, StatusCode> {
    let department = state
        .db
        .get_department_by_id(&department_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let company_name = state
        .db
        .get_company_by_id(&department.company_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .map(|company| company.name);

    let employees = state
        .db
        .list_employees_for_department(&department_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(DepartmentEmployeesResponse {
        department,
        company_name,
        employees,
    }))
}

pub(super) async fn company_budget_summary(
    State(state): State<ServerState>,
    AxumPath(company_id): AxumPath<String>,
) -> Result<Json<Vec<DepartmentBudgetSummaryRecord>>, StatusCode> {
    let company_exists = state
        .db
        .company_exists(&company_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if !company_exists {
        return Err(StatusCode::NOT_FOUND);
    }

    let summary = state
        .db
        .company_budget_summary(&company_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(summary))
}

use axum::extract::Path as AxumPath;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::db::{
    NewProject, OverdueProjectRecord, ProjectBudgetAnalysisRecord, ProjectDetailsRecord,
    ProjectStatusSummaryRecord, ProjectUpdate,
};

use super::api_types::{
    AssignProjectRequest, AssignProjectResponse, CreateProjectRequest, UpdateProjectRequest,
};
use super::validate::{dates_ordered, non_negative, valid_project_status};
use super::ServerState;

const DEFAULT_PROJECT_STATUS: &str = "planning";

async fn validate_project(
    state: &ServerState,
    update: &ProjectUpdate,
) -> Result<(), (StatusCode, String)> {
    if update.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Project name is required".to_string(),
        ));
    }

    if !valid_project_status(&update.status) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Unknown project status: {}", update.status),
        ));
    }

    if !non_negative(update.budget) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Project budget must not be negative".to_string(),
        ));
    }

    if !dates_ordered(update.start_date.as_deref(), update.end_date.as_deref()) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Project end date must not precede its start date".to_string(),
        ));
    }

    if let Some(employee_id) = update.assigned_employee_id.as_deref() {
        let exists = state
            .db
            .employee_exists(employee_id)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to validate employee".to_string()))?;

        if !exists {
            return Err((StatusCode::NOT_FOUND, "Employee not found".to_string()));
        }
    }

    Ok(())
}

pub(super) async fn list_projects(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ProjectDetailsRecord>>, StatusCode> {
    let projects = state
        .db
        .list_projects()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(projects))
}

pub(super) async fn get_project(
    State(state): State<ServerState>,
    AxumPath(project_id): AxumPath<String>,
) -> Result<Json<ProjectDetailsRecord>, StatusCode> {
    let project = state
        .db
        .get_project_by_id(&project_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(project))
}

pub(super) async fn create_project(
    State(state): State<ServerState>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectDetailsRecord>), (StatusCode, String)> {
    let fields = ProjectUpdate {
        name: payload.name,
        description: payload.description,
        start_date: payload.start_date,
        end_date: payload.end_date,
        budget: payload.budget,
        status: payload
            .status
            .unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string()),
        assigned_employee_id: payload.assigned_employee_id,
    };

    validate_project(&state, &fields).await?;

    let project = NewProject {
        id: Uuid::new_v4().to_string(),
        name: fields.name.trim().to_string(),
        description: fields.description,
        start_date: fields.start_date,
        end_date: fields.end_date,
        budget: fields.budget,
        status: fields.status,
        assigned_employee_id: fields.assigned_employee_id,
    };

    state.db.insert_project(&project).await.map_err(|error| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to persist project record: {error}"),
        )
    })?;

    let created = state
        .db
        .get_project_by_id(&project.id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load created project".to_string()))?
        .ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Created project disappeared".to_string(),
        ))?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub(super) async fn update_project(
    State(state): State<ServerState>,
    AxumPath(project_id): AxumPath<String>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectDetailsRecord>, (StatusCode, String)> {
    let mut update = ProjectUpdate {
        name: payload.name,
        description: payload.description,
        start_date: payload.start_date,
        end_date: payload.end_date,
        budget: payload.budget,
        status: payload.status,
        assigned_employee_id: payload.assigned_employee_id,
    };

    validate_project(&state, &update).await?;
    update.name = update.name.trim().to_string();

    let updated = state
        .db
        .update_project(&project_id, &update)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update project".to_string()))?;

    if !updated {
        return Err((StatusCode::NOT_FOUND, "Project not found".to_string()));
    }

    let project = state
        .db
        .get_project_by_id(&project_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load updated project".to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Project not found".to_string()))?;

    Ok(Json(project))
}

pub(super) async fn delete_project(
    State(state): State<ServerState>,
    AxumPath(project_id): AxumPath<String>,
) -> Result<StatusCode, StatusCode> {
    let deleted = state
        .db
        .delete_project_by_id(&project_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

pub(super) async fn assign_project(
    State(state): State<ServerState>,
    AxumPath(project_id): AxumPath<String>,
    Json(payload): Json<AssignProjectRequest>,
) -> Result<Json<AssignProjectResponse>, (StatusCode, String)> {
    let employee_exists = state
        .db
        .employee_exists(&payload.employee_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to validate employee".to_string()))?;

    if !employee_exists {
        return Err((StatusCode::NOT_FOUND, "Employee not found".to_string()));
    }

    let assigned = state
        .db
        .assign_project(&project_id, &payload.employee_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Failed to assign project".to_string()))?;

    if !assigned {
        return Err((StatusCode::NOT_FOUND, "Project not found".to_string()));
    }

    let project = state
        .db
        .get_project_by_id(&project_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load assigned project".to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Project not found".to_string()))?;

    Ok(Json(AssignProjectResponse {
        message: "Project assigned successfully",
        project,
    }))
}

pub(super) async fn status_summary(
    State(state): State<ServerState>,
    AxumPath(status): AxumPath<String>,
) -> Result<Json<ProjectStatusSummaryRecord>, (StatusCode, String)> {
    if !valid_project_status(&status) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Unknown project status: {status}"),
        ));
    }

    let summary = state
        .db
        .project_status_summary(&status)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Failed to summarize projects".to_string()))?
        .unwrap_or_else(|| ProjectStatusSummaryRecord {
            status,
            project_count: 0,
            total_budget: None,
            average_budget: None,
            earliest_start: None,
            latest_end: None,
            departments_involved: 0,
            companies_involved: 0,
            company_names: None,
            department_names: None,
        });

    Ok(Json(summary))
}

pub(super) async fn overdue_projects(
    State(state): State<ServerState>,
) -> Result<Json<Vec<OverdueProjectRecord>>, StatusCode> {
    let projects = state
        .db
        .overdue_projects()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(projects))
}

pub(super) async fn budget_analysis(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ProjectBudgetAnalysisRecord>>, StatusCode> {
    let analysis = state
        .db
        .project_budget_analysis()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(analysis))
}

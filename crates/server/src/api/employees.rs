use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use axum::extract::Path as AxumPath;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::db::{
    DepartmentSalaryStatsRecord, EmployeeDetailsRecord, EmployeeSearchFilter,
    EmployeeSearchRecord, EmployeeUpdate, NewEmployee,
};

use super::api_types::{CreateEmployeeRequest, EmployeeSearchQuery, UpdateEmployeeRequest};
use super::validate::{non_negative, valid_email};
use super::ServerState;

const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) async fn list_employees(
    State(state): State<ServerState>,
) -> Result<Json<Vec<EmployeeDetailsRecord>>, StatusCode> {
    let employees = state
        .db
        .list_employees()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(employees))
}

pub(super) async fn get_employee(
    State(state): State<ServerState>,
    AxumPath(employee_id): AxumPath<String>,
) -> Result<Json<EmployeeDetailsRecord>, StatusCode> {
    let employee = state
        .db
        .get_employee_by_id(&employee_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(employee))
}

#[allow(clippy::too_many_lines)]
pub(super) async fn create_employee(
    State(state): State<ServerState>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeDetailsRecord>), (StatusCode, String)> {
    if payload.first_name.trim().is_empty()
        || payload.last_name.trim().is_empty()
        || payload.email.trim().is_empty()
    {
        return Err((
            StatusCode::BAD_REQUEST,
            "Employee first name, last name, and email are required".to_string(),
        ));
    }

    if !valid_email(payload.email.trim()) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Employee email is not a valid address".to_string(),
        ));
    }

    if !non_negative(payload.salary) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Employee salary must not be negative".to_string(),
        ));
    }

    let department_exists = state
        .db
        .department_exists(&payload.department_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to validate department".to_string()))?;

    if !department_exists {
        return Err((StatusCode::NOT_FOUND, "Department not found".to_string()));
    }

    let email = payload.email.trim().to_string();
    let in_use = state
        .db
        .employee_email_in_use(&email, None)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to validate employee email".to_string()))?;

    if in_use {
        return Err((
            StatusCode::CONFLICT,
            format!("Employee email {email} is already registered"),
        ));
    }

    let password_hash = match payload.password.as_deref() {
        Some(password) => {
            if password.len() < MIN_PASSWORD_LENGTH {
                return Err((
                    StatusCode::BAD_REQUEST,
                    format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
                ));
            }

            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(|_| {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to hash password".to_string(),
                    )
                })?
                .to_string();

            Some(hash)
        }
        None => None,
    };

    let employee = NewEmployee {
        id: Uuid::new_v4().to_string(),
        department_id: payload.department_id,
        first_name: payload.first_name.trim().to_string(),
        last_name: payload.last_name.trim().to_string(),
        email,
        phone: payload.phone,
        salary: payload.salary,
        position: payload.position,
        password_hash,
    };

    state.db.insert_employee(&employee).await.map_err(|error| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to persist employee record: {error}"),
        )
    })?;

    let created = state
        .db
        .get_employee_by_id(&employee.id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load created employee".to_string()))?
        .ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Created employee disappeared".to_string(),
        ))?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[allow(clippy::too_many_lines)]
pub(super) async fn update_employee(
    State(state): State<ServerState>,
    AxumPath(employee_id): AxumPath<String>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeDetailsRecord>, (StatusCode, String)> {
    if payload.first_name.trim().is_empty()
        || payload.last_name.trim().is_empty()
        || payload.email.trim().is_empty()
    {
        return Err((
            StatusCode::BAD_REQUEST,
            "Employee first name, last name, and email are required".to_string(),
        ));
    }

    if !valid_email(payload.email.trim()) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Employee email is not a valid address".to_string(),
        ));
    }

    if !non_negative(payload.salary) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Employee salary must not be negative".to_string(),
        ));
    }

    let department_exists = state
        .db
        .department_exists(&payload.department_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to validate department".to_string()))?;

    if !department_exists {
        return Err((StatusCode::NOT_FOUND, "Department not found".to_string()));
    }

    let email = payload.email.trim().to_string();
    let in_use = state
        .db
        .employee_email_in_use(&email, Some(&employee_id))
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to validate employee email".to_string()))?;

    if in_use {
        return Err((
            StatusCode::CONFLICT,
            format!("Employee email {email} is already registered"),
        ));
    }

    let update = EmployeeUpdate {
        department_id: payload.department_id,
        first_name: payload.first_name.trim().to_string(),
        last_name: payload.last_name.trim().to_string(),
        email,
        phone: payload.phone,
        salary: payload.salary,
        position: payload.position,
        is_active: payload.is_active,
    };

    let updated = state
        .db
        .update_employee(&employee_id, &update)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update employee".to_string()))?;

    if !updated {
        return Err((StatusCode::NOT_FOUND, "Employee not found".to_string()));
    }

    let employee = state
        .db
        .get_employee_by_id(&employee_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load updated employee".to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Employee not found".to_string()))?;

    Ok(Json(employee))
}

pub(super) async fn delete_employee(
    State(state): State<ServerState>,
    AxumPath(employee_id): AxumPath<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let exists = state
        .db
        .employee_exists(&employee_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load employee".to_string()))?;

    if !exists {
        return Err((StatusCode::NOT_FOUND, "Employee not found".to_string()));
    }

    let has_projects = state
        .db
        .employee_has_assigned_projects(&employee_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to check assigned projects".to_string()))?;

    if has_projects {
        return Err((
            StatusCode::CONFLICT,
            "Employee still has assigned projects; unassign them first".to_string(),
        ));
    }

    let deleted = state
        .db
        .delete_employee_by_id(&employee_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete employee".to_string()))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Employee not found".to_string()))
    }
}

pub(super) async fn search_employees(
    State(state): State<ServerState>,
    Query(query): Query<EmployeeSearchQuery>,
) -> Result<Json<Vec<EmployeeSearchRecord>>, StatusCode> {
    let filter = EmployeeSearchFilter {
        name: query.name,
        position: query.position,
        min_salary: query.min_salary,
        max_salary: query.max_salary,
        department_id: query.department_id,
        company_id: query.company_id,
    };

    let employees = state
        .db
        .search_employees(&filter)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(employees))
}

pub(super) async fn department_salary_stats(
    State(state): State<ServerState>,
    AxumPath(department_id): AxumPath<String>,
) -> Result<Json<DepartmentSalaryStatsRecord>, StatusCode> {
    let stats = state
        .db
        .department_salary_stats(&department_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(stats))
}

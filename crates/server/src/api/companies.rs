use axum::extract::Path as AxumPath;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::db::{CompanyRecord, CompanyUpdate, NewCompany};

use super::api_types::{CompanyDepartmentsResponse, CreateCompanyRequest, UpdateCompanyRequest};
use super::validate::valid_email;
use super::ServerState;

pub(super) async fn list_companies(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CompanyRecord>>, StatusCode> {
    let companies = state
        .db
        .list_companies()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(companies))
}

pub(super) async fn get_company(
    State(state): State<ServerState>,
    AxumPath(company_id): AxumPath<String>,
) -> Result<Json<CompanyRecord>, StatusCode> {
    let company = state
        .db
        .get_company_by_id(&company_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(company))
}

pub(super) async fn create_company(
    State(state): State<ServerState>,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyRecord>), (StatusCode, String)> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Company name and email are required".to_string(),
        ));
    }

    if !valid_email(payload.email.trim()) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Company email is not a valid address".to_string(),
        ));
    }

    let email = payload.email.trim().to_string();
    let in_use = state
        .db
        .company_email_in_use(&email, None)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to validate company email".to_string()))?;

    if in_use {
        return Err((
            StatusCode::CONFLICT,
            format!("Company email {email} is already registered"),
        ));
    }

    let company = NewCompany {
        id: Uuid::new_v4().to_string(),
        name: payload.name.trim().to_string(),
        email,
        address: payload.address,
        phone: payload.phone,
    };

    state.db.insert_company(&company).await.map_err(|error| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to persist company record: {error}"),
        )
    })?;

    let created = state
        .db
        .get_company_by_id(&company.id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load created company".to_string()))?
        .ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Created company disappeared".to_string(),
        ))?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub(super) async fn update_company(
    State(state): State<ServerState>,
    AxumPath(company_id): AxumPath<String>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyRecord>, (StatusCode, String)> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Company name and email are required".to_string(),
        ));
    }

    if !valid_email(payload.email.trim()) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Company email is not a valid address".to_string(),
        ));
    }

    let email = payload.email.trim().to_string();
    let in_use = state
        .db
        .company_email_in_use(&email, Some(&company_id))
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to validate company email".to_string()))?;

    if in_use {
        return Err((
            StatusCode::CONFLICT,
            format!("Company email {email} is already registered"),
        ));
    }

    let update = CompanyUpdate {
        name: payload.name.trim().to_string(),
        email,
        address: payload.address,
        phone: payload.phone,
    };

    let updated = state
        .db
        .update_company(&company_id, &update)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update company".to_string()))?;

    if !updated {
        return Err((StatusCode::NOT_FOUND, "Company not found".to_string()));
    }

    let company = state
        .db
        .get_company_by_id(&company_id)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Unable to load updated company".to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Company not found".to_string()))?;

    Ok(Json(company))
}

pub(super) async fn delete_company(
    State(state): State<ServerState>,
    AxumPath(company_id): AxumPath<String>,
) -> Result<StatusCode, StatusCode> {
    let deleted = state
        .db
        .delete_company_by_id(&company_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

pub(super) async fn company_departments(
    State(state): State<ServerState>,
    AxumPath(company_id): AxumPath<String>,
) -> Result<Json<CompanyDepartmentsResponse>, StatusCode> {
    let company = state
        .db
        .get_company_by_id(&company_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let departments = state
        .db
        .list_departments_for_company(&company_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(CompanyDepartmentsResponse {
        company,
        departments,
    }))
}

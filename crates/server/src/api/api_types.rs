use serde::{Deserialize, Serialize};

use crate::db::{CompanyRecord, DepartmentRecord, EmployeeRecord, ProjectDetailsRecord};

#[derive(Debug, Serialize)]
pub(super) struct ServiceInfoResponse {
    pub(super) message: &'static str,
    pub(super) version: &'static str,
    pub(super) endpoints: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateCompanyRequest {
    pub(super) name: String,
    pub(super) email: String,
    pub(super) address: Option<String>,
    pub(super) phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdateCompanyRequest {
    pub(super) name: String,
    pub(super) email: String,
    pub(super) address: Option<String>,
    pub(super) phone: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct CompanyDepartmentsResponse {
    pub(super) company: CompanyRecord,
    pub(super) departments: Vec<DepartmentRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateDepartmentRequest {
    pub(super) company_id: String,
    pub(super) name: String,
    pub(super) budget: Option<f64>,
    pub(super) manager_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdateDepartmentRequest {
    pub(super) company_id: String,
    pub(super) name: String,
    pub(super) budget: Option<f64>,
    pub(super) manager_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct DepartmentEmployeesResponse {
    pub(super) department: DepartmentRecord,
    pub(super) company_name: Option<String>,
    pub(super) employees: Vec<EmployeeRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateEmployeeRequest {
    pub(super) department_id: String,
    pub(super) first_name: String,
    pub(super) last_name: String,
    pub(super) email: String,
    pub(super) phone: Option<String>,
    pub(super) salary: Option<f64>,
    pub(super) position: Option<String>,
    pub(super) password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdateEmployeeRequest {
    pub(super) department_id: String,
    pub(super) first_name: String,
    pub(super) last_name: String,
    pub(super) email: String,
    pub(super) phone: Option<String>,
    pub(super) salary: Option<f64>,
    pub(super) position: Option<String>,
    pub(super) is_active: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct EmployeeSearchQuery {
    pub(super) name: Option<String>,
    pub(super) position: Option<String>,
    pub(super) min_salary: Option<f64>,
    pub(super) max_salary: Option<f64>,
    pub(super) department_id: Option<String>,
    pub(super) company_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateProjectRequest {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) start_date: Option<String>,
    pub(super) end_date: Option<String>,
    pub(super) budget: Option<f64>,
    pub(super) status: Option<String>,
    pub(super) assigned_employee_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdateProjectRequest {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) start_date: Option<String>,
    pub(super) end_date: Option<String>,
    pub(super) budget: Option<f64>,
    pub(super) status: String,
    pub(super) assigned_employee_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AssignProjectRequest {
    pub(super) employee_id: String,
}

#[derive(Debug, Serialize)]
pub(super) struct AssignProjectResponse {
    pub(super) message: &'static str,
    pub(super) project: ProjectDetailsRecord,
}

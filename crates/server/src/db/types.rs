use serde::Serialize;

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CompanyUpdate {
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub budget: Option<f64>,
    pub manager_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DepartmentUpdate {
    pub company_id: String,
    pub name: String,
    pub budget: Option<f64>,
    pub manager_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentRecord {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub budget: Option<f64>,
    pub manager_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub id: String,
    pub department_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub salary: Option<f64>,
    pub position: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EmployeeUpdate {
    pub department_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub salary: Option<f64>,
    pub position: Option<String>,
    pub is_active: bool,
}

/// Employee row without the credential column; safe to serialize.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRecord {
    pub id: String,
    pub department_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: String,
    pub position: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeDetailsRecord {
    pub id: String,
    pub department_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: String,
    pub position: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub department_name: Option<String>,
    pub department_budget: Option<f64>,
    pub company_name: Option<String>,
    pub company_email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeSearchFilter {
    pub name: Option<String>,
    pub position: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub department_id: Option<String>,
    pub company_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeSearchRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: String,
    pub is_active: bool,
    pub department_name: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DepartmentSalaryStatsRecord {
    pub department_name: String,
    pub department_budget: Option<f64>,
    pub company_name: Option<String>,
    pub total_employees: i64,
    pub average_salary: Option<f64>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub total_salary_cost: Option<f64>,
    pub remaining_budget: Option<f64>,
    #[sqlx(default)]
    pub salary_deviation: Option<f64>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DepartmentBudgetSummaryRecord {
    pub id: String,
    pub name: String,
    pub budget: Option<f64>,
    pub manager_name: Option<String>,
    pub employee_count: i64,
    pub avg_salary: Option<f64>,
    pub total_salaries: Option<f64>,
    pub budget_per_employee: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    pub status: String,
    pub assigned_employee_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProjectUpdate {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    pub status: String,
    pub assigned_employee_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectDetailsRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    pub status: String,
    pub assigned_employee_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub assigned_employee_name: Option<String>,
    pub employee_email: Option<String>,
    pub employee_position: Option<String>,
    pub department_name: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectStatusSummaryRecord {
    pub status: String,
    pub project_count: i64,
    pub total_budget: Option<f64>,
    pub average_budget: Option<f64>,
    pub earliest_start: Option<String>,
    pub latest_end: Option<String>,
    pub departments_involved: i64,
    pub companies_involved: i64,
    pub company_names: Option<String>,
    pub department_names: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OverdueProjectRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    pub status: String,
    pub days_overdue: i64,
    pub assigned_employee: Option<String>,
    pub employee_email: Option<String>,
    pub department_name: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectBudgetAnalysisRecord {
    pub company_name: String,
    pub department_name: String,
    pub department_budget: Option<f64>,
    pub total_projects: i64,
    pub total_project_budget: Option<f64>,
    pub avg_project_budget: Option<f64>,
    pub completed_budget: f64,
    pub in_progress_budget: f64,
    pub planning_budget: f64,
    pub remaining_dept_budget: Option<f64>,
    pub total_employee_cost: Option<f64>,
    pub employee_count: i64,
    pub budget_per_employee: Option<f64>,
    pub budget_status: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CompanyOverviewRecord {
    pub company_id: String,
    pub company_name: String,
    pub company_email: String,
    pub company_address: Option<String>,
    pub company_phone: Option<String>,
    pub total_departments: i64,
    pub total_employees: i64,
    pub total_projects: i64,
    pub total_department_budgets: Option<f64>,
    pub total_employee_salaries: Option<f64>,
    pub total_project_budgets: Option<f64>,
    pub avg_employee_salary: Option<f64>,
    pub avg_project_budget: Option<f64>,
    pub active_employees: i64,
    pub completed_projects: i64,
    pub in_progress_projects: i64,
    pub planning_projects: i64,
    pub budget_vs_salary_diff: Option<f64>,
    pub budget_status: String,
    pub department_names: Option<String>,
    pub employee_positions: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeePerformanceRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub email: String,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: String,
    pub years_of_service: i64,
    pub department_name: Option<String>,
    pub department_budget: Option<f64>,
    pub company_name: Option<String>,
    pub total_projects_assigned: i64,
    pub completed_projects: i64,
    pub in_progress_projects: i64,
    pub total_project_value: Option<f64>,
    pub avg_project_value: Option<f64>,
    pub completion_rate: Option<f64>,
    pub salary_percentage_of_dept_budget: Option<f64>,
    pub project_value_to_salary_ratio: Option<f64>,
    pub workload_status: String,
    pub avg_position_salary_in_dept: Option<f64>,
    pub salary_diff_from_avg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectTimelineRecord {
    pub project_id: String,
    pub project_name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    pub status: String,
    pub planned_duration_days: Option<i64>,
    pub timeline_status: String,
    pub days_overdue: Option<i64>,
    pub assigned_employee: Option<String>,
    pub employee_position: Option<String>,
    pub employee_salary: Option<f64>,
    pub department_name: Option<String>,
    pub department_budget: Option<f64>,
    pub manager_name: Option<String>,
    pub company_name: Option<String>,
    pub company_email: Option<String>,
    pub daily_budget_burn: Option<f64>,
    pub daily_employee_cost: Option<f64>,
    pub daily_profit_margin: Option<f64>,
    pub start_month: Option<i64>,
    pub start_year: Option<i64>,
    pub start_quarter: Option<i64>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FinancialSummaryRecord {
    pub company_name: String,
    pub total_department_budget: Option<f64>,
    pub total_employee_costs: Option<f64>,
    pub total_project_budgets: Option<f64>,
    pub department_count: i64,
    pub employee_count: i64,
    pub project_count: i64,
    pub avg_department_budget: Option<f64>,
    pub avg_employee_salary: Option<f64>,
    pub avg_project_budget: Option<f64>,
    pub budget_surplus_deficit: Option<f64>,
    pub budget_efficiency_percentage: Option<f64>,
    pub project_to_salary_ratio: Option<f64>,
    pub completed_project_value: f64,
    pub in_progress_project_value: f64,
    pub planning_project_value: f64,
    pub completion_value_percentage: Option<f64>,
    pub financial_health_status: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DepartmentEfficiencyRecord {
    pub department_id: String,
    pub department_name: String,
    pub department_budget: Option<f64>,
    pub manager_name: Option<String>,
    pub company_name: Option<String>,
    pub total_employees: i64,
    pub active_employees: i64,
    pub total_projects: i64,
    pub total_salary_cost: Option<f64>,
    pub total_project_value: Option<f64>,
    pub avg_employee_salary: Option<f64>,
    pub avg_project_budget: Option<f64>,
    pub remaining_budget: Option<f64>,
    pub budget_utilization_percentage: Option<f64>,
    pub projects_per_employee: Option<f64>,
    pub project_value_per_salary_dollar: Option<f64>,
    pub completed_projects: i64,
    pub in_progress_projects: i64,
    pub planning_projects: i64,
    pub project_completion_rate: Option<f64>,
    pub overdue_projects: i64,
    pub budget_utilization_status: String,
    pub performance_rating: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CrossCompanyAnalysisRecord {
    pub id: String,
    pub name: String,
    pub dept_count: i64,
    pub emp_count: i64,
    pub project_count: i64,
    pub total_budget: Option<f64>,
    pub total_salaries: Option<f64>,
    pub total_project_value: Option<f64>,
    pub avg_salary: Option<f64>,
    pub completed_projects: i64,
    pub avg_dept_count: f64,
    pub avg_emp_count: f64,
    pub avg_project_count: f64,
    pub avg_total_budget: Option<f64>,
    pub avg_total_salaries: Option<f64>,
    pub industry_avg_salary: Option<f64>,
    pub dept_count_vs_avg: f64,
    pub emp_count_vs_avg: f64,
    pub salary_vs_industry_avg: Option<f64>,
    pub budget_per_employee: Option<f64>,
    pub project_value_per_employee: Option<f64>,
    pub completion_rate: Option<f64>,
    pub salary_competitiveness: String,
    pub project_value_rank: i64,
    pub avg_salary_rank: i64,
    pub completion_rate_rank: i64,
}

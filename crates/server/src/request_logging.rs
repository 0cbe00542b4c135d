use std::sync::atomic::{AtomicU64, Ordering};

use axum::body::{to_bytes, Body};
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

static LOG_COUNTER: AtomicU64 = AtomicU64::new(1);

const BODY_READ_LIMIT_BYTES: usize = 1_048_576;
const SHORT_BODY_MAX_CHARS: usize = 160;

pub async fn log_api_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().as_str().to_string();
    let route = request.extensions().get::<MatchedPath>().map_or_else(
        || request.uri().path().to_string(),
        |matched_path| matched_path.as_str().to_string(),
    );

    let (parts, body) = request.into_parts();
    let (body_bytes, short_body) = match to_bytes(body, BODY_READ_LIMIT_BYTES).await {
        Ok(bytes) => {
            let shortened = shorten_request_body(&String::from_utf8_lossy(&bytes));
            (bytes, shortened)
        }
        Err(_) => (
            axum::body::Bytes::new(),
            "<request-body-unavailable>".to_string(),
        ),
    };

    let method_name = method_name_for_route(method.as_str(), route.as_str());
    let log_number = LOG_COUNTER.fetch_add(1, Ordering::Relaxed);
    println!("{log_number}\t{method_name}\t{route}\t{short_body}");

    let request = Request::from_parts(parts, Body::from(body_bytes));
    next.run(request).await
}

fn shorten_request_body(raw_body: &str) -> String {
    if raw_body.is_empty() {
        return "-".to_string();
    }

    let single_line = raw_body
        .replace(['\r', '\n', '\t'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if single_line.chars().count() <= SHORT_BODY_MAX_CHARS {
        return single_line;
    }

    let mut shortened = single_line
        .chars()
        .take(SHORT_BODY_MAX_CHARS)
        .collect::<String>();
    shortened.push_str("...");
    shortened
}

fn method_name_for_route(method: &str, route: &str) -> &'static str {
    match (method, route) {
        ("GET", "/") => "api.service_info",
        ("GET", "/api/companies") => "companies.list_companies",
        ("POST", "/api/companies") => "companies.create_company",
        ("GET", "/api/companies/:id") => "companies.get_company",
        ("PUT", "/api/companies/:id") => "companies.update_company",
        ("DELETE", "/api/companies/:id") => "companies.delete_company",
        ("GET", "/api/companies/:id/departments") => "companies.company_departments",
        ("GET", "/api/departments") => "departments.list_departments",
        ("POST", "/api/departments") => "departments.create_department",
        ("GET", "/api/departments/:id") => "departments.get_department",
        ("PUT", "/api/departments/:id") => "departments.update_department",
        ("DELETE", "/api/departments/:id") => "departments.delete_department",
        ("GET", "/api/departments/:id/employees") => "departments.department_employees",
        ("GET", "/api/departments/company/:company_id/budget-summary") => {
            "departments.company_budget_summary"
        }
        ("GET", "/api/employees") => "employees.list_employees",
        ("POST", "/api/employees") => "employees.create_employee",
        ("GET", "/api/employees/search") => "employees.search_employees",
        ("GET", "/api/employees/:id") => "employees.get_employee",
        ("PUT", "/api/employees/:id") => "employees.update_employee",
        ("DELETE", "/api/employees/:id") => "employees.delete_employee",
        ("GET", "/api/employees/department/:department_id/salary-stats") => {
            "employees.department_salary_stats"
        }
        ("GET", "/api/projects") => "projects.list_projects",
        ("POST", "/api/projects") => "projects.create_project",
        ("GET", "/api/projects/overdue") => "projects.overdue_projects",
        ("GET", "/api/projects/budget-analysis") => "projects.budget_analysis",
        ("GET", "/api/projects/:id") => "projects.get_project",
        ("PUT", "/api/projects/:id") => "projects.update_project",
        ("DELETE", "/api/projects/:id") => "projects.delete_project",
        ("POST", "/api/projects/:id/assign") => "projects.assign_project",
        ("GET", "/api/projects/status/:status/summary") => "projects.status_summary",
        ("GET", "/api/reports/company-overview") => "reports.company_overview",
        ("GET", "/api/reports/employee-performance") => "reports.employee_performance",
        ("GET", "/api/reports/project-timeline") => "reports.project_timeline",
        ("GET", "/api/reports/financial-summary") => "reports.financial_summary",
        ("GET", "/api/reports/department-efficiency") => "reports.department_efficiency",
        ("GET", "/api/reports/cross-company-analysis") => "reports.cross_company_analysis",
        _ => "unknown.unknown_handler",
    }
}

#[cfg(test)]
mod tests {
    use super::{method_name_for_route, shorten_request_body, SHORT_BODY_MAX_CHARS};

    #[test]
    fn shorten_request_body_returns_dash_for_empty_input() {
        assert_eq!(shorten_request_body(""), "-");
    }

    #[test]
    fn shorten_request_body_normalizes_whitespace() {
        let body = "{\n  \"name\":\t\"demo\"\r\n}";
        assert_eq!(shorten_request_body(body), "{ \"name\": \"demo\" }");
    }

    #[test]
    fn shorten_request_body_truncates_and_appends_ellipsis() {
        let input = "a".repeat(SHORT_BODY_MAX_CHARS + 10);
        let shortened = shorten_request_body(&input);

        assert_eq!(shortened.chars().count(), SHORT_BODY_MAX_CHARS + 3);
        assert!(shortened.ends_with("..."));
    }

    #[test]
    fn known_routes_resolve_to_handler_names() {
        assert_eq!(
            method_name_for_route("GET", "/api/companies/:id"),
            "companies.get_company"
        );
        assert_eq!(
            method_name_for_route("GET", "/api/reports/financial-summary"),
            "reports.financial_summary"
        );
        assert_eq!(
            method_name_for_route("PATCH", "/api/companies"),
            "unknown.unknown_handler"
        );
    }
}

use anyhow::Result;

use super::{
    CompanyOverviewRecord, CrossCompanyAnalysisRecord, DbClient, DepartmentEfficiencyRecord,
    EmployeePerformanceRecord, FinancialSummaryRecord, ProjectTimelineRecord,
};

// Every report groups each child table before joining it back to its parent,
// so a row fanout in one branch of the join tree cannot inflate sums taken
// over another branch.

impl DbClient {
    /// Per-company rollup of departments, employees, and projects.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn report_company_overview(&self) -> Result<Vec<CompanyOverviewRecord>> {
        let rows = sqlx::query_as::<_, CompanyOverviewRecord>(
            "WITH dept AS ( \
               SELECT company_id, COUNT(*) AS dept_count, SUM(budget) AS budget_total, \
                 group_concat(DISTINCT name) AS department_names \
               FROM departments GROUP BY company_id \
             ), \
             emp AS ( \
               SELECT d.company_id AS company_id, COUNT(e.id) AS employee_count, \
                 SUM(e.salary) AS salary_total, AVG(e.salary) AS salary_avg, \
                 SUM(CASE WHEN e.is_active = 1 THEN 1 ELSE 0 END) AS active_count, \
                 group_concat(DISTINCT e.position) AS positions \
               FROM employees e JOIN departments d ON e.department_id = d.id \
               GROUP BY d.company_id \
             ), \
             proj AS ( \
               SELECT d.company_id AS company_id, COUNT(p.id) AS project_count, \
                 SUM(p.budget) AS budget_total, AVG(p.budget) AS budget_avg, \
                 SUM(CASE WHEN p.status = 'completed' THEN 1 ELSE 0 END) AS completed_count, \
                 SUM(CASE WHEN p.status = 'in_progress' THEN 1 ELSE 0 END) AS in_progress_count, \
                 SUM(CASE WHEN p.status = 'planning' THEN 1 ELSE 0 END) AS planning_count \
               FROM projects p \
               JOIN employees e ON p.assigned_employee_id = e.id \
               JOIN departments d ON e.department_id = d.id \
               GROUP BY d.company_id \
             ) \
             SELECT c.id AS company_id, c.name AS company_name, c.email AS company_email, \
               c.address AS company_address, c.phone AS company_phone, \
               COALESCE(dept.dept_count, 0) AS total_departments, \
               COALESCE(emp.employee_count, 0) AS total_employees, \
               COALESCE(proj.project_count, 0) AS total_projects, \
               dept.budget_total AS total_department_budgets, \
               emp.salary_total AS total_employee_salaries, \
               proj.budget_total AS total_project_budgets, \
               emp.salary_avg AS avg_employee_salary, \
               proj.budget_avg AS avg_project_budget, \
               COALESCE(emp.active_count, 0) AS active_employees, \
               COALESCE(proj.completed_count, 0) AS completed_projects, \
               COALESCE(proj.in_progress_count, 0) AS in_progress_projects, \
               COALESCE(proj.planning_count, 0) AS planning_projects, \
               dept.budget_total - emp.salary_total AS budget_vs_salary_diff, \
               CASE WHEN emp.salary_total IS NULL OR dept.budget_total IS NULL THEN 'Within Budget' \
                    WHEN emp.salary_total > dept.budget_total THEN 'Over Budget' \
                    WHEN emp.salary_total > dept.budget_total * 0.9 THEN 'Near Budget Limit' \
                    ELSE 'Within Budget' END AS budget_status, \
               dept.department_names AS department_names, \
               emp.positions AS employee_positions \
             FROM companies c \
             LEFT JOIN dept ON dept.company_id = c.id \
             LEFT JOIN emp ON emp.company_id = c.id \
             LEFT JOIN proj ON proj.company_id = c.id \
             ORDER BY total_employees DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-active-employee workload, project value, and salary positioning.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn report_employee_performance(&self) -> Result<Vec<EmployeePerformanceRecord>> {
        let rows = sqlx::query_as::<_, EmployeePerformanceRecord>(
            "WITH proj AS ( \
               SELECT p.assigned_employee_id AS employee_id, \
                 COUNT(p.id) AS total_count, \
                 SUM(CASE WHEN p.status = 'completed' THEN 1 ELSE 0 END) AS completed_count, \
                 SUM(CASE WHEN p.status = 'in_progress' THEN 1 ELSE 0 END) AS in_progress_count, \
                 SUM(p.budget) AS value_total, \
                 AVG(p.budget) AS value_avg \
               FROM projects p \
               WHERE p.assigned_employee_id IS NOT NULL \
               GROUP BY p.assigned_employee_id \
             ) \
             SELECT e.id AS employee_id, \
               e.first_name || ' ' || e.last_name AS employee_name, \
               e.email AS email, e.position AS position, e.salary AS salary, \
               e.hire_date AS hire_date, \
               CAST((julianday('now') - julianday(e.hire_date)) / 365.25 AS INTEGER) AS years_of_service, \
               d.name AS department_name, d.budget AS department_budget, \
               c.name AS company_name, \
               COALESCE(proj.total_count, 0) AS total_projects_assigned, \
               COALESCE(proj.completed_count, 0) AS completed_projects, \
               COALESCE(proj.in_progress_count, 0) AS in_progress_projects, \
               proj.value_total AS total_project_value, \
               proj.value_avg AS avg_project_value, \
               CASE WHEN COALESCE(proj.total_count, 0) > 0 THEN proj.completed_count * 100.0 / proj.total_count ELSE NULL END AS completion_rate, \
               CASE WHEN d.budget IS NOT NULL AND d.budget != 0 THEN e.salary / d.budget * 100 ELSE NULL END AS salary_percentage_of_dept_budget, \
               CASE WHEN e.salary IS NOT NULL AND e.salary != 0 THEN proj.value_total / e.salary ELSE NULL END AS project_value_to_salary_ratio, \
               CASE WHEN COALESCE(proj.total_count, 0) = 0 THEN 'No Projects' \
                    WHEN proj.total_count > 5 THEN 'Overloaded' \
                    WHEN proj.total_count > 3 THEN 'High Load' \
                    WHEN proj.total_count > 1 THEN 'Normal Load' \
                    ELSE 'Light Load' END AS workload_status, \
               (SELECT AVG(e2.salary) FROM employees e2 \
                 WHERE e2.department_id = e.department_id AND e2.position IS e.position) AS avg_position_salary_in_dept, \
               e.salary - (SELECT AVG(e3.salary) FROM employees e3 \
                 WHERE e3.department_id = e.department_id AND e3.position IS e.position) AS salary_diff_from_avg \
             FROM employees e \
             LEFT JOIN departments d ON e.department_id = d.id \
             LEFT JOIN companies c ON d.company_id = c.id \
             LEFT JOIN proj ON proj.employee_id = e.id \
             WHERE e.is_active = 1 \
             ORDER BY total_project_value DESC, completion_rate DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-project schedule health and burn rates.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn report_project_timeline(&self) -> Result<Vec<ProjectTimelineRecord>> {
        let rows = sqlx::query_as::<_, ProjectTimelineRecord>(
            "SELECT p.id AS project_id, p.name AS project_name, p.description AS description, \
               p.start_date AS start_date, p.end_date AS end_date, p.budget AS budget, \
               p.status AS status, \
               CAST(julianday(p.end_date) - julianday(p.start_date) AS INTEGER) AS planned_duration_days, \
               CASE WHEN p.end_date IS NULL THEN 'Unknown' \
                    WHEN p.status = 'completed' AND p.end_date < date('now') THEN 'Completed Early' \
                    WHEN p.status = 'completed' THEN 'Completed On Time' \
                    WHEN p.end_date < date('now') THEN 'Overdue' \
                    ELSE 'On Track' END AS timeline_status, \
               CAST(julianday('now') - julianday(p.end_date) AS INTEGER) AS days_overdue, \
               e.first_name || ' ' || e.last_name AS assigned_employee, \
               e.position AS employee_position, e.salary AS employee_salary, \
               d.name AS department_name, d.budget AS department_budget, \
               d.manager_name AS manager_name, \
               c.name AS company_name, c.email AS company_email, \
               CASE WHEN julianday(p.end_date) - julianday(p.start_date) > 0 \
                    THEN p.budget / (julianday(p.end_date) - julianday(p.start_date)) \
                    ELSE NULL END AS daily_budget_burn, \
               e.salary / 365.0 AS daily_employee_cost, \
               CASE WHEN julianday(p.end_date) - julianday(p.start_date) > 0 \
                    THEN p.budget / (julianday(p.end_date) - julianday(p.start_date)) - e.salary / 365.0 \
                    ELSE NULL END AS daily_profit_margin, \
               CAST(strftime('%m', p.start_date) AS INTEGER) AS start_month, \
               CAST(strftime('%Y', p.start_date) AS INTEGER) AS start_year, \
               (CAST(strftime('%m', p.start_date) AS INTEGER) + 2) / 3 AS start_quarter \
             FROM projects p \
             LEFT JOIN employees e ON p.assigned_employee_id = e.id \
             LEFT JOIN departments d ON e.department_id = d.id \
             LEFT JOIN companies c ON d.company_id = c.id \
             ORDER BY p.start_date DESC, p.budget DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-company financial posture; companies without departments are
    /// omitted.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn report_financial_summary(&self) -> Result<Vec<FinancialSummaryRecord>> {
        let rows = sqlx::query_as::<_, FinancialSummaryRecord>(
            "WITH dept AS ( \
               SELECT company_id, COUNT(*) AS dept_count, SUM(budget) AS budget_total \
               FROM departments GROUP BY company_id \
             ), \
             emp AS ( \
               SELECT d.company_id AS company_id, COUNT(e.id) AS emp_count, \
                 SUM(e.salary) AS salary_total, AVG(e.salary) AS salary_avg \
               FROM employees e JOIN departments d ON e.department_id = d.id \
               WHERE e.is_active = 1 \
               GROUP BY d.company_id \
             ), \
             proj AS ( \
               SELECT d.company_id AS company_id, COUNT(p.id) AS project_count, \
                 SUM(p.budget) AS budget_total, AVG(p.budget) AS budget_avg, \
                 SUM(CASE WHEN p.status = 'completed' THEN COALESCE(p.budget, 0) ELSE 0 END) AS completed_value, \
                 SUM(CASE WHEN p.status = 'in_progress' THEN COALESCE(p.budget, 0) ELSE 0 END) AS in_progress_value, \
                 SUM(CASE WHEN p.status = 'planning' THEN COALESCE(p.budget, 0) ELSE 0 END) AS planning_value \
               FROM projects p \
               JOIN employees e ON p.assigned_employee_id = e.id \
               JOIN departments d ON e.department_id = d.id \
               WHERE e.is_active = 1 \
               GROUP BY d.company_id \
             ) \
             SELECT c.name AS company_name, \
               dept.budget_total AS total_department_budget, \
               emp.salary_total AS total_employee_costs, \
               proj.budget_total AS total_project_budgets, \
               dept.dept_count AS department_count, \
               COALESCE(emp.emp_count, 0) AS employee_count, \
               COALESCE(proj.project_count, 0) AS project_count, \
               dept.budget_total / dept.dept_count AS avg_department_budget, \
               emp.salary_avg AS avg_employee_salary, \
               proj.budget_avg AS avg_project_budget, \
               dept.budget_total - COALESCE(emp.salary_total, 0) AS budget_surplus_deficit, \
               CASE WHEN dept.budget_total IS NOT NULL AND dept.budget_total != 0 \
                    THEN (dept.budget_total - COALESCE(emp.salary_total, 0)) / dept.budget_total * 100 \
                    ELSE NULL END AS budget_efficiency_percentage, \
               CASE WHEN emp.salary_total IS NOT NULL AND emp.salary_total != 0 \
                    THEN proj.budget_total / emp.salary_total \
                    ELSE NULL END AS project_to_salary_ratio, \
               COALESCE(proj.completed_value, 0) AS completed_project_value, \
               COALESCE(proj.in_progress_value, 0) AS in_progress_project_value, \
               COALESCE(proj.planning_value, 0) AS planning_project_value, \
               CASE WHEN proj.budget_total IS NOT NULL AND proj.budget_total != 0 \
                    THEN COALESCE(proj.completed_value, 0) / proj.budget_total * 100 \
                    ELSE NULL END AS completion_value_percentage, \
               CASE WHEN dept.budget_total IS NULL OR dept.budget_total = 0 THEN 'Healthy Budget' \
                    WHEN dept.budget_total - COALESCE(emp.salary_total, 0) < 0 THEN 'Over Budget' \
                    WHEN (dept.budget_total - COALESCE(emp.salary_total, 0)) / dept.budget_total < 0.1 THEN 'Tight Budget' \
                    WHEN (dept.budget_total - COALESCE(emp.salary_total, 0)) / dept.budget_total < 0.2 THEN 'Moderate Budget' \
                    ELSE 'Healthy Budget' END AS financial_health_status \
             FROM companies c \
             JOIN dept ON dept.company_id = c.id \
             LEFT JOIN emp ON emp.company_id = c.id \
             LEFT JOIN proj ON proj.company_id = c.id \
             ORDER BY total_department_budget DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-department utilization and delivery performance.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn report_department_efficiency(&self) -> Result<Vec<DepartmentEfficiencyRecord>> {
        let rows = sqlx::query_as::<_, DepartmentEfficiencyRecord>(
            "WITH emp AS ( \
               SELECT department_id, COUNT(*) AS total_count, \
                 SUM(CASE WHEN is_active = 1 THEN 1 ELSE 0 END) AS active_count, \
                 SUM(salary) AS salary_total, AVG(salary) AS salary_avg \
               FROM employees GROUP BY department_id \
             ), \
             proj AS ( \
               SELECT e.department_id AS department_id, COUNT(p.id) AS total_count, \
                 SUM(p.budget) AS value_total, AVG(p.budget) AS budget_avg, \
                 SUM(CASE WHEN p.status = 'completed' THEN 1 ELSE 0 END) AS completed_count, \
                 SUM(CASE WHEN p.status = 'in_progress' THEN 1 ELSE 0 END) AS in_progress_count, \
                 SUM(CASE WHEN p.status = 'planning' THEN 1 ELSE 0 END) AS planning_count, \
                 SUM(CASE WHEN p.end_date IS NOT NULL AND p.end_date < date('now') AND p.status != 'completed' THEN 1 ELSE 0 END) AS overdue_count \
               FROM projects p JOIN employees e ON p.assigned_employee_id = e.id \
               GROUP BY e.department_id \
             ) \
             SELECT d.id AS department_id, d.name AS department_name, \
               d.budget AS department_budget, d.manager_name AS manager_name, \
               c.name AS company_name, \
               COALESCE(emp.total_count, 0) AS total_employees, \
               COALESCE(emp.active_count, 0) AS active_employees, \
               COALESCE(proj.total_count, 0) AS total_projects, \
               emp.salary_total AS total_salary_cost, \
               proj.value_total AS total_project_value, \
               emp.salary_avg AS avg_employee_salary, \
               proj.budget_avg AS avg_project_budget, \
               CASE WHEN d.budget IS NOT NULL THEN d.budget - COALESCE(emp.salary_total, 0) ELSE NULL END AS remaining_budget, \
               CASE WHEN d.budget IS NOT NULL AND d.budget != 0 \
                    THEN COALESCE(emp.salary_total, 0) / d.budget * 100 \
                    ELSE NULL END AS budget_utilization_percentage, \
               CASE WHEN COALESCE(emp.total_count, 0) > 0 \
                    THEN COALESCE(proj.total_count, 0) * 1.0 / emp.total_count \
                    ELSE NULL END AS projects_per_employee, \
               CASE WHEN emp.salary_total IS NOT NULL AND emp.salary_total != 0 \
                    THEN proj.value_total / emp.salary_total \
                    ELSE NULL END AS project_value_per_salary_dollar, \
               COALESCE(proj.completed_count, 0) AS completed_projects, \
               COALESCE(proj.in_progress_count, 0) AS in_progress_projects, \
               COALESCE(proj.planning_count, 0) AS planning_projects, \
               CASE WHEN COALESCE(proj.total_count, 0) > 0 \
                    THEN proj.completed_count * 100.0 / proj.total_count \
                    ELSE NULL END AS project_completion_rate, \
               COALESCE(proj.overdue_count, 0) AS overdue_projects, \
               CASE WHEN d.budget IS NULL OR d.budget = 0 THEN 'Low Utilization' \
                    WHEN COALESCE(emp.salary_total, 0) / d.budget > 1 THEN 'Over Budget' \
                    WHEN COALESCE(emp.salary_total, 0) / d.budget > 0.9 THEN 'Near Budget Limit' \
                    WHEN COALESCE(emp.salary_total, 0) / d.budget > 0.7 THEN 'High Utilization' \
                    WHEN COALESCE(emp.salary_total, 0) / d.budget > 0.5 THEN 'Moderate Utilization' \
                    ELSE 'Low Utilization' END AS budget_utilization_status, \
               CASE WHEN COALESCE(proj.total_count, 0) = 0 THEN 'No Projects' \
                    WHEN proj.completed_count * 100.0 / proj.total_count > 80 THEN 'High Performance' \
                    WHEN proj.completed_count * 100.0 / proj.total_count > 60 THEN 'Good Performance' \
                    WHEN proj.completed_count * 100.0 / proj.total_count > 40 THEN 'Average Performance' \
                    ELSE 'Poor Performance' END AS performance_rating \
             FROM departments d \
             LEFT JOIN companies c ON d.company_id = c.id \
             LEFT JOIN emp ON emp.department_id = d.id \
             LEFT JOIN proj ON proj.department_id = d.id \
             ORDER BY project_completion_rate DESC, budget_utilization_percentage DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Every company's metrics against the whole-directory averages, with
    /// rank orderings.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn report_cross_company_analysis(&self) -> Result<Vec<CrossCompanyAnalysisRecord>> {
        let rows = sqlx::query_as::<_, CrossCompanyAnalysisRecord>(
            "WITH dept AS ( \
               SELECT company_id, COUNT(*) AS dept_count, SUM(budget) AS budget_total \
               FROM departments GROUP BY company_id \
             ), \
             emp AS ( \
               SELECT d.company_id AS company_id, COUNT(e.id) AS emp_count, \
                 SUM(e.salary) AS salary_total, AVG(e.salary) AS salary_avg \
               FROM employees e JOIN departments d ON e.department_id = d.id \
               WHERE e.is_active = 1 \
               GROUP BY d.company_id \
             ), \
             proj AS ( \
               SELECT d.company_id AS company_id, COUNT(p.id) AS project_count, \
                 SUM(p.budget) AS value_total, \
                 SUM(CASE WHEN p.status = 'completed' THEN 1 ELSE 0 END) AS completed_count \
               FROM projects p \
               JOIN employees e ON p.assigned_employee_id = e.id \
               JOIN departments d ON e.department_id = d.id \
               WHERE e.is_active = 1 \
               GROUP BY d.company_id \
             ), \
             company_metrics AS ( \
               SELECT c.id AS id, c.name AS name, \
                 COALESCE(dept.dept_count, 0) AS dept_count, \
                 COALESCE(emp.emp_count, 0) AS emp_count, \
                 COALESCE(proj.project_count, 0) AS project_count, \
                 dept.budget_total AS total_budget, \
                 emp.salary_total AS total_salaries, \
                 proj.value_total AS total_project_value, \
                 emp.salary_avg AS avg_salary, \
                 COALESCE(proj.completed_count, 0) AS completed_projects \
               FROM companies c \
               LEFT JOIN dept ON dept.company_id = c.id \
               LEFT JOIN emp ON emp.company_id = c.id \
               LEFT JOIN proj ON proj.company_id = c.id \
             ), \
             industry_averages AS ( \
               SELECT AVG(dept_count) AS avg_dept_count, AVG(emp_count) AS avg_emp_count, \
                 AVG(project_count) AS avg_project_count, AVG(total_budget) AS avg_total_budget, \
                 AVG(total_salaries) AS avg_total_salaries, AVG(avg_salary) AS industry_avg_salary \
               FROM company_metrics \
             ) \
             SELECT cm.id AS id, cm.name AS name, cm.dept_count AS dept_count, \
               cm.emp_count AS emp_count, cm.project_count AS project_count, \
               cm.total_budget AS total_budget, cm.total_salaries AS total_salaries, \
               cm.total_project_value AS total_project_value, cm.avg_salary AS avg_salary, \
               cm.completed_projects AS completed_projects, \
               ia.avg_dept_count AS avg_dept_count, ia.avg_emp_count AS avg_emp_count, \
               ia.avg_project_count AS avg_project_count, ia.avg_total_budget AS avg_total_budget, \
               ia.avg_total_salaries AS avg_total_salaries, ia.industry_avg_salary AS industry_avg_salary, \
               cm.dept_count - ia.avg_dept_count AS dept_count_vs_avg, \
               cm.emp_count - ia.avg_emp_count AS emp_count_vs_avg, \
               cm.avg_salary - ia.industry_avg_salary AS salary_vs_industry_avg, \
               CASE WHEN cm.emp_count > 0 THEN cm.total_budget / cm.emp_count ELSE NULL END AS budget_per_employee, \
               CASE WHEN cm.emp_count > 0 THEN cm.total_project_value / cm.emp_count ELSE NULL END AS project_value_per_employee, \
               CASE WHEN cm.project_count > 0 THEN cm.completed_projects * 100.0 / cm.project_count ELSE NULL END AS completion_rate, \
               CASE WHEN cm.avg_salary IS NULL OR ia.industry_avg_salary IS NULL THEN 'Below Market' \
                    WHEN cm.avg_salary > ia.industry_avg_salary * 1.2 THEN 'Above Market' \
                    WHEN cm.avg_salary > ia.industry_avg_salary * 0.8 THEN 'Market Rate' \
                    ELSE 'Below Market' END AS salary_competitiveness, \
               RANK() OVER (ORDER BY cm.total_project_value DESC) AS project_value_rank, \
               RANK() OVER (ORDER BY cm.avg_salary DESC) AS avg_salary_rank, \
               RANK() OVER (ORDER BY (CASE WHEN cm.project_count > 0 THEN cm.completed_projects * 100.0 / cm.project_count ELSE NULL END) DESC) AS completion_rate_rank \
             FROM company_metrics cm \
             CROSS JOIN industry_averages ia \
             ORDER BY cm.total_project_value DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

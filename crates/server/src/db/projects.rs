use anyhow::Result;

use super::{
    DbClient, NewProject, OverdueProjectRecord, ProjectBudgetAnalysisRecord, ProjectDetailsRecord,
    ProjectStatusSummaryRecord, ProjectUpdate,
};

const PROJECT_DETAILS_SELECT: &str = "SELECT p.id AS id, p.name AS name, \
     p.description AS description, p.start_date AS start_date, p.end_date AS end_date, \
     p.budget AS budget, p.status AS status, p.assigned_employee_id AS assigned_employee_id, \
     p.created_at AS created_at, p.updated_at AS updated_at, \
     e.first_name || ' ' || e.last_name AS assigned_employee_name, \
     e.email AS employee_email, e.position AS employee_position, \
     d.name AS department_name, c.name AS company_name \
     FROM projects p \
     LEFT JOIN employees e ON p.assigned_employee_id = e.id \
     LEFT JOIN departments d ON e.department_id = d.id \
     LEFT JOIN companies c ON d.company_id = c.id";

impl DbClient {
    /// Inserts a new project record.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_project(&self, project: &NewProject) -> Result<()> {
        sqlx::query(
            "INSERT INTO projects (id, name, description, start_date, end_date, budget, status, assigned_employee_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(&project.id)
        .bind(&project.name)
        .bind(project.description.as_deref())
        .bind(project.start_date.as_deref())
        .bind(project.end_date.as_deref())
        .bind(project.budget)
        .bind(&project.status)
        .bind(project.assigned_employee_id.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists projects with assignee, department, and company context.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_projects(&self) -> Result<Vec<ProjectDetailsRecord>> {
        let sql = format!("{PROJECT_DETAILS_SELECT} ORDER BY p.created_at DESC");
        let rows = sqlx::query_as::<_, ProjectDetailsRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Fetches a single project with assignee, department, and company
    /// context.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_project_by_id(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectDetailsRecord>> {
        let sql = format!("{PROJECT_DETAILS_SELECT} WHERE p.id = ?1");
        let row = sqlx::query_as::<_, ProjectDetailsRecord>(&sql)
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Updates a project in place; returns whether a row was touched.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_project(&self, project_id: &str, update: &ProjectUpdate) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE projects SET name = ?1, description = ?2, start_date = ?3, end_date = ?4, \
             budget = ?5, status = ?6, assigned_employee_id = ?7, updated_at = datetime('now') \
             WHERE id = ?8",
        )
        .bind(&update.name)
        .bind(update.description.as_deref())
        .bind(update.start_date.as_deref())
        .bind(update.end_date.as_deref())
        .bind(update.budget)
        .bind(&update.status)
        .bind(update.assigned_employee_id.as_deref())
        .bind(project_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a project; returns whether a row was removed.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_project_by_id(&self, project_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Reassigns a project in a single guarded statement; returns whether the
    /// project existed.
    ///
    /// # Errors
    /// Returns an error if the update fails (including a missing employee,
    /// rejected by the foreign key).
    pub async fn assign_project(&self, project_id: &str, employee_id: &str) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE projects SET assigned_employee_id = ?1, updated_at = datetime('now') WHERE id = ?2",
        )
        .bind(employee_id)
        .bind(project_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Aggregate summary for all projects in one status.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn project_status_summary(
        &self,
        status: &str,
    ) -> Result<Option<ProjectStatusSummaryRecord>> {
        let row = sqlx::query_as::<_, ProjectStatusSummaryRecord>(
            "SELECT p.status AS status, \
               COUNT(p.id) AS project_count, \
               SUM(p.budget) AS total_budget, \
               AVG(p.budget) AS average_budget, \
               MIN(p.start_date) AS earliest_start, \
               MAX(p.end_date) AS latest_end, \
               COUNT(DISTINCT e.department_id) AS departments_involved, \
               COUNT(DISTINCT d.company_id) AS companies_involved, \
               group_concat(DISTINCT c.name) AS company_names, \
               group_concat(DISTINCT d.name) AS department_names \
             FROM projects p \
             LEFT JOIN employees e ON p.assigned_employee_id = e.id \
             LEFT JOIN departments d ON e.department_id = d.id \
             LEFT JOIN companies c ON d.company_id = c.id \
             WHERE p.status = ?1 \
             GROUP BY p.status",
        )
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Projects past their end date that never completed, most overdue last.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn overdue_projects(&self) -> Result<Vec<OverdueProjectRecord>> {
        let rows = sqlx::query_as::<_, OverdueProjectRecord>(
            "SELECT p.id AS id, p.name AS name, p.description AS description, \
               p.start_date AS start_date, p.end_date AS end_date, p.budget AS budget, \
               p.status AS status, \
               CAST(julianday('now') - julianday(p.end_date) AS INTEGER) AS days_overdue, \
               e.first_name || ' ' || e.last_name AS assigned_employee, \
               e.email AS employee_email, \
               d.name AS department_name, c.name AS company_name \
             FROM projects p \
             LEFT JOIN employees e ON p.assigned_employee_id = e.id \
             LEFT JOIN departments d ON e.department_id = d.id \
             LEFT JOIN companies c ON d.company_id = c.id \
             WHERE p.end_date IS NOT NULL AND p.end_date < date('now') AND p.status != 'completed' \
             ORDER BY p.end_date ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-department project budget rollup against headcount cost. Child
    /// aggregates are grouped before joining so the fanout of one table never
    /// inflates sums over another.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn project_budget_analysis(&self) -> Result<Vec<ProjectBudgetAnalysisRecord>> {
        let rows = sqlx::query_as::<_, ProjectBudgetAnalysisRecord>(
            "WITH dept_emp AS ( \
               SELECT d.id AS department_id, \
                 SUM(e.salary) AS total_employee_cost, \
                 COUNT(e.id) AS employee_count \
               FROM departments d \
               LEFT JOIN employees e ON d.id = e.department_id AND e.is_active = 1 \
               GROUP BY d.id \
             ), \
             dept_proj AS ( \
               SELECT e.department_id AS department_id, \
                 COUNT(p.id) AS total_projects, \
                 SUM(p.budget) AS total_project_budget, \
                 AVG(p.budget) AS avg_project_budget, \
                 SUM(CASE WHEN p.status = 'completed' THEN COALESCE(p.budget, 0) ELSE 0 END) AS completed_budget, \
                 SUM(CASE WHEN p.status = 'in_progress' THEN COALESCE(p.budget, 0) ELSE 0 END) AS in_progress_budget, \
                 SUM(CASE WHEN p.status = 'planning' THEN COALESCE(p.budget, 0) ELSE 0 END) AS planning_budget \
               FROM projects p \
               JOIN employees e ON p.assigned_employee_id = e.id \
               GROUP BY e.department_id \
             ) \
             SELECT c.name AS company_name, d.name AS department_name, \
               d.budget AS department_budget, \
               dp.total_projects AS total_projects, \
               dp.total_project_budget AS total_project_budget, \
               dp.avg_project_budget AS avg_project_budget, \
               dp.completed_budget AS completed_budget, \
               dp.in_progress_budget AS in_progress_budget, \
               dp.planning_budget AS planning_budget, \
               CASE WHEN d.budget IS NOT NULL THEN d.budget - COALESCE(de.total_employee_cost, 0) ELSE NULL END AS remaining_dept_budget, \
               de.total_employee_cost AS total_employee_cost, \
               COALESCE(de.employee_count, 0) AS employee_count, \
               CASE WHEN COALESCE(de.employee_count, 0) > 0 THEN dp.total_project_budget / de.employee_count ELSE NULL END AS budget_per_employee, \
               CASE WHEN dp.total_project_budget IS NULL OR d.budget IS NULL THEN 'Within Budget' \
                    WHEN dp.total_project_budget > d.budget THEN 'Over Budget' \
                    WHEN dp.total_project_budget > d.budget * 0.8 THEN 'Near Budget Limit' \
                    ELSE 'Within Budget' END AS budget_status \
             FROM departments d \
             JOIN companies c ON d.company_id = c.id \
             JOIN dept_proj dp ON dp.department_id = d.id \
             LEFT JOIN dept_emp de ON de.department_id = d.id \
             ORDER BY dp.total_project_budget DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

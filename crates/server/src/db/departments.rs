use anyhow::Result;

use super::{
    DbClient, DepartmentBudgetSummaryRecord, DepartmentRecord, DepartmentUpdate, NewDepartment,
};

type DepartmentRow = (
    String,
    String,
    String,
    Option<f64>,
    Option<String>,
    String,
    String,
);

fn map_department_row(
    (id, company_id, name, budget, manager_name, created_at, updated_at): DepartmentRow,
) -> DepartmentRecord {
    DepartmentRecord {
        id,
        company_id,
        name,
        budget,
        manager_name,
        created_at,
        updated_at,
    }
}

impl DbClient {
    /// Inserts a new department record.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_department(&self, department: &NewDepartment) -> Result<()> {
        sqlx::query(
            "INSERT INTO departments (id, company_id, name, budget, manager_name) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&department.id)
        .bind(&department.company_id)
        .bind(&department.name)
        .bind(department.budget)
        .bind(department.manager_name.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists departments in reverse creation order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_departments(&self) -> Result<Vec<DepartmentRecord>> {
        let rows = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, company_id, name, budget, manager_name, created_at, updated_at FROM departments ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_department_row).collect())
    }

    /// Lists a company's departments by name.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_departments_for_company(
        &self,
        company_id: &str,
    ) -> Result<Vec<DepartmentRecord>> {
        let rows = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, company_id, name, budget, manager_name, created_at, updated_at FROM departments WHERE company_id = ?1 ORDER BY name",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_department_row).collect())
    }

    /// Fetches a single department.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_department_by_id(
        &self,
        department_id: &str,
    ) -> Result<Option<DepartmentRecord>> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, company_id, name, budget, manager_name, created_at, updated_at FROM departments WHERE id = ?1",
        )
        .bind(department_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_department_row))
    }

    /// Updates a department in place; returns whether a row was touched.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_department(
        &self,
        department_id: &str,
        update: &DepartmentUpdate,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE departments SET company_id = ?1, name = ?2, budget = ?3, manager_name = ?4, updated_at = datetime('now') WHERE id = ?5",
        )
        .bind(&update.company_id)
        .bind(&update.name)
        .bind(update.budget)
        .bind(update.manager_name.as_deref())
        .bind(department_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a department (employees cascade); returns whether a row was
    /// removed.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_department_by_id(&self, department_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?1")
            .bind(department_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Checks whether a department id exists.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn department_exists(&self, department_id: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM departments WHERE id = ?1")
            .bind(department_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Per-department headcount and salary aggregates for one company.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn company_budget_summary(
        &self,
        company_id: &str,
    ) -> Result<Vec<DepartmentBudgetSummaryRecord>> {
        let rows = sqlx::query_as::<_, DepartmentBudgetSummaryRecord>(
            "SELECT d.id AS id, d.name AS name, d.budget AS budget, d.manager_name AS manager_name, \
               COUNT(e.id) AS employee_count, \
               AVG(e.salary) AS avg_salary, \
               SUM(e.salary) AS total_salaries, \
               CASE WHEN COUNT(e.id) > 0 THEN d.budget / COUNT(e.id) ELSE NULL END AS budget_per_employee \
             FROM departments d \
             LEFT JOIN employees e ON d.id = e.department_id \
             WHERE d.company_id = ?1 \
             GROUP BY d.id, d.name, d.budget, d.manager_name \
             ORDER BY d.budget DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

use anyhow::Result;
use sqlx::{QueryBuilder, Sqlite};

use super::{
    DbClient, DepartmentSalaryStatsRecord, EmployeeDetailsRecord, EmployeeRecord,
    EmployeeSearchFilter, EmployeeSearchRecord, EmployeeUpdate, NewEmployee,
};

type EmployeeRow = (
    String,
    String,
    String,
    String,
    String,
    Option<String>,
    Option<f64>,
    String,
    Option<String>,
    bool,
    String,
    String,
);

fn map_employee_row(
    (
        id,
        department_id,
        first_name,
        last_name,
        email,
        phone,
        salary,
        hire_date,
        position,
        is_active,
        created_at,
        updated_at,
    ): EmployeeRow,
) -> EmployeeRecord {
    EmployeeRecord {
        id,
        department_id,
        first_name,
        last_name,
        email,
        phone,
        salary,
        hire_date,
        position,
        is_active,
        created_at,
        updated_at,
    }
}

const EMPLOYEE_DETAILS_SELECT: &str = "SELECT e.id AS id, e.department_id AS department_id, \
     e.first_name AS first_name, e.last_name AS last_name, e.email AS email, e.phone AS phone, \
     e.salary AS salary, e.hire_date AS hire_date, e.position AS position, \
     e.is_active AS is_active, e.created_at AS created_at, e.updated_at AS updated_at, \
     d.name AS department_name, d.budget AS department_budget, \
     c.name AS company_name, c.email AS company_email \
     FROM employees e \
     LEFT JOIN departments d ON e.department_id = d.id \
     LEFT JOIN companies c ON d.company_id = c.id";

impl DbClient {
    /// Inserts a new employee record.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_employee(&self, employee: &NewEmployee) -> Result<()> {
        sqlx::query(
            "INSERT INTO employees (id, department_id, first_name, last_name, email, phone, salary, position, password_hash) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&employee.id)
        .bind(&employee.department_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(employee.phone.as_deref())
        .bind(employee.salary)
        .bind(employee.position.as_deref())
        .bind(employee.password_hash.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists employees with department and company context, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_employees(&self) -> Result<Vec<EmployeeDetailsRecord>> {
        let sql = format!("{EMPLOYEE_DETAILS_SELECT} ORDER BY e.created_at DESC");
        let rows = sqlx::query_as::<_, EmployeeDetailsRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Fetches a single employee with department and company context.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_employee_by_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<EmployeeDetailsRecord>> {
        let sql = format!("{EMPLOYEE_DETAILS_SELECT} WHERE e.id = ?1");
        let row = sqlx::query_as::<_, EmployeeDetailsRecord>(&sql)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Lists a department's roster ordered by salary descending.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_employees_for_department(
        &self,
        department_id: &str,
    ) -> Result<Vec<EmployeeRecord>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, department_id, first_name, last_name, email, phone, salary, hire_date, position, is_active, created_at, updated_at \
             FROM employees WHERE department_id = ?1 ORDER BY salary DESC",
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_employee_row).collect())
    }

    /// Updates an employee in place; returns whether a row was touched.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_employee(
        &self,
        employee_id: &str,
        update: &EmployeeUpdate,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE employees SET department_id = ?1, first_name = ?2, last_name = ?3, email = ?4, \
             phone = ?5, salary = ?6, position = ?7, is_active = ?8, updated_at = datetime('now') \
             WHERE id = ?9",
        )
        .bind(&update.department_id)
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.email)
        .bind(update.phone.as_deref())
        .bind(update.salary)
        .bind(update.position.as_deref())
        .bind(update.is_active)
        .bind(employee_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes an employee; returns whether a row was removed.
    ///
    /// # Errors
    /// Returns an error if the delete fails (including while projects still
    /// reference the employee).
    pub async fn delete_employee_by_id(&self, employee_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Checks whether an employee id exists.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn employee_exists(&self, employee_id: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees WHERE id = ?1")
            .bind(employee_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email is already taken by another employee.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn employee_email_in_use(
        &self,
        email: &str,
        exclude_employee_id: Option<&str>,
    ) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employees WHERE email = ?1 AND (?2 IS NULL OR id != ?2)",
        )
        .bind(email)
        .bind(exclude_employee_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Checks whether any project still references the employee.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn employee_has_assigned_projects(&self, employee_id: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM projects WHERE assigned_employee_id = ?1",
        )
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Filtered employee search. Every filter is optional; all values are
    /// bound, never interpolated.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn search_employees(
        &self,
        filter: &EmployeeSearchFilter,
    ) -> Result<Vec<EmployeeSearchRecord>> {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT e.id AS id, e.first_name AS first_name, e.last_name AS last_name, \
             e.email AS email, e.position AS position, e.salary AS salary, \
             e.hire_date AS hire_date, e.is_active AS is_active, \
             d.name AS department_name, c.name AS company_name \
             FROM employees e \
             LEFT JOIN departments d ON e.department_id = d.id \
             LEFT JOIN companies c ON d.company_id = c.id \
             WHERE 1=1",
        );

        if let Some(name) = filter.name.as_deref() {
            let pattern = format!("%{name}%");
            builder
                .push(" AND (e.first_name LIKE ")
                .push_bind(pattern.clone())
                .push(" OR e.last_name LIKE ")
                .push_bind(pattern)
                .push(")");
        }

        if let Some(position) = filter.position.as_deref() {
            builder
                .push(" AND e.position LIKE ")
                .push_bind(format!("%{position}%"));
        }

        if let Some(min_salary) = filter.min_salary {
            builder.push(" AND e.salary >= ").push_bind(min_salary);
        }

        if let Some(max_salary) = filter.max_salary {
            builder.push(" AND e.salary <= ").push_bind(max_salary);
        }

        if let Some(department_id) = filter.department_id.as_deref() {
            builder
                .push(" AND e.department_id = ")
                .push_bind(department_id.to_string());
        }

        if let Some(company_id) = filter.company_id.as_deref() {
            builder
                .push(" AND d.company_id = ")
                .push_bind(company_id.to_string());
        }

        builder.push(" ORDER BY e.salary DESC");

        let rows = builder
            .build_query_as::<EmployeeSearchRecord>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Salary aggregates for a department's active employees, with the
    /// population deviation computed over the fetched salaries.
    ///
    /// # Errors
    /// Returns an error if either query fails.
    pub async fn department_salary_stats(
        &self,
        department_id: &str,
    ) -> Result<Option<DepartmentSalaryStatsRecord>> {
        let row = sqlx::query_as::<_, DepartmentSalaryStatsRecord>(
            "SELECT d.name AS department_name, d.budget AS department_budget, \
               c.name AS company_name, \
               COUNT(e.id) AS total_employees, \
               AVG(e.salary) AS average_salary, \
               MIN(e.salary) AS min_salary, \
               MAX(e.salary) AS max_salary, \
               SUM(e.salary) AS total_salary_cost, \
               CASE WHEN d.budget IS NOT NULL THEN d.budget - COALESCE(SUM(e.salary), 0) ELSE NULL END AS remaining_budget \
             FROM departments d \
             LEFT JOIN companies c ON d.company_id = c.id \
             LEFT JOIN employees e ON d.id = e.department_id AND e.is_active = 1 \
             WHERE d.id = ?1 \
             GROUP BY d.id, d.name, d.budget, c.name",
        )
        .bind(department_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut stats) = row else {
            return Ok(None);
        };

        let salaries = sqlx::query_scalar::<_, f64>(
            "SELECT salary FROM employees WHERE department_id = ?1 AND is_active = 1 AND salary IS NOT NULL",
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await?;

        stats.salary_deviation = population_std_dev(&salaries);

        Ok(Some(stats))
    }
}

fn population_std_dev(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count;

    Some(variance.sqrt())
}

#[cfg(test)]
mod std_dev_tests {
    use super::population_std_dev;

    #[test]
    fn empty_input_has_no_deviation() {
        assert!(population_std_dev(&[]).is_none());
    }

    #[test]
    fn single_value_has_zero_deviation() {
        let deviation = population_std_dev(&[75_000.0]).expect("deviation");
        assert!(deviation.abs() < f64::EPSILON);
    }

    #[test]
    fn symmetric_values_give_half_spread() {
        let deviation = population_std_dev(&[1_000.0, 2_000.0]).expect("deviation");
        assert!((deviation - 500.0).abs() < 1e-9);
    }
}

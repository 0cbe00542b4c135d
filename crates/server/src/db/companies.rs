use anyhow::Result;

use super::{CompanyRecord, CompanyUpdate, DbClient, NewCompany};

type CompanyRow = (
    String,
    String,
    String,
    Option<String>,
    Option<String>,
    String,
    String,
);

fn map_company_row(
    (id, name, email, address, phone, created_at, updated_at): CompanyRow,
) -> CompanyRecord {
    CompanyRecord {
        id,
        name,
        email,
        address,
        phone,
        created_at,
        updated_at,
    }
}

impl DbClient {
    /// Inserts a new company record.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_company(&self, company: &NewCompany) -> Result<()> {
        sqlx::query(
            "INSERT INTO companies (id, name, email, address, phone) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&company.id)
        .bind(&company.name)
        .bind(&company.email)
        .bind(company.address.as_deref())
        .bind(company.phone.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists companies in reverse creation order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_companies(&self) -> Result<Vec<CompanyRecord>> {
        let rows = sqlx::query_as::<_, CompanyRow>(
            "SELECT id, name, email, address, phone, created_at, updated_at FROM companies ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(map_company_row).collect())
    }

    /// Fetches a single company.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_company_by_id(&self, company_id: &str) -> Result<Option<CompanyRecord>> {
        let row = sqlx::query_as::<_, CompanyRow>(
            "SELECT id, name, email, address, phone, created_at, updated_at FROM companies WHERE id = ?1",
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(map_company_row))
    }

    /// Updates a company in place; returns whether a row was touched.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_company(&self, company_id: &str, update: &CompanyUpdate) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE companies SET name = ?1, email = ?2, address = ?3, phone = ?4, updated_at = datetime('now') WHERE id = ?5",
        )
        .bind(&update.name)
        .bind(&update.email)
        .bind(update.address.as_deref())
        .bind(update.phone.as_deref())
        .bind(company_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a company (departments and employees cascade); returns whether
    /// a row was removed.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_company_by_id(&self, company_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?1")
            .bind(company_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Checks whether a company id exists.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn company_exists(&self, company_id: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM companies WHERE id = ?1")
            .bind(company_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email is already taken by another company.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn company_email_in_use(
        &self,
        email: &str,
        exclude_company_id: Option<&str>,
    ) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM companies WHERE email = ?1 AND (?2 IS NULL OR id != ?2)",
        )
        .bind(email)
        .bind(exclude_company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}

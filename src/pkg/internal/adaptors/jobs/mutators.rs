use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobPatch, NewJob};
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: NewJob) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (company, title, status)
            VALUES ($1, $2, $3)
            RETURNING id, company, title, status
            "#,
        )
        .bind(&job.company)
        .bind(&job.title)
        .bind(job.status)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: i32, patch: JobPatch) -> Result<Option<JobEntry>> {
        // no-op assignment keeps the statement valid for an empty patch
        let mut query = String::from("UPDATE jobs SET id = id");
        let mut param_count = 1;

        if patch.company.is_some() {
            param_count += 1;
            query.push_str(&format!(", company = ${}", param_count));
        }
        if patch.title.is_some() {
            param_count += 1;
            query.push_str(&format!(", title = ${}", param_count));
        }
        if patch.status.is_some() {
            param_count += 1;
            query.push_str(&format!(", status = ${}", param_count));
        }

        query.push_str(" WHERE id = $1 RETURNING id, company, title, status");

        let mut q = sqlx::query_as::<_, JobEntry>(&query).bind(id);

        if let Some(company) = patch.company {
            q = q.bind(company);
        }
        if let Some(title) = patch.title {
            q = q.bind(title);
        }
        if let Some(status) = patch.status {
            q = q.bind(status);
        }
        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        // owned notes go first so the removal is atomic within the caller's txn
        sqlx::query("DELETE FROM notes WHERE job_id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

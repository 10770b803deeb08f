use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::prelude::Result;

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, company, title, status FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, company, title, status FROM jobs ORDER BY id",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn exists(&mut self, id: i32) -> Result<bool> {
        let found = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *self.pool)
            .await?;
        Ok(found)
    }
}

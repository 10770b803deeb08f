use sqlx::PgConnection;

use crate::pkg::internal::adaptors::notes::spec::NoteEntry;
use crate::prelude::Result;

pub struct NoteSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> NoteSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        NoteSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<NoteEntry>> {
        let row = sqlx::query_as::<_, NoteEntry>(
            "SELECT id, job_id, text, created_at FROM notes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<NoteEntry>> {
        let rows = sqlx::query_as::<_, NoteEntry>(
            "SELECT id, job_id, text, created_at FROM notes ORDER BY id",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_by_job(&mut self, job_id: i32) -> Result<Vec<NoteEntry>> {
        let rows = sqlx::query_as::<_, NoteEntry>(
            "SELECT id, job_id, text, created_at FROM notes WHERE job_id = $1 ORDER BY id",
        )
        .bind(job_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}

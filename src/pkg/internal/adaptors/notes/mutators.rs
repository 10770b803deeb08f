use sqlx::PgConnection;

use crate::pkg::internal::adaptors::notes::spec::{NewNote, NoteEntry, NotePatch};
use crate::prelude::Result;

pub struct NoteMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> NoteMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        NoteMutator { pool }
    }

    pub async fn create(&mut self, note: NewNote) -> Result<NoteEntry> {
        let row = sqlx::query_as::<_, NoteEntry>(
            r#"
            INSERT INTO notes (job_id, text)
            VALUES ($1, $2)
            RETURNING id, job_id, text, created_at
            "#,
        )
        .bind(note.job_id)
        .bind(&note.text)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: i32, patch: NotePatch) -> Result<Option<NoteEntry>> {
        // created_at stays untouched, whatever the patch carries
        let mut query = String::from("UPDATE notes SET id = id");
        let mut param_count = 1;

        if patch.job_id.is_some() {
            param_count += 1;
            query.push_str(&format!(", job_id = ${}", param_count));
        }
        if patch.text.is_some() {
            param_count += 1;
            query.push_str(&format!(", text = ${}", param_count));
        }

        query.push_str(" WHERE id = $1 RETURNING id, job_id, text, created_at");

        let mut q = sqlx::query_as::<_, NoteEntry>(&query).bind(id);

        if let Some(job_id) = patch.job_id {
            q = q.bind(job_id);
        }
        if let Some(text) = patch.text {
            q = q.bind(text);
        }
        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::pkg::internal::adaptors::{
    jobs::{
        mutators::JobMutator,
        selectors::JobSelector,
        spec::{JobEntry, JobPatch, NewJob},
    },
    notes::{
        mutators::NoteMutator,
        selectors::NoteSelector,
        spec::{NewNote, NoteEntry, NotePatch},
    },
};
use crate::pkg::internal::store::Store;
use crate::pkg::server::state::GetTxn;
use crate::prelude::{Error, Result};

pub struct PgStore {
    pool: Arc<PgPool>,
}

impl PgStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("select 1").execute(&*self.pool).await?;
        Ok(())
    }

    async fn list_jobs(&self) -> Result<Vec<JobEntry>> {
        let mut tx = self.pool.begin_txn().await?;
        JobSelector::new(&mut tx).get_all().await
    }

    async fn create_job(&self, job: NewJob) -> Result<JobEntry> {
        let mut tx = self.pool.begin_txn().await?;
        let entry = JobMutator::new(&mut tx).create(job).await?;
        tx.commit().await?;
        Ok(entry)
    }

    async fn get_job(&self, id: i32) -> Result<Option<JobEntry>> {
        let mut tx = self.pool.begin_txn().await?;
        JobSelector::new(&mut tx).get_by_id(id).await
    }

    async fn update_job(&self, id: i32, patch: JobPatch) -> Result<Option<JobEntry>> {
        let mut tx = self.pool.begin_txn().await?;
        let row = JobMutator::new(&mut tx).update(id, patch).await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn delete_job(&self, id: i32) -> Result<bool> {
        let mut tx = self.pool.begin_txn().await?;
        let deleted = JobMutator::new(&mut tx).delete(id).await?;
        tx.commit().await?;
        Ok(deleted)
    }

    async fn list_notes(&self, job_id: Option<i32>) -> Result<Vec<NoteEntry>> {
        let mut tx = self.pool.begin_txn().await?;
        match job_id {
            Some(job_id) => NoteSelector::new(&mut tx).get_by_job(job_id).await,
            None => NoteSelector::new(&mut tx).get_all().await,
        }
    }

    async fn create_note(&self, note: NewNote) -> Result<NoteEntry> {
        let mut tx = self.pool.begin_txn().await?;
        if !JobSelector::new(&mut tx).exists(note.job_id).await? {
            return Err(Error::Validation(format!(
                "job {} does not exist",
                note.job_id
            )));
        }
        let entry = NoteMutator::new(&mut tx).create(note).await?;
        tx.commit().await?;
        Ok(entry)
    }

    async fn get_note(&self, id: i32) -> Result<Option<NoteEntry>> {
        let mut tx = self.pool.begin_txn().await?;
        NoteSelector::new(&mut tx).get_by_id(id).await
    }

    async fn update_note(&self, id: i32, patch: NotePatch) -> Result<Option<NoteEntry>> {
        let mut tx = self.pool.begin_txn().await?;
        if let Some(job_id) = patch.job_id {
            if !JobSelector::new(&mut tx).exists(job_id).await? {
                return Err(Error::Validation(format!("job {} does not exist", job_id)));
            }
        }
        let row = NoteMutator::new(&mut tx).update(id, patch).await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn delete_note(&self, id: i32) -> Result<bool> {
        let mut tx = self.pool.begin_txn().await?;
        let deleted = NoteMutator::new(&mut tx).delete(id).await?;
        tx.commit().await?;
        Ok(deleted)
    }
}

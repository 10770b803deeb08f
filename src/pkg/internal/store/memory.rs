use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::pkg::internal::adaptors::{
    jobs::spec::{JobEntry, JobPatch, NewJob},
    notes::spec::{NewNote, NoteEntry, NotePatch},
};
use crate::pkg::internal::store::Store;
use crate::prelude::{Error, Result};

/// Map-backed store. Serves tests and the no-database fallback mode; ids are
/// monotonic and never reused, listings come back in insertion order.
#[derive(Default)]
pub struct MemStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    jobs: BTreeMap<i32, JobEntry>,
    notes: BTreeMap<i32, NoteEntry>,
    next_job_id: i32,
    next_note_id: i32,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore::default()
    }
}

#[async_trait]
impl Store for MemStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn list_jobs(&self) -> Result<Vec<JobEntry>> {
        let inner = self.inner.read().await;
        Ok(inner.jobs.values().cloned().collect())
    }

    async fn create_job(&self, job: NewJob) -> Result<JobEntry> {
        let mut inner = self.inner.write().await;
        inner.next_job_id += 1;
        let entry = JobEntry {
            id: inner.next_job_id,
            company: job.company,
            title: job.title,
            status: job.status,
        };
        inner.jobs.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn get_job(&self, id: i32) -> Result<Option<JobEntry>> {
        let inner = self.inner.read().await;
        Ok(inner.jobs.get(&id).cloned())
    }

    async fn update_job(&self, id: i32, patch: JobPatch) -> Result<Option<JobEntry>> {
        let mut inner = self.inner.write().await;
        let Some(job) = inner.jobs.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(company) = patch.company {
            job.company = company;
        }
        if let Some(title) = patch.title {
            job.title = title;
        }
        if let Some(status) = patch.status {
            job.status = status;
        }
        Ok(Some(job.clone()))
    }

    async fn delete_job(&self, id: i32) -> Result<bool> {
        // single write guard: the cascade is invisible to concurrent readers
        let mut inner = self.inner.write().await;
        if inner.jobs.remove(&id).is_none() {
            return Ok(false);
        }
        inner.notes.retain(|_, note| note.job_id != id);
        Ok(true)
    }

    async fn list_notes(&self, job_id: Option<i32>) -> Result<Vec<NoteEntry>> {
        let inner = self.inner.read().await;
        Ok(inner
            .notes
            .values()
            .filter(|note| job_id.map_or(true, |id| note.job_id == id))
            .cloned()
            .collect())
    }

    async fn create_note(&self, note: NewNote) -> Result<NoteEntry> {
        let mut inner = self.inner.write().await;
        if !inner.jobs.contains_key(&note.job_id) {
            return Err(Error::Validation(format!(
                "job {} does not exist",
                note.job_id
            )));
        }
        inner.next_note_id += 1;
        let entry = NoteEntry {
            id: inner.next_note_id,
            job_id: note.job_id,
            text: note.text,
            created_at: Utc::now(),
        };
        inner.notes.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn get_note(&self, id: i32) -> Result<Option<NoteEntry>> {
        let inner = self.inner.read().await;
        Ok(inner.notes.get(&id).cloned())
    }

    async fn update_note(&self, id: i32, patch: NotePatch) -> Result<Option<NoteEntry>> {
        let mut inner = self.inner.write().await;
        if let Some(job_id) = patch.job_id {
            if !inner.jobs.contains_key(&job_id) {
                return Err(Error::Validation(format!("job {} does not exist", job_id)));
            }
        }
        let Some(note) = inner.notes.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(job_id) = patch.job_id {
            note.job_id = job_id;
        }
        if let Some(text) = patch.text {
            note.text = text;
        }
        Ok(Some(note.clone()))
    }

    async fn delete_note(&self, id: i32) -> Result<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.notes.remove(&id).is_some())
    }
}

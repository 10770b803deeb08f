pub mod memory;
pub mod pg;

use async_trait::async_trait;

use crate::pkg::internal::adaptors::{
    jobs::spec::{JobEntry, JobPatch, NewJob},
    notes::spec::{NewNote, NoteEntry, NotePatch},
};
use crate::prelude::Result;

/// CRUD contract over jobs and notes. Handlers only ever see this trait,
/// which keeps the contract testable without a running database.
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> Result<()>;

    async fn list_jobs(&self) -> Result<Vec<JobEntry>>;
    async fn create_job(&self, job: NewJob) -> Result<JobEntry>;
    async fn get_job(&self, id: i32) -> Result<Option<JobEntry>>;
    async fn update_job(&self, id: i32, patch: JobPatch) -> Result<Option<JobEntry>>;
    /// Removes the job and every note attached to it as one atomic unit.
    async fn delete_job(&self, id: i32) -> Result<bool>;

    async fn list_notes(&self, job_id: Option<i32>) -> Result<Vec<NoteEntry>>;
    /// Fails with a validation error when the referenced job does not exist.
    async fn create_note(&self, note: NewNote) -> Result<NoteEntry>;
    async fn get_note(&self, id: i32) -> Result<Option<NoteEntry>>;
    async fn update_note(&self, id: i32, patch: NotePatch) -> Result<Option<NoteEntry>>;
    async fn delete_note(&self, id: i32) -> Result<bool>;
}

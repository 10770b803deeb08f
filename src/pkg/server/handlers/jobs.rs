use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::adaptors::jobs::spec::{
            JobEntry, JobPatch, JobStatus, NewJob, validate_field,
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

#[derive(Deserialize)]
pub struct CreateJobInput {
    pub company: String,
    pub title: String,
    pub status: Option<String>,
}

impl CreateJobInput {
    pub fn validate(self) -> Result<NewJob> {
        validate_field("company", &self.company)?;
        validate_field("title", &self.title)?;
        let status = match self.status.as_deref() {
            Some(raw) => raw.parse()?,
            None => JobStatus::default(),
        };
        Ok(NewJob {
            company: self.company,
            title: self.title,
            status,
        })
    }
}

#[derive(Deserialize, Default)]
pub struct PatchJobInput {
    pub company: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
}

impl PatchJobInput {
    pub fn validate(self) -> Result<JobPatch> {
        if let Some(company) = &self.company {
            validate_field("company", company)?;
        }
        if let Some(title) = &self.title {
            validate_field("title", title)?;
        }
        let status = self
            .status
            .as_deref()
            .map(|raw| raw.parse())
            .transpose()?;
        Ok(JobPatch {
            company: self.company,
            title: self.title,
            status,
        })
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobEntry>>> {
    let jobs = state.store.list_jobs().await?;
    Ok(Json(jobs))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateJobInput>,
) -> Result<(StatusCode, Json<JobEntry>)> {
    let job = state.store.create_job(input.validate()?).await?;
    tracing::debug!("created job {} with status {}", job.id, job.status);
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<JobEntry>> {
    state
        .store
        .get_job(id)
        .await?
        .map(Json)
        .ok_or(Error::JobNotFound(id))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<PatchJobInput>,
) -> Result<Json<JobEntry>> {
    state
        .store
        .update_job(id, input.validate()?)
        .await?
        .map(Json)
        .ok_or(Error::JobNotFound(id))
}

pub async fn destroy(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode> {
    if state.store.delete_job(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::JobNotFound(id))
    }
}

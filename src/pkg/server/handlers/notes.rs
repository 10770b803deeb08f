use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::adaptors::notes::spec::{
            NewNote, NoteEntry, NotePatch, validate_text,
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

#[derive(Deserialize)]
pub struct CreateNoteInput {
    pub job: i32,
    pub text: String,
}

impl CreateNoteInput {
    pub fn validate(self) -> Result<NewNote> {
        validate_text(&self.text)?;
        Ok(NewNote {
            job_id: self.job,
            text: self.text,
        })
    }
}

#[derive(Deserialize, Default)]
pub struct PatchNoteInput {
    pub job: Option<i32>,
    pub text: Option<String>,
}

impl PatchNoteInput {
    pub fn validate(self) -> Result<NotePatch> {
        if let Some(text) = &self.text {
            validate_text(text)?;
        }
        Ok(NotePatch {
            job_id: self.job,
            text: self.text,
        })
    }
}

#[derive(Deserialize, Default)]
pub struct ListNotesParams {
    pub job: Option<i32>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListNotesParams>,
) -> Result<Json<Vec<NoteEntry>>> {
    let notes = state.store.list_notes(params.job).await?;
    Ok(Json(notes))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNoteInput>,
) -> Result<(StatusCode, Json<NoteEntry>)> {
    let note = state.store.create_note(input.validate()?).await?;
    tracing::debug!("created note {} on job {}", note.id, note.job_id);
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<NoteEntry>> {
    state
        .store
        .get_note(id)
        .await?
        .map(Json)
        .ok_or(Error::NoteNotFound(id))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<PatchNoteInput>,
) -> Result<Json<NoteEntry>> {
    state
        .store
        .update_note(id, input.validate()?)
        .await?
        .map(Json)
        .ok_or(Error::NoteNotFound(id))
}

pub async fn destroy(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode> {
    if state.store.delete_note(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NoteNotFound(id))
    }
}

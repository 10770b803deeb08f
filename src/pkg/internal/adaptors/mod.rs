pub mod jobs;
pub mod notes;

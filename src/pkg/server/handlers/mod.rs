pub mod jobs;
pub mod notes;
pub mod probes;

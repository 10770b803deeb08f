use careerflow::error::Error;
use careerflow::pkg::internal::adaptors::jobs::spec::{JobPatch, JobStatus, NewJob};
use careerflow::pkg::internal::adaptors::notes::spec::{NewNote, NotePatch};
use careerflow::pkg::internal::store::{Store, memory::MemStore};

fn new_job(company: &str, title: &str) -> NewJob {
    NewJob {
        company: company.into(),
        title: title.into(),
        status: JobStatus::default(),
    }
}

fn new_note(job_id: i32, text: &str) -> NewNote {
    NewNote {
        job_id,
        text: text.into(),
    }
}

#[tokio::test]
async fn create_job_defaults_to_wishlist() {
    let store = MemStore::new();
    let job = store.create_job(new_job("Acme", "Engineer")).await.unwrap();
    assert_eq!(job.status, JobStatus::Wishlist);
    assert_eq!(job.company, "Acme");
    assert_eq!(job.title, "Engineer");
}

#[tokio::test]
async fn jobs_list_in_insertion_order() {
    let store = MemStore::new();
    let a = store.create_job(new_job("Acme", "Engineer")).await.unwrap();
    let b = store.create_job(new_job("Globex", "Analyst")).await.unwrap();
    let c = store.create_job(new_job("Initech", "Manager")).await.unwrap();

    let jobs = store.list_jobs().await.unwrap();
    assert_eq!(
        jobs.iter().map(|j| j.id).collect::<Vec<_>>(),
        vec![a.id, b.id, c.id]
    );
}

#[tokio::test]
async fn job_ids_are_never_reused() {
    let store = MemStore::new();
    let first = store.create_job(new_job("Acme", "Engineer")).await.unwrap();
    assert!(store.delete_job(first.id).await.unwrap());
    let second = store.create_job(new_job("Globex", "Analyst")).await.unwrap();
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn missing_job_reads_as_none() {
    let store = MemStore::new();
    assert!(store.get_job(42).await.unwrap().is_none());
    assert!(!store.delete_job(42).await.unwrap());
    let patched = store.update_job(42, JobPatch::default()).await.unwrap();
    assert!(patched.is_none());
}

#[tokio::test]
async fn job_status_moves_freely_between_stages() {
    let store = MemStore::new();
    let job = store.create_job(new_job("Acme", "Engineer")).await.unwrap();

    for status in [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
        JobStatus::Wishlist,
    ] {
        let patch = JobPatch {
            status: Some(status),
            ..JobPatch::default()
        };
        store.update_job(job.id, patch).await.unwrap().unwrap();
        let fetched = store.get_job(job.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, status);
    }
}

#[tokio::test]
async fn job_update_applies_only_given_fields() {
    let store = MemStore::new();
    let job = store.create_job(new_job("Acme", "Engineer")).await.unwrap();

    let patch = JobPatch {
        title: Some("Staff Engineer".into()),
        ..JobPatch::default()
    };
    let updated = store.update_job(job.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.company, "Acme");
    assert_eq!(updated.title, "Staff Engineer");
    assert_eq!(updated.status, JobStatus::Wishlist);
}

#[tokio::test]
async fn note_creation_requires_live_job() {
    let store = MemStore::new();
    let err = store.create_note(new_note(99, "hello")).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn deleting_job_cascades_to_its_notes() {
    let store = MemStore::new();
    let keep = store.create_job(new_job("Globex", "Analyst")).await.unwrap();
    let doomed = store.create_job(new_job("Acme", "Engineer")).await.unwrap();

    let survivor = store
        .create_note(new_note(keep.id, "still here"))
        .await
        .unwrap();
    let orphan_a = store
        .create_note(new_note(doomed.id, "first round went well"))
        .await
        .unwrap();
    let orphan_b = store
        .create_note(new_note(doomed.id, "waiting on feedback"))
        .await
        .unwrap();

    assert!(store.delete_job(doomed.id).await.unwrap());

    assert!(store.get_note(orphan_a.id).await.unwrap().is_none());
    assert!(store.get_note(orphan_b.id).await.unwrap().is_none());
    assert!(store.get_note(survivor.id).await.unwrap().is_some());
    assert_eq!(store.list_notes(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn notes_list_scopes_to_a_job() {
    let store = MemStore::new();
    let a = store.create_job(new_job("Acme", "Engineer")).await.unwrap();
    let b = store.create_job(new_job("Globex", "Analyst")).await.unwrap();
    store.create_note(new_note(a.id, "one")).await.unwrap();
    store.create_note(new_note(b.id, "two")).await.unwrap();
    store.create_note(new_note(a.id, "three")).await.unwrap();

    assert_eq!(store.list_notes(None).await.unwrap().len(), 3);
    let scoped = store.list_notes(Some(a.id)).await.unwrap();
    assert_eq!(scoped.len(), 2);
    assert!(scoped.iter().all(|n| n.job_id == a.id));
}

#[tokio::test]
async fn note_update_never_touches_created_at() {
    let store = MemStore::new();
    let job = store.create_job(new_job("Acme", "Engineer")).await.unwrap();
    let note = store
        .create_note(new_note(job.id, "Applied via referral"))
        .await
        .unwrap();

    let patch = NotePatch {
        text: Some("heard back, phone screen scheduled".into()),
        ..NotePatch::default()
    };
    let updated = store.update_note(note.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.text, "heard back, phone screen scheduled");
    assert_eq!(updated.created_at, note.created_at);
}

#[tokio::test]
async fn note_can_move_to_an_existing_job_only() {
    let store = MemStore::new();
    let a = store.create_job(new_job("Acme", "Engineer")).await.unwrap();
    let b = store.create_job(new_job("Globex", "Analyst")).await.unwrap();
    let note = store.create_note(new_note(a.id, "moving")).await.unwrap();

    let moved = store
        .update_note(
            note.id,
            NotePatch {
                job_id: Some(b.id),
                ..NotePatch::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.job_id, b.id);

    let err = store
        .update_note(
            note.id,
            NotePatch {
                job_id: Some(999),
                ..NotePatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn missing_note_reads_as_none() {
    let store = MemStore::new();
    assert!(store.get_note(7).await.unwrap().is_none());
    assert!(!store.delete_note(7).await.unwrap());
    let patched = store.update_note(7, NotePatch::default()).await.unwrap();
    assert!(patched.is_none());
}

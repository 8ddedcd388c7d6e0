use classnote_core::db::DbError;
use classnote_core::{AddStudentOutcome, RecordStore, RepoError, StoreConfig};
use tempfile::TempDir;

fn temp_store() -> (TempDir, RecordStore) {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::default().with_db_path(dir.path().join("students.db"));
    let store = RecordStore::from_config(&config);
    store.initialize().unwrap();
    (dir, store)
}

#[test]
fn initialize_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path().join("students.db"));
    assert!(!store.db_path().exists());

    store.initialize().unwrap();
    assert!(store.db_path().exists());
    assert!(store.list_students().unwrap().is_empty());
}

#[test]
fn initialize_repeatedly_keeps_students_and_records() {
    let (_dir, store) = temp_store();
    let amy = store.add_student("Amy").unwrap().student_id().unwrap();
    store.add_record(amy, "2024-03-01", "Met with parent").unwrap();

    store.initialize().unwrap();
    store.initialize().unwrap();

    assert_eq!(store.list_students().unwrap().len(), 1);
    assert_eq!(store.list_records(amy).unwrap().len(), 1);
}

#[test]
fn data_survives_a_fresh_store_on_the_same_file() {
    let (dir, store) = temp_store();
    let amy = store.add_student("Amy").unwrap().student_id().unwrap();
    store.add_record(amy, "2024-03-01", "Met with parent").unwrap();
    drop(store);

    let reopened = RecordStore::new(dir.path().join("students.db"));
    reopened.initialize().unwrap();
    let records = reopened.list_records(amy).unwrap();
    assert_eq!(records[0].content, "Met with parent");
}

#[test]
fn added_student_is_listed_with_its_id() {
    let (_dir, store) = temp_store();

    let outcome = store.add_student("Amy").unwrap();
    let AddStudentOutcome::Added(id) = outcome else {
        panic!("expected Added, got {outcome:?}");
    };

    let students = store.list_students().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, id);
    assert_eq!(students[0].name, "Amy");
}

#[test]
fn duplicate_student_fails_and_leaves_one_entry() {
    let (_dir, store) = temp_store();

    assert!(store.add_student("Amy").unwrap().is_added());
    assert_eq!(
        store.add_student("Amy").unwrap(),
        AddStudentOutcome::Duplicate
    );

    let students = store.list_students().unwrap();
    assert_eq!(students.iter().filter(|s| s.name == "Amy").count(), 1);
}

#[test]
fn students_are_listed_by_name() {
    let (_dir, store) = temp_store();
    store.add_student("Zoe").unwrap();
    store.add_student("Amy").unwrap();

    let names: Vec<String> = store
        .list_students()
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["Amy", "Zoe"]);
}

#[test]
fn delete_student_removes_student_and_records() {
    let (_dir, store) = temp_store();
    let amy = store.add_student("Amy").unwrap().student_id().unwrap();
    store.add_record(amy, "2024-01-10", "R1").unwrap();
    store.add_record(amy, "2024-02-05", "R2").unwrap();

    store.delete_student(amy).unwrap();

    assert!(store.list_records(amy).unwrap().is_empty());
    assert!(store.list_students().unwrap().iter().all(|s| s.id != amy));
}

#[test]
fn deleting_absent_ids_is_silent() {
    let (_dir, store) = temp_store();
    let amy = store.add_student("Amy").unwrap().student_id().unwrap();
    let record = store.add_record(amy, "2024-01-10", "keep").unwrap();

    store.delete_student(amy + 100).unwrap();
    store.delete_record(record + 100).unwrap();

    assert_eq!(store.list_students().unwrap().len(), 1);
    assert_eq!(store.list_records(amy).unwrap()[0].id, record);
}

#[test]
fn records_come_back_most_recent_first() {
    let (_dir, store) = temp_store();
    let amy = store.add_student("Amy").unwrap().student_id().unwrap();
    store.add_record(amy, "2024-01-10", "January").unwrap();
    store.add_record(amy, "2024-02-05", "February").unwrap();

    let records = store.list_records(amy).unwrap();
    assert_eq!(records[0].date, "2024-02-05");
    assert_eq!(records[1].date, "2024-01-10");
}

#[test]
fn record_for_deleted_student_is_refused() {
    let (_dir, store) = temp_store();
    let amy = store.add_student("Amy").unwrap().student_id().unwrap();
    store.delete_student(amy).unwrap();

    let err = store.add_record(amy, "2024-03-01", "stale selection").unwrap_err();
    assert!(matches!(err, RepoError::StudentNotFound(id) if id == amy));
}

#[test]
fn storage_failure_propagates_as_db_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file.
    let store = RecordStore::new(dir.path());

    let err = store.list_students().unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
}

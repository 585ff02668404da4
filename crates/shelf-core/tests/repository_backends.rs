use shelf_core::{
    Book, BookDraft, BookRepository, FileStore, KeyValueStore, MemoryStore, RepositoryError,
    SqliteStore,
};
use tempfile::TempDir;

fn exercise<S: KeyValueStore>(mut repo: BookRepository<S>) {
    assert!(repo.list().unwrap().is_empty());

    let dune = BookDraft::new("Dune", "Frank Herbert", 1965)
        .into_book_with_id(1)
        .unwrap();
    let mut sapiens = BookDraft::new("Sapiens", "Yuval Noah Harari", 2011);
    sapiens.is_complete = true;
    let sapiens = sapiens.into_book_with_id(2).unwrap();

    repo.add(dune.clone()).unwrap();
    repo.add(sapiens.clone()).unwrap();
    assert_eq!(repo.list().unwrap(), vec![dune.clone(), sapiens.clone()]);

    let toggled = repo.toggle_complete(1).unwrap().unwrap();
    assert!(toggled.is_complete);
    repo.toggle_complete(1).unwrap();
    assert_eq!(repo.get(1).unwrap(), Some(dune.clone()));

    let edited = Book {
        title: "Dune Messiah".to_string(),
        year: 1969,
        ..dune.clone()
    };
    assert!(repo.update(&edited).unwrap());
    assert!(!repo.update(&Book::with_id(3, "Ghost", "Nobody", 1)).unwrap());
    assert_eq!(repo.list().unwrap(), vec![edited, sapiens.clone()]);

    assert!(repo.remove(1).unwrap());
    assert!(!repo.remove(1).unwrap());
    assert_eq!(repo.list().unwrap(), vec![sapiens]);
}

#[test]
fn test_memory_backend() {
    exercise(BookRepository::new(MemoryStore::new()));
}

#[test]
fn test_file_backend() {
    let temp_dir = TempDir::new().unwrap();
    exercise(BookRepository::new(FileStore::open(temp_dir.path())));
}

#[test]
fn test_sqlite_backend() {
    exercise(BookRepository::new(SqliteStore::open_in_memory().unwrap()));
}

#[test]
fn test_file_backend_reads_existing_value() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("BOOKSHELF_APPS.json"),
        r#"[{"id":1,"title":"A","author":"B","year":2020,"isComplete":false}]"#,
    )
    .unwrap();

    let mut repo = BookRepository::new(FileStore::open(temp_dir.path()));
    repo.toggle_complete(1).unwrap();
    assert!(repo.list().unwrap()[0].is_complete);
}

#[test]
fn test_file_backend_malformed_value() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("BOOKSHELF_APPS.json"), "[{").unwrap();

    let repo = BookRepository::new(FileStore::open(temp_dir.path()));
    assert!(matches!(
        repo.list(),
        Err(RepositoryError::MalformedStore { .. })
    ));
}

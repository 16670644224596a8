use readme_core::history::{DEFAULT_MAX_PAST, DEFAULT_STORAGE_KEY};
use readme_core::model::element::HeaderBlock;
use readme_core::store::StoreResult;
use readme_core::{
    command_for_chord, Document, DocumentStore, Element, ElementKind, HistoryCommand,
    HistoryConfig, HistoryEvent, HistoryManager, HistoryState, KeyChord, MemoryDocumentStore,
    SqliteDocumentStore, StoreError,
};
use std::cell::Cell;

fn heading(id: &str, content: &str) -> Element {
    Element::new(
        id,
        ElementKind::Header(HeaderBlock {
            content: content.to_string(),
            level: 1,
        }),
    )
}

fn doc(contents: &[&str]) -> Document {
    contents
        .iter()
        .enumerate()
        .map(|(index, content)| heading(&format!("e{index}"), content))
        .collect()
}

#[test]
fn undo_undo_redo_lands_on_second_snapshot() {
    let (d1, d2, d3) = (doc(&["1"]), doc(&["1", "2"]), doc(&["1", "2", "3"]));
    let mut state = HistoryState::new(Document::new());
    state.commit(d1);
    state.commit(d2.clone());
    state.commit(d3);

    assert!(state.undo());
    assert!(state.undo());
    assert!(state.redo());
    assert_eq!(state.present(), &d2);
    assert!(state.can_undo());
    assert!(state.can_redo());
}

#[test]
fn commit_is_deduplicated_by_structure() {
    let mut state = HistoryState::new(doc(&["a"]));
    assert!(!state.commit(doc(&["a"])));
    assert!(!state.can_undo());

    assert!(state.commit(doc(&["b"])));
    assert!(!state.commit(doc(&["b"])));
    assert_eq!(state.past().len(), 1);
}

#[test]
fn commit_dedup_ignores_json_key_order() {
    let first = Document::from_json_str_lossy(
        r#"[{"id":"a","type":"text","content":"hi","style":{"fontWeight":"bold","textAlign":"center"}}]"#,
    )
    .unwrap()
    .document;
    let reordered = Document::from_json_str_lossy(
        r#"[{"style":{"textAlign":"center","fontWeight":"bold"},"content":"hi","type":"text","id":"a"}]"#,
    )
    .unwrap()
    .document;

    let mut state = HistoryState::new(Document::new());
    assert!(state.commit(first));
    assert!(!state.commit(reordered));
    assert_eq!(state.past().len(), 1);
}

#[test]
fn commit_after_undo_discards_redo_branch() {
    let mut state = HistoryState::new(Document::new());
    state.commit(doc(&["a"]));
    state.commit(doc(&["b"]));
    state.undo();
    assert!(state.can_redo());

    state.commit(doc(&["c"]));
    assert!(!state.can_redo());
    assert_eq!(state.past(), &[Document::new(), doc(&["a"])]);
}

#[test]
fn undo_and_redo_on_empty_stacks_are_no_ops() {
    let mut state = HistoryState::new(doc(&["a"]));
    let before = state.clone();
    assert!(!state.undo());
    assert!(!state.redo());
    assert_eq!(state, before);
}

#[test]
fn default_config_uses_builder_key_and_cap() {
    let config = HistoryConfig::default();
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.max_past, Some(DEFAULT_MAX_PAST));
}

#[test]
fn repeated_commit_of_seeded_document_creates_no_undo_step() {
    let store = MemoryDocumentStore::new();
    store.save(DEFAULT_STORAGE_KEY, &doc(&["seed"])).unwrap();

    let mut manager = HistoryManager::open(&store, HistoryConfig::default());
    assert_eq!(manager.present(), &doc(&["seed"]));
    assert_eq!(manager.commit(doc(&["seed"])), None);
    assert_eq!(manager.commit(doc(&["seed"])), None);
    assert!(!manager.can_undo());

    assert_eq!(manager.commit(doc(&["next"])), Some(HistoryEvent::Committed));
    assert_eq!(manager.commit(doc(&["next"])), None);
    assert_eq!(manager.state().past().len(), 1);
}

#[test]
fn manager_persists_present_after_every_transition() {
    let store = MemoryDocumentStore::new();
    let mut manager = HistoryManager::open(&store, HistoryConfig::default());

    manager.commit(doc(&["a"]));
    manager.commit(doc(&["a", "b"]));
    assert_eq!(store.load(DEFAULT_STORAGE_KEY).unwrap(), Some(doc(&["a", "b"])));

    assert_eq!(manager.undo(), Some(HistoryEvent::Undone));
    assert_eq!(store.load(DEFAULT_STORAGE_KEY).unwrap(), Some(doc(&["a"])));

    assert_eq!(manager.redo(), Some(HistoryEvent::Redone));
    assert_eq!(store.load(DEFAULT_STORAGE_KEY).unwrap(), Some(doc(&["a", "b"])));

    assert_eq!(manager.clear_history(), HistoryEvent::Cleared);
    assert!(store.raw(DEFAULT_STORAGE_KEY).is_none());
    assert_eq!(manager.present(), &doc(&["a", "b"]));
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
}

#[test]
fn manager_reopens_from_sqlite_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("builder.db");
    let config = HistoryConfig::default().with_storage_key("project-1");

    {
        let store = SqliteDocumentStore::open(&path).unwrap();
        let mut manager = HistoryManager::open(store, config.clone());
        manager.commit(doc(&["persisted"]));
    }

    let store = SqliteDocumentStore::open(&path).unwrap();
    let manager = HistoryManager::open(store, config);
    assert_eq!(manager.present(), &doc(&["persisted"]));
    assert!(!manager.can_undo());
}

#[test]
fn corrupt_stored_value_starts_empty_session() {
    let store = MemoryDocumentStore::new();
    store.insert_raw(DEFAULT_STORAGE_KEY, "{not json");
    let manager = HistoryManager::open(&store, HistoryConfig::default());
    assert!(manager.present().is_empty());
}

#[test]
fn stored_value_with_bad_entries_keeps_the_rest() {
    let store = MemoryDocumentStore::new();
    store.insert_raw(
        DEFAULT_STORAGE_KEY,
        r#"[{"id":"a","type":"header","content":"ok"},{"id":"b","type":"hologram"}]"#,
    );
    let manager = HistoryManager::open(&store, HistoryConfig::default());
    assert_eq!(manager.present().len(), 1);
}

struct FailingStore {
    attempts: Cell<usize>,
}

impl DocumentStore for FailingStore {
    fn load(&self, _key: &str) -> StoreResult<Option<Document>> {
        Ok(None)
    }

    fn save(&self, _key: &str, _document: &Document) -> StoreResult<()> {
        self.attempts.set(self.attempts.get() + 1);
        Err(StoreError::Serialize(
            serde_json::from_str::<serde_json::Value>("?").unwrap_err(),
        ))
    }

    fn remove(&self, _key: &str) -> StoreResult<()> {
        Ok(())
    }
}

#[test]
fn persistence_failures_do_not_affect_history() {
    let store = FailingStore {
        attempts: Cell::new(0),
    };
    let mut manager = HistoryManager::open(&store, HistoryConfig::default());

    assert_eq!(manager.commit(doc(&["a"])), Some(HistoryEvent::Committed));
    assert_eq!(manager.undo(), Some(HistoryEvent::Undone));
    assert!(manager.present().is_empty());
    assert_eq!(store.attempts.get(), 2);
}

#[test]
fn key_chords_drive_manager() {
    let store = MemoryDocumentStore::new();
    let mut manager = HistoryManager::open(&store, HistoryConfig::default());
    manager.commit(doc(&["a"]));

    let undo = command_for_chord(KeyChord::primary('z')).unwrap();
    assert_eq!(undo, HistoryCommand::Undo);
    let event = manager.apply(undo).unwrap();
    assert_eq!(event.notification(), Some("Undo successful"));

    let redo = command_for_chord(KeyChord::primary('z').with_shift()).unwrap();
    assert_eq!(manager.apply(redo), Some(HistoryEvent::Redone));
    assert_eq!(manager.apply(redo), None);
}

#[test]
fn max_past_cap_applies_to_manager() {
    let store = MemoryDocumentStore::new();
    let config = HistoryConfig::default().with_max_past(Some(2));
    let mut manager = HistoryManager::open(&store, config);
    for step in ["a", "b", "c", "d"] {
        manager.commit(doc(&[step]));
    }
    assert_eq!(manager.state().past().len(), 2);
    assert_eq!(manager.state().past()[0], doc(&["b"]));
}

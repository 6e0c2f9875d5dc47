#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::storage::TaskStore;
    use tudu::libs::task::{Priority, Task};
    use tudu::libs::task_list::TaskList;

    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            StorageTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl StorageTestContext {
        fn store(&self) -> TaskStore {
            TaskStore::with_path(self.temp_dir.path().join("tasks.json"))
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_missing_file_loads_empty(ctx: &mut StorageTestContext) {
        assert!(ctx.store().load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_corrupt_file_loads_empty(ctx: &mut StorageTestContext) {
        let store = ctx.store();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_load_round_trip(ctx: &mut StorageTestContext) {
        let store = ctx.store();

        let mut task = Task::new("Buy milk", Priority::High, "errands");
        task.number = 1;
        task.notes = Some("2 liters".to_string());
        store.save(&[task.clone()]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, task.id);
        assert_eq!(loaded[0].text, "Buy milk");
        assert_eq!(loaded[0].priority, Priority::High);
        assert_eq!(loaded[0].category, "errands");
        assert_eq!(loaded[0].notes.as_deref(), Some("2 liters"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_persisted_field_names_are_camel_case(ctx: &mut StorageTestContext) {
        let store = ctx.store();

        let mut task = Task::new("Buy milk", Priority::Medium, "general");
        task.number = 1;
        store.save(&[task]).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"updatedAt\""));
        assert!(raw.contains("\"dueDate\""));
        // Absent notes are omitted entirely
        assert!(!raw.contains("\"notes\""));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_legacy_minimal_records_get_defaults(ctx: &mut StorageTestContext) {
        let store = ctx.store();

        // The record shape written before priority, category and the
        // timestamps existed
        fs::write(
            store.path(),
            r#"[{"id":"4fd0c2d5-5a9c-4602-ae0e-11bfeae1b4d3","text":"Buy milk","completed":true,"number":1}]"#,
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "Buy milk");
        assert!(loaded[0].completed);
        assert_eq!(loaded[0].priority, Priority::Medium);
        assert_eq!(loaded[0].category, "general");
        assert!(loaded[0].due_date.is_none());
        assert!(loaded[0].notes.is_none());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_loaded_lists_are_renumbered(ctx: &mut StorageTestContext) {
        let store = ctx.store();

        // Hand-edited file with gaps in the numbering
        fs::write(
            store.path(),
            r#"[
                {"id":"4fd0c2d5-5a9c-4602-ae0e-11bfeae1b4d3","text":"one","completed":false,"number":3},
                {"id":"9b2f8a64-7f30-4f7b-8d4f-2a46d2f3f6aa","text":"two","completed":false,"number":7}
            ]"#,
        )
        .unwrap();

        let list = TaskList::with_store(ctx.store());
        let numbers: Vec<usize> = list.tasks().iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
